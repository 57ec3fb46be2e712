pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, RenderOptions};
pub use crate::core::{
    converter::BerlinClock,
    encoder::{encode, parse},
    render::{render_text, LineSeparator, OutputFormat},
};
pub use domain::model::{FiveRowDisplay, Lamp, LampRow, TimeField, TimeOfDay};
pub use domain::ports::TimeConverter;
pub use utils::error::{ClockError, Result};
