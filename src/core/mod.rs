pub mod converter;
pub mod encoder;
pub mod render;

pub use crate::domain::model::{FiveRowDisplay, Lamp, LampRow, TimeField, TimeOfDay};
pub use crate::domain::ports::TimeConverter;
pub use crate::utils::error::Result;
