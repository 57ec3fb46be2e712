pub mod toml_config;

use crate::core::render::{LineSeparator, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

/// How a clock display is turned into output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub line_separator: LineSeparator,
    pub format: OutputFormat,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "berlin-clock")]
#[command(about = "Show a 24-hour time as Berlin clock lamp rows")]
pub struct CliConfig {
    /// Times to convert, in HH:MM:SS form
    #[arg(value_name = "HH:MM:SS")]
    pub times: Vec<String>,

    /// Convert the current local time
    #[arg(long, conflicts_with = "times")]
    pub now: bool,

    /// Path to a TOML config file with a [render] section
    #[arg(short, long)]
    pub config: Option<String>,

    /// Separator between rows; overrides the config file
    #[arg(long, value_enum)]
    pub line_separator: Option<LineSeparator>,

    /// Output format; overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Applies command line overrides on top of `base`.
    pub fn render_options(&self, base: RenderOptions) -> RenderOptions {
        RenderOptions {
            line_separator: self.line_separator.unwrap_or(base.line_separator),
            format: self.format.unwrap_or(base.format),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
