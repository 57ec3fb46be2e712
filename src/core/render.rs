use crate::domain::model::FiveRowDisplay;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Separator placed between rendered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    Lf,
    Crlf,
    /// The platform convention: `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
}

impl LineSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::Crlf => "\r\n",
            LineSeparator::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Joins the rows with `separator`, with no trailing separator.
pub fn render_text(display: &FiveRowDisplay, separator: LineSeparator) -> String {
    display
        .rows()
        .iter()
        .map(|row| row.to_string())
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

pub fn render_json(display: &FiveRowDisplay) -> Result<String> {
    Ok(serde_json::to_string(display)?)
}

pub fn render(
    display: &FiveRowDisplay,
    format: OutputFormat,
    separator: LineSeparator,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(display, separator)),
        OutputFormat::Json => render_json(display),
    }
}
