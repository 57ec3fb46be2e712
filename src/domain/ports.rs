use crate::utils::error::Result;

/// Converts textual clock input into a rendered representation.
pub trait TimeConverter: Send + Sync {
    fn convert(&self, input: Option<&str>) -> Result<String>;
}
