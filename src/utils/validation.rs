use crate::domain::model::TimeField;
use crate::utils::error::{ClockError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks a parsed clock field against `0..=field.max()`.
pub fn validate_field_range(field: TimeField, value: i32) -> Result<()> {
    let max = field.max();
    if !(0..=max).contains(&value) {
        return Err(ClockError::OutOfRange {
            field,
            value,
            min: 0,
            max,
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ClockError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ClockError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
