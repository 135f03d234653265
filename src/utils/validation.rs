use crate::utils::error::{ChurnError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ChurnError::Config {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ChurnError::Config {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Minutes come in as reals from the form; they must be finite and non-negative.
pub fn validate_minutes(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ChurnError::validation(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(ChurnError::validation(
            field_name,
            value,
            "Value cannot be negative",
        ));
    }
    Ok(())
}
