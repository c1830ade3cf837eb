use crate::utils::error::{RevparError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_count(field_name: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(RevparError::invalid_argument(
            field_name,
            value,
            "Value must be greater than 0",
        ));
    }
    Ok(())
}

/// Accepts values in the closed interval [0, 1]. NaN is rejected.
pub fn validate_unit_interval(field_name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(RevparError::invalid_argument(
            field_name,
            value,
            "Value must be between 0 and 1 inclusive",
        ));
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RevparError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Value must be a finite number, got {}", value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RevparError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}
