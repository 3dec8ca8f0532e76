use serde::de::DeserializeOwned;

use crate::error::ModelError;

/// Range checks run after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

/// Parse a JSON body and validate the result.
pub fn from_json<T: DeserializeOwned + Validate>(body: &[u8]) -> Result<T, ModelError> {
    let value: T = serde_json::from_slice(body)?;
    value.validate()?;
    Ok(value)
}

pub(crate) fn non_negative(field: &str, value: f64) -> Result<(), ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::invalid(field, format!("expected a non-negative number, got {}", value)));
    }
    Ok(())
}

pub(crate) fn within(field: &str, value: f64, min: f64, max: f64) -> Result<(), ModelError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ModelError::invalid(
            field,
            format!("expected a value in {}..={}, got {}", min, max, value),
        ));
    }
    Ok(())
}
