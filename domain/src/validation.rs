//! Field-level validation shared by the resource types.

/// A request body that parsed but does not describe a valid record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field {0} is required")]
    Missing(&'static str),
    #[error("field {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(())
}

pub(crate) fn require_id(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::Invalid {
            field,
            reason: "must be a positive id",
        });
    }
    Ok(())
}

pub(crate) fn require_count(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Invalid {
            field,
            reason: "must not be negative",
        });
    }
    Ok(())
}

pub(crate) fn require_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    // NaN fails the comparison too.
    if !(value >= 0.0) {
        return Err(ValidationError::Invalid {
            field,
            reason: "must not be negative",
        });
    }
    Ok(())
}

pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::Invalid {
            field,
            reason: "must be a finite number",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_missing() {
        assert_eq!(
            require_text("address", "   "),
            Err(ValidationError::Missing("address"))
        );
        assert!(require_text("address", "Rua A").is_ok());
    }

    #[test]
    fn test_ids_must_be_positive() {
        assert!(require_id("locality_id", 0).is_err());
        assert!(require_id("locality_id", -3).is_err());
        assert!(require_id("locality_id", 1).is_ok());
    }

    #[test]
    fn test_amounts_reject_nan() {
        assert!(require_amount("sale_price", f64::NAN).is_err());
        assert!(require_amount("sale_price", -0.5).is_err());
        assert!(require_amount("sale_price", 0.0).is_ok());
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = require_count("current_capacity", -1).unwrap_err();
        assert_eq!(err.to_string(), "field current_capacity must not be negative");
        assert_eq!(
            ValidationError::Missing("cid").to_string(),
            "field cid is required"
        );
    }
}
