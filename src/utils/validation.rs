use crate::utils::error::{Result, SplitError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Inclusive range check shared by the splitter's argument validation.
pub fn is_within<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SplitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(SplitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_within() {
        assert!(is_within(2, 2, 1024));
        assert!(is_within(1024, 2, 1024));
        assert!(!is_within(1, 2, 1024));
        assert!(!is_within(1025, 2, 1024));
        assert!(!is_within(-1, 1, 64));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("jobs.name", "coconuts").is_ok());
        assert!(validate_non_empty_string("jobs.name", "").is_err());
        assert!(validate_non_empty_string("jobs.name", "   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("jobs", &[1]).is_ok());
        assert!(validate_non_empty_list::<i64>("jobs", &[]).is_err());
    }
}
