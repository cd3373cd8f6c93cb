//! Stock field-constraint providers
//!
//! Constraint providers stay external to the validator itself; these
//! are the ones catalog inputs share. Each takes the field path and an
//! accessor into the input, and yields a constraint closure for
//! [`InputValidator::with_constraint`](super::InputValidator::with_constraint).

use bigdecimal::{BigDecimal, Zero};

use super::validated::ValidationError;

/// The field must contain at least one non-whitespace character.
pub fn not_blank<T, F>(
    field_name: &'static str,
    accessor: F,
) -> impl Fn(&T) -> Vec<ValidationError> + Send + Sync
where
    F: Fn(&T) -> &str + Send + Sync,
{
    move |input: &T| {
        let value = accessor(input);
        if value.trim().is_empty() {
            vec![ValidationError::new(field_name, "must not be blank", value)]
        } else {
            Vec::new()
        }
    }
}

/// The field must be at least `min` characters long.
pub fn min_length<T, F>(
    field_name: &'static str,
    min: usize,
    accessor: F,
) -> impl Fn(&T) -> Vec<ValidationError> + Send + Sync
where
    F: Fn(&T) -> &str + Send + Sync,
{
    move |input: &T| {
        let value = accessor(input);
        if value.chars().count() < min {
            vec![ValidationError::new(
                field_name,
                format!("must be at least {min} characters"),
                value,
            )]
        } else {
            Vec::new()
        }
    }
}

/// The field must be at most `max` characters long.
pub fn max_length<T, F>(
    field_name: &'static str,
    max: usize,
    accessor: F,
) -> impl Fn(&T) -> Vec<ValidationError> + Send + Sync
where
    F: Fn(&T) -> &str + Send + Sync,
{
    move |input: &T| {
        let value = accessor(input);
        if value.chars().count() > max {
            vec![ValidationError::new(
                field_name,
                format!("must be at most {max} characters"),
                value,
            )]
        } else {
            Vec::new()
        }
    }
}

/// The field must be strictly greater than zero.
pub fn positive<T, F>(
    field_name: &'static str,
    accessor: F,
) -> impl Fn(&T) -> Vec<ValidationError> + Send + Sync
where
    F: Fn(&T) -> &BigDecimal + Send + Sync,
{
    move |input: &T| {
        let value = accessor(input);
        if *value <= BigDecimal::zero() {
            vec![ValidationError::new(
                field_name,
                "must be positive",
                value.to_string(),
            )]
        } else {
            Vec::new()
        }
    }
}

/// The field must be zero or greater.
pub fn non_negative<T, F>(
    field_name: &'static str,
    accessor: F,
) -> impl Fn(&T) -> Vec<ValidationError> + Send + Sync
where
    F: Fn(&T) -> &BigDecimal + Send + Sync,
{
    move |input: &T| {
        let value = accessor(input);
        if *value < BigDecimal::zero() {
            vec![ValidationError::new(
                field_name,
                "must not be negative",
                value.to_string(),
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_not_blank() {
        let constraint = not_blank("name", |value: &String| value.as_str());
        assert!(constraint(&"H0".to_string()).is_empty());
        assert!(constraint(&String::new()).len() == 1);
        assert_eq!(constraint(&"   ".to_string())[0].error_message, "must not be blank");
    }

    #[test]
    fn test_min_length() {
        let constraint = min_length("code", 2, |value: &String| value.as_str());
        assert!(constraint(&"H0".to_string()).is_empty());
        let errors = constraint(&"H".to_string());
        assert_eq!(errors[0].error_message, "must be at least 2 characters");
        assert_eq!(errors[0].invalid_value, serde_json::Value::from("H"));
    }

    #[test]
    fn test_max_length() {
        let constraint = max_length("code", 3, |value: &String| value.as_str());
        assert!(constraint(&"H0m".to_string()).is_empty());
        assert_eq!(constraint(&"H0e-scale".to_string()).len(), 1);
    }

    #[test]
    fn test_positive() {
        let constraint = positive("ratio", |value: &BigDecimal| value);
        assert!(constraint(&dec("87")).is_empty());
        assert_eq!(constraint(&dec("0"))[0].error_message, "must be positive");
        assert_eq!(constraint(&dec("-1")).len(), 1);
    }

    #[test]
    fn test_non_negative() {
        let constraint = non_negative("length", |value: &BigDecimal| value);
        assert!(constraint(&dec("0")).is_empty());
        assert!(constraint(&dec("16.5")).is_empty());
        assert_eq!(
            constraint(&dec("-0.1"))[0].error_message,
            "must not be negative"
        );
    }
}
