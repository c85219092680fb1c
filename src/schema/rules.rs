//! Pure field validation rules
//!
//! Each rule is a pure function from raw input to a typed value or a
//! [`RuleError`] kind. The per-resource schemas compose them and attach the
//! user-facing message for the field.

use std::str::FromStr;

use super::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    /// Text shorter than the required minimum.
    TooShort { min: usize },
    /// Missing value, or not one of the allowed literals.
    Required,
    /// Not numeric, or numeric but not strictly positive.
    NotPositive,
}

/// Text of at least `min` characters, taken as-is otherwise.
pub fn min_len(value: &str, min: usize) -> Result<String, RuleError> {
    if value.chars().count() < min {
        Err(RuleError::TooShort { min })
    } else {
        Ok(value.to_string())
    }
}

/// A required choice among the literals `T` parses.
pub fn required_choice<T: FromStr>(value: &str) -> Result<T, RuleError> {
    value.parse().map_err(|_| RuleError::Required)
}

/// Numeric coercion of input text; anything non-numeric or <= 0 fails.
pub fn positive(value: &str) -> Result<f64, RuleError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n > 0.0 => Ok(n),
        _ => Err(RuleError::NotPositive),
    }
}

/// Record a failed rule under its field name and message, passing the
/// value through otherwise. Lets a schema evaluate every rule before
/// deciding whether the draft is valid.
pub fn check<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    message: &str,
    result: Result<T, RuleError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_) => {
            errors.insert(field, message.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;

    #[test]
    fn test_min_len_counts_chars() {
        assert_eq!(min_len("Rex", 3), Ok("Rex".to_string()));
        assert_eq!(min_len("ab", 3), Err(RuleError::TooShort { min: 3 }));
        assert_eq!(min_len("", 3), Err(RuleError::TooShort { min: 3 }));
    }

    #[test]
    fn test_required_choice_rejects_unknown_literals() {
        assert_eq!(required_choice::<Gender>("male"), Ok(Gender::Male));
        assert_eq!(required_choice::<Gender>(""), Err(RuleError::Required));
        assert_eq!(required_choice::<Gender>("MALE"), Err(RuleError::Required));
    }

    #[test]
    fn test_positive_coerces_text() {
        assert_eq!(positive("3"), Ok(3.0));
        assert_eq!(positive(" 2.5 "), Ok(2.5));
        assert_eq!(positive("0"), Err(RuleError::NotPositive));
        assert_eq!(positive("-1"), Err(RuleError::NotPositive));
        assert_eq!(positive("abc"), Err(RuleError::NotPositive));
        assert_eq!(positive(""), Err(RuleError::NotPositive));
    }

    #[test]
    fn test_check_collects_message_per_field() {
        let mut errors = FieldErrors::new();
        let name = check(&mut errors, "name", "Name is required.", min_len("ab", 3));
        let age = check(&mut errors, "age", "Age has to be positive number", positive("4"));
        assert_eq!(name, None);
        assert_eq!(age, Some(4.0));
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required."));
        assert!(!errors.contains_key("age"));
    }
}
