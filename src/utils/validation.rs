use crate::domain::form::FieldValue;
use crate::utils::error::{EstimatorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 將表單欄位轉成有限的 f64；缺值、非數字、NaN/inf 一律視為 InvalidInput
pub fn parse_number(field_name: &str, value: Option<&FieldValue>) -> Result<f64> {
    let value = value.ok_or_else(|| {
        EstimatorError::invalid_input(field_name, "", "Value is required")
    })?;

    let number = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(EstimatorError::invalid_input(
                    field_name,
                    text.clone(),
                    "Value is required",
                ));
            }
            trimmed.parse::<f64>().map_err(|_| {
                EstimatorError::invalid_input(field_name, text.clone(), "Value is not a number")
            })?
        }
    };

    validate_finite(field_name, number)?;
    Ok(number)
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EstimatorError::invalid_input(
            field_name,
            value.to_string(),
            "Value must be a finite number",
        ));
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
        return Err(EstimatorError::invalid_input(
            field_name,
            value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EstimatorError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EstimatorError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("api_fee", Some(&text("100"))).unwrap(), 100.0);
        assert_eq!(parse_number("api_fee", Some(&text("  12.5 "))).unwrap(), 12.5);
        assert_eq!(parse_number("api_fee", Some(&text("-3"))).unwrap(), -3.0);
        assert_eq!(parse_number("api_fee", Some(&FieldValue::Number(7.0))).unwrap(), 7.0);
    }

    #[test]
    fn test_parse_number_rejects_malformed() {
        assert!(parse_number("api_fee", None).is_err());
        assert!(parse_number("api_fee", Some(&text(""))).is_err());
        assert!(parse_number("api_fee", Some(&text("abc"))).is_err());
        assert!(parse_number("api_fee", Some(&text("NaN"))).is_err());
        assert!(parse_number("api_fee", Some(&text("inf"))).is_err());
        assert!(parse_number("api_fee", Some(&FieldValue::Number(f64::NAN))).is_err());
    }

    #[test]
    fn test_parse_number_error_names_field() {
        match parse_number("hourly_rate", Some(&text("fifty"))) {
            Err(EstimatorError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "hourly_rate");
                assert_eq!(value, "fifty");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("market_growth", 50.0, -100.0, 100.0).is_ok());
        assert!(validate_range("market_growth", -100.0, -100.0, 100.0).is_ok());
        assert!(validate_range("market_growth", 100.5, -100.0, 100.0).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_file", "project_costs.json").is_ok());
        assert!(validate_path("data_file", "  ").is_err());
        assert!(validate_path("data_file", "bad\0path").is_err());
    }
}
