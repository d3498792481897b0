//! Parsing of raw monetary amounts into exact decimals.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

/// Parses a raw amount string into an exact decimal.
///
/// Malformed input is rejected with a validation error; it is never
/// silently coerced to zero.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidInput(
            "amount string is empty".to_string(),
        )
        .into());
    }
    Ok(Decimal::from_str(trimmed)?)
}

/// Parses a stored current-amount field.
///
/// Stored amounts follow one relaxation over [`parse_amount`]: a blank
/// string means the link has never been funded and reads as exact zero.
/// Any other malformed value is still an error.
pub fn parse_stored_amount(raw: &str) -> Result<Decimal> {
    if raw.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }
    parse_amount(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_exact() {
        assert_eq!(parse_amount("10.50").unwrap(), dec!(10.50));
        assert_eq!(parse_amount(" -3.333 ").unwrap(), dec!(-3.333));
    }

    #[test]
    fn test_parse_amount_rejects_blank() {
        assert!(matches!(
            parse_amount(""),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("abc"),
            Err(Error::Validation(ValidationError::DecimalParse(_)))
        ));
    }

    #[test]
    fn test_parse_stored_amount_blank_is_zero() {
        assert_eq!(parse_stored_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_stored_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_stored_amount_garbage_is_still_an_error() {
        assert!(parse_stored_amount("12,34,56").is_err());
    }
}
