// src/services/identifier.rs

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::common::error::AppError;

pub const WRONG_PATTERN: &str =
    "Wrong input pattern. You should input letters first, then digits. Example: \"A23\"";

// Letters then digits, matched from the start of the input.
static SIGN_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)(\d+)").expect("sign/number pattern is valid"));

/// Human identifier of an inventory item: category sign + inventory number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignNumber {
    pub sign: String,
    pub number: i32,
}

impl FromStr for SignNumber {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let captures = SIGN_NUMBER
            .captures(input)
            .ok_or_else(|| AppError::Validation(WRONG_PATTERN.to_string()))?;

        let number = captures[2]
            .parse::<i32>()
            .map_err(|_| AppError::Validation(WRONG_PATTERN.to_string()))?;

        Ok(SignNumber {
            sign: captures[1].to_string(),
            number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sign_and_number() {
        assert_eq!(
            "A23".parse::<SignNumber>().unwrap(),
            SignNumber { sign: "A".into(), number: 23 }
        );
        assert_eq!(
            "PC007".parse::<SignNumber>().unwrap(),
            SignNumber { sign: "PC".into(), number: 7 }
        );
    }

    #[test]
    fn digits_first_is_rejected() {
        for input in ["23A", "22A", "1", ""] {
            let err = input.parse::<SignNumber>().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{input}");
        }
    }

    #[test]
    fn letters_without_digits_are_rejected() {
        assert!("ABC".parse::<SignNumber>().is_err());
    }

    #[test]
    fn numbers_beyond_i32_are_rejected() {
        assert!("A99999999999".parse::<SignNumber>().is_err());
    }

    #[test]
    fn trailing_text_after_the_digits_is_ignored() {
        assert_eq!(
            "B12-old".parse::<SignNumber>().unwrap(),
            SignNumber { sign: "B".into(), number: 12 }
        );
    }
}
