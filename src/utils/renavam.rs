use crate::error::FieldError;
use crate::utils::mask::only_digits;
use once_cell::sync::Lazy;
use regex::Regex;

pub const RENAVAM_LEN: usize = 11;

static RENAVAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{11}$").expect("valid renavam regex"));

pub fn format_renavam(raw: &str) -> String {
    only_digits(raw).chars().take(RENAVAM_LEN).collect()
}

pub fn validate_renavam(raw: &str) -> Result<(), FieldError> {
    let digits = only_digits(raw);
    if digits.is_empty() {
        return Err(FieldError::Required);
    }

    if RENAVAM.is_match(&digits) {
        Ok(())
    } else {
        Err(FieldError::InvalidRenavam)
    }
}

pub fn is_valid_renavam(raw: &str) -> bool {
    validate_renavam(raw).is_ok()
}
