use crate::error::FieldError;
use crate::utils::mask::only_digits;

pub const CEP_LEN: usize = 8;

/// Masks as `99999-999`, inserting the hyphen once a 6th digit is typed.
pub fn format_cep(raw: &str) -> String {
    let digits: String = only_digits(raw).chars().take(CEP_LEN).collect();
    if digits.len() > 5 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}

/// The eight digits of a complete CEP, or `None` while it is still being typed.
pub fn cep_digits(raw: &str) -> Option<String> {
    let digits = only_digits(raw);
    (digits.len() == CEP_LEN).then_some(digits)
}

pub fn validate_cep(raw: &str) -> Result<(), FieldError> {
    let digits = only_digits(raw);
    match digits.len() {
        0 => Err(FieldError::Required),
        CEP_LEN => Ok(()),
        _ => Err(FieldError::InvalidCep),
    }
}

pub fn is_valid_cep(raw: &str) -> bool {
    validate_cep(raw).is_ok()
}
