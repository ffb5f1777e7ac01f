// Utilitários para manipulação de valores monetários (reais inteiros, sem centavos)

use crate::error::{FieldError, PricingError};
use crate::utils::mask::{group_thousands, only_digits};

pub const CURRENCY_PREFIX: &str = "R$ ";
pub const MAX_AMOUNT: u64 = 999_999_999;

// Acima disso a máscara desiste do agrupamento e mostra os dígitos crus
const MAX_GROUPED_DIGITS: usize = 12;

pub fn remove_mask(currency_str: &str) -> String {
    only_digits(currency_str)
}

/// Parses the digits of `currency_str` as whole reais. Empty or overflowing
/// input yields 0.
pub fn parse_currency(currency_str: &str) -> u64 {
    remove_mask(currency_str).parse().unwrap_or(0)
}

pub fn format_currency(raw: &str) -> String {
    let digits = remove_mask(raw);
    if digits.is_empty() {
        return String::new();
    }

    if digits.len() > MAX_GROUPED_DIGITS {
        return format!("{}{}", CURRENCY_PREFIX, digits);
    }

    let value: u64 = digits.parse().unwrap_or(0);
    format!("{}{}", CURRENCY_PREFIX, group_thousands(&value.to_string()))
}

pub fn validate_currency(raw: &str) -> Result<(), FieldError> {
    let digits = remove_mask(raw);
    if digits.is_empty() {
        return Err(FieldError::Required);
    }

    match digits.parse::<u64>() {
        Ok(0) => Err(FieldError::ZeroAmount),
        Ok(value) if value > MAX_AMOUNT => Err(FieldError::AmountTooLarge),
        Ok(_) => Ok(()),
        // só falha por overflow, já que a string tem apenas dígitos
        Err(_) => Err(FieldError::AmountTooLarge),
    }
}

pub fn is_valid_currency(raw: &str) -> bool {
    validate_currency(raw).is_ok()
}

/// Cross-field rules of the sale form: the sale price covers the purchase
/// price and the minimum down payment fits inside the sale price.
pub fn check_pricing(purchase: u64, sale: u64, min_down: u64) -> Vec<PricingError> {
    let mut errors = Vec::new();

    if sale < purchase {
        errors.push(PricingError::SaleBelowPurchase { purchase, sale });
    }
    if min_down > sale {
        errors.push(PricingError::DownPaymentAboveSale { min_down, sale });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("52900"), "R$ 52.900");
        assert_eq!(format_currency(""), "");
        assert_eq!(format_currency("0"), "R$ 0");
        assert_eq!(format_currency("999"), "R$ 999");
        assert_eq!(format_currency("1000"), "R$ 1.000");
        assert_eq!(format_currency("R$ 52.9001"), "R$ 529.001");
        assert_eq!(format_currency("abc"), "");
    }

    #[test]
    fn test_format_currency_drops_leading_zeros() {
        assert_eq!(format_currency("052900"), "R$ 52.900");
        assert_eq!(format_currency("000"), "R$ 0");
    }

    #[test]
    fn test_format_currency_overflow_guard() {
        assert_eq!(format_currency("123456789012"), "R$ 123.456.789.012");
        assert_eq!(format_currency("1234567890123"), "R$ 1234567890123");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("R$ 52.900"), 52900);
        assert_eq!(parse_currency(""), 0);
        assert_eq!(parse_currency("R$"), 0);
        assert_eq!(parse_currency("99999999999999999999999"), 0);
    }

    #[test]
    fn test_validate_currency() {
        assert_eq!(validate_currency("0"), Err(FieldError::ZeroAmount));
        assert_eq!(validate_currency("1000000000"), Err(FieldError::AmountTooLarge));
        assert_eq!(validate_currency("999999999"), Ok(()));
        assert_eq!(validate_currency("R$ 999.999.999"), Ok(()));
        assert_eq!(validate_currency("1"), Ok(()));
        assert_eq!(validate_currency(""), Err(FieldError::Required));
        assert_eq!(
            validate_currency("99999999999999999999999"),
            Err(FieldError::AmountTooLarge)
        );
        assert!(!is_valid_currency("R$ 0"));
    }

    #[test]
    fn test_check_pricing() {
        assert!(check_pricing(40000, 52900, 10000).is_empty());
        assert!(check_pricing(52900, 52900, 52900).is_empty());

        assert_eq!(
            check_pricing(60000, 52900, 10000),
            vec![PricingError::SaleBelowPurchase { purchase: 60000, sale: 52900 }]
        );
        assert_eq!(
            check_pricing(60000, 52900, 70000),
            vec![
                PricingError::SaleBelowPurchase { purchase: 60000, sale: 52900 },
                PricingError::DownPaymentAboveSale { min_down: 70000, sale: 52900 },
            ]
        );
    }

    proptest! {
        #[test]
        fn reformatting_is_idempotent(s in ".*") {
            let once = format_currency(&s);
            let twice = format_currency(&remove_mask(&once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn formatted_value_keeps_numeric_content(n in 0u64..=999_999_999_999) {
            let formatted = format_currency(&n.to_string());
            prop_assert_eq!(parse_currency(&formatted), n);
        }
    }
}
