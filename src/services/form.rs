use crate::error::{FieldError, PricingError};
use crate::models::field::FieldKind;
use crate::utils::money::{check_pricing, parse_currency};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormIssue {
    #[error("{field}: {error}")]
    Field { field: String, error: FieldError },

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Aggregated field errors of a form, used to gate submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    issues: Vec<FormIssue>,
}

impl FormReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, kind: FieldKind, raw: &str) -> Self {
        if let Err(error) = kind.validate(raw) {
            self.issues.push(FormIssue::Field {
                field: name.to_string(),
                error,
            });
        }
        self
    }

    /// Sale form price rules. Skipped when the sale price itself is not a
    /// valid amount, since that is already reported as a field error.
    pub fn pricing(mut self, purchase_raw: &str, sale_raw: &str, min_down_raw: &str) -> Self {
        if FieldKind::Currency.validate(sale_raw).is_err() {
            return self;
        }

        let issues = check_pricing(
            parse_currency(purchase_raw),
            parse_currency(sale_raw),
            parse_currency(min_down_raw),
        );
        self.issues.extend(issues.into_iter().map(FormIssue::from));
        self
    }

    pub fn issues(&self) -> &[FormIssue] {
        &self.issues
    }

    /// Error for a named field, if any, for inline display.
    pub fn error_for(&self, name: &str) -> Option<&FieldError> {
        self.issues.iter().find_map(|issue| match issue {
            FormIssue::Field { field, error } if field == name => Some(error),
            _ => None,
        })
    }

    pub fn can_submit(&self) -> bool {
        self.issues.is_empty()
    }
}
