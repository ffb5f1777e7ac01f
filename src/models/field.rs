use crate::error::FieldError;
use crate::models::session::FormatterSession;
use crate::utils::{cep, money, plate, renavam};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of masked input the forms know about. Each one has a fixed
/// raw -> formatted contract and a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldKind {
    Plate,
    Renavam,
    Currency,
    Cep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutput {
    pub formatted: String,
    pub error: Option<FieldError>,
    pub max_len: Option<usize>,
    pub placeholder: &'static str,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Plate,
        FieldKind::Renavam,
        FieldKind::Currency,
        FieldKind::Cep,
    ];

    pub fn format(self, raw: &str) -> String {
        match self {
            FieldKind::Plate => plate::format_plate(raw),
            FieldKind::Renavam => renavam::format_renavam(raw),
            FieldKind::Currency => money::format_currency(raw),
            FieldKind::Cep => cep::format_cep(raw),
        }
    }

    pub fn validate(self, raw: &str) -> Result<(), FieldError> {
        match self {
            FieldKind::Plate => plate::validate_plate(raw),
            FieldKind::Renavam => renavam::validate_renavam(raw),
            FieldKind::Currency => money::validate_currency(raw),
            FieldKind::Cep => cep::validate_cep(raw),
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKind::Plate => plate::PlateFormat::default().placeholder(),
            FieldKind::Renavam => "00000000000",
            FieldKind::Currency => "R$ 0",
            FieldKind::Cep => "00000-000",
        }
    }

    /// `None` for currency, whose overflow path has no fixed width.
    pub fn max_len(self) -> Option<usize> {
        match self {
            FieldKind::Plate => Some(plate::PlateFormat::default().max_len()),
            FieldKind::Renavam => Some(renavam::RENAVAM_LEN),
            FieldKind::Currency => None,
            FieldKind::Cep => Some(cep::CEP_LEN + 1),
        }
    }

    /// Runs one keystroke through the field: formats it and reports the
    /// current validation state. The plate field reads and updates the
    /// session's locked layout.
    pub fn process(self, raw: &str, session: &mut FormatterSession) -> FieldOutput {
        let error = self.validate(raw).err();

        match self {
            FieldKind::Plate => {
                let input = session.format_plate(raw);
                FieldOutput {
                    formatted: input.formatted,
                    error,
                    max_len: Some(input.max_len),
                    placeholder: input.placeholder,
                }
            }
            FieldKind::Renavam | FieldKind::Currency | FieldKind::Cep => FieldOutput {
                formatted: self.format(raw),
                error,
                max_len: self.max_len(),
                placeholder: self.placeholder(),
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Plate => "plate",
            FieldKind::Renavam => "renavam",
            FieldKind::Currency => "currency",
            FieldKind::Cep => "cep",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field kind '{0}' (expected plate, renavam, currency or cep)")]
pub struct UnknownFieldKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFieldKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_serde() {
        let json = serde_json::to_string(&FieldKind::Plate).unwrap();
        assert_eq!(json, r#"{"kind":"plate"}"#);

        let kind: FieldKind = serde_json::from_str(r#"{"kind":"currency"}"#).unwrap();
        assert_eq!(kind, FieldKind::Currency);
        assert!(serde_json::from_str::<FieldKind>(r#"{"kind":"cpf"}"#).is_err());
    }

    #[test]
    fn test_field_kind_from_str() {
        assert_eq!("renavam".parse::<FieldKind>(), Ok(FieldKind::Renavam));
        assert_eq!(" CEP ".parse::<FieldKind>(), Ok(FieldKind::Cep));
        assert_eq!(
            "cpf".parse::<FieldKind>(),
            Err(UnknownFieldKind("cpf".to_string()))
        );
        for kind in FieldKind::ALL {
            assert_eq!(kind.to_string().parse::<FieldKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_format_dispatch() {
        assert_eq!(FieldKind::Plate.format("abc1234"), "ABC-1234");
        assert_eq!(FieldKind::Renavam.format("123.456.789-01"), "12345678901");
        assert_eq!(FieldKind::Currency.format("52900"), "R$ 52.900");
        assert_eq!(FieldKind::Cep.format("01234567"), "01234-567");
    }

    #[test]
    fn test_process_reports_errors() {
        let mut session = FormatterSession::new();

        let output = FieldKind::Currency.process("0", &mut session);
        assert_eq!(output.formatted, "R$ 0");
        assert_eq!(output.error, Some(FieldError::ZeroAmount));
        assert_eq!(output.max_len, None);

        let output = FieldKind::Renavam.process("12345678901", &mut session);
        assert_eq!(output.error, None);
        assert_eq!(output.max_len, Some(11));
    }

    #[test]
    fn test_process_plate_uses_session() {
        let mut session = FormatterSession::new();

        let output = FieldKind::Plate.process("abc1d", &mut session);
        assert_eq!(output.formatted, "ABC1D");
        assert_eq!(output.error, Some(FieldError::InvalidPlate));
        assert_eq!(output.max_len, Some(7));
        assert_eq!(output.placeholder, "AAA9A99");

        let output = FieldKind::Plate.process("abc1d23", &mut session);
        assert_eq!(output.error, None);
    }
}
