use crate::utils::mask::only_alphanumeric_upper;
use crate::utils::plate::{detect_plate_format, format_plate, PlateFormat};

/// Per-input-session state of the masked fields. Owned by the form that hosts
/// the inputs and passed in on every keystroke.
///
/// The locked plate layout only drives `max_len` and `placeholder`; the
/// formatted text is always the pure `format_plate` of the input.
#[derive(Debug, Clone, Default)]
pub struct FormatterSession {
    plate_format: Option<PlateFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateInput {
    pub formatted: String,
    pub format: PlateFormat,
    pub max_len: usize,
    pub placeholder: &'static str,
}

impl FormatterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout locked onto by the plate field, if already determined.
    pub fn plate_format(&self) -> Option<PlateFormat> {
        self.plate_format
    }

    pub fn format_plate(&mut self, raw: &str) -> PlateInput {
        let normalized = only_alphanumeric_upper(raw);

        if normalized.len() < 4 {
            // apagou até antes do ponto de decisão: volta ao padrão
            self.plate_format = None;
        } else if let Some(detected) = detect_plate_format(&normalized) {
            self.plate_format = Some(detected);
        }

        let format = self.plate_format.unwrap_or_default();
        PlateInput {
            formatted: format_plate(&normalized),
            format,
            max_len: format.max_len(),
            placeholder: format.placeholder(),
        }
    }

    pub fn reset(&mut self) {
        self.plate_format = None;
    }
}
