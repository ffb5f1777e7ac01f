//! License plate masking.
//!
//! Two layouts are accepted: the legacy `AAA-9999` and the Mercosul
//! `AAA9A99`. The layout is decided by the 4th and 5th normalized characters.

use crate::error::FieldError;
use crate::utils::mask::only_alphanumeric_upper;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LEGACY_PLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").expect("valid legacy plate regex"));
static MERCOSUL_PLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").expect("valid mercosul plate regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateFormat {
    #[default]
    Legacy,
    Mercosul,
}

impl PlateFormat {
    /// Maximum display length, separator included.
    pub fn max_len(self) -> usize {
        match self {
            PlateFormat::Legacy => 8,
            PlateFormat::Mercosul => 7,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            PlateFormat::Legacy => "AAA-9999",
            PlateFormat::Mercosul => "AAA9A99",
        }
    }
}

/// Returns `None` while the input is too short to tell the layouts apart.
pub fn detect_plate_format(raw: &str) -> Option<PlateFormat> {
    let normalized = only_alphanumeric_upper(raw);
    let mut chars = normalized.chars().skip(3);

    let fourth = chars.next()?;
    if fourth.is_ascii_alphabetic() {
        return Some(PlateFormat::Mercosul);
    }

    match chars.next() {
        Some(fifth) if fifth.is_ascii_alphabetic() => Some(PlateFormat::Mercosul),
        Some(_) => Some(PlateFormat::Legacy),
        None => None,
    }
}

pub fn format_plate(raw: &str) -> String {
    let normalized = only_alphanumeric_upper(raw);
    let format = detect_plate_format(&normalized).unwrap_or_default();
    format_as(&normalized, format)
}

fn format_as(normalized: &str, format: PlateFormat) -> String {
    match format {
        PlateFormat::Legacy => {
            let body: String = normalized.chars().take(7).collect();
            if body.len() > 3 {
                format!("{}-{}", &body[..3], &body[3..])
            } else {
                body
            }
        }
        PlateFormat::Mercosul => normalized.chars().take(7).collect(),
    }
}

pub fn validate_plate(raw: &str) -> Result<(), FieldError> {
    let normalized = only_alphanumeric_upper(raw);
    if normalized.is_empty() {
        return Err(FieldError::Required);
    }

    if LEGACY_PLATE.is_match(&normalized) || MERCOSUL_PLATE.is_match(&normalized) {
        Ok(())
    } else {
        Err(FieldError::InvalidPlate)
    }
}

pub fn is_valid_plate(raw: &str) -> bool {
    validate_plate(raw).is_ok()
}
