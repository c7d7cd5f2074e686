//! Unit conversion dispatch.
//!
//! Every supported conversion is a row in one flat table keyed by
//! (language, source unit, target unit). Unit names are the spoken tokens of
//! each language's vocabulary; there is no dimensional model behind them.

use crate::i18n::Language;
use thiserror::Error;

/// Errors raised while converting a spoken value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The (language, from, to) triple is not in the conversion table
    #[error("unsupported conversion from '{from}' to '{to}' for language '{language}'")]
    UnsupportedPair {
        language: Language,
        from: String,
        to: String,
    },

    /// The value slot is not a finite number
    #[error("invalid numeric value: '{0}'")]
    InvalidNumber(String),

    /// The converted value does not fit in a finite number
    #[error("converting {value} from '{from}' to '{to}' overflows")]
    OutOfRange { value: f64, from: String, to: String },
}

/// A single table row.
#[derive(Debug, Clone, Copy)]
pub struct Conversion {
    pub language: Language,
    pub from: &'static str,
    pub to: &'static str,
    pub apply: fn(f64) -> f64,
}

const CONVERSIONS: &[Conversion] = &[
    // ==================== Spanish (metric) ====================
    Conversion::new(Language::SPANISH, "centímetros", "metros", cm_to_m),
    Conversion::new(Language::SPANISH, "centímetros", "kilómetros", cm_to_km),
    Conversion::new(Language::SPANISH, "metros", "centímetros", m_to_cm),
    Conversion::new(Language::SPANISH, "metros", "kilómetros", m_to_km),
    Conversion::new(Language::SPANISH, "kilómetros", "centímetros", km_to_cm),
    Conversion::new(Language::SPANISH, "kilómetros", "metros", km_to_m),
    // ==================== English (imperial) ====================
    Conversion::new(Language::ENGLISH, "inches", "feet", inch_to_feet),
    Conversion::new(Language::ENGLISH, "inches", "yards", inch_to_yard),
    Conversion::new(Language::ENGLISH, "feet", "inches", feet_to_inch),
    Conversion::new(Language::ENGLISH, "feet", "yards", feet_to_yard),
    Conversion::new(Language::ENGLISH, "yards", "inches", yard_to_inch),
    Conversion::new(Language::ENGLISH, "yards", "feet", yard_to_feet),
];

impl Conversion {
    const fn new(
        language: Language,
        from: &'static str,
        to: &'static str,
        apply: fn(f64) -> f64,
    ) -> Self {
        Self {
            language,
            from,
            to,
            apply,
        }
    }
}

fn cm_to_m(value: f64) -> f64 {
    value / 100.0
}

fn cm_to_km(value: f64) -> f64 {
    value / 100_000.0
}

fn m_to_cm(value: f64) -> f64 {
    value * 100.0
}

fn m_to_km(value: f64) -> f64 {
    value / 1_000.0
}

fn km_to_cm(value: f64) -> f64 {
    value * 100_000.0
}

fn km_to_m(value: f64) -> f64 {
    value * 1_000.0
}

fn inch_to_feet(value: f64) -> f64 {
    value / 12.0
}

fn inch_to_yard(value: f64) -> f64 {
    value / 36.0
}

fn feet_to_inch(value: f64) -> f64 {
    value * 12.0
}

fn feet_to_yard(value: f64) -> f64 {
    value / 3.0
}

fn yard_to_inch(value: f64) -> f64 {
    value * 36.0
}

fn yard_to_feet(value: f64) -> f64 {
    value * 3.0
}

/// Read-only view over the conversion table.
pub struct ConversionTable;

impl ConversionTable {
    /// All rows of the table.
    pub fn entries() -> &'static [Conversion] {
        CONVERSIONS
    }

    /// Find the row for a (language, from, to) triple.
    pub fn lookup(language: Language, from: &str, to: &str) -> Option<&'static Conversion> {
        CONVERSIONS
            .iter()
            .find(|c| c.language == language && c.from == from && c.to == to)
    }

    /// Unit vocabulary of a language, in table order and without duplicates.
    pub fn units(language: Language) -> Vec<&'static str> {
        let mut units = Vec::new();
        for conversion in CONVERSIONS.iter().filter(|c| c.language == language) {
            for unit in [conversion.from, conversion.to] {
                if !units.contains(&unit) {
                    units.push(unit);
                }
            }
        }
        units
    }
}

/// Convert `value` from one unit to another in the given language's vocabulary.
pub fn convert(
    language: Language,
    from: &str,
    to: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let conversion = ConversionTable::lookup(language, from, to).ok_or_else(|| {
        ConversionError::UnsupportedPair {
            language,
            from: from.to_string(),
            to: to.to_string(),
        }
    })?;

    let result = (conversion.apply)(value);
    if !result.is_finite() {
        return Err(ConversionError::OutOfRange {
            value,
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(result)
}

/// Parse a spoken value slot into a finite number.
pub fn parse_value(text: &str) -> Result<f64, ConversionError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConversionError::InvalidNumber(text.to_string()))
}
