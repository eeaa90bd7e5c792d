//! Host settings and their normalisation into a render configuration.
//!
//! Hosts hand over whatever the user configured. Unusable values are replaced
//! by defaults here, so nothing malformed reaches the numeral engine.

use crate::alphabet::{Alphabet, DECIMAL_DIGITS};
use crate::console_warn;
use crate::plan::NumeralSystem;
use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_LENGTH: u32 = 3;
pub const FIXED_LENGTH_SYSTEM: &str = "fixed length";
pub const FACTORADIC_SYSTEM: &str = "factoradic";

/// How the trailing empty line of a document is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFinalNewline {
    Off,
    #[default]
    On,
    Dimmed,
}

impl RenderFinalNewline {
    pub fn parse(value: &str) -> Option<RenderFinalNewline> {
        match value {
            "off" => Some(RenderFinalNewline::Off),
            "on" => Some(RenderFinalNewline::On),
            "dimmed" => Some(RenderFinalNewline::Dimmed),
            _ => None,
        }
    }
}

/// Validated configuration for one render call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineNumberConfig {
    pub alphabet: Alphabet,
    pub system: NumeralSystem,
    pub render_final_newline: RenderFinalNewline,
}

/// Raw settings exactly as the host reads them; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub alphabet: Option<String>,
    pub length: Option<f64>,
    pub system: Option<String>,
    pub render_final_newline: Option<String>,
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Settings> {
        serde_json::from_str(text).context("Failed to parse line number settings")
    }

    pub fn resolve(&self) -> LineNumberConfig {
        LineNumberConfig {
            alphabet: self.resolve_alphabet(),
            system: self.resolve_system(),
            render_final_newline: self.resolve_render_final_newline(),
        }
    }

    fn resolve_alphabet(&self) -> Alphabet {
        let alphabet = Alphabet::from_config(self.alphabet.as_deref());
        if let Some(configured) = &self.alphabet {
            if alphabet.as_string() != *configured {
                console_warn(&format!(
                    "Alphabet {:?} needs at least 2 distinct symbols, using {:?}.",
                    configured, DECIMAL_DIGITS
                ));
            }
        }
        alphabet
    }

    fn resolve_length(&self) -> u32 {
        match self.length {
            Some(length) if length.is_finite() && length >= 1.0 => length as u32,
            Some(length) => {
                console_warn(&format!("Length {} must be >= 1, using {}.", length, DEFAULT_LENGTH));
                DEFAULT_LENGTH
            }
            None => DEFAULT_LENGTH,
        }
    }

    fn resolve_system(&self) -> NumeralSystem {
        match self.system.as_deref() {
            Some(FACTORADIC_SYSTEM) => NumeralSystem::Factoradic,
            None | Some(FIXED_LENGTH_SYSTEM) => NumeralSystem::FixedLength(self.resolve_length()),
            Some(other) => {
                console_warn(&format!("Unknown numeral system {:?}, using {:?}.", other, FIXED_LENGTH_SYSTEM));
                NumeralSystem::FixedLength(self.resolve_length())
            }
        }
    }

    fn resolve_render_final_newline(&self) -> RenderFinalNewline {
        match self.render_final_newline.as_deref() {
            None => RenderFinalNewline::default(),
            Some(value) => RenderFinalNewline::parse(value).unwrap_or_else(|| {
                console_warn(&format!("Unknown renderFinalNewline {:?}, using \"on\".", value));
                RenderFinalNewline::default()
            }),
        }
    }
}
