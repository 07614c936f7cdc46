//! Conversion options shared by the four public conversions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mapping::CustomMapping;

/// Romanisation scheme for kana → romaji.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Romanization {
    #[default]
    Hepburn,
    Kunrei,
}

impl fmt::Display for Romanization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Romanization::Hepburn => f.write_str("hepburn"),
            Romanization::Kunrei => f.write_str("kunrei"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported romanisation scheme: {0:?} (expected hepburn or kunrei)")]
pub struct ParseRomanizationError(String);

impl FromStr for Romanization {
    type Err = ParseRomanizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hepburn" => Ok(Romanization::Hepburn),
            "kunrei" => Ok(Romanization::Kunrei),
            _ => Err(ParseRomanizationError(s.to_string())),
        }
    }
}

/// Target kana script when the caller wants to override casing-based
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown script: {0:?} (expected hiragana or katakana)")]
pub struct ParseScriptError(String);

impl FromStr for Script {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hiragana" => Ok(Script::Hiragana),
            "katakana" => Ok(Script::Katakana),
            _ => Err(ParseScriptError(s.to_string())),
        }
    }
}

/// Options for the `*_with` conversion entry points. Each call is a pure
/// function of (input, options); the only shared state is the read-only
/// tree cache.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Include the archaic ゐ/ゑ in romaji → kana.
    pub use_obsolete_kana: bool,
    /// Override mapping merged onto a clone of the base tree.
    pub custom_mapping: Option<CustomMapping>,
    /// Force-resolve a trailing ambiguous romaji fragment ("ky") instead of
    /// leaving it unconverted for further input. On by default.
    pub convert_ending: bool,
    /// Explicit output script; always wins over casing-based selection.
    pub enforce: Option<Script>,
    /// Uppercase romaji produced from katakana source spans.
    pub uppercase_katakana: bool,
    /// Romanisation scheme for kana → romaji.
    pub romanization: Romanization,
    /// Skip romaji conversion in to_hiragana/to_katakana and only shift the
    /// kana block.
    pub pass_romaji: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            use_obsolete_kana: false,
            custom_mapping: None,
            convert_ending: true,
            enforce: None,
            uppercase_katakana: false,
            romanization: Romanization::default(),
            pass_romaji: false,
        }
    }
}
