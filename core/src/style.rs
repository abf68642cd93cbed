//! Output styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a Han character is romanized.
///
/// The discriminants are a stable contract for callers that persist a style
/// as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Style {
    /// Lowercase, tone marks removed: `zhong`.
    #[default]
    Normal = 0,
    /// Lowercase with tone marks: `zhōng`.
    Tone = 1,
    /// Tone marks removed, first letter uppercased: `Zhong`.
    InitialCapital = 2,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Normal, Style::Tone, Style::InitialCapital];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Normal => "normal",
            Style::Tone => "tone",
            Style::InitialCapital => "initial_capital",
        }
    }
}

impl From<Style> for u8 {
    fn from(style: Style) -> Self {
        style as u8
    }
}

impl TryFrom<u8> for Style {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Style::Normal),
            1 => Ok(Style::Tone),
            2 => Ok(Style::InitialCapital),
            other => anyhow::bail!("unknown style number: {}", other),
        }
    }
}

impl FromStr for Style {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "0" => Ok(Style::Normal),
            "tone" | "1" => Ok(Style::Tone),
            "initial_capital" | "initial-capital" | "2" => Ok(Style::InitialCapital),
            other => anyhow::bail!(
                "unknown style '{}' (expected normal, tone or initial_capital)",
                other
            ),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
