//! hanzi2pinyin-core
//!
//! Data layer shared by the `hanzi2pinyin` engine and its tools: the tone
//! table, the Han -> pinyin table, output styles, Han classification and
//! configuration.
//!
//! Public API:
//! - `ToneTable` - toned vowel -> base vowel
//! - `PinyinTable` - Han codepoint -> comma-joined toned readings
//! - `Style` - output style selector
//! - `is_han` - Unicode Han script check
//! - `Config` - TOML-backed settings
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod han;
pub use han::{han_codepoints, is_han};

pub mod style;
pub use style::Style;

pub mod table;
pub use table::PinyinTable;

pub mod tone;
pub use tone::ToneTable;

/// Placeholder emitted for a Han character with no usable reading.
///
/// All digits, so it can never be mistaken for a pinyin syllable.
pub const NO_READING: &str = "9999";

/// Paths of a compiled (fst + bincode) pinyin table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompiledDictionary {
    pub fst: PathBuf,
    pub bincode: PathBuf,
}

/// Settings for a transliteration run.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// style = "tone"
/// separator = "-"
/// dictionary = "/usr/share/hanzi2pinyin/pinyin.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Output style
    pub style: Style,
    /// Joiner placed between output tokens
    pub separator: String,
    /// Text pinyin table (`HEX=>reading` lines) replacing the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,
    /// Compiled pinyin table; used when `dictionary` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiled_dictionary: Option<CompiledDictionary>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::Normal,
            separator: " ".to_string(),
            dictionary: None,
            compiled_dictionary: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.separator, " ");
        assert_eq!(cfg.style, Style::Normal);
    }

    #[test]
    fn partial_toml() {
        let cfg = Config::from_toml_str("style = \"initial_capital\"\nseparator = \"\"\n").unwrap();
        assert_eq!(cfg.style, Style::InitialCapital);
        assert_eq!(cfg.separator, "");
        assert!(cfg.dictionary.is_none());
    }

    #[test]
    fn compiled_dictionary_table() {
        let cfg = Config::from_toml_str(
            "[compiled_dictionary]\nfst = \"a.fst\"\nbincode = \"a.bincode\"\n",
        )
        .unwrap();
        let compiled = cfg.compiled_dictionary.unwrap();
        assert_eq!(compiled.fst, PathBuf::from("a.fst"));
        assert_eq!(compiled.bincode, PathBuf::from("a.bincode"));
    }

    #[test]
    fn unknown_style_is_rejected() {
        assert!(Config::from_toml_str("style = \"numeric\"").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config {
            style: Style::Tone,
            separator: "-".into(),
            dictionary: Some(PathBuf::from("pinyin.txt")),
            compiled_dictionary: None,
        };
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn sentinel_is_not_a_syllable() {
        assert!(NO_READING.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(NO_READING.len(), 4);
    }
}
