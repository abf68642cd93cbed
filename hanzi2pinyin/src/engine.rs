//! Transliteration engine
//!
//! Owns a tone table and a pinyin table and renders single Han characters
//! in each output style. Only the first recorded reading of a character is
//! ever used; there is no context-based disambiguation.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;
use hanzi2pinyin_core::{Config, PinyinTable, Style, ToneTable, NO_READING};

use crate::render;

/// Public engine for hanzi2pinyin.
///
/// The pinyin table sits behind an `Arc`, so clones are cheap and every
/// engine built with `Engine::new` shares the single built-in table.
#[derive(Debug, Clone)]
pub struct Engine {
    tones: ToneTable,
    table: Arc<PinyinTable>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over the built-in dictionary.
    pub fn new() -> Self {
        Self::with_table(PinyinTable::builtin())
    }

    /// Engine over an already-built table.
    pub fn with_table(table: Arc<PinyinTable>) -> Self {
        Self {
            tones: ToneTable::new(),
            table,
        }
    }

    /// Engine over a `HEX=>readings` text dictionary.
    ///
    /// An unreadable file is an error; there is no fallback to the built-in
    /// table.
    pub fn from_text_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let table = PinyinTable::load_text_file(path)?;
        Ok(Self::with_table(Arc::new(table)))
    }

    /// Engine over compiled fst + bincode artifacts.
    pub fn from_fst_bincode<P: AsRef<Path>>(fst_path: P, bincode_path: P) -> Result<Self> {
        let table = PinyinTable::load_from_fst_bincode(fst_path, bincode_path)?;
        Ok(Self::with_table(Arc::new(table)))
    }

    /// Pick the table source named by `config`.
    ///
    /// A text dictionary wins over a compiled one; with neither set the
    /// built-in table is used.
    pub fn from_config(config: &Config) -> Result<Self> {
        if let Some(path) = &config.dictionary {
            debug!(path = %path.display(), "using text pinyin table");
            return Self::from_text_file(path);
        }
        if let Some(compiled) = &config.compiled_dictionary {
            debug!(
                fst = %compiled.fst.display(),
                bincode = %compiled.bincode.display(),
                "using compiled pinyin table"
            );
            return Self::from_fst_bincode(&compiled.fst, &compiled.bincode);
        }
        debug!("using built-in pinyin table");
        Ok(Self::new())
    }

    pub fn table(&self) -> &PinyinTable {
        &self.table
    }

    pub fn tones(&self) -> &ToneTable {
        &self.tones
    }

    /// Every candidate reading recorded for `c`, in table order.
    pub fn readings(&self, c: char) -> Vec<&str> {
        match self.table.readings_for(c) {
            Some(r) if !r.is_empty() => r.split(',').collect(),
            _ => Vec::new(),
        }
    }

    /// First recorded reading, `None` when there is nothing to render.
    fn canonical_reading(&self, c: char) -> Option<&str> {
        self.table
            .readings_for(c)
            .and_then(|r| r.split(',').next())
            .filter(|r| !r.is_empty())
    }

    /// Toned reading, e.g. `zhōng`, or the `NO_READING` sentinel.
    pub fn render_tone(&self, c: char) -> &str {
        self.canonical_reading(c).unwrap_or(NO_READING)
    }

    /// Tone-stripped reading, e.g. `zhong`.
    pub fn render_normal(&self, c: char) -> String {
        match self.canonical_reading(c) {
            Some(reading) => self.tones.strip(reading),
            None => NO_READING.to_string(),
        }
    }

    /// Tone-stripped reading with its first letter uppercased, e.g. `Zhong`.
    ///
    /// Only a leading ASCII lowercase letter changes; the sentinel and
    /// anything else pass through untouched.
    pub fn render_initial_capital(&self, c: char) -> String {
        let mut out = self.render_normal(c);
        if out.starts_with(|first: char| first.is_ascii_lowercase()) {
            out[..1].make_ascii_uppercase();
        }
        out
    }

    /// Render a single Han character in `style`.
    pub fn render_char(&self, c: char, style: Style) -> Cow<'_, str> {
        match style {
            Style::Tone => Cow::Borrowed(self.render_tone(c)),
            Style::Normal => Cow::Owned(self.render_normal(c)),
            Style::InitialCapital => Cow::Owned(self.render_initial_capital(c)),
        }
    }

    /// Romanize `text`, joining the tokens with `separator`.
    ///
    /// Never fails: unknown Han characters become the sentinel and non-Han
    /// characters pass through.
    pub fn transliterate(&self, text: &str, separator: &str, style: Style) -> String {
        render::render(self, text, separator, style)
    }
}
