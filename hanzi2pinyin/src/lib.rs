//! hanzi2pinyin crate root
//!
//! Character-by-character romanization of Chinese text into Hanyu Pinyin.
//! Each Han character is looked up in a pinyin table and rendered with its
//! first recorded reading; everything else passes through unchanged.
//!
//! ```
//! use hanzi2pinyin::{transliterate, Style};
//!
//! assert_eq!(transliterate("中国人", " ", Style::Tone), "zhōng guó rén");
//! assert_eq!(transliterate("中国人", " ", Style::InitialCapital), "Zhong Guo Ren");
//! ```
//!
//! Public API exported here:
//! - `Engine` from `engine`
//! - `render` / `tokens` from `render`
//! - `transliterate` over a process-wide default engine

use once_cell::sync::Lazy;

pub mod engine;
pub mod render;

// Convenience re-exports for common types used by callers.
pub use engine::Engine;
pub use hanzi2pinyin_core::{
    is_han, CompiledDictionary, Config, PinyinTable, Style, ToneTable, NO_READING,
};

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::new);

/// Romanize `text` with the built-in dictionary.
pub fn transliterate(text: &str, separator: &str, style: Style) -> String {
    DEFAULT_ENGINE.transliterate(text, separator, style)
}
