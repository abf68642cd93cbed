//! Text renderer: walks a string one Unicode scalar value at a time.

use std::borrow::Cow;

use hanzi2pinyin_core::{is_han, Style};

use crate::engine::Engine;

/// Split `text` into output tokens.
///
/// Non-Han characters become single-character tokens borrowed from `text`.
/// Han characters are rendered by the engine; an empty rendering is dropped
/// rather than leaving a gap between separators.
pub fn tokens<'a>(engine: &'a Engine, text: &'a str, style: Style) -> Vec<Cow<'a, str>> {
    let mut out = Vec::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if !is_han(c) {
            out.push(Cow::Borrowed(&text[i..i + c.len_utf8()]));
            continue;
        }
        let token = engine.render_char(c, style);
        if !token.is_empty() {
            out.push(token);
        }
    }
    out
}

/// Render `text` in `style`, joining tokens with `separator`.
pub fn render(engine: &Engine, text: &str, separator: &str, style: Style) -> String {
    tokens(engine, text, style).join(separator)
}
