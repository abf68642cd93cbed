//! Pinyin table: Han codepoint -> comma-joined toned readings.
//!
//! A table can come from three places:
//! - the built-in dictionary (`PinyinTable::builtin`), materialised once per
//!   process from the `pinyin` crate's heteronym data;
//! - a text file with one `HEX=>reading[,reading...]` mapping per line;
//! - compiled artifacts: an fst map (big-endian codepoint -> index) plus a
//!   bincode `Vec<String>` of readings, as written by `write_fst_bincode`.
//!
//! Tables are immutable once built. Engines hold them behind an `Arc`.

use ahash::AHashMap;
use anyhow::{Context, Result};
use fst::{Map, MapBuilder, Streamer};
use once_cell::sync::Lazy;
use pinyin::ToPinyinMulti;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use unicode_normalization::UnicodeNormalization;

use crate::han;

/// Separator between the codepoint and the readings in the text format.
pub const FIELD_DELIMITER: &str = "=>";

/// Separator between candidate readings.
pub const READING_DELIMITER: char = ',';

static BUILTIN: Lazy<Arc<PinyinTable>> = Lazy::new(|| Arc::new(PinyinTable::from_pinyin_data()));

#[derive(Debug, Clone, Default)]
pub struct PinyinTable {
    // In-memory entries (text file, built-in data, manual inserts)
    map: AHashMap<u32, String>,
    // Compiled artifacts: codepoint key -> index into `payloads`
    fst_map: Option<Map<Vec<u8>>>,
    payloads: Option<Vec<String>>,
}

impl PinyinTable {
    pub fn new() -> Self {
        Self {
            map: AHashMap::new(),
            fst_map: None,
            payloads: None,
        }
    }

    /// Shared handle to the built-in dictionary.
    ///
    /// The first call builds the table; later calls clone the same `Arc`.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Build a fresh table from the `pinyin` crate's data.
    ///
    /// Every reading of a character is kept, in the crate's order, so the
    /// first entry is the most common pronunciation.
    pub fn from_pinyin_data() -> Self {
        let mut table = Self::new();
        for c in han::han_codepoints() {
            if let Some(multi) = c.to_pinyin_multi() {
                let readings: Vec<&str> = multi.into_iter().map(|p| p.with_tone()).collect();
                if !readings.is_empty() {
                    table.insert(c as u32, readings.join(","));
                }
            }
        }
        info!(entries = table.len(), "built pinyin table from bundled data");
        table
    }

    /// Insert or replace the readings for a codepoint.
    pub fn insert<R: Into<String>>(&mut self, codepoint: u32, readings: R) {
        self.map.insert(codepoint, readings.into());
    }

    /// Raw comma-joined readings for `c`, or `None` if the table lacks it.
    pub fn readings_for(&self, c: char) -> Option<&str> {
        self.readings_for_codepoint(c as u32)
    }

    pub fn readings_for_codepoint(&self, codepoint: u32) -> Option<&str> {
        // Prefer in-memory entries
        if let Some(r) = self.map.get(&codepoint) {
            return Some(r.as_str());
        }

        if let (Some(map), Some(payloads)) = (&self.fst_map, &self.payloads) {
            if let Some(idx) = map.get(codepoint.to_be_bytes()) {
                return payloads.get(idx as usize).map(String::as_str);
            }
        }

        None
    }

    /// Number of codepoints with an entry.
    pub fn len(&self) -> usize {
        let compiled = self.fst_map.as_ref().map_or(0, |m| {
            let mut n = 0;
            let mut stream = m.stream();
            while let Some((k, _)) = stream.next() {
                if let Ok(bytes) = <[u8; 4]>::try_from(k) {
                    if !self.map.contains_key(&u32::from_be_bytes(bytes)) {
                        n += 1;
                    }
                }
            }
            n
        });
        self.map.len() + compiled
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries in ascending codepoint order.
    ///
    /// In-memory entries shadow compiled ones for the same codepoint.
    pub fn entries(&self) -> Vec<(u32, &str)> {
        let mut merged: BTreeMap<u32, &str> = BTreeMap::new();
        if let (Some(map), Some(payloads)) = (&self.fst_map, &self.payloads) {
            let mut stream = map.stream();
            while let Some((k, idx)) = stream.next() {
                let Ok(bytes) = <[u8; 4]>::try_from(k) else {
                    continue;
                };
                if let Some(r) = payloads.get(idx as usize) {
                    merged.insert(u32::from_be_bytes(bytes), r.as_str());
                }
            }
        }
        for (cp, r) in &self.map {
            merged.insert(*cp, r.as_str());
        }
        merged.into_iter().collect()
    }

    /// Parse a single `HEX=>readings` line.
    ///
    /// Returns `None` for lines without the delimiter or whose first field
    /// is not base-16. Only the field after the first delimiter is kept.
    pub fn parse_line(line: &str) -> Option<(u32, String)> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut fields = line.split(FIELD_DELIMITER);
        let hex = fields.next()?;
        let readings = fields.next()?;
        let codepoint = u32::from_str_radix(hex, 16).ok()?;
        Some((codepoint, readings.nfc().collect()))
    }

    /// Load a text table from any buffered reader.
    ///
    /// Malformed lines (including ones that are not valid UTF-8) are skipped.
    /// Later lines replace earlier ones for the same codepoint.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut table = Self::new();
        let mut buf = Vec::new();
        let mut lineno = 0usize;
        let mut skipped = 0usize;

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .context("failed to read pinyin table")?;
            if n == 0 {
                break;
            }
            lineno += 1;
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }

            let parsed = std::str::from_utf8(&buf).ok().and_then(Self::parse_line);
            match parsed {
                Some((cp, readings)) => table.insert(cp, readings),
                None => {
                    skipped += 1;
                    debug!(line = lineno, "skipping malformed pinyin table line");
                }
            }
        }

        info!(entries = table.map.len(), skipped, "loaded pinyin table");
        Ok(table)
    }

    /// Load a text table from a file.
    ///
    /// Failing to open the file is an error; bad lines inside it are not.
    pub fn load_text_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("open pinyin table {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("read pinyin table {}", path.display()))
    }

    /// Write the table in the `HEX=>readings` text format.
    pub fn write_text<W: Write>(&self, mut writer: W) -> Result<()> {
        for (cp, readings) in self.entries() {
            writeln!(writer, "{:X}{}{}", cp, FIELD_DELIMITER, readings)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Load a table compiled by `write_fst_bincode`.
    pub fn load_from_fst_bincode<P: AsRef<Path>>(fst_path: P, bincode_path: P) -> Result<Self> {
        let fst_path = fst_path.as_ref();
        let bincode_path = bincode_path.as_ref();

        let mut buf = Vec::new();
        File::open(fst_path)
            .with_context(|| format!("open fst {}", fst_path.display()))?
            .read_to_end(&mut buf)
            .with_context(|| format!("read fst {}", fst_path.display()))?;
        let map = Map::new(buf).with_context(|| format!("parse fst {}", fst_path.display()))?;

        let file = File::open(bincode_path)
            .with_context(|| format!("open bincode {}", bincode_path.display()))?;
        let payloads: Vec<String> = bincode::deserialize_from(BufReader::new(file))
            .with_context(|| format!("deserialize bincode {}", bincode_path.display()))?;

        if map.len() > payloads.len() {
            warn!(
                keys = map.len(),
                payloads = payloads.len(),
                "compiled pinyin table has more keys than readings"
            );
        }
        info!(entries = map.len(), "loaded compiled pinyin table");

        Ok(Self {
            map: AHashMap::new(),
            fst_map: Some(map),
            payloads: Some(payloads),
        })
    }

    /// Compile the table into an fst key index and a bincode payload file.
    pub fn write_fst_bincode<P: AsRef<Path>>(&self, fst_path: P, bincode_path: P) -> Result<()> {
        let fst_path = fst_path.as_ref();
        let bincode_path = bincode_path.as_ref();
        let entries = self.entries();

        // Big-endian keys sort in codepoint order, which is what fst needs.
        let out = BufWriter::new(
            File::create(fst_path).with_context(|| format!("create {}", fst_path.display()))?,
        );
        let mut builder = MapBuilder::new(out)?;
        for (i, (cp, _)) in entries.iter().enumerate() {
            builder.insert(cp.to_be_bytes(), i as u64)?;
        }
        builder.into_inner()?.flush()?;

        let payloads: Vec<&str> = entries.iter().map(|(_, r)| *r).collect();
        let mut out = BufWriter::new(
            File::create(bincode_path)
                .with_context(|| format!("create {}", bincode_path.display()))?,
        );
        bincode::serialize_into(&mut out, &payloads)?;
        out.flush()
            .with_context(|| format!("write {}", bincode_path.display()))?;
        Ok(())
    }
}
