// core/tests/table_files.rs
//
// Integration tests for loading pinyin tables from disk.
//
// Tests cover:
// - text tables with malformed lines
// - missing files surfacing as errors
// - compiling to fst + bincode and loading the artifacts back
// - config files on disk

use hanzi2pinyin_core::{Config, PinyinTable, Style};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hanzi2pinyin_{}_{}", std::process::id(), name))
}

#[test]
fn text_table_from_file() {
    let path = temp_path("table.txt");
    std::fs::write(
        &path,
        "4E2D=>zhōng,zhòng\n56FD=>guó\n\nbroken line\nZZZZ=>bad\n4EBA=>rén\n",
    )
    .unwrap();

    let table = PinyinTable::load_text_file(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.readings_for('中'), Some("zhōng,zhòng"));
    assert_eq!(table.readings_for('人'), Some("rén"));
    assert_eq!(table.readings_for('好'), None);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_text_table_is_an_error() {
    let path = temp_path("does_not_exist.txt");
    let err = PinyinTable::load_text_file(&path).unwrap_err();
    assert!(
        format!("{:#}", err).contains("does_not_exist.txt"),
        "error should name the path: {:#}",
        err
    );
}

#[test]
fn compiled_table_round_trip() {
    let mut table = PinyinTable::new();
    table.insert(0x4E2D, "zhōng,zhòng");
    table.insert(0x56FD, "guó");
    table.insert(0x20000, "hē");

    let fst_path = temp_path("table.fst");
    let bin_path = temp_path("table.bincode");
    table.write_fst_bincode(&fst_path, &bin_path).unwrap();

    let loaded = PinyinTable::load_from_fst_bincode(&fst_path, &bin_path).unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.readings_for('中'), Some("zhōng,zhòng"));
    assert_eq!(loaded.readings_for('国'), Some("guó"));
    assert_eq!(loaded.readings_for('\u{20000}'), Some("hē"));
    assert_eq!(loaded.readings_for('人'), None);
    assert_eq!(loaded.entries(), table.entries());

    let _ = std::fs::remove_file(&fst_path);
    let _ = std::fs::remove_file(&bin_path);
}

#[test]
fn compiled_table_inserts_shadow_artifacts() {
    let mut table = PinyinTable::new();
    table.insert(0x4E2D, "zhōng");
    let fst_path = temp_path("shadow.fst");
    let bin_path = temp_path("shadow.bincode");
    table.write_fst_bincode(&fst_path, &bin_path).unwrap();

    let mut loaded = PinyinTable::load_from_fst_bincode(&fst_path, &bin_path).unwrap();
    loaded.insert(0x4E2D, "zhòng");
    assert_eq!(loaded.readings_for('中'), Some("zhòng"));
    assert_eq!(loaded.len(), 1);

    let _ = std::fs::remove_file(&fst_path);
    let _ = std::fs::remove_file(&bin_path);
}

#[test]
fn text_export_reloads() {
    let mut table = PinyinTable::new();
    table.insert(0x4E2D, "zhōng,zhòng");
    table.insert(0x4EBA, "rén");

    let mut out = Vec::new();
    table.write_text(&mut out).unwrap();
    let reloaded = PinyinTable::from_reader(out.as_slice()).unwrap();
    assert_eq!(reloaded.entries(), table.entries());
}

#[test]
fn config_file_on_disk() {
    let path = temp_path("config.toml");
    let cfg = Config {
        style: Style::Tone,
        separator: "'".into(),
        ..Config::default()
    };
    cfg.save_toml(&path).unwrap();
    assert_eq!(Config::load_toml(&path).unwrap(), cfg);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn compiled_artifacts_are_complete_on_return() {
    let table = PinyinTable::builtin();
    let fst_path = temp_path("full.fst");
    let bin_path = temp_path("full.bincode");
    table.write_fst_bincode(&fst_path, &bin_path).unwrap();

    // Read the payload file directly, without going through the loader.
    let bytes = std::fs::read(&bin_path).unwrap();
    let payloads: Vec<String> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(payloads.len(), table.len());

    let keys = fst::Map::new(std::fs::read(&fst_path).unwrap()).unwrap();
    assert_eq!(keys.len(), table.len());

    let _ = std::fs::remove_file(&fst_path);
    let _ = std::fs::remove_file(&bin_path);
}
