use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hanzi2pinyin::{Config, Engine, Style};
use tracing_subscriber::EnvFilter;

/// Romanize Chinese text as Hanyu Pinyin.
#[derive(Parser, Debug)]
#[command(name = "hanzi2pinyin", version)]
struct Args {
    /// Text to convert; stdin is read line by line when omitted
    text: Vec<String>,

    /// Output style: normal, tone or initial_capital
    #[arg(short, long, value_parser = parse_style)]
    style: Option<Style>,

    /// String placed between output tokens
    #[arg(long)]
    separator: Option<String>,

    /// Text dictionary (HEX=>reading lines) replacing the built-in table
    #[arg(long)]
    dict: Option<PathBuf>,

    /// TOML config file; command-line options override it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn parse_style(s: &str) -> Result<Style, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

/// Fold command-line options over values loaded from a config file.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(style) = args.style {
        config.style = style;
    }
    if let Some(sep) = &args.separator {
        config.separator = sep.clone();
    }
    if let Some(dict) = &args.dict {
        config.dictionary = Some(dict.clone());
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &args);

    let engine = Engine::from_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.text.is_empty() {
        let text = args.text.join(" ");
        writeln!(out, "{}", engine.transliterate(&text, &config.separator, config.style))?;
        return Ok(());
    }

    let stdin = io::stdin();
    transliterate_lines(&engine, &config, stdin.lock(), &mut out)
}

/// Convert `input` line by line. Invalid UTF-8 is replaced rather than
/// ending the run.
fn transliterate_lines<R: BufRead, W: Write>(
    engine: &Engine,
    config: &Config,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        let line = String::from_utf8_lossy(&buf);
        writeln!(out, "{}", engine.transliterate(&line, &config.separator, config.style))?;
    }
    out.flush()?;
    Ok(())
}
