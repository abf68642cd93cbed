use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hanzi2pinyin_core::PinyinTable;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Build and inspect pinyin tables.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dump the built-in table as `HEX=>reading` lines
    Export {
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compile a text table into fst + bincode artifacts
    Compile {
        /// Input text table
        #[arg(long)]
        input: PathBuf,

        /// Output fst map file path (codepoint -> index)
        #[arg(long, default_value = "pinyin.fst")]
        out_fst: PathBuf,

        /// Output bincode file path (readings)
        #[arg(long, default_value = "pinyin.bincode")]
        out_bincode: PathBuf,
    },
    /// Print the readings of each character in TEXT
    Inspect {
        text: String,

        /// Text table to read instead of the built-in one
        #[arg(long, conflicts_with = "fst")]
        dict: Option<PathBuf>,

        /// Compiled fst map (needs --bincode)
        #[arg(long, requires = "bincode")]
        fst: Option<PathBuf>,

        #[arg(long, requires = "fst")]
        bincode: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Export { out } => {
            let table = PinyinTable::builtin();
            match out {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("create {}", path.display()))?;
                    table.write_text(BufWriter::new(file))?;
                    eprintln!("wrote {} entries to {}", table.len(), path.display());
                }
                None => table.write_text(io::stdout().lock())?,
            }
        }
        Command::Compile {
            input,
            out_fst,
            out_bincode,
        } => {
            let table = PinyinTable::load_text_file(&input)?;
            if table.is_empty() {
                anyhow::bail!("no usable entries in {}", input.display());
            }
            table.write_fst_bincode(&out_fst, &out_bincode)?;
            eprintln!(
                "compiled {} entries -> {} + {}",
                table.len(),
                out_fst.display(),
                out_bincode.display()
            );
        }
        Command::Inspect {
            text,
            dict,
            fst,
            bincode,
        } => {
            let table = match (dict, fst, bincode) {
                (Some(path), _, _) => PinyinTable::load_text_file(path)?,
                (None, Some(fst), Some(bincode)) => {
                    PinyinTable::load_from_fst_bincode(fst, bincode)?
                }
                _ => PinyinTable::from_pinyin_data(),
            };

            let stdout = io::stdout();
            let mut out = stdout.lock();
            for c in text.chars() {
                match table.readings_for(c) {
                    Some(readings) => writeln!(out, "{} U+{:04X} {}", c, c as u32, readings)?,
                    None => writeln!(out, "{} U+{:04X} (none)", c, c as u32)?,
                }
            }
        }
    }

    Ok(())
}
