//! RISC-V assembly/machine-code translator CLI.
//!
//! This binary translates one instruction per line and prints one JSON line
//! per input line. It performs:
//! 1. **Setup:** Loads the configuration (cfg or `.json` file, then flag
//!    overrides) and validates the descriptor table once.
//! 2. **Translation:** Assembly text becomes `{"asm", "hex"}`; binary or `0x`
//!    hex input is disassembled into the same shape.
//! 3. **Errors:** A failing line prints `{"error"}` and the loop continues;
//!    only setup failures exit with code 1.
//!
//! Diagnostics go to stderr through `tracing` (filter with `RUST_LOG`), so
//! stdout carries nothing but JSON lines.

use clap::Parser;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use rvcodec_core::request::translate_line;
use rvcodec_core::{Config, DescriptorTable, IsaWidth, OutputMode};

#[derive(Parser, Debug)]
#[command(
    name = "rvcodec",
    author,
    version,
    about = "Bidirectional RISC-V assembly/machine-code translator",
    long_about = "Translate RISC-V assembly to machine code and back, one instruction per line.\n\nInput lines made of 16 or 32 binary digits (optional 0b) or 0x plus 4/8 hex digits are disassembled; anything else is assembled. Each line produces one JSON object on stdout.\n\nExamples:\n  echo 'addi x5, x0, 10' | rvcodec\n  rvcodec --isa RV32I 'c.lwsp x3, 5' 0x00a00293\n  rvcodec --config rvcodec.cfg --abi < program.s"
)]
struct Cli {
    /// Configuration file (`KEY=value` lines, or JSON when the name ends in `.json`).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// ISA width; overrides the configuration file.
    #[arg(long, value_parser = parse_isa)]
    isa: Option<IsaWidth>,

    /// Render and accept ABI register names; overrides the configuration file.
    #[arg(long)]
    abi: bool,

    /// Print only the hex word for successful lines.
    #[arg(long)]
    hex_only: bool,

    /// Instructions to translate instead of reading stdin.
    #[arg(allow_hyphen_values = true)]
    instructions: Vec<String>,
}

fn parse_isa(value: &str) -> Result<IsaWidth, String> {
    value.parse().map_err(|err: rvcodec_core::ConfigError| err.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(1);
    });
    if let Err(err) = DescriptorTable::global() {
        eprintln!("Error: {err}");
        process::exit(1);
    }

    let mode = if cli.hex_only { OutputMode::HexOnly } else { OutputMode::Full };
    let mut out = BufWriter::new(io::stdout().lock());
    let result = if cli.instructions.is_empty() {
        run(lossy_lines(io::stdin().lock()), &config, mode, &mut out)
    } else {
        run(cli.instructions.iter().cloned().map(Ok), &config, mode, &mut out)
    };
    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Loads the configuration file, if any, then applies flag overrides.
fn load_config(cli: &Cli) -> Result<Config, rvcodec_core::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(isa) = cli.isa {
        config.isa = isa;
    }
    if cli.abi {
        config.abi = true;
    }
    tracing::info!(isa = %config.isa, abi = config.abi, "translator ready");
    Ok(config)
}

/// Splits `reader` into lines, replacing invalid UTF-8 with U+FFFD so a bad
/// line becomes an error response instead of ending the run.
fn lossy_lines(reader: impl BufRead) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            let _ = line.pop();
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    })
}

/// Translates each line and writes one JSON line per input line, flushing
/// after every line so interactive callers see results immediately.
fn run<W: Write>(
    lines: impl Iterator<Item = io::Result<String>>,
    config: &Config,
    mode: OutputMode,
    out: &mut W,
) -> io::Result<()> {
    for line in lines {
        let response = translate_line(&line?, config, mode);
        let json = response.to_json().map_err(io::Error::other)?;
        writeln!(out, "{json}")?;
        out.flush()?;
    }
    Ok(())
}
