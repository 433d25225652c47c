use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use brookshear_asm::{AsmConfig, Assembler, Program};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assembler for the Brookshear machine")]
struct Opts {
    /// Input assembly file (one instruction per line, `;` starts a comment)
    #[arg(value_name = "SRCFILE")]
    input: PathBuf,
    /// Write output to file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Bin)]
    format: OutputFormat,
    /// Emit uppercase hex digits (hex and url formats)
    #[arg(long)]
    uppercase: bool,
    /// Load assembler settings from JSON
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Raw machine code, 2 bytes per instruction
    Bin,
    /// Machine code as one hex string
    Hex,
    /// Hex string appended to the web emulator URL
    Url,
    /// Per-line listing as JSON
    Json,
}

fn load_config(path: Option<&Path>) -> Result<AsmConfig> {
    let Some(path) = path else { return Ok(AsmConfig::default()) };
    let txt = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&txt).with_context(|| format!("parsing config {}", path.display()))
}

fn render(prog: &Program, format: OutputFormat, cfg: &AsmConfig) -> Result<Vec<u8>> {
    Ok(match format {
        OutputFormat::Bin => prog.as_bytes().to_vec(),
        OutputFormat::Hex => format!("{}\n", prog.to_hex(cfg)).into_bytes(),
        OutputFormat::Url => format!("{}\n", prog.emulator_url(cfg)).into_bytes(),
        OutputFormat::Json => {
            let mut v = serde_json::to_vec_pretty(prog.listing())?;
            v.push(b'\n');
            v
        }
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let mut cfg = load_config(opts.config.as_deref())?;
    if opts.uppercase {
        cfg.uppercase_hex = true;
    }

    let text = fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    tracing::info!(input = %opts.input.display(), "assembling");
    let asm = Assembler::new(cfg);
    let prog = asm
        .assemble(&text)
        .with_context(|| format!("{}", opts.input.display()))?;

    let out = render(&prog, opts.format, &asm.cfg)?;
    match &opts.output {
        Some(path) => fs::write(path, &out)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&out)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
