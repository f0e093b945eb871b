#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # wamas-cli
//!
//! Command-line front end for the WAMAS/UBL translator: file in, file
//! (or stdout) out, one subcommand per translation direction plus an
//! inspection command.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use wamas_codec::encode_latin1;
use wamas_convert::{detect_flow, ConvertOptions, Converter};

#[derive(Parser)]
#[command(name = "wamas")]
#[command(about = "WAMAS fixed-width telegram and UBL translator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a warehouse telegram file into UBL documents
    ToUbl {
        /// Telegram input file (ISO-8859-1)
        input: PathBuf,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Author host telegrams from a UBL document
    FromUbl {
        /// UBL XML input file
        input: PathBuf,

        /// Telegram types to author, comma separated (e.g. WEAK,WEAP)
        #[arg(short, long, value_delimiter = ',', required = true)]
        types: Vec<String>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Transcode host telegrams into the warehouse confirmations they
    /// would produce
    Simulate {
        /// Telegram input file (ISO-8859-1)
        input: PathBuf,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a telegram file and report what it contains
    Check {
        /// Telegram input file (ISO-8859-1)
        input: PathBuf,

        /// Emit one machine-readable JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let converter = Converter::new(ConvertOptions::default());

    match cli.command {
        Commands::ToUbl { input, output } => {
            let raw = read_bytes(&input)?;
            let documents = converter.telegram_to_documents(&raw)?;
            info!(count = documents.len(), "rendered UBL documents");
            let mut body = documents.join("\n");
            body.push('\n');
            write_output(output.as_deref(), body.as_bytes())
        }
        Commands::FromUbl {
            input,
            types,
            output,
        } => {
            let xml = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let types: Vec<&str> = types.iter().map(String::as_str).collect();
            let telegram = converter.ubl_to_telegram(&xml, &types)?;
            info!(lines = telegram.lines().count(), "authored telegram lines");
            let mut bytes = encode_latin1(&telegram)?;
            bytes.push(b'\n');
            write_output(output.as_deref(), &bytes)
        }
        Commands::Simulate { input, output } => {
            let raw = read_bytes(&input)?;
            let telegram = converter.telegram_to_telegram(&raw)?;
            info!(lines = telegram.lines().count(), "simulated confirmations");
            let mut bytes = encode_latin1(&telegram)?;
            bytes.push(b'\n');
            write_output(output.as_deref(), &bytes)
        }
        Commands::Check { input, json } => {
            let raw = read_bytes(&input)?;
            check(&converter, &raw, json)
        }
    }
}

fn check(converter: &Converter, raw: &[u8], json: bool) -> anyhow::Result<()> {
    let groups = converter.telegram_to_records(raw)?;
    let types: Vec<&str> = groups.iter().map(|(t, _)| t.as_str()).collect();
    let flow = detect_flow(&types).unwrap_or("Unknown");

    let report: Vec<serde_json::Value> = groups
        .iter()
        .map(|(telegram_type, records)| {
            serde_json::json!({
                "telegram_type": telegram_type,
                "count": records.len(),
                "records": records,
            })
        })
        .collect();

    if json {
        let doc = serde_json::json!({
            "flow": flow,
            "telegram_types": types,
            "groups": report,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("Flow: {flow}");
        for (telegram_type, records) in &groups {
            println!("{telegram_type}: {} record(s)", records.len());
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn read_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("reading {}", path.display()))
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            Ok(stdout.flush()?)
        }
    }
}
