// SPDX-License-Identifier: MIT

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use std::fs;
use tracing_subscriber::EnvFilter;
use typscan::codes::TypeCodeMatch;
use typscan::header::HeaderInfo;
use typscan::strings::StringMatch;
use typscan::{codes, dump, header, strings};

/// Typscan the TYP structure analysis tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the analysis as JSON
    #[arg(required = false, short, long)]
    json: bool,

    /// TYP file to read
    #[arg(index = 1)]
    file: String,
}

#[derive(Serialize)]
struct Report<'a> {
    file: &'a str,
    size: usize,
    header: &'a HeaderInfo,
    type_codes: &'a [TypeCodeMatch],
    strings: &'a [StringMatch],
}

const MAX_CODE_MATCHES: usize = 10;
const MAX_STRINGS: usize = 20;
const MAX_STRING_CHARS: usize = 50;

fn print_header(info: &HeaderInfo) {
    println!("HEADER ANALYSIS:");
    println!("  0x00-0x01: {:5} (0x{:04x})", info.leading, info.leading);
    if info.has_signature {
        println!("  0x02-0x0B: \"GARMIN TYP\" signature present");
    } else {
        println!("  0x02-0x0B: no \"GARMIN TYP\" signature");
    }
    if let Some(v) = &info.versions {
        println!(
            "  0x0C-0x0D: {:5} (0x{:04x}) - likely version",
            v.version, v.version
        );
        println!("  0x0E-0x0F: {:5} (0x{:04x})", v.unknown_0e, v.unknown_0e);
        println!("  0x10-0x11: {:5} (0x{:04x})", v.unknown_10, v.unknown_10);
        println!("  0x12-0x13: {:5} (0x{:04x})", v.unknown_12, v.unknown_12);
    }
}

fn print_type_codes(found: &[TypeCodeMatch]) {
    println!("SEARCHING FOR GARMIN TYPE CODES:");
    if found.is_empty() {
        println!("  No known type codes found in expected format");
        return;
    }
    println!("Found {} type codes:", found.len());
    for m in found.iter().take(MAX_CODE_MATCHES) {
        println!(
            "  0x{:04x} ({:6}): 0x{:04x} - {}",
            m.offset, m.offset, m.code, m.name
        );
        println!("    Context: {}", hex::encode(&m.context));
    }
}

fn print_strings(found: &[StringMatch]) {
    println!("ASCII STRINGS (potential labels):");
    if found.is_empty() {
        println!("  No candidate strings found");
        return;
    }
    for m in found.iter().take(MAX_STRINGS) {
        let text = if m.text.len() > MAX_STRING_CHARS {
            format!("{}...", &m.text[..MAX_STRING_CHARS - 3])
        } else {
            m.text.clone()
        };
        println!("  0x{:04x}: {text:?}", m.offset);
    }
    if found.len() > MAX_STRINGS {
        println!("  ... and {} more strings", found.len() - MAX_STRINGS);
    }
}

fn print_report(
    file: &str,
    data: &[u8],
    info: &HeaderInfo,
    found: &[TypeCodeMatch],
    labels: &[StringMatch],
) {
    println!("=== TYP File Analysis: {file} ===");
    println!("File size: {} bytes ({}KB)", data.len(), data.len() / 1024);
    println!();
    print_header(info);
    println!();
    println!("Hex dump of first 128 bytes:");
    print!("{}", dump::hex_dump(data, dump::DUMP_LEN));
    println!();
    print_type_codes(found);
    println!();
    print_strings(labels);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let data = fs::read(&args.file).with_context(|| format!("reading {}", args.file))?;
    if data.len() < 2 {
        bail!(
            "{}: too small to be a TYP file ({} bytes)",
            args.file,
            data.len()
        );
    }

    // All three views are derived before anything prints, so a failure
    // never leaves a half-rendered report behind.
    let info = header::decode(&data).map_err(anyhow::Error::msg)?;
    let found = codes::scan(&data);
    let labels = strings::extract(&data);

    if args.json {
        let report = Report {
            file: &args.file,
            size: data.len(),
            header: &info,
            type_codes: &found,
            strings: &labels,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &data, &info, &found, &labels);
    }

    Ok(())
}
