//! htl CLI
//!
//! Reads an htl document from standard input and prints it as HTML.
//!
//! Usage:
//!   htl < page.htl            Render standard input
//!   htl --file page.htl       Render a file
//!
//! Parse errors are printed to standard error and nothing is rendered.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "htl", version, about = "Render htl markup as HTML")]
struct Args {
    /// Read the document from this file instead of standard input
    #[arg(short, long)]
    file: Option<PathBuf>,
}

/// Read the raw document. Invalid UTF-8 is replaced with U+FFFD, as the
/// static loader does for `.htl` files.
fn read_input(args: &Args) -> Result<String> {
    let bytes = if let Some(path) = &args.file {
        fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))?
    } else {
        let mut bytes = Vec::new();
        let _ = io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read standard input")?;
        bytes
    };
    Ok(decode_lossy(bytes))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let input = read_input(&args)?;

    match htl_parser::parse(&input) {
        Ok(tree) => {
            println!("{}", htl_dom::render(tree.as_ref()));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            Ok(ExitCode::FAILURE)
        }
    }
}
