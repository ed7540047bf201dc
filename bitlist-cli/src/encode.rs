//! Encoding command
//!
//! Reads an index list from the command line or stdin, encodes it and
//! prints the bitstring as text or JSON.

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

use anyhow::{Context, Result, bail};
use bitlist::{Bitset, EncoderConfig, RangeBitsetEncoder};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::debug;

/// Arguments for encoding an index list
#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    /// Index list such as "7,1-3,5" (read from stdin when omitted)
    pub input: Option<String>,

    /// Treat whitespace around tokens as an error instead of ignoring it
    #[arg(long)]
    pub no_trim: bool,

    /// Largest position accepted
    #[arg(long, default_value_t = bitlist::DEFAULT_MAX_INDEX)]
    pub max_index: NonZeroUsize,

    /// Token separator
    #[arg(long, default_value_t = ',')]
    pub separator: char,

    /// Parse and fold tokens on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How the result is printed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare bitstring
    Text,
    /// A JSON object with the input, bits, length and count of set bits
    Json,
}

impl EncodeArgs {
    fn config(&self) -> EncoderConfig {
        EncoderConfig::default()
            .with_trim_whitespace(!self.no_trim)
            .with_max_index(self.max_index)
            .with_separator(self.separator)
    }
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    bits: &'a Bitset,
    length: usize,
    ones: usize,
}

/// Encode the input named by `args` and write the result to `output`.
///
/// `stdin` is only read when no input argument is given.
pub fn run<R: BufRead, W: Write>(args: &EncodeArgs, stdin: R, output: &mut W) -> Result<()> {
    let input = match &args.input {
        Some(input) => input.clone(),
        None => read_input(stdin, args.separator)?,
    };
    debug!(parallel = args.parallel, format = ?args.format, "encoding index list");

    let encoder = RangeBitsetEncoder::with_config(args.config());
    let bitset = if args.parallel {
        encoder.par_encode_bitset(&input)
    } else {
        encoder.encode_bitset(&input)
    }
    .with_context(|| format!("Failed to encode index list {input:?}"))?;

    match args.format {
        OutputFormat::Text => writeln!(output, "{bitset}")?,
        OutputFormat::Json => {
            let report = Report {
                input: &input,
                bits: &bitset,
                length: bitset.len(),
                ones: bitset.count_ones(),
            };
            serde_json::to_writer(&mut *output, &report).context("Failed to write JSON")?;
            writeln!(output)?;
        }
    }
    Ok(())
}

fn read_input<R: BufRead>(stdin: R, separator: char) -> Result<String> {
    let mut lines = Vec::new();
    for line in stdin.lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        bail!("No input given: pass an index list or pipe one on stdin");
    }
    Ok(lines.join(separator.to_string().as_str()))
}
