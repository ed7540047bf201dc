//! bitlist - encode index lists into bitstrings
//!
//! Usage:
//!   bitlist [OPTIONS] [INPUT]

mod encode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bitlist")]
#[command(about = "Encode comma-separated positions and ranges into a bitstring")]
struct Cli {
    #[command(flatten)]
    encode: encode::EncodeArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    let stdout = std::io::stdout();
    encode::run(&cli.encode, std::io::stdin().lock(), &mut stdout.lock())
}
