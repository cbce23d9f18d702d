use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use miette::*;

use secret_entrance::{process_reader, DialConfig};

/// Counts how many times the dial resets through zero.
#[derive(Parser, Debug)]
#[command(name = "part1")]
struct Args {
    /// Puzzle input, one `L<n>` or `R<n>` instruction per line
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/input1.txt"))]
    input: PathBuf,

    /// Position the pointer starts at
    #[arg(long, default_value_t = DialConfig::DEFAULT_START)]
    start: u32,

    /// Number of positions on the dial
    #[arg(long, default_value_t = DialConfig::DEFAULT_SIZE)]
    size: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = DialConfig::new(args.size, args.start)?;
    let file = File::open(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to open {}", args.input.display()))?;

    let password = process_reader(BufReader::new(file), config)?;
    tracing::info!(
        instructions = password.instructions,
        zero_landings = password.zero_landings,
        final_position = password.final_position,
        "dial finished"
    );
    println!("{password}");
    Ok(())
}
