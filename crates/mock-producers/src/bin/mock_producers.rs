//! Prints synthetic producers as a JSON array.
//!
//! The output matches the registry's create-request body, so it can be piped
//! into other tooling or used as a fixture.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use mock_producers::ProducerGenerator;

#[derive(Debug, Parser)]
#[command(name = "mock-producers", about = "Generate synthetic producer records")]
struct Args {
    /// Number of producers to generate.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=1000))]
    count: u16,
    /// RNG seed; omit for a random batch.
    #[arg(long)]
    seed: Option<u64>,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "mock-producers: {err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> io::Result<()> {
    let mut generator = args
        .seed
        .map_or_else(ProducerGenerator::from_entropy, ProducerGenerator::from_seed);
    let producers = generator.generate(usize::from(args.count));

    let mut out = io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &producers)?;
    } else {
        serde_json::to_writer(&mut out, &producers)?;
    }
    writeln!(out)
}
