use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use wincount_core::config::Config;
use wincount_core::BatchRunner;

#[derive(Parser)]
#[command(name = "wincount", about = "Counts disjoint in-range window sums per test case")]
struct Cli {
    /// Read the batch from a file instead of stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::new();
    config.input = cli.input;
    config.verbose = cli.verbose;

    let runner = BatchRunner::new(config.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            runner.run(BufReader::new(file), &mut out)?;
        }
        None => {
            let stdin = io::stdin();
            runner.run(stdin.lock(), &mut out)?;
        }
    }
    Ok(())
}
