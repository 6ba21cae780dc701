//! `dicesum` prints the exact distribution of the sum of a number of dice.
//!
//! Run with: `RUST_LOG=info cargo run --release -- 6 4 10 100`
use clap::Parser;
use dicesum::{batch, distribution::Engine};
use itertools::Itertools;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exact distribution of the sum of `num` dice with `faces` faces each.
#[derive(Parser, Debug)]
#[command(name = "dicesum", version, about, allow_negative_numbers = true)]
struct Args {
  /// Number of faces on each die
  faces: i64,

  /// Number of dice; several values are computed in parallel
  #[arg(required = true)]
  num: Vec<i64>,

  /// Engine used to compute the counts (array, stream, naive, squaring)
  #[arg(long, default_value_t = Engine::Array)]
  engine: Engine,

  /// Print only the largest count
  #[arg(long, conflicts_with = "half")]
  peak: bool,

  /// Print only the sums up to the middle of the distribution
  #[arg(long)]
  half: bool,
}

fn main() -> ExitCode {
  let _ = tracing_subscriber::fmt()
    .with_target(false)
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();

  let args = Args::parse();
  let requests = args.num.iter().map(|&num| (args.faces, num)).collect_vec();
  info!(faces = args.faces, requests = requests.len(), engine = %args.engine, "dicesum");

  let mut status = ExitCode::SUCCESS;
  for ((faces, num), result) in requests.iter().zip(batch::distributions(&requests, args.engine)) {
    match result {
      Ok(dist) if args.peak => println!("{num}d{faces}\t{}", dist.max()),
      Ok(dist) if args.half => {
        println!("# {num}d{faces}");
        for (sum, count) in dist.iter().take(dist.half().len()) {
          println!("{sum}\t{count}");
        }
      }
      Ok(dist) => {
        println!("# {num}d{faces}");
        print!("{dist}");
      }
      Err(e) => {
        eprintln!("{num}d{faces}: {e}");
        status = ExitCode::FAILURE;
      }
    }
  }
  status
}
