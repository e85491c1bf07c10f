use std::{path::PathBuf, process};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

/// Downsample PacBio reads in FASTA format by keeping 75% of the ZMWs, chosen at random.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// FASTA file of PacBio reads, with the ZMW as the second `/`-separated field of each header.
    #[arg(short = 'f', long = "fasta", value_name = "FILE")]
    fasta: PathBuf,

    /// Output file [default: ./<PREFIX>_downsampled.fa.gz].
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Random seed for reproducible sampling.
    #[arg(short = 's', long = "seed", value_name = "INT")]
    seed: Option<u64>,
}

fn downsample_fasta(args: &Args) -> downsample_fa::Result<()> {
    let output = args.output.clone().unwrap_or_else(|| downsample_fa::output_path(&args.fasta));
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let summary = downsample_fa::run(&args.fasta, &output, &mut rng)?;
    log::debug!("{:?}", summary);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = downsample_fasta(&args) {
        log::error!("{}", e);
        process::exit(1);
    }
}
