//! Restores distorted pictures with a Hopfield network.
//!
//! Reads a pattern file (training pictures, a `---` line, then test pictures), stores the
//! training pictures and prints every test picture next to its reconstruction.
//!
//! ```bash
//! cargo run --release --bin hopfield -- demos/letters.txt --seed 42
//! cargo run --release --bin hopfield -- demos/letters.txt --policy fixed-point --noise 30
//! cat demos/letters.txt | cargo run --release --bin hopfield -- --png-dir out/
//! ```

use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hopfield_rs::{
    io::{
        render::{to_ascii, to_image},
        text::PatternReader,
    },
    BinaryVector, ConvergencePolicy, HopfieldNetwork, ImageShape, NetworkConfig, PatternSet,
};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum Policy {
    /// Random neuron order, converged after a quiet window.
    #[default]
    Randomized,
    /// Index-order sweeps until nothing changes.
    FixedPoint,
}

/// Hopfield associative-memory picture restoration.
#[derive(Parser, Debug)]
#[command(name = "hopfield")]
#[command(about = "Store binary pictures and restore distorted copies of them")]
struct Args {
    /// Pattern file. Reads standard input when omitted.
    input: Option<PathBuf>,

    /// Picture width in glyphs.
    #[arg(long, default_value = "20")]
    width: usize,

    /// Picture height in rows.
    #[arg(long, default_value = "10")]
    height: usize,

    /// Convergence policy.
    #[arg(short, long, value_enum, default_value_t = Policy::Randomized)]
    policy: Policy,

    /// Quiet window of the randomized policy, in multiples of the neuron count.
    #[arg(long, default_value = "10")]
    window_factor: usize,

    /// Seed for neuron selection and noise. Random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also restore a copy of every training picture with this many pixels flipped.
    #[arg(short, long)]
    noise: Option<usize>,

    /// Write every reconstruction as a PNG into this directory.
    #[arg(long)]
    png_dir: Option<PathBuf>,

    /// Pixel size of the PNG output.
    #[arg(long, default_value = "8")]
    scale: u32,

    /// Print the weight matrix after training.
    #[arg(long)]
    dump_weights: bool,
}

impl Args {
    fn config(&self) -> NetworkConfig {
        let convergence = match self.policy {
            Policy::Randomized => ConvergencePolicy::Randomized {
                window_factor: self.window_factor,
            },
            Policy::FixedPoint => ConvergencePolicy::FixedPoint,
        };
        let config = NetworkConfig::new(ImageShape::new(self.width, self.height))
            .with_convergence(convergence);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn read_patterns(args: &Args, shape: ImageShape) -> Result<PatternSet> {
    let reader = PatternReader::new(shape);
    match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            reader
                .read(BufReader::new(file))
                .with_context(|| format!("reading patterns from {}", path.display()))
        }
        None => reader
            .read(io::stdin().lock())
            .context("reading patterns from standard input"),
    }
}

/// Index and distance of the training picture closest to `pattern`.
fn closest_training(patterns: &PatternSet, pattern: &BinaryVector) -> Option<(usize, usize)> {
    patterns
        .training()
        .iter()
        .map(|stored| stored.hamming(pattern))
        .enumerate()
        .min_by_key(|&(_, distance)| distance)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();
    let shape = config.shape;
    let mut rng = config.rng();

    let mut patterns = read_patterns(&args, shape)?;
    if let Some(flips) = args.noise {
        let mut test = patterns.test().to_vec();
        test.extend(
            patterns
                .training()
                .iter()
                .map(|stored| stored.distort(flips, &mut rng)),
        );
        patterns = PatternSet::new(shape.len(), patterns.training().to_vec(), test)?;
    }

    info!(
        "Loaded {} training and {} test pictures of {}x{}",
        patterns.training().len(),
        patterns.test().len(),
        shape.width,
        shape.height
    );

    let network = HopfieldNetwork::train(config, &patterns)?;
    if args.dump_weights {
        print!("{}", network.weights());
    }

    let reconstructions = network.restore(&patterns, &mut rng)?;

    if let Some(dir) = &args.png_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    for (index, (input, output)) in patterns.test().iter().zip(&reconstructions).enumerate() {
        println!("Test picture {}:", index);
        print!("{}", to_ascii(input, shape));
        println!("Restored ({} flips, {} updates):", output.report.flips, output.report.attempts);
        print!("{}", to_ascii(&output.pattern, shape));

        match closest_training(&patterns, &output.pattern) {
            Some((stored, 0)) => println!("Matches training picture {}", stored),
            Some((stored, distance)) => println!(
                "Closest to training picture {} ({} pixels differ)",
                stored, distance
            ),
            None => println!("No training pictures to compare against"),
        }
        println!();

        if let Some(dir) = &args.png_dir {
            let path = dir.join(format!("restored_{:03}.png", index));
            to_image(&output.pattern, shape, args.scale)
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    info!("Restored {} pictures", reconstructions.len());

    Ok(())
}
