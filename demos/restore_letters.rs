//! This example stores the four letter pictures of `demos/letters.txt` in a Hopfield network and
//! restores increasingly distorted copies of them. For every noise level, each letter is distorted
//! a number of times and counted as recalled when the network settles exactly on the original.
//!
//! The letters share many inactive pixels, so they are strongly correlated and recall degrades
//! much earlier than it would for random pictures of the same size.

use hopfield_rs::{
    io::{render::to_ascii, text::PatternReader},
    HopfieldNetwork, ImageShape, NetworkConfig,
};

const LETTERS: &str = include_str!("letters.txt");
const TRIALS_PER_LETTER: usize = 25;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Loading letters...");

    let shape = ImageShape::new(20, 10);
    let patterns = PatternReader::new(shape).parse(LETTERS)?;
    let config = NetworkConfig::new(shape).with_seed(42);
    let mut rng = config.rng();

    println!(
        "Training network with {} neurons on {} letters...",
        shape.len(),
        patterns.training().len()
    );

    let network = HopfieldNetwork::train(config, &patterns)?;

    for flips in [5, 10, 20, 30, 40, 60] {
        let mut recalled = 0;
        let mut attempts = 0;

        for letter in patterns.training() {
            for _ in 0..TRIALS_PER_LETTER {
                let noisy = letter.distort(flips, &mut rng);
                let reconstruction = network.reconstruct(&noisy, &mut rng)?;
                attempts += reconstruction.report.attempts;
                if &reconstruction.pattern == letter {
                    recalled += 1;
                }
            }
        }

        let total = patterns.training().len() * TRIALS_PER_LETTER;
        println!(
            "{:>2} flipped pixels: {:.2}% recalled ({} of {}), {} updates per picture",
            flips,
            100.0 * recalled as f32 / total as f32,
            recalled,
            total,
            attempts / total
        );
    }

    println!("Restoring the test pictures of the file...");

    for (input, output) in patterns
        .test()
        .iter()
        .zip(network.restore(&patterns, &mut rng)?)
    {
        print!("{}", to_ascii(input, shape));
        println!("became");
        print!("{}", to_ascii(&output.pattern, shape));
        println!();
    }

    Ok(())
}
