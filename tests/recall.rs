use hopfield_rs::{
    io::{render::to_ascii, text::PatternReader},
    BinaryVector, ConvergencePolicy, HopfieldNetwork, ImageShape, NetworkConfig, NetworkState,
    PatternSet,
};
use rand::{rngs::StdRng, SeedableRng};

const LETTERS: &str = include_str!("../demos/letters.txt");

fn bipolar(values: &[i8]) -> BinaryVector {
    BinaryVector::from_bipolar(values.to_vec()).unwrap()
}

/// `count` balanced random pictures of `shape`.
fn random_pictures(shape: ImageShape, count: usize, seed: u64) -> Vec<BinaryVector> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = BinaryVector::from_bools(&vec![false; shape.len()]);
    (0..count)
        .map(|_| base.distort(shape.len() / 2, &mut rng))
        .collect()
}

#[test]
fn test_four_neuron_example() {
    let config = NetworkConfig::new(ImageShape::new(4, 1)).with_seed(99);
    let patterns = PatternSet::new(
        4,
        vec![bipolar(&[1, 1, -1, -1])],
        vec![bipolar(&[1, -1, -1, -1])],
    )
    .unwrap();

    let network = HopfieldNetwork::train(config, &patterns).unwrap();
    let weights = network.weights();
    assert_eq!(weights.get(0, 1), 1);
    assert_eq!(weights.get(0, 2), -1);
    assert_eq!(weights.get(0, 3), -1);
    assert_eq!(weights.get(1, 2), -1);
    assert_eq!(weights.get(1, 3), -1);
    assert_eq!(weights.get(2, 3), 1);

    let outputs = network.restore(&patterns, &mut config.rng()).unwrap();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].pattern, bipolar(&[1, 1, -1, -1]));
}

#[test]
fn test_noisy_pictures_are_recalled() {
    let shape = ImageShape::default();
    let stored = random_pictures(shape, 3, 1);
    let mut noise = StdRng::seed_from_u64(2);
    let test: Vec<_> = stored.iter().map(|p| p.distort(10, &mut noise)).collect();
    let patterns = PatternSet::new(shape.len(), stored.clone(), test).unwrap();

    for convergence in [
        ConvergencePolicy::Randomized { window_factor: 10 },
        ConvergencePolicy::FixedPoint,
    ] {
        let config = NetworkConfig::new(shape)
            .with_convergence(convergence)
            .with_seed(3);
        let network = HopfieldNetwork::train(config, &patterns).unwrap();
        let outputs = network.restore(&patterns, &mut config.rng()).unwrap();

        for (output, expected) in outputs.iter().zip(&stored) {
            assert_eq!(&output.pattern, expected);
            assert_eq!(output.report.flips, 10);
        }
    }
}

#[test]
fn test_test_order_does_not_matter() {
    let shape = ImageShape::new(10, 10);
    let stored = random_pictures(shape, 4, 7);
    let mut noise = StdRng::seed_from_u64(8);
    let a = stored[0].distort(25, &mut noise);
    let b = stored[2].distort(25, &mut noise);

    let config = NetworkConfig::new(shape).with_convergence(ConvergencePolicy::FixedPoint);
    let forward = PatternSet::new(shape.len(), stored.clone(), vec![a.clone(), b.clone()]).unwrap();
    let backward = PatternSet::new(shape.len(), stored, vec![b, a]).unwrap();
    let network = HopfieldNetwork::train(config, &forward).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let first = network.restore(&forward, &mut rng).unwrap();
    let second = network.restore(&backward, &mut rng).unwrap();

    assert_eq!(first[0], second[1]);
    assert_eq!(first[1], second[0]);
}

#[test]
fn test_test_order_does_not_matter_with_random_updates() {
    let shape = ImageShape::new(10, 10);
    let stored = random_pictures(shape, 3, 7);
    let mut noise = StdRng::seed_from_u64(9);
    let noisy: Vec<_> = stored.iter().map(|p| p.distort(10, &mut noise)).collect();

    let config = NetworkConfig::new(shape);
    assert_eq!(
        config.convergence,
        ConvergencePolicy::Randomized { window_factor: 10 }
    );
    let patterns = PatternSet::new(shape.len(), stored.clone(), vec![]).unwrap();
    let network = HopfieldNetwork::train(config, &patterns).unwrap();

    // Every picture gets a random source keyed to the picture, not to its position.
    let restore_in = |order: &[usize]| -> Vec<(usize, BinaryVector)> {
        let mut outputs: Vec<_> = order
            .iter()
            .map(|&k| {
                let mut rng = StdRng::seed_from_u64(100 + k as u64);
                let output = network.reconstruct(&noisy[k], &mut rng).unwrap();
                (k, output.pattern)
            })
            .collect();
        outputs.sort_by_key(|&(k, _)| k);
        outputs
    };

    let forward = restore_in(&[0, 1, 2]);
    assert_eq!(forward, restore_in(&[2, 1, 0]));
    assert_eq!(forward, restore_in(&[1, 2, 0]));

    // One shared random source through `restore`: draws differ, outputs do not.
    let backward_set =
        PatternSet::new(shape.len(), stored.clone(), noisy.iter().rev().cloned().collect())
            .unwrap();
    let stored_copy = stored.clone();
    let forward_set = PatternSet::new(shape.len(), stored, noisy).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let first = network.restore(&forward_set, &mut rng).unwrap();
    let second = network.restore(&backward_set, &mut rng).unwrap();
    for (k, output) in first.iter().enumerate() {
        assert_eq!(output.pattern, second[2 - k].pattern);
        assert_eq!(output.pattern, forward[k].1);
        assert_eq!(output.pattern, stored_copy[k]);
    }
}

#[test]
fn test_letters_file_settles_in_stable_states() {
    let shape = ImageShape::default();
    let patterns = PatternReader::new(shape).parse(LETTERS).unwrap();
    assert_eq!(patterns.training().len(), 4);
    assert_eq!(patterns.test().len(), 4);

    let config = NetworkConfig::new(shape)
        .with_convergence(ConvergencePolicy::FixedPoint)
        .with_seed(5);
    let network = HopfieldNetwork::train(config, &patterns).unwrap();
    let outputs = network.restore(&patterns, &mut config.rng()).unwrap();

    for output in &outputs {
        assert!(network.is_stable(&NetworkState::from_pattern(&output.pattern)));
        assert_eq!(to_ascii(&output.pattern, shape).lines().count(), shape.height);
    }
}
