use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub struct Split<T> {
    pub train: Vec<T>,

    /// Held-out part, only scored.
    pub test: Vec<T>,
}

/// Shuffles the indices with the seeded generator
/// and holds out the first `ceil(n * test_size)` of them.
#[must_use]
pub fn train_test_split<T: Clone>(items: &[T], test_size: f64, seed: u64) -> Split<T> {
    debug_assert!(test_size > 0.0 && test_size < 1.0);

    let n_test = ((items.len() as f64 * test_size).ceil() as usize).min(items.len());
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));
    let (test_indices, train_indices) = indices.split_at(n_test);

    Split {
        train: train_indices.iter().map(|&i| items[i].clone()).collect(),
        test: test_indices.iter().map(|&i| items[i].clone()).collect(),
    }
}
