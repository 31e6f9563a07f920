//! Random train/test partitioning of a loaded frame.

use crate::data::frame::DataFrame;
use crate::error::PipelineError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Randomly partition `frame` into disjoint `(train, test)` frames.
///
/// The test set gets `ceil(test_fraction * rows)` rows and the training set
/// the remainder, so together they always cover the input exactly. Rows come
/// out in shuffled order. Pass a seed for a reproducible partition.
pub fn train_test_split(
    frame: &DataFrame,
    test_fraction: f64,
    seed: Option<u64>,
) -> Result<(DataFrame, DataFrame), PipelineError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(PipelineError::dataset(format!(
            "test_fraction must be within (0, 1), got {test_fraction}"
        )));
    }
    let n = frame.row_count();
    if n == 0 {
        return Err(PipelineError::dataset("no rows to split"));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    match seed {
        Some(value) => indices.shuffle(&mut StdRng::seed_from_u64(value)),
        None => indices.shuffle(&mut rand::thread_rng()),
    }

    let n_test = (test_fraction * n as f64).ceil() as usize;
    let (test_indices, train_indices) = indices.split_at(n_test);

    Ok((
        frame.select_rows(train_indices),
        frame.select_rows(test_indices),
    ))
}
