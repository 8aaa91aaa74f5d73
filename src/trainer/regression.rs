use nalgebra::{DMatrix, DVector};

use crate::dataset::{Features, TrainingRecord};
use crate::math::{dot, mean};
use crate::prelude::*;

/// Ordinary least squares linear model.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Regression {
    /// Intercept.
    pub bias: f64,

    /// One coefficient per feature, in the `Features::to_array` order.
    pub weights: [f64; Features::N],
}

impl Regression {
    /// Fits the model by minimising the sum of squared residuals.
    ///
    /// The features and the target get centred first, so that the intercept
    /// drops out of the least squares problem. The centred problem is solved
    /// with the SVD, which yields the minimum-norm solution when the design
    /// matrix is rank-deficient.
    #[instrument(level = "debug", skip_all, fields(n_records = records.len()))]
    pub fn fit(records: &[TrainingRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(anyhow!("training set is empty"));
        }

        let x_mean: Vec<f64> = (0..Features::N)
            .map(|j| mean(records.iter().map(|record| record.features.to_array()[j])))
            .collect();
        let y_mean = mean(records.iter().map(|record| record.price));

        let x = DMatrix::from_fn(records.len(), Features::N, |i, j| {
            records[i].features.to_array()[j] - x_mean[j]
        });
        let y = DVector::from_iterator(
            records.len(),
            records.iter().map(|record| record.price - y_mean),
        );

        let svd = x.svd(true, true);
        let eps = svd.singular_values.amax()
            * records.len().max(Features::N) as f64
            * f64::EPSILON;
        let solution = svd
            .solve(&y, eps)
            .map_err(|error| anyhow!("failed to solve the least squares problem: {}", error))?;

        let mut weights = [0.0; Features::N];
        weights.copy_from_slice(solution.as_slice());
        let bias = y_mean - dot(&weights, &x_mean);
        debug!(bias, ?weights);

        Ok(Self { bias, weights })
    }

    #[must_use]
    pub fn predict(&self, features: &Features) -> f64 {
        self.bias + dot(&self.weights, &features.to_array())
    }
}
