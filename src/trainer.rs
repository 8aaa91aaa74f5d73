//! Fits the model once at startup.

use crate::dataset::{Dataset, TrainingRecord};
use crate::helpers::tracing::format_elapsed;
use crate::opts::FitOpts;
use crate::prelude::*;
use crate::trainer::loss::RmseLoss;
use crate::trainer::regression::Regression;
use crate::trainer::split::train_test_split;

pub mod loss;
pub mod regression;
pub mod split;

/// Loads the dataset and fits the model on its training part.
#[instrument(level = "info", skip_all, fields(path = %opts.dataset_path.display()))]
pub fn run(opts: &FitOpts) -> Result<Regression> {
    let start_instant = Instant::now();
    let dataset = Dataset::load(&opts.dataset_path).context("failed to load the dataset")?;
    let regression = fit(&dataset.records, opts.test_size, opts.seed)?;
    info!(elapsed = format_elapsed(start_instant).as_str(), "ready");
    Ok(regression)
}

pub fn fit(records: &[TrainingRecord], test_size: f64, seed: u64) -> Result<Regression> {
    let split = train_test_split(records, test_size, seed);
    let regression = Regression::fit(&split.train).context("failed to fit the model")?;
    info!(
        n_train = split.train.len(),
        n_test = split.test.len(),
        train_rmse = score(&regression, &split.train),
        test_rmse = score(&regression, &split.test),
        bias = regression.bias,
        weights = ?regression.weights,
        "fitted",
    );
    Ok(regression)
}

fn score(regression: &Regression, records: &[TrainingRecord]) -> f64 {
    let mut loss = RmseLoss::default();
    for record in records {
        loss.push_sample(regression.predict(&record.features), record.price);
    }
    loss.finalise()
}
