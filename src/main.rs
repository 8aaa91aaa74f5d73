#![warn(clippy::all)]

use clap::{crate_name, crate_version, Parser};

use crate::opts::Opts;
use crate::predictor::Predictor;
use crate::prelude::*;

mod dataset;
mod helpers;
mod math;
mod opts;
mod predictor;
mod prelude;
mod trainer;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = helpers::tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    info!(name = crate_name!(), version = crate_version!(), "starting…");

    let result = run(opts).await;
    if let Err(error) = &result {
        error!("fatal error: {:#}", error);
    }
    result
}

async fn run(opts: Opts) -> Result {
    let regression = trainer::run(&opts.fit)?;
    if opts.dry_run {
        return Ok(());
    }
    web::run(&opts.web, Arc::new(Predictor::new(regression))).await
}
