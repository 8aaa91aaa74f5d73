//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::opts::parsers::{non_negative_f32, test_size};

pub mod parsers;

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Opts {
    /// Sentry DSN
    #[clap(short, long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance traces sample rate for Sentry
    #[clap(
        long,
        env = "TRACES_SAMPLE_RATE",
        default_value = "0",
        value_parser = non_negative_f32,
    )]
    pub traces_sample_rate: f32,

    #[clap(flatten)]
    pub fit: FitOpts,

    #[clap(flatten)]
    pub web: WebOpts,

    /// Fit the model, log the coefficients and exit without serving
    #[clap(long)]
    pub dry_run: bool,
}

#[derive(Args, Clone)]
pub struct FitOpts {
    /// Training dataset CSV path
    #[clap(
        short,
        long = "dataset",
        env = "PREDICTOR_DATASET",
        default_value = "Real_Estate.csv"
    )]
    pub dataset_path: PathBuf,

    /// Fraction of the dataset held out from training
    #[clap(long, default_value = "0.2", value_parser = test_size)]
    pub test_size: f64,

    /// Seed of the train/test partition
    #[clap(long, default_value = "42")]
    pub seed: u64,
}

#[derive(Args, Clone)]
pub struct WebOpts {
    /// Web application bind host
    #[clap(long, env = "PREDICTOR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Web application bind port
    #[clap(short, long, env = "PREDICTOR_PORT", default_value = "8080")]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_command_ok() {
        Opts::command().debug_assert();
    }

    #[test]
    fn defaults_ok() {
        let opts = Opts::parse_from(["real-estate-predictor"]);
        assert!(!opts.dry_run);
        assert!((opts.fit.test_size - 0.2).abs() < f64::EPSILON);
        assert_eq!(opts.fit.seed, 42);
    }

    #[test]
    fn overrides_ok() {
        let opts = Opts::parse_from([
            "real-estate-predictor",
            "--dataset",
            "houses.csv",
            "--port",
            "8081",
            "--seed",
            "7",
            "--dry-run",
        ]);
        assert!(opts.dry_run);
        assert_eq!(opts.fit.dataset_path, PathBuf::from("houses.csv"));
        assert_eq!(opts.fit.seed, 7);
        assert_eq!(opts.web.port, 8081);
    }

    #[test]
    fn invalid_test_size_fails() {
        assert!(Opts::try_parse_from(["real-estate-predictor", "--test-size", "1"]).is_err());
    }
}
