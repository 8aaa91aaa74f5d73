//! Answers the prediction requests with the fitted model.

use std::fmt::{Display, Formatter};

use serde::Deserialize;
use thiserror::Error;

use crate::dataset::Features;
use crate::prelude::*;
use crate::trainer::regression::Regression;

/// Immutable after construction, share it with `Arc`.
pub struct Predictor {
    regression: Regression,
}

impl Predictor {
    #[must_use]
    pub const fn new(regression: Regression) -> Self {
        Self { regression }
    }

    #[must_use]
    pub const fn regression(&self) -> &Regression {
        &self.regression
    }

    pub fn predict(&self, request: &PredictionRequest) -> StdResult<Prediction, ValidationError> {
        let features = request.features().ok_or(ValidationError)?;
        Ok(Prediction(self.regression.predict(&features)))
    }
}

/// User input, any of the values may be absent.
#[derive(Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct PredictionRequest {
    /// Distance to the nearest transit station, metres.
    #[serde(default, deserialize_with = "crate::helpers::serde::deserialize_optional_f64")]
    pub distance: Option<f64>,

    /// Number of convenience stores nearby.
    #[serde(default, deserialize_with = "crate::helpers::serde::deserialize_optional_f64")]
    pub store_count: Option<f64>,

    #[serde(default, deserialize_with = "crate::helpers::serde::deserialize_optional_f64")]
    pub latitude: Option<f64>,

    #[serde(default, deserialize_with = "crate::helpers::serde::deserialize_optional_f64")]
    pub longitude: Option<f64>,
}

impl PredictionRequest {
    #[must_use]
    pub fn features(&self) -> Option<Features> {
        Some(Features {
            distance_to_station: self.distance?,
            n_convenience_stores: self.store_count?,
            latitude: self.latitude?,
            longitude: self.longitude?,
        })
    }
}

/// Predicted house price of unit area.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Prediction(pub f64);

impl Display for Prediction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Predicted House Price of Unit Area: {:.2}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("Please enter all the values to make a prediction.")]
pub struct ValidationError;

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::trainer::regression::tests::exact_records;

    /// Model fitted on the noiseless table
    /// `price = 3 + 2 * distance - store_count + 0.5 * latitude`.
    pub fn fixture_predictor() -> Predictor {
        let regression = Regression::fit(&exact_records()).expect("the table is well-conditioned");
        Predictor::new(regression)
    }

    const SCENARIO_A: PredictionRequest = PredictionRequest {
        distance: Some(84.0),
        store_count: Some(10.0),
        latitude: Some(24.98),
        longitude: Some(121.54),
    };

    #[test]
    fn predict_ok() -> Result {
        let prediction = fixture_predictor().predict(&SCENARIO_A)?;
        // 3 + 168 - 10 + 12.49
        assert!((prediction.0 - 173.49).abs() < 1e-6, "{:?}", prediction);
        assert_eq!(prediction.to_string(), "Predicted House Price of Unit Area: 173.49");
        Ok(())
    }

    #[test]
    fn missing_value_fails() {
        let request = PredictionRequest {
            latitude: None,
            ..SCENARIO_A
        };
        let error = fixture_predictor().predict(&request).unwrap_err();
        assert_eq!(error.to_string(), "Please enter all the values to make a prediction.");
    }

    #[test]
    fn empty_request_fails() {
        let predictor = fixture_predictor();
        assert_eq!(predictor.predict(&PredictionRequest::default()), Err(ValidationError));
        assert_eq!(predictor.regression(), fixture_predictor().regression());
    }

    #[test]
    fn two_decimals_ok() {
        assert_eq!(Prediction(37.9).to_string(), "Predicted House Price of Unit Area: 37.90");
        assert_eq!(Prediction(-1.005).to_string(), "Predicted House Price of Unit Area: -1.00");
        assert_eq!(Prediction(0.0).to_string(), "Predicted House Price of Unit Area: 0.00");
    }

    #[test]
    fn repeated_requests_are_identical_ok() -> Result {
        let predictor = fixture_predictor();
        let first = predictor.predict(&SCENARIO_A)?;
        for _ in 0..10 {
            assert_eq!(predictor.predict(&SCENARIO_A)?, first);
        }
        Ok(())
    }

    #[test]
    fn deserialize_form_ok() -> Result {
        let request: PredictionRequest = serde_json::from_str(
            // language=JSON
            r#"{"distance": "84", "store_count": 10, "latitude": "", "longitude": 121.54}"#,
        )?;
        assert_eq!(
            request,
            PredictionRequest {
                latitude: None,
                ..SCENARIO_A
            },
        );
        Ok(())
    }
}
