use poem::http::StatusCode;
use poem::web::{Data, Json};
use poem::{handler, IntoResponse, Response};
use serde::Serialize;

use crate::predictor::{PredictionRequest, Predictor};
use crate::prelude::*;

const CACHE_CONTROL: &str = "no-cache";

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_health() -> Result<impl IntoResponse> {
    Ok(Response::from(StatusCode::NO_CONTENT).with_header("Cache-Control", CACHE_CONTROL))
}

#[derive(Serialize)]
#[serde(untagged)]
enum PredictResponse {
    Predicted { price: f64, text: String },
    Invalid { error: String },
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post_predict(
    Json(request): Json<PredictionRequest>,
    Data(predictor): Data<&Arc<Predictor>>,
) -> Response {
    match predictor.predict(&request) {
        Ok(prediction) => Json(PredictResponse::Predicted {
            price: prediction.0,
            text: prediction.to_string(),
        })
        .into_response(),
        Err(error) => {
            debug!(?request, "incomplete request");
            Json(PredictResponse::Invalid {
                error: error.to_string(),
            })
            .with_status(StatusCode::UNPROCESSABLE_ENTITY)
            .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::{json, Value};

    use crate::prelude::*;
    use crate::web::test::create_test_client;

    #[tokio::test]
    async fn get_health_ok() {
        let response = create_test_client().get("/health").send().await;
        response.assert_status(StatusCode::NO_CONTENT);
        response.assert_header("Cache-Control", "no-cache");
    }

    #[tokio::test]
    async fn post_predict_ok() -> Result {
        let response = create_test_client()
            .post("/api/predict")
            .body_json(&json!({
                "distance": 84,
                "store_count": 10,
                "latitude": 24.98,
                "longitude": 121.54,
            }))
            .send()
            .await;
        response.assert_status_is_ok();
        let body: Value = serde_json::from_str(&response.0.into_body().into_string().await?)?;
        assert_eq!(body["text"], "Predicted House Price of Unit Area: 173.49");
        assert!((body["price"].as_f64().unwrap() - 173.49).abs() < 1e-6);
        Ok(())
    }

    #[tokio::test]
    async fn post_predict_missing_value_fails() -> Result {
        let response = create_test_client()
            .post("/api/predict")
            .body_json(&json!({"distance": 84, "store_count": 10, "longitude": 121.54}))
            .send()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_str(&response.0.into_body().into_string().await?)?;
        assert_eq!(body, json!({"error": "Please enter all the values to make a prediction."}));
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_fails() {
        let response = create_test_client().get("/api/unknown").send().await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
