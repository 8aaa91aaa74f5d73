use poem::test::TestClient;
use poem::Endpoint;

use crate::predictor::tests::fixture_predictor;
use crate::prelude::*;
use crate::web::create_app;

pub fn create_test_client() -> TestClient<impl Endpoint> {
    TestClient::new(create_app(Arc::new(fixture_predictor())))
}
