use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::CatchPanic;
use poem::{get, post, Endpoint, EndpointExt, Route, Server};

use crate::opts::WebOpts;
use crate::predictor::Predictor;
use crate::prelude::*;
use crate::web::middleware::{
    ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware, TimeItMiddleware,
};

mod middleware;
mod partials;
mod views;

#[cfg(test)]
mod test;

pub fn create_app(predictor: Arc<Predictor>) -> impl Endpoint {
    Route::new()
        .at("/", get(views::index::get).post(views::index::post))
        .at("/health", get(views::api::get_health))
        .at("/api/predict", post(views::api::post_predict))
        .data(predictor)
        .with(ErrorMiddleware)
        .with(CatchPanic::new())
        .with(TimeItMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
}

#[instrument(skip_all, fields(host = opts.host.as_str(), port = opts.port))]
pub async fn run(opts: &WebOpts, predictor: Arc<Predictor>) -> Result {
    let regression = predictor.regression();
    info!(bias = regression.bias, weights = ?regression.weights, "serving the model");
    let app = create_app(predictor);
    let listener = TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port));
    info!("listening…");
    Server::new(listener)
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
            Some(StdDuration::from_secs(5)),
        )
        .await
        .context("the web server has failed")?;
    info!("stopped");
    Ok(())
}
