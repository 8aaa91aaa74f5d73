use poem::http::Uri;
use poem::{Endpoint, Middleware, Request, Response, Result};

use crate::helpers::tracing::format_elapsed;
use crate::prelude::*;

/// Logs the request duration, health checks only at `debug`.
pub struct TimeItMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for TimeItMiddleware {
    type Output = TimeItMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        TimeItMiddlewareImpl { ep }
    }
}

pub struct TimeItMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for TimeItMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let start_instant = Instant::now();
        let response = self.ep.call(request).await;
        let elapsed = format_elapsed(start_instant);
        let status = response.as_ref().map(Response::status).ok();
        if is_health_check(&uri) {
            debug!(elapsed = elapsed.as_str(), ?method, ?status, "health");
        } else {
            info!(elapsed = elapsed.as_str(), ?method, ?uri, ?status);
        }
        response
    }
}

fn is_health_check(uri: &Uri) -> bool {
    uri.path() == "/health"
}
