use poem::{Endpoint, Middleware, Request, Result};

/// Names the Sentry transaction after the route and tags the scope with the request.
pub struct SentryMiddleware;

impl<E: Endpoint> Middleware<E> for SentryMiddleware {
    type Output = SentryMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        SentryMiddlewareImpl { ep }
    }
}

pub struct SentryMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for SentryMiddlewareImpl<E> {
    type Output = E::Output;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let transaction = transaction_name(&request);
        sentry::configure_scope(|scope| {
            scope.set_transaction(Some(&transaction));
            scope.set_tag("request.method", request.method().as_str());
            scope.set_tag("request.path", request.uri().path());
            scope.set_tag("request.remote_addr", request.remote_addr());
            if let Some(content_type) = request.content_type() {
                scope.set_tag("request.content_type", content_type);
            }
        });
        self.ep.call(request).await
    }
}

/// For example, `POST /api/predict`.
fn transaction_name(request: &Request) -> String {
    format!("{} {}", request.method(), request.uri().path())
}
