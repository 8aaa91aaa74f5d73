use poem::http::HeaderValue;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

/// The page only pulls the Bulma and Font Awesome stylesheets and posts the form back to itself.
const CONTENT_SECURITY_POLICY: &str = "default-src 'none'; \
    style-src https://cdn.jsdelivr.net https://cdnjs.cloudflare.com; \
    font-src https://cdnjs.cloudflare.com; \
    form-action 'self'; \
    frame-ancestors 'none'; \
    base-uri 'none'";

pub struct SecurityHeadersMiddleware;

impl<E: Endpoint> Middleware<E> for SecurityHeadersMiddleware {
    type Output = SecurityHeadersMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        SecurityHeadersMiddlewareImpl { ep }
    }
}

pub struct SecurityHeadersMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for SecurityHeadersMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let mut response = self.ep.call(request).await?.into_response();
        let headers = response.headers_mut();
        headers.remove("Server");
        headers.insert(
            "Content-Security-Policy",
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        );
        headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
        headers.insert("X-Frame-Options", HeaderValue::from_static("deny"));
        headers.insert("Referrer-Policy", HeaderValue::from_static("no-referrer"));
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::test::create_test_client;

    #[tokio::test]
    async fn page_headers_ok() {
        let response = create_test_client().get("/").send().await;
        response.assert_status_is_ok();
        response.assert_header("Content-Security-Policy", CONTENT_SECURITY_POLICY);
        response.assert_header("X-Content-Type-Options", "nosniff");
        response.assert_header("X-Frame-Options", "deny");
        response.assert_header("Referrer-Policy", "no-referrer");
    }

    #[tokio::test]
    async fn error_headers_ok() {
        let response = create_test_client().get("/unknown").send().await;
        response.assert_status(poem::http::StatusCode::NOT_FOUND);
        response.assert_header("X-Content-Type-Options", "nosniff");
    }
}
