use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Middleware logging every outgoing request line and body.
///
/// Only installed when logging is enabled on the client. Headers are never logged.
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        tracing::info!(
            method = %req.method(),
            host = req.url().host_str().unwrap_or_default(),
            path = req.url().path(),
            "Requesting"
        );

        if let Some(body) = req.body().and_then(|b| b.as_bytes()) {
            tracing::debug!(body = %String::from_utf8_lossy(body), "Request data");
        }

        next.run(req, extensions).await
    }
}
