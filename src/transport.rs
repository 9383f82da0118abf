//! Shared HTTP layer used by every Paystack API client.
//!
//! A [`Transport`] performs exactly one round trip per call: there are no automatic retries on
//! any kind of failure. Transport-level errors and canceled contexts short-circuit before any
//! decoding takes place; everything else goes through [`Envelope`] to be classified and decoded.

use crate::{
    context::Context,
    middlewares::{
        authentication::AuthenticationMiddleware, inject_user_agent::InjectUserAgentMiddleware,
        logging::LoggingMiddleware,
    },
    response::Envelope,
    Error,
};
use reqwest::Method;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use secrecy::SecretString;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt::{Debug, Formatter};

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body at all.
    Empty,
    /// JSON body, sent with `Content-Type: application/json`.
    Json(Value),
    /// Form-encoded key/value pairs.
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Encodes `body` as a JSON request body.
    pub fn json<T: Serialize + ?Sized>(body: &T) -> Result<Self, Error> {
        Ok(RequestBody::Json(serde_json::to_value(body)?))
    }

    /// Builds a form-encoded request body, keeping the order of `pairs`.
    pub fn form<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        RequestBody::Form(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Authenticated HTTP transport shared by all the API clients built from the same
/// [`PaystackClient`](crate::PaystackClient).
///
/// A transport holds no per-call state and can be used concurrently from multiple tasks.
pub struct Transport {
    client: ClientWithMiddleware,
    base_url: String,
    logging_enabled: bool,
}

impl Debug for Transport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("logging_enabled", &self.logging_enabled)
            .finish_non_exhaustive()
    }
}

impl Transport {
    pub(crate) fn new(
        api_key: SecretString,
        http_client: reqwest::Client,
        base_url: String,
        logging_enabled: bool,
    ) -> Self {
        let mut builder =
            reqwest_middleware::ClientBuilder::new(http_client).with(TracingMiddleware::default());

        if logging_enabled {
            builder = builder.with(LoggingMiddleware);
        }

        let client = builder
            .with(InjectUserAgentMiddleware::new())
            .with(AuthenticationMiddleware { api_key })
            .build();

        Self {
            client,
            base_url,
            logging_enabled,
        }
    }

    /// Base URL every request path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests and responses are logged.
    pub fn logging_enabled(&self) -> bool {
        self.logging_enabled
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends one request and returns the successful response envelope.
    ///
    /// `path` is relative to the base URL and may already contain a query string.
    /// Envelopes with `"status": false` or an HTTP status `>= 400` are turned into
    /// [`Error::ApiError`].
    pub async fn execute(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Envelope, Error> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }

        let request = self.client.request(method, self.url(path));
        let request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(ref json) => request.json(json),
            RequestBody::Form(ref pairs) => request.form(pairs),
        };

        let round_trip = async {
            let response = request.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, Error>((status, bytes))
        };

        let (status, bytes) = tokio::select! {
            res = round_trip => res?,
            err = ctx.done() => return Err(err),
        };

        let envelope = Envelope::parse(status, &bytes);

        if self.logging_enabled {
            if envelope.is_failure() {
                tracing::error!(status = status.as_u16(), response = ?envelope.raw(), "Paystack error");
            } else {
                tracing::info!(response = ?envelope.raw(), "Paystack response");
            }
        }

        Ok(envelope.error_for_status()?)
    }

    /// Sends one request and decodes the payload of its envelope into `T`.
    ///
    /// See [`Envelope::decode`] for how the payload is located.
    pub async fn call<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<T, Error> {
        let envelope = self.execute(ctx, method, path, body).await?;
        Ok(envelope.decode()?)
    }

    /// Sends one request and decodes the `data` array of its envelope into a list of `T`.
    pub async fn call_data_list<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Vec<T>, Error> {
        let envelope = self.execute(ctx, method, path, body).await?;
        Ok(envelope.decode_data_list()?)
    }
}
