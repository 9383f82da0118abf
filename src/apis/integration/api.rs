use crate::{
    apis::integration::Balance,
    context::Context,
    response::Response,
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack integration APIs client.
#[derive(Clone, Debug)]
pub struct IntegrationApi {
    transport: Arc<Transport>,
}

impl IntegrationApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Gets details about a card BIN (the first 6 digits of a card number).
    #[tracing::instrument(name = "Resolve Card BIN", skip(self, ctx))]
    pub async fn resolve_card_bin(&self, ctx: &Context, bin: &str) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/decision/bin/{}", encode(bin)),
                RequestBody::Empty,
            )
            .await
    }

    /// Gets the available balance of the integration, one entry per currency.
    #[tracing::instrument(name = "Check Balance", skip(self, ctx))]
    pub async fn check_balance(&self, ctx: &Context) -> Result<Vec<Balance>, Error> {
        self.transport
            .call_data_list(ctx, Method::GET, "/balance", RequestBody::Empty)
            .await
    }

    /// Gets the payment session timeout of the integration.
    #[tracing::instrument(name = "Get Payment Session Timeout", skip(self, ctx))]
    pub async fn get_session_timeout(&self, ctx: &Context) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                "/integration/payment_session_timeout",
                RequestBody::Empty,
            )
            .await
    }

    /// Updates the payment session timeout of the integration, in seconds.
    ///
    /// A timeout of `0` disables session timeouts.
    #[tracing::instrument(name = "Update Payment Session Timeout", skip(self, ctx))]
    pub async fn update_session_timeout(
        &self,
        ctx: &Context,
        timeout: u32,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::PUT,
                "/integration/payment_session_timeout",
                RequestBody::form([("timeout", timeout.to_string())]),
            )
            .await
    }
}
