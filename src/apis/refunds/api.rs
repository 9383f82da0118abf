use crate::{
    apis::refunds::Refund,
    context::Context,
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Paystack refunds APIs client.
#[derive(Clone, Debug)]
pub struct RefundsApi {
    transport: Arc<Transport>,
}

impl RefundsApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Fully refunds the transaction with the given id.
    #[tracing::instrument(name = "Refund Transaction by ID", skip(self, ctx))]
    pub async fn refund_by_id(&self, ctx: &Context, transaction_id: u64) -> Result<Refund, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/refund",
                RequestBody::Json(json!({ "transaction": transaction_id })),
            )
            .await
    }

    /// Fully refunds the transaction with the given reference.
    #[tracing::instrument(name = "Refund Transaction by Reference", skip(self, ctx))]
    pub async fn refund_by_reference(
        &self,
        ctx: &Context,
        reference: &str,
    ) -> Result<Refund, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/refund",
                RequestBody::Json(json!({ "transaction": reference })),
            )
            .await
    }
}
