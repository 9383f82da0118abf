use crate::{
    common::DEFAULT_PAGE_SIZE,
    context::Context,
    response::{paginate, List, Response},
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;

/// Paystack settlements APIs client.
///
/// Settlements are returned as raw [`Response`] maps.
#[derive(Clone, Debug)]
pub struct SettlementsApi {
    transport: Arc<Transport>,
}

impl SettlementsApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Lists the first page of settlements.
    pub async fn list(&self, ctx: &Context) -> Result<List<Response>, Error> {
        self.list_n(ctx, DEFAULT_PAGE_SIZE, 0).await
    }

    /// Lists `count` settlements from page `offset`.
    #[tracing::instrument(name = "List Settlements", skip(self, ctx))]
    pub async fn list_n(
        &self,
        ctx: &Context,
        count: u32,
        offset: u32,
    ) -> Result<List<Response>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &paginate("/settlement", count, offset),
                RequestBody::Empty,
            )
            .await
    }
}
