use crate::{
    apis::bulk_charges::{BulkChargeBatch, BulkChargeItem},
    common::DEFAULT_PAGE_SIZE,
    context::Context,
    response::{paginate, List, Response},
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack bulk charges APIs client.
#[derive(Clone, Debug)]
pub struct BulkChargesApi {
    transport: Arc<Transport>,
}

impl BulkChargesApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Queues a new batch of charges.
    #[tracing::instrument(
        name = "Initiate Bulk Charge",
        skip(self, ctx, items),
        fields(items = items.len())
    )]
    pub async fn initiate(
        &self,
        ctx: &Context,
        items: &[BulkChargeItem],
    ) -> Result<BulkChargeBatch, Error> {
        self.transport
            .call(ctx, Method::POST, "/bulkcharge", RequestBody::json(items)?)
            .await
    }

    /// Lists the first page of bulk charge batches.
    pub async fn list(&self, ctx: &Context) -> Result<List<BulkChargeBatch>, Error> {
        self.list_n(ctx, DEFAULT_PAGE_SIZE, 0).await
    }

    /// Lists `count` bulk charge batches from page `offset`.
    #[tracing::instrument(name = "List Bulk Charge Batches", skip(self, ctx))]
    pub async fn list_n(
        &self,
        ctx: &Context,
        count: u32,
        offset: u32,
    ) -> Result<List<BulkChargeBatch>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &paginate("/bulkcharge", count, offset),
                RequestBody::Empty,
            )
            .await
    }

    /// Gets a bulk charge batch by its id or code.
    #[tracing::instrument(name = "Get Bulk Charge Batch", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, id_or_code: &str) -> Result<BulkChargeBatch, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/bulkcharge/{}", encode(id_or_code)),
                RequestBody::Empty,
            )
            .await
    }

    /// Gets the charges of a bulk charge batch.
    #[tracing::instrument(name = "Get Bulk Charge Batch Charges", skip(self, ctx))]
    pub async fn get_batch_charges(
        &self,
        ctx: &Context,
        id_or_code: &str,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/bulkcharge/{}/charges", encode(id_or_code)),
                RequestBody::Empty,
            )
            .await
    }

    /// Stops processing a batch.
    #[tracing::instrument(name = "Pause Bulk Charge Batch", skip(self, ctx))]
    pub async fn pause(&self, ctx: &Context, batch_code: &str) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/bulkcharge/pause/{}", encode(batch_code)),
                RequestBody::Empty,
            )
            .await
    }

    /// Resumes processing a paused batch.
    #[tracing::instrument(name = "Resume Bulk Charge Batch", skip(self, ctx))]
    pub async fn resume(&self, ctx: &Context, batch_code: &str) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/bulkcharge/resume/{}", encode(batch_code)),
                RequestBody::Empty,
            )
            .await
    }
}
