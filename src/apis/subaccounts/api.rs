use crate::{
    apis::subaccounts::{SubAccount, SubAccountRequest},
    common::DEFAULT_PAGE_SIZE,
    context::Context,
    response::{paginate, List},
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack subaccounts APIs client.
#[derive(Clone, Debug)]
pub struct SubaccountsApi {
    transport: Arc<Transport>,
}

impl SubaccountsApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    #[tracing::instrument(name = "Create Subaccount", skip(self, ctx, request))]
    pub async fn create(
        &self,
        ctx: &Context,
        request: &SubAccountRequest,
    ) -> Result<SubAccount, Error> {
        self.transport
            .call(ctx, Method::POST, "/subaccount", RequestBody::json(request)?)
            .await
    }

    #[tracing::instrument(name = "Update Subaccount", skip(self, ctx, request))]
    pub async fn update(
        &self,
        ctx: &Context,
        id_or_code: &str,
        request: &SubAccountRequest,
    ) -> Result<SubAccount, Error> {
        self.transport
            .call(
                ctx,
                Method::PUT,
                &format!("/subaccount/{}", encode(id_or_code)),
                RequestBody::json(request)?,
            )
            .await
    }

    #[tracing::instrument(name = "Get Subaccount", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, id_or_code: &str) -> Result<SubAccount, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/subaccount/{}", encode(id_or_code)),
                RequestBody::Empty,
            )
            .await
    }

    pub async fn list(&self, ctx: &Context) -> Result<List<SubAccount>, Error> {
        self.list_n(ctx, DEFAULT_PAGE_SIZE, 1).await
    }

    #[tracing::instrument(name = "List Subaccounts", skip(self, ctx))]
    pub async fn list_n(
        &self,
        ctx: &Context,
        count: u32,
        offset: u32,
    ) -> Result<List<SubAccount>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &paginate("/subaccount", count, offset),
                RequestBody::Empty,
            )
            .await
    }
}
