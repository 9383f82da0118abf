use crate::{
    apis::pages::{Page, PageRequest},
    common::DEFAULT_PAGE_SIZE,
    context::Context,
    response::{paginate, List},
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack payment pages APIs client.
#[derive(Clone, Debug)]
pub struct PagesApi {
    transport: Arc<Transport>,
}

impl PagesApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    #[tracing::instrument(name = "Create Page", skip(self, ctx, request))]
    pub async fn create(&self, ctx: &Context, request: &PageRequest) -> Result<Page, Error> {
        self.transport
            .call(ctx, Method::POST, "/page", RequestBody::json(request)?)
            .await
    }

    #[tracing::instrument(name = "Update Page", skip(self, ctx, request))]
    pub async fn update(
        &self,
        ctx: &Context,
        id_or_slug: &str,
        request: &PageRequest,
    ) -> Result<Page, Error> {
        self.transport
            .call(
                ctx,
                Method::PUT,
                &format!("/page/{}", encode(id_or_slug)),
                RequestBody::json(request)?,
            )
            .await
    }

    #[tracing::instrument(name = "Get Page", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, id_or_slug: &str) -> Result<Page, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/page/{}", encode(id_or_slug)),
                RequestBody::Empty,
            )
            .await
    }

    pub async fn list(&self, ctx: &Context) -> Result<List<Page>, Error> {
        self.list_n(ctx, DEFAULT_PAGE_SIZE, 0).await
    }

    #[tracing::instrument(name = "List Pages", skip(self, ctx))]
    pub async fn list_n(&self, ctx: &Context, count: u32, offset: u32) -> Result<List<Page>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &paginate("/page", count, offset),
                RequestBody::Empty,
            )
            .await
    }
}
