use crate::{
    apis::plans::{Plan, PlanRequest},
    common::DEFAULT_PAGE_SIZE,
    context::Context,
    response::{paginate, List, Response},
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack plans APIs client.
#[derive(Clone, Debug)]
pub struct PlansApi {
    transport: Arc<Transport>,
}

impl PlansApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Creates a new plan.
    #[tracing::instrument(name = "Create Plan", skip(self, ctx, request))]
    pub async fn create(&self, ctx: &Context, request: &PlanRequest) -> Result<Plan, Error> {
        self.transport
            .call(ctx, Method::POST, "/plan", RequestBody::json(request)?)
            .await
    }

    /// Updates the plan with the given id or code.
    #[tracing::instrument(name = "Update Plan", skip(self, ctx, request))]
    pub async fn update(
        &self,
        ctx: &Context,
        id_or_code: &str,
        request: &PlanRequest,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::PUT,
                &format!("/plan/{}", encode(id_or_code)),
                RequestBody::json(request)?,
            )
            .await
    }

    /// Gets the details of a plan by its id or code.
    #[tracing::instrument(name = "Get Plan", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, id_or_code: &str) -> Result<Plan, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/plan/{}", encode(id_or_code)),
                RequestBody::Empty,
            )
            .await
    }

    /// Lists the first page of plans.
    pub async fn list(&self, ctx: &Context) -> Result<List<Plan>, Error> {
        self.list_n(ctx, DEFAULT_PAGE_SIZE, 0).await
    }

    /// Lists `count` plans from page `offset`.
    #[tracing::instrument(name = "List Plans", skip(self, ctx))]
    pub async fn list_n(&self, ctx: &Context, count: u32, offset: u32) -> Result<List<Plan>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &paginate("/plan", count, offset),
                RequestBody::Empty,
            )
            .await
    }
}
