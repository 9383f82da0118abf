use crate::{
    apis::subscriptions::{Subscription, SubscriptionRequest},
    common::DEFAULT_PAGE_SIZE,
    context::Context,
    response::{paginate, List, Response},
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack subscriptions APIs client.
#[derive(Clone, Debug)]
pub struct SubscriptionsApi {
    transport: Arc<Transport>,
}

impl SubscriptionsApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Subscribes a customer to a plan.
    #[tracing::instrument(name = "Create Subscription", skip(self, ctx, request))]
    pub async fn create(
        &self,
        ctx: &Context,
        request: &SubscriptionRequest,
    ) -> Result<Subscription, Error> {
        self.transport
            .call(ctx, Method::POST, "/subscription", RequestBody::json(request)?)
            .await
    }

    /// Updates the subscription with the given id or code.
    #[tracing::instrument(name = "Update Subscription", skip(self, ctx, request))]
    pub async fn update(
        &self,
        ctx: &Context,
        id_or_code: &str,
        request: &SubscriptionRequest,
    ) -> Result<Subscription, Error> {
        self.transport
            .call(
                ctx,
                Method::PUT,
                &format!("/subscription/{}", encode(id_or_code)),
                RequestBody::json(request)?,
            )
            .await
    }

    /// Gets the details of a subscription by its id or code.
    #[tracing::instrument(name = "Get Subscription", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, id_or_code: &str) -> Result<Subscription, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/subscription/{}", encode(id_or_code)),
                RequestBody::Empty,
            )
            .await
    }

    /// Lists the first page of subscriptions.
    pub async fn list(&self, ctx: &Context) -> Result<List<Subscription>, Error> {
        self.list_n(ctx, DEFAULT_PAGE_SIZE, 0).await
    }

    /// Lists `count` subscriptions from page `offset`.
    #[tracing::instrument(name = "List Subscriptions", skip(self, ctx))]
    pub async fn list_n(
        &self,
        ctx: &Context,
        count: u32,
        offset: u32,
    ) -> Result<List<Subscription>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &paginate("/subscription", count, offset),
                RequestBody::Empty,
            )
            .await
    }

    /// Enables a subscription.
    #[tracing::instrument(name = "Enable Subscription", skip(self, ctx, email_token))]
    pub async fn enable(
        &self,
        ctx: &Context,
        subscription_code: &str,
        email_token: &str,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/subscription/enable",
                RequestBody::form([("code", subscription_code), ("token", email_token)]),
            )
            .await
    }

    /// Disables a subscription.
    #[tracing::instrument(name = "Disable Subscription", skip(self, ctx, email_token))]
    pub async fn disable(
        &self,
        ctx: &Context,
        subscription_code: &str,
        email_token: &str,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/subscription/disable",
                RequestBody::form([("code", subscription_code), ("token", email_token)]),
            )
            .await
    }
}
