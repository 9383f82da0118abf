use crate::{
    apis::customers::{
        CreateCustomerRequest, Customer, RiskAction, UpdateCustomerRequest,
        ValidateCustomerRequest,
    },
    common::DEFAULT_PAGE_SIZE,
    context::Context,
    response::{paginate, List, Response},
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack customers APIs client.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    transport: Arc<Transport>,
}

impl CustomersApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Creates a new customer.
    #[tracing::instrument(name = "Create Customer", skip(self, ctx, request))]
    pub async fn create(
        &self,
        ctx: &Context,
        request: &CreateCustomerRequest,
    ) -> Result<Customer, Error> {
        self.transport
            .call(ctx, Method::POST, "/customer", RequestBody::json(request)?)
            .await
    }

    /// Updates the customer with the given id or code.
    #[tracing::instrument(name = "Update Customer", skip(self, ctx, request))]
    pub async fn update(
        &self,
        ctx: &Context,
        id_or_code: &str,
        request: &UpdateCustomerRequest,
    ) -> Result<Customer, Error> {
        self.transport
            .call(
                ctx,
                Method::PUT,
                &format!("/customer/{}", encode(id_or_code)),
                RequestBody::json(request)?,
            )
            .await
    }

    /// Gets the details of a customer by email or customer code.
    #[tracing::instrument(name = "Get Customer", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, customer_code: &str) -> Result<Customer, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/customer/{}", encode(customer_code)),
                RequestBody::Empty,
            )
            .await
    }

    /// Lists the first page of customers.
    pub async fn list(&self, ctx: &Context) -> Result<List<Customer>, Error> {
        self.list_n(ctx, DEFAULT_PAGE_SIZE, 0).await
    }

    /// Lists `count` customers from page `offset`.
    #[tracing::instrument(name = "List Customers", skip(self, ctx))]
    pub async fn list_n(
        &self,
        ctx: &Context,
        count: u32,
        offset: u32,
    ) -> Result<List<Customer>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &paginate("/customer", count, offset),
                RequestBody::Empty,
            )
            .await
    }

    /// Whitelists or blacklists a customer.
    #[tracing::instrument(name = "Set Customer Risk Action", skip(self, ctx))]
    pub async fn set_risk_action(
        &self,
        ctx: &Context,
        customer_code: &str,
        risk_action: RiskAction,
    ) -> Result<Customer, Error> {
        let body = json!({
            "customer": customer_code,
            "risk_action": risk_action,
        });

        self.transport
            .call(
                ctx,
                Method::POST,
                "/customer/set_risk_action",
                RequestBody::Json(body),
            )
            .await
    }

    /// Deactivates an authorization so it cannot be charged anymore.
    #[tracing::instrument(name = "Deactivate Authorization", skip(self, ctx, authorization_code))]
    pub async fn deactivate_authorization(
        &self,
        ctx: &Context,
        authorization_code: &str,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/customer/deactivate_authorization",
                RequestBody::form([("authorization_code", authorization_code)]),
            )
            .await
    }

    /// Validates the identity of a customer.
    ///
    /// Returns `true` once Paystack has accepted the validation request; the outcome itself
    /// is delivered asynchronously through webhooks.
    #[tracing::instrument(name = "Validate Customer", skip(self, ctx, request))]
    pub async fn validate(
        &self,
        ctx: &Context,
        customer_code: &str,
        request: &ValidateCustomerRequest,
    ) -> Result<bool, Error> {
        self.transport
            .execute(
                ctx,
                Method::POST,
                &format!("/customer/{}/identification", encode(customer_code)),
                RequestBody::json(request)?,
            )
            .await?;

        Ok(true)
    }
}
