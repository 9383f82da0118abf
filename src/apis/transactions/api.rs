use crate::{
    apis::transactions::{AuthorizationRequest, Timeline, Transaction, TransactionRequest},
    common::DEFAULT_PAGE_SIZE,
    context::Context,
    response::{paginate, List, Response},
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack transactions APIs client.
#[derive(Clone, Debug)]
pub struct TransactionsApi {
    transport: Arc<Transport>,
}

impl TransactionsApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Initializes a transaction, returning the authorization URL and access code.
    #[tracing::instrument(name = "Initialize Transaction", skip(self, ctx, request))]
    pub async fn initialize(
        &self,
        ctx: &Context,
        request: &TransactionRequest,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/transaction/initialize",
                RequestBody::json(request)?,
            )
            .await
    }

    /// Verifies the status of a transaction by its reference.
    #[tracing::instrument(name = "Verify Transaction", skip(self, ctx))]
    pub async fn verify(&self, ctx: &Context, reference: &str) -> Result<Transaction, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/transaction/verify/{}", encode(reference)),
                RequestBody::Empty,
            )
            .await
    }

    /// Lists the first page of transactions.
    pub async fn list(&self, ctx: &Context) -> Result<List<Transaction>, Error> {
        self.list_n(ctx, DEFAULT_PAGE_SIZE, 1).await
    }

    /// Lists `count` transactions from page `offset`.
    #[tracing::instrument(name = "List Transactions", skip(self, ctx))]
    pub async fn list_n(
        &self,
        ctx: &Context,
        count: u32,
        offset: u32,
    ) -> Result<List<Transaction>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &paginate("/transaction", count, offset),
                RequestBody::Empty,
            )
            .await
    }

    /// Lists the transactions of a single customer.
    #[tracing::instrument(name = "List Customer Transactions", skip(self, ctx))]
    pub async fn list_for_customer(
        &self,
        ctx: &Context,
        customer_id: &str,
    ) -> Result<List<Transaction>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/transaction?customer={}", encode(customer_id)),
                RequestBody::Empty,
            )
            .await
    }

    /// Gets the details of a transaction by its id.
    #[tracing::instrument(name = "Get Transaction", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, id: u64) -> Result<Transaction, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/transaction/{}", id),
                RequestBody::Empty,
            )
            .await
    }

    /// Charges a previously saved authorization.
    #[tracing::instrument(name = "Charge Authorization", skip(self, ctx, request))]
    pub async fn charge_authorization(
        &self,
        ctx: &Context,
        request: &TransactionRequest,
    ) -> Result<Transaction, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/transaction/charge_authorization",
                RequestBody::json(request)?,
            )
            .await
    }

    /// Gets the timeline of a transaction by its id or reference.
    #[tracing::instrument(name = "Get Transaction Timeline", skip(self, ctx))]
    pub async fn timeline(&self, ctx: &Context, reference: &str) -> Result<Timeline, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/transaction/timeline/{}", encode(reference)),
                RequestBody::Empty,
            )
            .await
    }

    /// Gets the total amount received on the integration.
    #[tracing::instrument(name = "Get Transaction Totals", skip(self, ctx))]
    pub async fn totals(&self, ctx: &Context) -> Result<Response, Error> {
        self.transport
            .call(ctx, Method::GET, "/transaction/totals", RequestBody::Empty)
            .await
    }

    /// Exports transactions, filtered by the given query parameters.
    #[tracing::instrument(name = "Export Transactions", skip(self, ctx))]
    pub async fn export(
        &self,
        ctx: &Context,
        params: &[(&str, &str)],
    ) -> Result<Response, Error> {
        let path = if params.is_empty() {
            "/transaction/export".to_string()
        } else {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            format!("/transaction/export?{}", query)
        };

        self.transport
            .call(ctx, Method::GET, &path, RequestBody::Empty)
            .await
    }

    /// Requests the customer to reauthorize a card before it gets charged.
    #[tracing::instrument(name = "Request Reauthorization", skip(self, ctx, request))]
    pub async fn reauthorize(
        &self,
        ctx: &Context,
        request: &AuthorizationRequest,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/transaction/request_reauthorization",
                RequestBody::json(request)?,
            )
            .await
    }

    /// Checks whether an authorization can be charged for the given amount.
    #[tracing::instrument(name = "Check Authorization", skip(self, ctx, request))]
    pub async fn check_authorization(
        &self,
        ctx: &Context,
        request: &AuthorizationRequest,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/transaction/check_authorization",
                RequestBody::json(request)?,
            )
            .await
    }
}
