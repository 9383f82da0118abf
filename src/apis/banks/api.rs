use crate::{
    apis::banks::{Bank, BvnResponse},
    context::Context,
    response::{List, Response},
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack banks APIs client.
#[derive(Clone, Debug)]
pub struct BanksApi {
    transport: Arc<Transport>,
}

impl BanksApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Lists all the banks supported by Paystack.
    #[tracing::instrument(name = "List Banks", skip(self, ctx))]
    pub async fn list(&self, ctx: &Context) -> Result<List<Bank>, Error> {
        self.transport
            .call(ctx, Method::GET, "/bank", RequestBody::Empty)
            .await
    }

    /// Resolves a Bank Verification Number.
    #[tracing::instrument(name = "Resolve BVN", skip(self, ctx, bvn))]
    pub async fn resolve_bvn(&self, ctx: &Context, bvn: &str) -> Result<BvnResponse, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/bank/resolve_bvn/{}", encode(bvn)),
                RequestBody::Empty,
            )
            .await
    }

    /// Resolves the account name behind an account number.
    #[tracing::instrument(name = "Resolve Account Number", skip(self, ctx))]
    pub async fn resolve_account_number(
        &self,
        ctx: &Context,
        account_number: &str,
        bank_code: &str,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!(
                    "/bank/resolve?account_number={}&bank_code={}",
                    encode(account_number),
                    encode(bank_code)
                ),
                RequestBody::Empty,
            )
            .await
    }
}
