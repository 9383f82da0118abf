use crate::{
    apis::transfers::{
        BulkTransferRequest, CreateRecipientRequest, InitiateTransferRequest, Recipient, Transfer,
    },
    common::DEFAULT_PAGE_SIZE,
    context::Context,
    response::{paginate, List, Response},
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack transfers APIs client.
#[derive(Clone, Debug)]
pub struct TransfersApi {
    transport: Arc<Transport>,
}

impl TransfersApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Initiates a new transfer.
    #[tracing::instrument(
        name = "Initiate Transfer",
        skip(self, ctx, request),
        fields(amount = request.amount)
    )]
    pub async fn initiate(
        &self,
        ctx: &Context,
        request: &InitiateTransferRequest,
    ) -> Result<Transfer, Error> {
        self.transport
            .call(ctx, Method::POST, "/transfer", RequestBody::json(request)?)
            .await
    }

    /// Completes a transfer which requires an OTP.
    #[tracing::instrument(name = "Finalize Transfer", skip(self, ctx, otp))]
    pub async fn finalize(
        &self,
        ctx: &Context,
        transfer_code: &str,
        otp: &str,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/transfer/finalize_transfer",
                RequestBody::form([("transfer_code", transfer_code), ("otp", otp)]),
            )
            .await
    }

    /// Initiates multiple transfers at once.
    ///
    /// The transfers OTP requirement must be disabled to use this endpoint.
    #[tracing::instrument(name = "Initiate Bulk Transfer", skip(self, ctx, request))]
    pub async fn bulk(
        &self,
        ctx: &Context,
        request: &BulkTransferRequest,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/transfer/bulk",
                RequestBody::json(request)?,
            )
            .await
    }

    /// Gets the details of a transfer by its id or code.
    #[tracing::instrument(name = "Get Transfer", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, id_or_code: &str) -> Result<Transfer, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/transfer/{}", encode(id_or_code)),
                RequestBody::Empty,
            )
            .await
    }

    /// Lists the first page of transfers.
    pub async fn list(&self, ctx: &Context) -> Result<List<Transfer>, Error> {
        self.list_n(ctx, DEFAULT_PAGE_SIZE, 0).await
    }

    /// Lists `count` transfers from page `offset`.
    #[tracing::instrument(name = "List Transfers", skip(self, ctx))]
    pub async fn list_n(
        &self,
        ctx: &Context,
        count: u32,
        offset: u32,
    ) -> Result<List<Transfer>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &paginate("/transfer", count, offset),
                RequestBody::Empty,
            )
            .await
    }

    /// Sends a new OTP for a transfer.
    #[tracing::instrument(name = "Resend Transfer OTP", skip(self, ctx))]
    pub async fn resend_otp(
        &self,
        ctx: &Context,
        transfer_code: &str,
        reason: &str,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/transfer/resend_otp",
                RequestBody::form([("transfer_code", transfer_code), ("reason", reason)]),
            )
            .await
    }

    /// Turns the OTP requirement for transfers back on.
    #[tracing::instrument(name = "Enable Transfer OTP", skip(self, ctx))]
    pub async fn enable_otp(&self, ctx: &Context) -> Result<Response, Error> {
        self.transport
            .call(ctx, Method::POST, "/transfer/enable_otp", RequestBody::Empty)
            .await
    }

    /// Starts disabling the OTP requirement for transfers.
    ///
    /// An OTP is sent to the business phone, to be passed to
    /// [`finalize_otp_disable`](TransfersApi::finalize_otp_disable).
    #[tracing::instrument(name = "Disable Transfer OTP", skip(self, ctx))]
    pub async fn disable_otp(&self, ctx: &Context) -> Result<Response, Error> {
        self.transport
            .call(ctx, Method::POST, "/transfer/disable_otp", RequestBody::Empty)
            .await
    }

    /// Completes disabling the OTP requirement for transfers.
    #[tracing::instrument(name = "Finalize Transfer OTP Disable", skip(self, ctx, otp))]
    pub async fn finalize_otp_disable(&self, ctx: &Context, otp: &str) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/transfer/disable_otp_finalize",
                RequestBody::form([("otp", otp)]),
            )
            .await
    }

    /// Creates a new transfer recipient.
    #[tracing::instrument(name = "Create Transfer Recipient", skip(self, ctx, request))]
    pub async fn create_recipient(
        &self,
        ctx: &Context,
        request: &CreateRecipientRequest,
    ) -> Result<Recipient, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/transferrecipient",
                RequestBody::json(request)?,
            )
            .await
    }

    /// Lists the first page of transfer recipients.
    pub async fn list_recipients(&self, ctx: &Context) -> Result<List<Recipient>, Error> {
        self.list_recipients_n(ctx, DEFAULT_PAGE_SIZE, 1).await
    }

    /// Lists `count` transfer recipients from page `offset`.
    #[tracing::instrument(name = "List Transfer Recipients", skip(self, ctx))]
    pub async fn list_recipients_n(
        &self,
        ctx: &Context,
        count: u32,
        offset: u32,
    ) -> Result<List<Recipient>, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &paginate("/transferrecipient", count, offset),
                RequestBody::Empty,
            )
            .await
    }
}
