use crate::{
    apis::charges::ChargeRequest,
    context::Context,
    response::Response,
    transport::{RequestBody, Transport},
    Error,
};
use reqwest::Method;
use std::sync::Arc;
use urlencoding::encode;

/// Paystack charges APIs client.
///
/// A charge may require several steps to complete: the `status` of each response tells
/// which `submit_*` method has to be called next.
#[derive(Clone, Debug)]
pub struct ChargesApi {
    transport: Arc<Transport>,
}

impl ChargesApi {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Starts a charge on a card, bank account or saved authorization.
    #[tracing::instrument(name = "Create Charge", skip(self, ctx, request))]
    pub async fn create(&self, ctx: &Context, request: &ChargeRequest) -> Result<Response, Error> {
        self.transport
            .call(ctx, Method::POST, "/charge", RequestBody::json(request)?)
            .await
    }

    /// Tokenizes a card without charging it.
    #[tracing::instrument(name = "Tokenize Card", skip(self, ctx, request))]
    pub async fn tokenize(
        &self,
        ctx: &Context,
        request: &ChargeRequest,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                "/charge/tokenize",
                RequestBody::json(request)?,
            )
            .await
    }

    /// Submits the card PIN to continue a charge.
    #[tracing::instrument(name = "Submit Charge PIN", skip(self, ctx, pin))]
    pub async fn submit_pin(
        &self,
        ctx: &Context,
        pin: &str,
        reference: &str,
    ) -> Result<Response, Error> {
        self.submit(ctx, "/charge/submit_pin", "pin", pin, reference)
            .await
    }

    /// Submits the OTP sent to the customer to continue a charge.
    #[tracing::instrument(name = "Submit Charge OTP", skip(self, ctx, otp))]
    pub async fn submit_otp(
        &self,
        ctx: &Context,
        otp: &str,
        reference: &str,
    ) -> Result<Response, Error> {
        self.submit(ctx, "/charge/submit_otp", "otp", otp, reference)
            .await
    }

    /// Submits the customer phone number when requested.
    #[tracing::instrument(name = "Submit Charge Phone", skip(self, ctx, phone))]
    pub async fn submit_phone(
        &self,
        ctx: &Context,
        phone: &str,
        reference: &str,
    ) -> Result<Response, Error> {
        self.submit(ctx, "/charge/submit_phone", "phone", phone, reference)
            .await
    }

    /// Submits the customer birthday when requested.
    #[tracing::instrument(name = "Submit Charge Birthday", skip(self, ctx, birthday))]
    pub async fn submit_birthday(
        &self,
        ctx: &Context,
        birthday: &str,
        reference: &str,
    ) -> Result<Response, Error> {
        self.submit(ctx, "/charge/submit_birthday", "birthday", birthday, reference)
            .await
    }

    /// Checks the status of a pending charge.
    ///
    /// Wait at least 30 seconds after getting a `pending` status before checking again.
    #[tracing::instrument(name = "Check Pending Charge", skip(self, ctx))]
    pub async fn check_pending(&self, ctx: &Context, reference: &str) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::GET,
                &format!("/charge/{}", encode(reference)),
                RequestBody::Empty,
            )
            .await
    }

    async fn submit(
        &self,
        ctx: &Context,
        path: &str,
        key: &str,
        value: &str,
        reference: &str,
    ) -> Result<Response, Error> {
        self.transport
            .call(
                ctx,
                Method::POST,
                path,
                RequestBody::form([(key, value), ("reference", reference)]),
            )
            .await
    }
}
