//! Module containing the main Paystack API client.

use crate::{
    apis::{
        banks::BanksApi, bulk_charges::BulkChargesApi, charges::ChargesApi,
        customers::CustomersApi, integration::IntegrationApi, pages::PagesApi, plans::PlansApi,
        refunds::RefundsApi, settlements::SettlementsApi, subaccounts::SubaccountsApi,
        subscriptions::SubscriptionsApi, transactions::TransactionsApi, transfers::TransfersApi,
    },
    common::{API_KEY_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT},
    transport::Transport,
    Error,
};
use secrecy::SecretString;
use std::sync::Arc;

/// Client for the Paystack public APIs.
///
/// Every resource client shares the same [`Transport`], so cloning a `PaystackClient`
/// is cheap and clones can be moved freely across tasks.
#[derive(Debug, Clone)]
pub struct PaystackClient {
    transport: Arc<Transport>,
    /// Banks APIs client.
    pub banks: BanksApi,
    /// Customers APIs client.
    pub customers: CustomersApi,
    /// Transactions APIs client.
    pub transactions: TransactionsApi,
    /// Transfers and transfer recipients APIs client.
    pub transfers: TransfersApi,
    /// Subscriptions APIs client.
    pub subscriptions: SubscriptionsApi,
    /// Plans APIs client.
    pub plans: PlansApi,
    /// Charges APIs client.
    pub charges: ChargesApi,
    /// Bulk charges APIs client.
    pub bulk_charges: BulkChargesApi,
    /// Refunds APIs client.
    pub refunds: RefundsApi,
    /// Settlements APIs client.
    pub settlements: SettlementsApi,
    /// Subaccounts APIs client.
    pub subaccounts: SubaccountsApi,
    /// Payment pages APIs client.
    pub pages: PagesApi,
    /// Integration-level APIs client (balance, card BINs, session timeout).
    pub integration: IntegrationApi,
}

impl PaystackClient {
    /// Builds a new [`PaystackClient`] with the default configuration and logging enabled.
    pub fn new(api_key: impl Into<String>) -> PaystackClient {
        PaystackClientBuilder::new(api_key).build()
    }

    /// Builds a new [`PaystackClient`] with the default configuration,
    /// turning request and response logging on or off.
    pub fn with_logging(api_key: impl Into<String>, logging_enabled: bool) -> PaystackClient {
        PaystackClientBuilder::new(api_key)
            .with_logging(logging_enabled)
            .build()
    }

    /// Builds a new [`PaystackClient`] reading the secret key from the `PAYSTACK_KEY`
    /// environment variable.
    pub fn from_env() -> Result<PaystackClient, Error> {
        match std::env::var(API_KEY_ENV_VAR) {
            Ok(api_key) if !api_key.is_empty() => Ok(PaystackClient::new(api_key)),
            _ => Err(Error::MissingApiKey(API_KEY_ENV_VAR)),
        }
    }

    /// Returns a new builder to configure a new [`PaystackClient`].
    pub fn builder(api_key: impl Into<String>) -> PaystackClientBuilder {
        PaystackClientBuilder::new(api_key)
    }

    /// Builds a client whose resource APIs all share the given transport.
    pub fn from_transport(transport: Arc<Transport>) -> PaystackClient {
        PaystackClient {
            banks: BanksApi::new(transport.clone()),
            customers: CustomersApi::new(transport.clone()),
            transactions: TransactionsApi::new(transport.clone()),
            transfers: TransfersApi::new(transport.clone()),
            subscriptions: SubscriptionsApi::new(transport.clone()),
            plans: PlansApi::new(transport.clone()),
            charges: ChargesApi::new(transport.clone()),
            bulk_charges: BulkChargesApi::new(transport.clone()),
            refunds: RefundsApi::new(transport.clone()),
            settlements: SettlementsApi::new(transport.clone()),
            subaccounts: SubaccountsApi::new(transport.clone()),
            pages: PagesApi::new(transport.clone()),
            integration: IntegrationApi::new(transport.clone()),
            transport,
        }
    }

    /// The transport shared by all the resource APIs of this client.
    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }
}

/// Builder for a [`PaystackClient`].
#[derive(Debug)]
pub struct PaystackClientBuilder {
    client: Option<reqwest::Client>,
    api_key: SecretString,
    base_url: String,
    logging_enabled: bool,
}

impl PaystackClientBuilder {
    /// Creates a new builder to configure a [`PaystackClient`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: None,
            api_key: SecretString::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            logging_enabled: true,
        }
    }

    /// Consumes the builder and builds the shared [`Transport`].
    pub fn build_transport(self) -> Arc<Transport> {
        // Without a custom client, fall back to one with a 60 seconds timeout
        let client = self.client.unwrap_or_else(|| {
            reqwest::Client::builder()
                .timeout(DEFAULT_HTTP_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new())
        });

        Arc::new(Transport::new(
            self.api_key,
            client,
            self.base_url,
            self.logging_enabled,
        ))
    }

    /// Consumes the builder and builds a new [`PaystackClient`].
    pub fn build(self) -> PaystackClient {
        PaystackClient::from_transport(self.build_transport())
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// The client is used as is, so the default 60 seconds timeout does not apply.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Turns request and response logging on or off. Logging is on by default.
    pub fn with_logging(mut self, logging_enabled: bool) -> Self {
        self.logging_enabled = logging_enabled;
        self
    }

    /// Sets the base URL all requests are sent to.
    ///
    /// Useful to point the client to a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
