use crate::common::{init_tracing, mock_server::PaystackMockServer};
use paystack_rust::PaystackClient;
use uuid::Uuid;

pub struct TestContext {
    pub client: PaystackClient,
    mock_server: PaystackMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        init_tracing();

        // Generate a new random secret key for this specific test
        let api_key = format!("sk_test_{}", Uuid::new_v4().simple());

        // Setup a new mock server
        let mock_server = PaystackMockServer::start(&api_key).await;

        // Configure a new PaystackClient to point to the mock server
        let client = PaystackClient::builder(api_key)
            .with_base_url(mock_server.url())
            .build();

        Self {
            client,
            mock_server,
        }
    }

    pub fn base_url(&self) -> String {
        self.mock_server.url()
    }

    /// A client pointing to the same server, authenticated with a key it does not know.
    pub fn client_with_invalid_key(&self) -> PaystackClient {
        PaystackClient::builder("sk_test_invalid")
            .with_base_url(self.base_url())
            .build()
    }
}
