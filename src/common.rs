use std::time::Duration;

// Default URLs
pub static DEFAULT_BASE_URL: &str = "https://api.paystack.co";

// Transport defaults
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(60);
pub static USER_AGENT: &str = "Mozilla/5.0 (Unknown; Linux) AppleWebKit/538.1 (KHTML, like Gecko) Chrome/v1.0.0 Safari/538.1";

// Pagination
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// Environment variables
pub static API_KEY_ENV_VAR: &str = "PAYSTACK_KEY";
