//! An async Rust client for the [Paystack](https://paystack.com) payments API.
//!
//! Check out also the official Paystack [API documentation](https://paystack.com/docs/api/).
//!
//! # Usage
//!
//! ## Initialize a new `PaystackClient`
//!
//! Create a new [`PaystackClient`](crate::client::PaystackClient) with the secret key of your
//! integration:
//!
//! ```rust,no_run
//! # use paystack_rust::PaystackClient;
//! let paystack = PaystackClient::new("sk_test_xxxxxxxx");
//! ```
//!
//! Request and response logging is on by default. Use
//! [`PaystackClient::with_logging`](crate::client::PaystackClient::with_logging) or the
//! [builder](crate::client::PaystackClientBuilder) to turn it off or to supply your own
//! `reqwest::Client`.
//!
//! ## Create a customer
//!
//! Every call takes a [`Context`](crate::context::Context), which can carry a deadline or be
//! canceled while the request is in flight.
//!
//! ```rust,no_run
//! # use paystack_rust::{PaystackClient, Context, Error, apis::customers::*};
//! # use std::time::Duration;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let paystack: PaystackClient = unreachable!();
//! #
//! let ctx = Context::background().with_timeout(Duration::from_secs(10));
//!
//! let request = CreateCustomerRequestBuilder::default()
//!     .email("some.one@email.com")
//!     .first_name("Some")
//!     .last_name("One")
//!     .build()
//!     .unwrap();
//! let customer = paystack.customers.create(&ctx, &request).await?;
//!
//! println!("Created new customer: {}", customer.customer_code);
//! # Ok(())
//! # }
//! ```
//!
//! ## Listing banks
//!
//! ```rust,no_run
//! # use paystack_rust::{PaystackClient, Context, Error};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let paystack: PaystackClient = unreachable!();
//! #
//! let banks = paystack.banks.list(&Context::background()).await?;
//! for bank in &banks {
//!     tracing::info!("Bank {}: {}", bank.code, bank.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Handling errors
//!
//! Failures reported by Paystack, either through an HTTP error status or through
//! `"status": false` in a successful response, surface as [`Error::ApiError`]:
//!
//! ```rust,no_run
//! # use paystack_rust::{PaystackClient, Context, Error};
//! #
//! # #[tokio::main]
//! # async fn main() {
//! # let paystack: PaystackClient = unreachable!();
//! #
//! match paystack.transactions.verify(&Context::background(), "some-reference").await {
//!     Ok(transaction) => println!("Transaction status: {}", transaction.status),
//!     Err(Error::ApiError(e)) => println!("Paystack said no ({}): {}", e.status, e.message),
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod context;
pub mod decode;
pub mod error;
mod middlewares;
pub mod response;
pub mod transport;

pub use client::PaystackClient;
pub use context::Context;
pub use error::Error;
