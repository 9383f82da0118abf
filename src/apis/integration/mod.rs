//! Integration-level APIs: balance, card BIN resolution and payment session timeout.

mod api;
mod model;

pub use api::IntegrationApi;
pub use model::*;
