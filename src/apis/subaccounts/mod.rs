//! APIs and models related to subaccounts used for split payments.

mod api;
mod model;

pub use api::SubaccountsApi;
pub use model::*;
