//! APIs and models related to bulk charges.

mod api;
mod model;

pub use api::BulkChargesApi;
pub use model::*;
