//! APIs and models related to transfers and transfer recipients.

mod api;
mod model;

pub use api::TransfersApi;
pub use model::*;
