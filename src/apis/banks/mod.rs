//! APIs and models related to banks and account resolution.

mod api;
mod model;

pub use api::BanksApi;
pub use model::*;
