//! APIs and models related to payment pages.

mod api;
mod model;

pub use api::PagesApi;
pub use model::*;
