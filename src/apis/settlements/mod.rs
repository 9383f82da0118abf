//! APIs related to settlements.

mod api;

pub use api::SettlementsApi;
