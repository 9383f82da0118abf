//! Clients for the various Paystack APIs.
//!
//! Every client wraps a shared [`Transport`](crate::transport::Transport) and can be
//! built on its own through its `new` constructor, or obtained already wired up from a
//! [`PaystackClient`](crate::PaystackClient).

pub mod banks;
pub mod bulk_charges;
pub mod charges;
pub mod customers;
pub mod integration;
pub mod pages;
pub mod plans;
pub mod refunds;
pub mod settlements;
pub mod subaccounts;
pub mod subscriptions;
pub mod transactions;
pub mod transfers;
