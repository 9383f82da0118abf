use crate::{
    apis::{customers::Customer, plans::Plan, transactions::Authorization},
    response::Expandable,
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct SubscriptionRequest {
    /// Customer email or code.
    pub customer: String,
    /// Plan code.
    pub plan: String,
    /// Authorization code to charge. Defaults to the customer's most recent one.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    /// First debit date, in ISO 8601 format.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Subscription {
    pub id: u64,
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "crate::decode::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "updatedAt",
        default,
        deserialize_with = "crate::decode::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    pub domain: String,
    pub integration: u64,
    /// Customer id when a subscription is created, the full customer when it is fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Expandable<Plan>>,
    pub start: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Expandable<Authorization>>,
    pub invoices: Vec<Value>,
    pub status: String,
    pub quantity: u32,
    pub amount: u64,
    pub subscription_code: String,
    pub email_token: String,
    pub easy_cron_id: Option<String>,
    pub cron_expression: String,
    #[serde(
        default,
        deserialize_with = "crate::decode::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_payment_date: Option<DateTime<Utc>>,
    pub open_invoice: Option<String>,
}
