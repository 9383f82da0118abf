use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// How often customers subscribed to a plan are charged.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PlanInterval {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

/// Request used both to create and to update a plan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct PlanRequest {
    pub name: String,
    pub amount: u64,
    pub interval: PlanInterval,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Plan {
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
    pub name: String,
    pub description: Option<String>,
    pub plan_code: String,
    pub amount: u64,
    /// One of `hourly`, `daily`, `weekly`, `monthly`, `quarterly`, `biannually`, `annually`.
    pub interval: String,
    pub send_invoices: bool,
    pub send_sms: bool,
    pub currency: String,
    pub invoice_limit: u32,
    pub hosted_page: bool,
    pub hosted_page_url: Option<String>,
    pub hosted_page_summary: Option<String>,
}
