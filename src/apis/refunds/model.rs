use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Refund {
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
    pub transaction: RefundedTransaction,
    pub integration: u64,
    pub deducted_amount: u64,
    pub channel: Option<String>,
    pub merchant_note: String,
    pub customer_note: String,
    pub status: String,
    pub refunded_by: String,
    #[serde(
        default,
        deserialize_with = "crate::decode::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_at: Option<DateTime<Utc>>,
    pub currency: String,
    pub domain: String,
    pub amount: u64,
    pub fully_deducted: bool,
}

/// Summary of the transaction a refund was issued for.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RefundedTransaction {
    pub id: u64,
    pub domain: String,
    pub reference: String,
    pub amount: u64,
    #[serde(
        default,
        deserialize_with = "crate::decode::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub paid_at: Option<DateTime<Utc>>,
    pub channel: String,
    pub currency: String,
    pub authorization: Option<Value>,
    pub customer: Option<Value>,
    pub plan: Option<Value>,
    pub subaccount: Option<Value>,
    pub split: Option<Value>,
    pub order_id: Option<Value>,
    pub pos_transaction_data: Option<Value>,
    pub source: Option<Value>,
    pub fees_breakdown: Option<Value>,
}
