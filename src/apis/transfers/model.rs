use crate::response::{Expandable, Metadata};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request to send money from the integration balance to a recipient.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct InitiateTransferRequest {
    /// Where the money comes from. Only `balance` is supported for now.
    #[builder(default = "\"balance\".to_string()")]
    pub source: String,
    pub amount: u64,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Code of the transfer recipient.
    pub recipient: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct BulkTransferRequest {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[builder(default = "\"balance\".to_string()")]
    pub source: String,
    pub transfers: Vec<BulkTransferItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BulkTransferItem {
    pub amount: u64,
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Transfer {
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
    pub source: String,
    pub amount: u64,
    pub currency: String,
    pub reason: String,
    pub transfer_code: String,
    /// Recipient code when a transfer is created, the full recipient when it is fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Expandable<Recipient>>,
    pub status: String,
    pub source_details: Option<Value>,
    pub failures: Option<Value>,
    #[serde(
        default,
        deserialize_with = "crate::decode::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub transferred_at: Option<DateTime<Utc>>,
    pub titan_code: Option<String>,
}

/// Kind of account a transfer recipient is paid into.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    Nuban,
    MobileMoney,
    Basa,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct CreateRecipientRequest {
    #[serde(rename = "type")]
    pub recipient_type: RecipientType,
    pub name: String,
    pub account_number: String,
    pub bank_code: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A beneficiary of transfers.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Recipient {
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
    #[serde(rename = "type")]
    pub recipient_type: String,
    pub name: String,
    pub metadata: Metadata,
    pub account_number: String,
    pub bank_code: String,
    pub currency: String,
    pub description: Option<String>,
    pub active: bool,
    pub details: Map<String, Value>,
    pub domain: String,
    pub recipient_code: String,
}
