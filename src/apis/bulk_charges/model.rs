use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A batch of charges processed together.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BulkChargeBatch {
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
    pub batch_code: String,
    pub status: String,
    pub integration: u64,
    pub domain: String,
    pub total_charges: u32,
    pub pending_charges: u32,
}

/// One charge of a bulk charge batch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BulkChargeItem {
    /// Authorization code to charge.
    pub authorization: String,
    pub amount: u64,
}
