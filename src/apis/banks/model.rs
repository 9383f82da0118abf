use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bank supported by Paystack.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Bank {
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
    pub name: String,
    pub slug: String,
    pub code: String,
    pub long_code: String,
    pub gateway: Option<String>,
    pub active: bool,
    pub is_deleted: bool,
}

/// Result of a BVN resolution.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BvnResponse {
    pub meta: BvnMeta,
    pub bvn: String,
}

/// Usage counters attached to a BVN resolution.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BvnMeta {
    pub calls_this_month: u32,
    pub free_calls_left: u32,
}
