use serde::{Deserialize, Serialize};

/// Available balance of the integration in one currency.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Balance {
    pub currency: String,
    /// Amount in the minor unit of the currency.
    pub balance: i64,
}
