//! Common types shared across modules.

use serde::{Deserialize, Serialize};

/// A single asset movement recorded by the dashboard indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    pub contract_id: String,
    pub receiver: String,
    /// Kept as the raw JSON number so it displays exactly as received.
    pub amount: serde_json::Number,
    pub asset_id: String,
}

impl Transfer {
    pub fn new(
        id: impl Into<String>,
        contract_id: impl Into<String>,
        receiver: impl Into<String>,
        amount: impl Into<serde_json::Number>,
        asset_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            contract_id: contract_id.into(),
            receiver: receiver.into(),
            amount: amount.into(),
            asset_id: asset_id.into(),
        }
    }
}
