//! Per-asset transfer counts.

use crate::types::Transfer;
use std::collections::BTreeMap;

/// Number of transfers per asset id, ordered by asset id.
pub type AssetTally = BTreeMap<String, usize>;

/// Count transfers per `asset_id`.
pub fn asset_tally(transfers: &[Transfer]) -> AssetTally {
    transfers.iter().fold(AssetTally::new(), |mut tally, transfer| {
        *tally.entry(transfer.asset_id.clone()).or_insert(0) += 1;
        tally
    })
}
