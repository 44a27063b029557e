//! View state and its transitions.
//!
//! State only changes through [`ViewState::apply`]. The per-asset tally is
//! not stored: it is derived from `transfers` whenever it is asked for.

use crate::ordering::sort_transfers;
use crate::tally::{asset_tally, AssetTally};
use crate::types::Transfer;
use chrono::{DateTime, Local};

/// Something that happened during a fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    Started,
    /// The source returned these transfers, in source order.
    Succeeded(Vec<Transfer>),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    is_fetching: bool,
    transfers: Vec<Transfer>,
    last_updated: Option<DateTime<Local>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Started => {
                self.is_fetching = true;
            }
            FetchEvent::Succeeded(mut transfers) => {
                sort_transfers(&mut transfers);
                self.transfers = transfers;
                self.is_fetching = false;
                self.last_updated = Some(Local::now());
            }
            FetchEvent::Failed => {
                self.is_fetching = false;
            }
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// Transfers in ascending id order.
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Time of the last successful fetch, if any.
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn asset_tally(&self) -> AssetTally {
        asset_tally(&self.transfers)
    }
}
