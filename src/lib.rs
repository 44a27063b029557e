//! Transfer list viewer for the Fuel indexer dashboard example.
//!
//! Fetches `transfer` records from the indexer's GraphQL route, sorts them
//! by id and renders them as a table, either as HTML mounted into a
//! container element or in a native egui window.

pub mod async_job;
pub mod client;
pub mod config;
pub mod error;
pub mod gui;
pub mod logging;
pub mod ordering;
pub mod render;
pub mod state;
pub mod tally;
pub mod types;
pub mod view;

pub use client::{GraphQlClient, StaticSource, TransferSource};
pub use config::Config;
pub use error::{FetchError, MountError};
pub use types::Transfer;
pub use view::TransferView;
