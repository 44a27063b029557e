//! GUI module for the transfer viewer
//!
//! Native window built with egui/eframe that hosts a `TransferView`.
//!
//! - `app` - GuiApp and the `launch` entry point
//! - `theme` - Colors, spacing and style setup
//!
//! ## Usage
//!
//! ```no_run
//! use transfer_view::config::Config;
//! use transfer_view::gui;
//!
//! let config = Config::default();
//! gui::launch(config).expect("Failed to launch GUI");
//! ```

mod app;
pub mod theme;

pub use app::{launch, GuiApp};
pub use theme::{configure_style, AppTheme};
