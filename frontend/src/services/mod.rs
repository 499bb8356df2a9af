//! Browser services and the upload simulator.
//!
//! # Services
//!
//! - [`simulator`] - Upload state machine wired to its collaborators
//! - [`ticker`] - Repeating timers (`setInterval`)
//! - [`notifier`] - Toast notifications
//! - [`clipboard`] - `navigator.clipboard` access
//! - [`browser`] - Page origin lookup

pub mod browser;
pub mod clipboard;
pub mod notifier;
pub mod simulator;
pub mod ticker;

pub use browser::*;
pub use clipboard::*;
pub use notifier::*;
pub use simulator::*;
pub use ticker::*;
