//! UI Components for the FileShare page.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Brand and navigation bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadCard`] - Drop zone, simulated upload and share link
//! - [`ProgressBar`] - Upload progress indicator
//! - [`SharePanel`] - Completed upload with copy/reset actions
//! - [`ToastRegion`] - Notifications

mod header;
mod hero;
mod upload;
mod progress;
mod share;
mod footer;
mod toast;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use share::*;
pub use footer::*;
pub use toast::*;
