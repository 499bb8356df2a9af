//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Metadata of the selected file
//! - **Session Types** - Upload phase
//! - **Notification Types** - Toast messages
//! - **Error Types** - Frontend error handling

use std::fmt;
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// Metadata of a selected file.
///
/// Only the name and size are ever read; the content stays untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl From<&web_sys::File> for FileMeta {
    fn from(file: &web_sys::File) -> Self {
        // Blob sizes are exposed as f64 but are always whole, non-negative numbers
        Self::new(file.name(), file.size().max(0.0) as u64)
    }
}

// =============================================================================
// Session Types
// =============================================================================

/// Discrete state of an upload session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No file selected
    Idle,
    /// Simulated transfer in progress
    Uploading,
    /// Transfer finished, share link available
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Uploading => write!(f, "uploading"),
            Phase::Complete => write!(f, "complete"),
        }
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Notification severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Successful action
    Success,
    /// Recoverable failure
    Error,
}

impl NotificationLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "toast-success",
            NotificationLevel::Error => "toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "✅",
            NotificationLevel::Error => "❌",
        }
    }
}

/// A notification shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    /// Identifier used to dismiss the notification
    pub id: u64,
    /// Severity level
    pub level: NotificationLevel,
    /// Message text
    pub message: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. None of them is fatal:
/// they are logged and reported through the notifier.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// The host refused to start a repeating timer.
    #[error("Timer error: {0}")]
    Timer(String),

    /// Clipboard unavailable or write rejected.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Browser global (window, location, navigator) missing.
    #[error("Browser environment error: {0}")]
    Environment(String),

    /// A share link was requested outside the complete phase.
    #[error("No share link available while {0}")]
    NoShareLink(Phase),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Clipboard("permission denied".into());
        assert_eq!(err.to_string(), "Clipboard error: permission denied");

        let err = AppError::NoShareLink(Phase::Uploading);
        assert!(err.to_string().contains("uploading"));
    }

    #[test]
    fn test_notification_level_styling() {
        assert_eq!(NotificationLevel::Success.css_class(), "toast-success");
        assert_eq!(NotificationLevel::Error.css_class(), "toast-error");
        assert_eq!(NotificationLevel::Error.emoji(), "❌");
    }
}
