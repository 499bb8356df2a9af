//! Application configuration.
//!
//! Centralized configuration for the FileShare frontend.
//! Everything here is a compile-time constant: the page has no
//! environment, no config file and no backend to ask.

/// Application name shown in the header, footer and document title.
pub const APP_NAME: &str = "FileShare";

/// Period of the simulated upload ticker (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 200;

/// Percentage points added to the progress on every tick.
pub const PROGRESS_STEP: u8 = 10;

/// Number of characters in a generated share link token.
pub const TOKEN_LENGTH: usize = 6;

/// Path segment placed between the origin and the token.
pub const SHARE_PATH: &str = "file";

/// Origin used for share links when `window.location` is unavailable.
pub const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// How long a notification stays on screen (in milliseconds).
pub const NOTIFICATION_TIMEOUT_MS: u32 = 4_000;

/// Maximum notifications displayed at once.
pub const MAX_NOTIFICATIONS: usize = 3;

// Notification messages

pub const UPLOAD_COMPLETE_MESSAGE: &str = "File uploaded successfully!";
pub const LINK_COPIED_MESSAGE: &str = "Link copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Could not copy link to clipboard";
pub const UPLOAD_START_FAILED_MESSAGE: &str = "Could not start the upload";
