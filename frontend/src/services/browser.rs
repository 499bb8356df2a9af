//! Page environment lookups.

use crate::{AppError, AppResult, FALLBACK_ORIGIN};

/// Base address of the current page, e.g. `https://fileshare.dev`.
pub fn page_origin() -> AppResult<String> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::Environment("no global window".to_string()))?;
    window
        .location()
        .origin()
        .map_err(|e| AppError::Environment(format!("location.origin unavailable: {:?}", e)))
}

/// [`page_origin`], falling back to [`FALLBACK_ORIGIN`].
pub fn page_origin_or_fallback() -> String {
    page_origin().unwrap_or_else(|e| {
        log::warn!("{} - using {}", e, FALLBACK_ORIGIN);
        FALLBACK_ORIGIN.to_string()
    })
}
