//! Clipboard access.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::{AppError, AppResult};

/// Asynchronous text write to the system clipboard.
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> AppResult<()>;
}

/// `navigator.clipboard` wrapper.
///
/// Looked up dynamically: the API is missing on insecure origins and in
/// some embedded browsers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardWriter for BrowserClipboard {
    async fn write_text(&self, text: &str) -> AppResult<()> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Environment("no global window".to_string()))?;
        let navigator = window.navigator();

        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|v| !v.is_null() && !v.is_undefined())
            .ok_or_else(|| AppError::Clipboard("clipboard API unavailable".to_string()))?;

        let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|e| AppError::Clipboard(format!("{:?}", e)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| AppError::Clipboard("writeText is not a function".to_string()))?;

        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| AppError::Clipboard(format!("{:?}", e)))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| AppError::Clipboard("writeText did not return a promise".to_string()))?;

        JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Clipboard(format!("write rejected: {:?}", e)))?;

        log::debug!("📋 Wrote {} characters to clipboard", text.len());
        Ok(())
    }
}
