//! FileShare - Frontend Rust/Leptos Application
//!
//! A WebAssembly demo page for instant file sharing. The upload is
//! simulated: a timer fills the progress bar and a share link is made up
//! at the end. No file content ever leaves the browser.
//!
//! The page is `Header`, `Hero`, [`UploadCard`] and `Footer`. All session
//! state lives in one [`UploadSimulator`] owned by the upload card, which
//! swaps its drop zone for a [`SharePanel`] once the link exists.
//!
//! # Modules
//!
//! - [`types`] - Common types (FileMeta, Phase, Notification, etc.)
//! - [`session`] - Upload session state machine
//! - [`format`] - Byte size formatting
//! - [`components`] - UI components (Header, UploadCard, etc.)
//! - [`services`] - Simulator and browser services (timers, toasts, clipboard)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod config;
pub mod types;
pub mod format;
pub mod session;
pub mod components;
pub mod services;

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileMeta,
    // Session
    Phase,
    // Notifications
    Notification, NotificationLevel,
    // Errors
    AppError, AppResult,
};

// Formatting
pub use format::format_size;

// Session
pub use session::{UploadSession, UploadState, TickOutcome};

// Components
pub use components::*;

// Services
pub use services::*;

/// Install the panic hook and logger, then mount the application.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Notifications are shared by every component on the page
    let toaster = Toaster::new();
    let notifications = toaster.notifications();
    let on_dismiss = {
        let toaster = toaster.clone();
        Callback::new(move |id: u64| toaster.dismiss(id))
    };

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <UploadCard toaster=toaster/>
        </div>

        <Footer/>

        <ToastRegion notifications=notifications on_dismiss=on_dismiss/>
    }
}
