//! Header component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <div class="logo-icon">"📤"</div>
                <div>
                    <a href="/" class="logo">{APP_NAME}</a>
                    <p class="tagline">"Instant file sharing"</p>
                </div>
            </div>
            <nav class="header-right">
                <a href="#" class="nav-link">"How it Works"</a>
                <a href="#" class="nav-link">"About"</a>
                <a href="#" class="nav-button">"Contact"</a>
            </nav>
        </header>
    }
}
