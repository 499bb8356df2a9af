//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Share Files Instantly"</h1>
            <p class="subtitle">"Upload your files and get a shareable link in seconds"</p>
        </div>
    }
}
