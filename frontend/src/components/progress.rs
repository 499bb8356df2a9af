use leptos::*;

#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<u8>) -> impl IntoView {
    view! {
        <div class="progress-section">
            <div class="progress-bar">
                <div class="progress-fill" style:width=move || format!("{}%", progress.get())></div>
            </div>
            <p class="progress-label">{move || format!("Uploading... {}%", progress.get())}</p>
        </div>
    }
}
