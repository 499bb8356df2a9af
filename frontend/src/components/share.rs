//! Completed upload panel with the share link.

use leptos::*;

use crate::components::FileSummary;
use crate::session::UploadState;

#[component]
pub fn SharePanel(
    state: ReadSignal<UploadState>,
    on_copy: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let link = create_memo(move |_| state.with(|s| s.share_link().to_string()));
    let file = create_memo(move |_| state.with(|s| s.file().cloned()));

    view! {
        <div class="share-panel">
            <div class="success-icon">"✔️"</div>
            <div>
                <h3>"Upload Complete!"</h3>
                <p class="upload-hint">"Your file is ready to share"</p>
            </div>

            {move || file.get().map(|file| view! { <FileSummary file=file/> })}

            <div class="share-link">
                <input
                    type="text"
                    class="share-link-input"
                    readonly=true
                    prop:value=move || link.get()
                />
                <button class="copy-button" on:click=move |_| on_copy.call(())>
                    "📋 Copy"
                </button>
            </div>

            <button class="reset-button" on:click=move |_| on_reset.call(())>
                "Upload Another File"
            </button>
        </div>
    }
}
