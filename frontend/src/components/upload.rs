//! File upload card with drag & drop support.
//!
//! Owns the page's [`BrowserSimulator`] and switches between the drop zone,
//! the progress display and the share panel as the session moves on.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::components::{ProgressBar, SharePanel};
use crate::services::{
    page_origin_or_fallback, BrowserClipboard, BrowserSimulator, IntervalTicker, Toaster,
};
use crate::session::UploadState;
use crate::{format_size, FileMeta, Phase};

#[component]
pub fn UploadCard(toaster: Toaster) -> impl IntoView {
    let simulator = BrowserSimulator::new(
        page_origin_or_fallback(),
        IntervalTicker,
        toaster,
        BrowserClipboard,
    );

    let (state, set_state) = create_signal(simulator.state());
    simulator.subscribe(move |s| set_state.set(s.clone()));
    let phase = create_memo(move |_| state.with(|s| s.phase()));

    // The interval must not outlive the view
    let for_cleanup = simulator.clone();
    on_cleanup(move || for_cleanup.teardown());

    let simulator = store_value(simulator);

    let on_file = Callback::new(move |file: FileMeta| {
        simulator.get_value().select_file(file);
    });

    let on_copy = Callback::new(move |_: ()| {
        let simulator = simulator.get_value();
        spawn_local(async move {
            // Failures are already reported through the toaster
            if let Err(e) = simulator.copy_link().await {
                log::debug!("Copy link: {}", e);
            }
        });
    });

    let on_reset = Callback::new(move |_: ()| simulator.get_value().reset());

    view! {
        <div class="upload-card">
            {move || match phase.get() {
                Phase::Complete => view! {
                    <SharePanel state=state on_copy=on_copy on_reset=on_reset/>
                }
                .into_view(),
                _ => view! { <DropZone state=state phase=phase on_file=on_file/> }.into_view(),
            }}
        </div>
    }
}

/// Drop target and file picker, showing progress while uploading.
#[component]
fn DropZone(
    state: ReadSignal<UploadState>,
    phase: Memo<Phase>,
    on_file: Callback<FileMeta>,
) -> impl IntoView {
    let (is_dragging, set_is_dragging) = create_signal(false);

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_drag_leave = move |_: DragEvent| set_is_dragging.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);

        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file.call(FileMeta::from(&file));
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.call(FileMeta::from(&file));
        }
        // Picking the same file again must fire a new change event
        input.set_value("");
    };

    let file = create_memo(move |_| state.with(|s| s.file().cloned()));
    let progress = Signal::derive(move || state.with(|s| s.progress()));

    view! {
        <div
            class="drop-zone"
            class:dragging=move || is_dragging.get()
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-icon" class:dragging=move || is_dragging.get()>"📤"</div>

            <Show
                when=move || phase.get() == Phase::Idle
                fallback=move || view! {
                    <div class="upload-status">
                        {move || file.get().map(|file| view! { <FileSummary file=file/> })}
                        <ProgressBar progress=progress/>
                    </div>
                }
            >
                <div class="upload-text">"Drop your files here"</div>
                <div class="upload-hint">"or click to browse"</div>
                <label for="file-upload" class="upload-button">"Select File"</label>
                <input
                    type="file"
                    id="file-upload"
                    style="display:none"
                    on:change=on_file_change
                />
            </Show>
        </div>

        <p class="upload-footnote">"No registration required • Secure file transfer"</p>
    }
}

/// Name and human-readable size of a file.
#[component]
pub fn FileSummary(file: FileMeta) -> impl IntoView {
    view! {
        <div class="file-summary">
            <span class="file-icon">"📄"</span>
            <div class="file-details">
                <p class="file-name">{file.name}</p>
                <p class="file-size">{format_size(file.size)}</p>
            </div>
        </div>
    }
}
