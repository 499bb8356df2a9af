//! Notification toasts, rendered from the [`crate::Toaster`] queue.

use leptos::*;

use crate::Notification;

#[component]
pub fn ToastRegion(
    /// Visible notifications, oldest first
    notifications: Signal<Vec<Notification>>,
    /// Called with the id of a clicked notification
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="toast-region">
            <For
                each=move || notifications.get()
                key=|notification: &Notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    view! {
                        <div
                            class=format!("toast {}", notification.level.css_class())
                            on:click=move |_| on_dismiss.call(id)
                        >
                            {notification.level.emoji()} " " {notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
