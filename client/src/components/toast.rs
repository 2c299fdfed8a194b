//! Transient toast notifications.
//!
//! `Toaster` renders the stack held in `UiState`; `toast_success` /
//! `toast_error` are the helpers every action boundary uses to surface
//! outcomes. Toasts auto-dismiss in the browser and stay put natively.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u64 = 4000;

/// Show a success toast.
pub fn toast_success(ui: RwSignal<UiState>, message: impl Into<String>) {
    push(ui, ToastKind::Success, message.into());
}

/// Show an error toast.
pub fn toast_error(ui: RwSignal<UiState>, message: impl Into<String>) {
    push(ui, ToastKind::Error, message.into());
}

fn push(ui: RwSignal<UiState>, kind: ToastKind, message: String) {
    let mut id = 0;
    ui.update(|state| id = state.push_toast(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        ui.update(|state| state.dismiss_toast(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed-position stack of active toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For each=move || ui.get().toasts key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| ui.update(|state| state.dismiss_toast(id))
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
