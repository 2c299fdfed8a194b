//! Signup page driving the demo auth stub.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::components::toast::{toast_error, toast_success};
use crate::net::api::{ArtBackend, MockBackend};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::session;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let backend = expect_context::<MockBackend>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        if username_value.is_empty() || email_value.is_empty() {
            toast_error(ui, "Enter a username and email first.");
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match backend.register(&username_value, &email_value).await {
                Ok(user) => {
                    session::save(&user);
                    auth.update(|state| {
                        state.user = Some(user);
                        state.loading = false;
                    });
                    toast_success(ui, "Account created successfully");
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(message) => {
                    log::error!("signup failed: {message}");
                    toast_error(ui, "Signup failed. Please try again.");
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="page signup-page">
            <NavBar/>
            <main class="page__body">
                <div class="auth-card">
                    <h1>"Sign Up"</h1>
                    <form class="auth-form" on:submit=on_submit>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                        </button>
                    </form>
                    <p class="auth-card__switch">
                        "Already have an account? "
                        <A href="/login">"Log In"</A>
                    </p>
                </div>
            </main>
        </div>
    }
}
