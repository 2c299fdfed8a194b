//! Top navigation bar: brand, section links, session controls, theme toggle.
//!
//! On small screens the link list collapses behind a hamburger button;
//! following any link closes it again.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::toast::toast_success;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{dark_mode, session};

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_logout = move |_| {
        session::clear();
        auth.update(|state| state.user = None);
        toast_success(ui, "Logged out successfully");
    };

    let on_theme_toggle = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    let on_menu_toggle = move |_| {
        ui.update(UiState::toggle_mobile_menu);
    };
    let on_links_click = move |_| {
        ui.update(UiState::close_mobile_menu);
    };

    let username = move || auth.get().user.map(|u| u.username).unwrap_or_default();
    let initial = move || auth.get().user.map(|u| u.initial()).unwrap_or_default();
    let avatar = move || auth.get().user.and_then(|u| u.avatar_url);

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">
                "SketchSocial"
            </A>

            <button
                class="nav-bar__menu-toggle"
                aria-label="Toggle navigation menu"
                on:click=on_menu_toggle
            >
                "\u{2630}"
            </button>

            <div
                class="nav-bar__links"
                class=("nav-bar__links--open", move || ui.get().mobile_menu_open)
                on:click=on_links_click
            >
                <A href="/explore" attr:class="nav-bar__link">
                    "Explore"
                </A>
                <A href="/create" attr:class="nav-bar__link">
                    "Create"
                </A>

                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="nav-bar__session">
                                <A href="/login" attr:class="btn btn--outline">
                                    "Login"
                                </A>
                                <A href="/signup" attr:class="btn">
                                    "Sign Up"
                                </A>
                            </div>
                        }
                    }
                >
                    <div class="nav-bar__session">
                        <A href="/profile" attr:class="nav-bar__profile">
                            <span class="avatar avatar--small">
                                <Show
                                    when=move || avatar().is_some()
                                    fallback=move || view! { <span class="avatar__fallback">{initial()}</span> }
                                >
                                    <img src=move || avatar().unwrap_or_default() alt=username/>
                                </Show>
                            </span>
                            <span class="nav-bar__username">{username}</span>
                        </A>
                        <button class="btn btn--ghost" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </Show>

                <button
                    class="nav-bar__theme-toggle"
                    title="Toggle dark mode"
                    on:click=on_theme_toggle
                >
                    {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
                </button>
            </div>
        </nav>
    }
}
