//! Profile page: the signed-in user's artworks and their liked pieces.
//!
//! Serves both `/profile` and `/user/:id`; the mock backend only knows the
//! current session, so both render the signed-in user's profile.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::art_card::ArtCard;
use crate::components::nav_bar::NavBar;
use crate::net::api::{ArtBackend, MockBackend};
use crate::state::auth::AuthState;
use crate::state::feed::FeedState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Artwork,
    Liked,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let backend = expect_context::<MockBackend>();
    let navigate = use_navigate();

    // Redirect to login once session restore has finished with no user.
    let navigate_login = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    let tab = RwSignal::new(ProfileTab::Artwork);
    let own = RwSignal::new(FeedState { items: Vec::new(), loading: true });
    let liked = RwSignal::new(FeedState { items: Vec::new(), loading: true });

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(user) = auth.get().user else {
            return;
        };
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let items = backend.fetch_user_artworks(&user).await;
            own.update(|state| {
                state.items = items;
                state.loading = false;
            });
            let items = backend.fetch_liked_artworks().await;
            liked.update(|state| {
                state.items = items;
                state.loading = false;
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    });

    let on_like = Callback::new(move |(id, liked): (String, bool)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            backend.set_liked(&id, liked).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, liked);
        }
    });

    let username = move || auth.get().user.map(|u| u.username).unwrap_or_default();
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let initial = move || auth.get().user.map(|u| u.initial()).unwrap_or_default();

    let grid = move |feed: RwSignal<FeedState>| {
        view! {
            <Show
                when=move || !feed.get().loading
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <div class="art-grid">
                    <For each=move || feed.get().items key=|a| a.id.clone() let:artwork>
                        <ArtCard artwork=artwork on_like=on_like/>
                    </For>
                </div>
            </Show>
        }
    };

    view! {
        <div class="page profile-page">
            <NavBar/>
            <main class="page__body">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <p class="loading">
                                {move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}
                            </p>
                        }
                    }
                >
                    <header class="profile-page__header">
                        <span class="avatar avatar--large">
                            <span class="avatar__fallback">{initial}</span>
                        </span>
                        <div>
                            <h1>{username}</h1>
                            <p class="profile-page__email">{email}</p>
                        </div>
                    </header>

                    <div class="profile-page__tabs">
                        <button
                            class="tab"
                            class=("tab--active", move || tab.get() == ProfileTab::Artwork)
                            on:click=move |_| tab.set(ProfileTab::Artwork)
                        >
                            "My Artwork"
                        </button>
                        <button
                            class="tab"
                            class=("tab--active", move || tab.get() == ProfileTab::Liked)
                            on:click=move |_| tab.set(ProfileTab::Liked)
                        >
                            "Liked"
                        </button>
                    </div>

                    <Show when=move || tab.get() == ProfileTab::Artwork>{grid(own)}</Show>
                    <Show when=move || tab.get() == ProfileTab::Liked>{grid(liked)}</Show>
                </Show>
            </main>
        </div>
    }
}
