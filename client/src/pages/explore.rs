//! Explore page: the full feed with live search.

use leptos::prelude::*;

use crate::components::art_card::ArtCard;
use crate::components::nav_bar::NavBar;
use crate::net::api::{ArtBackend, MockBackend};
use crate::state::feed::FeedState;
use crate::util::search::filter_artworks;

#[component]
pub fn ExplorePage() -> impl IntoView {
    let backend = expect_context::<MockBackend>();
    let feed = RwSignal::new(FeedState { items: Vec::new(), loading: true });
    let query = RwSignal::new(String::new());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let items = backend.fetch_artworks().await;
            feed.update(|state| {
                state.items = items;
                state.loading = false;
            });
        });
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

    // Recomputed per keystroke.
    let filtered = move || filter_artworks(&feed.get().items, &query.get());

    view! {
        <div class="page explore-page">
            <NavBar/>
            <main class="page__body">
                <h1>"Explore Artwork"</h1>

                <input
                    class="explore-page__search"
                    type="text"
                    placeholder="Search by title or artist..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />

                <Show
                    when=move || !feed.get().loading
                    fallback=|| view! { <p class="loading">"Loading..."</p> }
                >
                    <Show
                        when=move || !filtered().is_empty()
                        fallback=move || {
                            view! {
                                <div class="explore-page__empty">
                                    <p>"No artworks found matching your search."</p>
                                    <button class="btn" on:click=move |_| query.set(String::new())>
                                        "Clear Search"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="art-grid">
                            <For each=filtered key=|a| a.id.clone() let:artwork>
                                <ArtCard artwork=artwork on_like=on_like/>
                            </For>
                        </div>
                    </Show>
                </Show>
            </main>
        </div>
    }
}
