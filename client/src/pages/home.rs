//! Landing page: hero, feature blurbs, and the featured artwork row.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::art_card::ArtCard;
use crate::components::nav_bar::NavBar;
use crate::net::api::{ArtBackend, MockBackend};
use crate::state::feed::FeedState;

#[component]
pub fn HomePage() -> impl IntoView {
    let backend = expect_context::<MockBackend>();
    let feed = RwSignal::new(FeedState { items: Vec::new(), loading: true });

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let items = backend.fetch_featured().await;
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

    view! {
        <div class="page home-page">
            <NavBar/>
            <main class="page__body">
                <section class="hero">
                    <h1 class="hero__title">"Create, Share, Connect"</h1>
                    <p class="hero__subtitle">
                        "SketchSocial is where artists gather to create digital art, share their masterpieces, and connect with other artists."
                    </p>
                    <div class="hero__actions">
                        <A href="/create" attr:class="btn btn--primary">
                            "Start Drawing"
                        </A>
                        <A href="/explore" attr:class="btn btn--outline">
                            "Explore Artwork"
                        </A>
                    </div>
                </section>

                <section class="features">
                    <h2>"What You Can Do"</h2>
                    <div class="features__grid">
                        <div class="feature-card">
                            <h3>"Draw Anything"</h3>
                            <p>"Use our powerful yet simple drawing tools to create digital masterpieces."</p>
                        </div>
                        <div class="feature-card">
                            <h3>"Share Your Art"</h3>
                            <p>"Post your creations and get feedback from the community."</p>
                        </div>
                        <div class="feature-card">
                            <h3>"Connect with Artists"</h3>
                            <p>"Follow other creators and build your artistic network."</p>
                        </div>
                    </div>
                </section>

                <section class="featured">
                    <h2>"Featured Artwork"</h2>
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
                </section>
            </main>
        </div>
    }
}
