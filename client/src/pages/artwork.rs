//! Artwork detail page: large image, creator, like toggle, post date.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::nav_bar::NavBar;
use crate::net::api::{ArtBackend, MockBackend};
use crate::net::types::Artwork;
use crate::state::auth::AuthState;
use crate::state::feed::toggle_like;
use crate::util::date;

#[component]
pub fn ArtworkPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let backend = expect_context::<MockBackend>();
    let params = use_params_map();
    let navigate = use_navigate();

    let artwork = RwSignal::new(None::<Artwork>);
    let loading = RwSignal::new(true);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        let id = params.read().get("id").unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let found = backend.fetch_artwork(&id).await;
            artwork.set(found);
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let navigate_login = navigate.clone();
    let on_like = move |_| {
        if !auth.get().is_authenticated() {
            navigate_login("/login", NavigateOptions::default());
            return;
        }
        let mut toggled = None;
        artwork.update(|slot| {
            if let Some(a) = slot.as_mut() {
                toggled = Some((a.id.clone(), toggle_like(a)));
            }
        });
        if let Some((id, liked)) = toggled {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                backend.set_liked(&id, liked).await;
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (id, liked);
            }
        }
    };

    view! {
        <div class="page artwork-page">
            <NavBar/>
            <main class="page__body">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="loading">"Loading..."</p> }
                >
                    {
                        let on_like = on_like.clone();
                        view! {
                            <Show
                                when=move || artwork.get().is_some()
                                fallback=|| {
                                    view! {
                                        <div class="artwork-page__missing">
                                            <p>"Artwork not found."</p>
                                            <A href="/explore" attr:class="btn">
                                                "Back to Explore"
                                            </A>
                                        </div>
                                    }
                                }
                            >
                                {
                                    let on_like = on_like.clone();
                                    move || {
                                    artwork
                                        .get()
                                        .map(|a| {
                                            let creator_href = format!("/user/{}", a.creator.id);
                                            view! {
                                                <article class="artwork-detail">
                                                    <img class="artwork-detail__image" src=a.image_url.clone() alt=a.title.clone()/>
                                                    <div class="artwork-detail__meta">
                                                        <h1>{a.title.clone()}</h1>
                                                        <A href=creator_href attr:class="artwork-detail__creator">
                                                            {a.creator.username.clone()}
                                                        </A>
                                                        <p class="artwork-detail__date">
                                                            {date::format_long(&a.created_at)}
                                                        </p>
                                                        <div class="artwork-detail__likes">
                                                            <button
                                                                class="art-card__like-button"
                                                                class=("art-card__like-button--liked", a.liked)
                                                                on:click=on_like.clone()
                                                            >
                                                                "\u{2665}"
                                                            </button>
                                                            <span>{a.likes}</span>
                                                        </div>
                                                    </div>
                                                </article>
                                            }
                                        })
                                }}
                            </Show>
                        }
                    }
                </Show>
            </main>
        </div>
    }
}
