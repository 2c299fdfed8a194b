//! Feed card for one artwork: image link, creator row, like button.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Artwork;
use crate::state::auth::AuthState;

/// Artwork card used by the landing, explore, and profile grids.
///
/// Like state is kept locally so the card responds instantly; `on_like`
/// reports `(artwork_id, now_liked)` so the page can notify the backend.
#[component]
pub fn ArtCard(
    artwork: Artwork,
    #[prop(optional)] on_like: Option<Callback<(String, bool)>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let liked = RwSignal::new(artwork.liked);
    let likes = RwSignal::new(artwork.likes);

    let artwork_id = artwork.id.clone();
    let on_like_click = move |_| {
        if !auth.get().is_authenticated() {
            return;
        }
        let now_liked = !liked.get();
        liked.set(now_liked);
        likes.update(|n| *n += if now_liked { 1 } else { -1 });
        if let Some(cb) = on_like {
            cb.run((artwork_id.clone(), now_liked));
        }
    };

    let creator_initial = artwork
        .creator
        .username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let creator_avatar = artwork.creator.avatar_url.clone();
    let has_avatar = creator_avatar.is_some();

    view! {
        <div class="art-card">
            <A href=format!("/artwork/{}", artwork.id)>
                <img class="art-card__image" src=artwork.image_url.clone() alt=artwork.title.clone()/>
            </A>
            <div class="art-card__footer">
                <A href=format!("/user/{}", artwork.creator.id) attr:class="art-card__creator">
                    <span class="avatar avatar--small">
                        <Show
                            when=move || has_avatar
                            fallback={
                                let initial = creator_initial.clone();
                                move || view! { <span class="avatar__fallback">{initial.clone()}</span> }
                            }
                        >
                            <img src=creator_avatar.clone().unwrap_or_default() alt=""/>
                        </Show>
                    </span>
                    <span class="art-card__username">{artwork.creator.username.clone()}</span>
                </A>
                <div class="art-card__likes">
                    <button
                        class="art-card__like-button"
                        class=("art-card__like-button--liked", move || liked.get())
                        disabled=move || !auth.get().is_authenticated()
                        on:click=on_like_click
                    >
                        "\u{2665}"
                    </button>
                    <span class="art-card__like-count">{move || likes.get()}</span>
                </div>
            </div>
        </div>
    }
}
