//! Backend boundary: the `ArtBackend` trait and its mock implementation.
//!
//! DESIGN
//! ======
//! Pages depend on `ArtBackend` operations only, so the demo-data mock can be
//! replaced with an HTTP client without touching UI code. The mock simulates
//! network latency in the browser and resolves immediately in native tests.
//!
//! ERROR HANDLING
//! ==============
//! Operations return `Result`/`Option` with user-facing messages; callers
//! convert failures into toasts rather than crashing the view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::demo;
use super::types::{Artwork, User};
use crate::util::date;

/// Simulated round-trip for feed and detail fetches, in milliseconds.
pub const FETCH_DELAY_MS: u64 = 800;
/// Simulated round-trip for login and signup.
pub const AUTH_DELAY_MS: u64 = 1000;
/// Simulated round-trip for posting an artwork.
pub const CREATE_DELAY_MS: u64 = 1500;

/// Operations the UI needs from an artwork backend.
///
/// Futures are not `Send`; the client runs on a single-threaded WASM runtime.
#[allow(async_fn_in_trait)]
pub trait ArtBackend {
    /// Establish a session for `email`. No password is verified.
    async fn authenticate(&self, email: &str) -> Result<User, String>;
    /// Create an account and session for `username` + `email`.
    async fn register(&self, username: &str, email: &str) -> Result<User, String>;
    /// The full explore feed.
    async fn fetch_artworks(&self) -> Vec<Artwork>;
    /// One artwork by id, or `None` when unknown.
    async fn fetch_artwork(&self, id: &str) -> Option<Artwork>;
    /// Landing-page highlights.
    async fn fetch_featured(&self) -> Vec<Artwork>;
    /// Artworks posted by `user`.
    async fn fetch_user_artworks(&self, user: &User) -> Vec<Artwork>;
    /// Artworks the current viewer has liked.
    async fn fetch_liked_artworks(&self) -> Vec<Artwork>;
    /// Persist a like flip. The mock only logs it.
    async fn set_liked(&self, id: &str, liked: bool);
    /// Post a new artwork on behalf of `creator`.
    async fn create_artwork(&self, title: &str, image_data: &str, creator: &User) -> Result<Artwork, String>;
}

/// Sleep in the browser; resolve immediately in native tests.
async fn simulate_latency(ms: u64) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

/// Demo backend serving hardcoded fixtures.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockBackend;

impl MockBackend {
    pub fn new() -> Self {
        Self
    }

    fn fabricate_user(username: &str, email: &str) -> User {
        User {
            id: format!("user-{}", Uuid::new_v4()),
            username: username.to_owned(),
            email: email.to_owned(),
            avatar_url: None,
        }
    }
}

impl ArtBackend for MockBackend {
    async fn authenticate(&self, email: &str) -> Result<User, String> {
        simulate_latency(AUTH_DELAY_MS).await;
        let email = email.trim();
        if email.is_empty() {
            return Err("Email is required.".to_owned());
        }
        let username = email.split('@').next().unwrap_or(email);
        Ok(Self::fabricate_user(username, email))
    }

    async fn register(&self, username: &str, email: &str) -> Result<User, String> {
        simulate_latency(AUTH_DELAY_MS).await;
        let username = username.trim();
        let email = email.trim();
        if username.is_empty() {
            return Err("Username is required.".to_owned());
        }
        if email.is_empty() {
            return Err("Email is required.".to_owned());
        }
        Ok(Self::fabricate_user(username, email))
    }

    async fn fetch_artworks(&self) -> Vec<Artwork> {
        simulate_latency(FETCH_DELAY_MS).await;
        demo::explore_artworks()
    }

    async fn fetch_artwork(&self, id: &str) -> Option<Artwork> {
        simulate_latency(FETCH_DELAY_MS).await;
        demo::explore_artworks().into_iter().find(|a| a.id == id)
    }

    async fn fetch_featured(&self) -> Vec<Artwork> {
        simulate_latency(FETCH_DELAY_MS).await;
        demo::featured_artworks()
    }

    async fn fetch_user_artworks(&self, user: &User) -> Vec<Artwork> {
        simulate_latency(FETCH_DELAY_MS).await;
        demo::user_artworks(user)
    }

    async fn fetch_liked_artworks(&self) -> Vec<Artwork> {
        simulate_latency(FETCH_DELAY_MS).await;
        demo::liked_artworks()
    }

    async fn set_liked(&self, id: &str, liked: bool) {
        log::info!("artwork {id} {}", if liked { "liked" } else { "unliked" });
    }

    async fn create_artwork(&self, title: &str, image_data: &str, creator: &User) -> Result<Artwork, String> {
        simulate_latency(CREATE_DELAY_MS).await;
        let title = title.trim();
        if title.is_empty() {
            return Err("Please provide a title for your artwork.".to_owned());
        }
        if image_data.is_empty() {
            return Err("Please create or upload an image.".to_owned());
        }
        Ok(Artwork {
            id: format!("art-{}", Uuid::new_v4()),
            title: title.to_owned(),
            image_url: image_data.to_owned(),
            creator: creator.as_creator(),
            likes: 0,
            liked: false,
            created_at: date::now_iso(),
        })
    }
}
