//! Domain DTOs shared by pages, components, and the backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror what a real art-sharing API would return so the mock
//! backend can be swapped for an HTTP implementation without touching pages.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The author attached to an artwork.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Avatar image URL, if the user has one.
    pub avatar_url: Option<String>,
}

/// A posted artwork as shown in feeds and detail views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique artwork identifier.
    pub id: String,
    /// User-supplied title.
    pub title: String,
    /// Image location: an HTTP URL or a `data:` URI for fresh posts.
    pub image_url: String,
    /// The posting user.
    pub creator: Creator,
    /// Total like count.
    pub likes: i64,
    /// Whether the current viewer has liked this artwork.
    pub liked: bool,
    /// Creation timestamp, ISO 8601.
    pub created_at: String,
}

/// An authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Login email.
    pub email: String,
    /// Avatar image URL, if the user has one.
    pub avatar_url: Option<String>,
}

impl User {
    /// Uppercase first letter of the username, used as the avatar fallback.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }

    /// The `Creator` record this user appears as on their own posts.
    pub fn as_creator(&self) -> Creator {
        Creator {
            id: self.id.clone(),
            username: self.username.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}
