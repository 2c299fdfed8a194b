//! Artwork feed state and like-toggle logic.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::Artwork;

/// A loaded list of artworks plus its fetch status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub items: Vec<Artwork>,
    pub loading: bool,
}

impl FeedState {
    /// Flip the like flag on one artwork, adjusting its count by one.
    ///
    /// Returns the new liked state, or `None` when the id is not in the feed.
    /// Toggling twice restores both the flag and the count.
    pub fn toggle_like(&mut self, id: &str) -> Option<bool> {
        let artwork = self.items.iter_mut().find(|a| a.id == id)?;
        Some(toggle_like(artwork))
    }
}

/// Flip `liked` in place and adjust the like count, returning the new flag.
pub fn toggle_like(artwork: &mut Artwork) -> bool {
    artwork.liked = !artwork.liked;
    artwork.likes += if artwork.liked { 1 } else { -1 };
    artwork.liked
}
