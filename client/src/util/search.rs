//! Case-insensitive artwork search, recomputed per keystroke on Explore.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::Artwork;

/// Keep artworks whose title or creator username contains `query`,
/// case-insensitively. An empty (or whitespace) query keeps everything.
pub fn filter_artworks(items: &[Artwork], query: &str) -> Vec<Artwork> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&needle)
                || a.creator.username.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
