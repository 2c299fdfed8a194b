//! Hardcoded demo fixtures served by the mock backend.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use super::types::{Artwork, Creator, User};
use crate::util::date;

fn artwork(id: &str, title: &str, photo: &str, creator_id: &str, username: &str, likes: i64) -> Artwork {
    Artwork {
        id: id.to_owned(),
        title: title.to_owned(),
        image_url: format!(
            "https://images.unsplash.com/{photo}?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&h=500&q=80"
        ),
        creator: Creator {
            id: creator_id.to_owned(),
            username: username.to_owned(),
            avatar_url: None,
        },
        likes,
        liked: false,
        created_at: date::now_iso(),
    }
}

/// The full explore feed.
pub fn explore_artworks() -> Vec<Artwork> {
    vec![
        artwork("art-1", "Abstract Landscape", "photo-1579783902614-a3fb3927b6a5", "user-1", "artist123", 24),
        artwork("art-2", "Digital Portrait", "photo-1547891654-e66ed7ebb968", "user-2", "creativegenius", 42),
        artwork("art-3", "Geometric Patterns", "photo-1605106702734-205df224ecce", "user-3", "artlover", 15),
        artwork("art-4", "Color Explosion", "photo-1541701494587-cb58502866ab", "user-4", "colormaster", 38),
        artwork("art-5", "Minimalist Design", "photo-1552083375-1447ce886485", "user-5", "minimalist", 29),
        artwork("art-6", "Nature Inspired", "photo-1501472312651-726afe119ff1", "user-6", "natureartist", 52),
    ]
}

/// The artworks highlighted on the landing page.
pub fn featured_artworks() -> Vec<Artwork> {
    explore_artworks().into_iter().take(3).collect()
}

/// Artworks attributed to the given user on their own profile.
pub fn user_artworks(user: &User) -> Vec<Artwork> {
    let mut items = vec![
        artwork("user-art-1", "My First Drawing", "photo-1526304640581-d334cdbbf45e", &user.id, &user.username, 12),
        artwork("user-art-2", "Abstract Thoughts", "photo-1482160549825-59d1b23f3d73", &user.id, &user.username, 8),
    ];
    for item in &mut items {
        item.creator.avatar_url = user.avatar_url.clone();
    }
    items
}

/// Artworks the current viewer has already liked.
pub fn liked_artworks() -> Vec<Artwork> {
    let mut items = vec![
        artwork("liked-art-1", "Digital Portrait", "photo-1547891654-e66ed7ebb968", "user-2", "creativegenius", 42),
        artwork("liked-art-2", "Color Explosion", "photo-1541701494587-cb58502866ab", "user-4", "colormaster", 38),
    ];
    for item in &mut items {
        item.liked = true;
    }
    items
}
