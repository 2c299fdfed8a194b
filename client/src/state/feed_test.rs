use super::*;
use crate::net::demo;

fn feed() -> FeedState {
    FeedState { items: demo::explore_artworks(), loading: false }
}

#[test]
fn toggle_like_flips_flag_and_count() {
    let mut feed = feed();
    assert_eq!(feed.toggle_like("art-1"), Some(true));

    let artwork = feed.items.iter().find(|a| a.id == "art-1").expect("art-1");
    assert!(artwork.liked);
    assert_eq!(artwork.likes, 25);
}

#[test]
fn toggling_twice_restores_the_original_state() {
    let mut feed = feed();
    let before = feed.items.clone();

    assert_eq!(feed.toggle_like("art-3"), Some(true));
    assert_eq!(feed.toggle_like("art-3"), Some(false));
    assert_eq!(feed.items, before);
}

#[test]
fn unliking_an_already_liked_artwork_decrements() {
    let mut feed = FeedState { items: demo::liked_artworks(), loading: false };
    assert_eq!(feed.toggle_like("liked-art-1"), Some(false));

    let artwork = &feed.items[0];
    assert!(!artwork.liked);
    assert_eq!(artwork.likes, 41);
}

#[test]
fn toggle_like_on_unknown_id_is_none() {
    assert_eq!(feed().toggle_like("art-99"), None);
}
