use super::*;

fn user() -> User {
    User {
        id: "user-1".to_owned(),
        username: "artist123".to_owned(),
        email: "artist123@example.com".to_owned(),
        avatar_url: None,
    }
}

#[test]
fn user_initial_is_uppercased() {
    assert_eq!(user().initial(), "A");
}

#[test]
fn user_initial_of_empty_username_is_empty() {
    let mut u = user();
    u.username.clear();
    assert_eq!(u.initial(), "");
}

#[test]
fn as_creator_carries_identity_fields() {
    let creator = user().as_creator();
    assert_eq!(creator.id, "user-1");
    assert_eq!(creator.username, "artist123");
    assert!(creator.avatar_url.is_none());
}

#[test]
fn artwork_serde_round_trip() {
    let artwork = Artwork {
        id: "art-1".to_owned(),
        title: "Abstract Landscape".to_owned(),
        image_url: "https://example.com/a.png".to_owned(),
        creator: user().as_creator(),
        likes: 24,
        liked: false,
        created_at: "2024-05-14T12:00:00.000Z".to_owned(),
    };
    let json = serde_json::to_string(&artwork).expect("serialize");
    let back: Artwork = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, artwork);
}

#[test]
fn user_json_uses_snake_case_fields() {
    let json = serde_json::to_value(user()).expect("serialize");
    assert!(json.get("username").is_some());
    assert!(json.get("avatar_url").is_some());
}
