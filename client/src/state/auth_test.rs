use super::*;

#[test]
fn default_state_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn a_present_user_is_authenticated() {
    let state = AuthState {
        user: Some(User {
            id: "user-1".to_owned(),
            username: "artist123".to_owned(),
            email: "artist123@example.com".to_owned(),
            avatar_url: None,
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
