//! Browser localStorage persistence for the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is one JSON blob under a single key: read once at startup,
//! written on login/signup, removed on logout. Native builds have no storage
//! and report no session.

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "sketchsocial_user";

/// Load the persisted session, if any. Corrupt records are treated as absent.
pub fn load() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `user` as the current session.
pub fn save(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove the persisted session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
