//! Browser localStorage persistence of the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token under this fixed key is the session: it exists exactly while a
//! session is active, survives reloads, and is attached to authenticated
//! requests. SSR paths safely no-op so server rendering stays deterministic.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted token, if any.
#[must_use]
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(STORAGE_KEY).ok().flatten().filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token. Best-effort: storage failures are ignored.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token, ending the stored session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
