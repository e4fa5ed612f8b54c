//! Token persistence in browser `localStorage`.
//!
//! The bearer token is the only persisted auth field; everything else in
//! [`crate::state::auth::AuthState`] is volatile by design. The stored
//! value is an uninterpreted string under a fixed key. Requires a browser
//! environment: outside one (SSR, native tests) reads yield nothing and
//! writes are silent no-ops.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Persistent home for the bearer token.
///
/// Implementations never fail: absence is a normal case, and storage-layer
/// errors degrade to "nothing stored" rather than surfacing to callers.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);

    /// Remove the persisted token.
    fn clear(&self);
}

/// [`TokenStore`] backed by the browser's `localStorage`.
///
/// When no window or storage object is available the store behaves as
/// permanently empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
