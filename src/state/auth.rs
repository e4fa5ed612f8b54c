#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::net::types::UserData;
use crate::state::store::Store;
use crate::util::storage::{LocalTokenStore, TokenStore};

/// Authentication state: bearer token, admin flag, username, and rank.
///
/// The four fields are independent observable stores; no field constrains
/// another. Only `token` is mirrored to persistent storage; the other
/// three are volatile and rebuilt from the API after a reload. Cloning an
/// `AuthState` shares the underlying stores, so one instance can be handed
/// to pages, guards, and the session layer alike.
#[derive(Clone)]
pub struct AuthState {
    pub token: Store<Option<String>>,
    pub is_admin: Store<bool>,
    pub username: Store<Option<String>>,
    pub user_rank: Store<Option<Value>>,
    storage: Rc<dyn TokenStore>,
}

impl AuthState {
    /// Auth state backed by browser `localStorage`.
    pub fn new() -> Self {
        Self::with_storage(Rc::new(LocalTokenStore))
    }

    /// Auth state with an injected token store (tests, SSR shells).
    pub fn with_storage(storage: Rc<dyn TokenStore>) -> Self {
        Self {
            token: Store::new(None),
            is_admin: Store::new(false),
            username: Store::new(None),
            user_rank: Store::new(None),
            storage,
        }
    }

    /// Seed `token` from persistent storage.
    ///
    /// An absent value, or an environment without storage, leaves the field
    /// at its default. Never fails.
    pub fn initialize(&self) {
        if let Some(stored) = self.storage.load() {
            self.token.set(Some(stored));
        }
    }

    /// Raw token setter. Does not touch persistent storage.
    pub fn set_token(&self, token: Option<String>) {
        self.token.set(token);
    }

    /// Whether a bearer token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Apply a partial permissions record.
    ///
    /// The update policy is asymmetric and load-bearing, preserved exactly:
    /// `is_admin` is applied whenever the field is provided at all,
    /// including an explicit `false`; `rank` is applied only when provided
    /// and truthy (null, `false`, `0`, NaN, and `""` count as absent);
    /// `username` is applied only when provided and non-empty. Fields not
    /// present leave the current values unchanged.
    pub fn set_permissions_for_user(&self, user: &UserData) {
        if let Some(is_admin) = user.is_admin {
            self.is_admin.set(is_admin);
        }
        if let Some(rank) = &user.rank {
            if truthy(rank) {
                self.user_rank.set(Some(rank.clone()));
            }
        }
        if let Some(username) = &user.username {
            if !username.is_empty() {
                self.username.set(Some(username.clone()));
            }
        }
    }

    /// Reset every field to its default and drop the persisted token.
    ///
    /// Runs synchronously to completion, so no caller on this thread can
    /// observe a partially cleared state. Outside a browser the storage
    /// removal is a silent no-op.
    pub fn clear_auth(&self) {
        self.token.set(None);
        self.is_admin.set(false);
        self.username.set(None);
        self.user_rank.set(None);
        self.storage.clear();
    }

    pub(crate) fn storage(&self) -> Rc<dyn TokenStore> {
        Rc::clone(&self.storage)
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("token", &self.token)
            .field("is_admin", &self.is_admin)
            .field("username", &self.username)
            .field("user_rank", &self.user_rank)
            .finish_non_exhaustive()
    }
}

/// JS-style truthiness for the opaque rank value.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
