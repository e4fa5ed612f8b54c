//! Session handlers gluing the HTTP API, token persistence, and
//! [`AuthState`] together. These are the login/logout entry points the UI
//! shell calls. `AuthState` itself never writes the persisted token; the
//! single write happens here, on a successful login.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api;
use crate::state::auth::AuthState;

/// Log in with email and password.
///
/// On success the bearer token is persisted, the `token` field is set, and
/// permissions are populated from the user's profile. A failed profile
/// fetch leaves the session signed in with permissions unchanged; the
/// next [`restore`] retries it.
///
/// # Errors
///
/// Returns the login error message from the backend, or a stub error when
/// not running in a browser.
pub async fn sign_in(auth: &AuthState, email: &str, password: &str) -> Result<(), String> {
    let token = api::login(email, password).await?;
    auth.storage().save(&token);
    auth.set_token(Some(token.clone()));
    match api::fetch_current_user(&token).await {
        Some(user) => auth.set_permissions_for_user(&user.permissions()),
        None => log::warn!("profile fetch failed after login; permissions unchanged"),
    }
    Ok(())
}

/// Restore a persisted session after a reload.
///
/// Seeds the token from storage, then refreshes permissions from the API.
/// A missing token or a failed fetch is a normal signed-out/offline state,
/// not an error; the token is kept until an explicit [`sign_out`].
pub async fn restore(auth: &AuthState) {
    auth.initialize();
    let Some(token) = auth.token.get() else {
        return;
    };
    match api::fetch_current_user(&token).await {
        Some(user) => auth.set_permissions_for_user(&user.permissions()),
        None => log::warn!("stored token did not yield a profile"),
    }
}

/// Fire-and-forget [`restore`], for the UI shell's mount hook.
#[cfg(feature = "hydrate")]
pub fn spawn_restore(auth: &AuthState) {
    let auth = auth.clone();
    wasm_bindgen_futures::spawn_local(async move {
        restore(&auth).await;
    });
}

/// Log out: reset all auth fields and drop the persisted token.
///
/// Purely client-side; the backend has no logout endpoint.
pub fn sign_out(auth: &AuthState) {
    auth.clear_auth();
}
