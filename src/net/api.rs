//! REST API helpers for communicating with the CRM backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/profile
//! fetch failures degrade UI behavior without crashing hydration. Error
//! strings carry the backend's `detail` field when one is present.

#![allow(clippy::unused_async)]

use super::types::User;

/// Exchange credentials for a bearer token via `POST /api/login`.
///
/// The backend takes an OAuth2 password form where the `username` field
/// carries the account email.
///
/// # Errors
///
/// Returns the backend's `detail` message (invalid credentials, unverified
/// email, rate limit) or a transport error string.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::LoginResponse;

        let form = format!(
            "username={}&password={}",
            encode_form_value(email),
            encode_form_value(password)
        );
        let resp = gloo_net::http::Request::post("/api/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(&resp).await);
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated user's record from `GET /api/users/me`.
/// Returns `None` if the token is rejected or on the server.
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/users/me")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Create an account via `POST /api/register`. Returns the backend's
/// confirmation message.
///
/// # Errors
///
/// Returns the backend's `detail` message (e.g. email already registered)
/// or a transport error string.
pub async fn register(username: &str, email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ApiMessage;

        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let resp = gloo_net::http::Request::post("/api/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(&resp).await);
        }
        let body: ApiMessage = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err("not available on server".to_owned())
    }
}

/// Request a password-reset email via `POST /api/password-reset/request`.
/// The backend answers generically whether or not the account exists.
///
/// # Errors
///
/// Returns a transport error string; the endpoint itself never signals
/// whether the email matched an account.
pub async fn request_password_reset(email: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ApiMessage;

        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/password-reset/request")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(&resp).await);
        }
        let body: ApiMessage = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Pull the `detail` field out of a FastAPI error response, falling back
/// to the HTTP status.
#[cfg(feature = "hydrate")]
async fn error_detail(resp: &gloo_net::http::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("request failed: {}", resp.status()),
    }
}

#[cfg(feature = "hydrate")]
fn encode_form_value(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}
