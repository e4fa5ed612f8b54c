//! Network layer: API payload types, HTTP helpers, and the session
//! handlers that drive [`crate::state::auth::AuthState`].

pub mod api;
pub mod session;
pub mod types;
