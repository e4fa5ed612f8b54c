//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in small observable containers ([`store::Store`]) so pages
//! and guards can read current values and subscribe to changes without
//! depending on the UI framework. [`auth::AuthState`] groups the four
//! auth-related stores behind the operations the rest of the client uses.

pub mod auth;
pub mod store;
