//! # crm-client
//!
//! Client-side authentication and session core for the CRM web application.
//! Holds the reactive auth state (token, admin flag, username, rank),
//! mirrors the token to browser `localStorage`, and provides the HTTP
//! helpers that populate or clear that state against the CRM API.
//!
//! This crate is the framework-free state layer underneath the WASM UI
//! shell: pages and route guards read and subscribe to [`state::auth::AuthState`]
//! fields, the login form drives [`net::session::sign_in`], and the logout
//! action drives [`net::session::sign_out`]. Browser-only code (network,
//! `localStorage`) is gated behind the `hydrate` feature, matching the UI
//! crate's hydrate/SSR split.

pub mod net;
pub mod state;
pub mod util;

/// Install the console logger and panic hook for the browser build.
///
/// Called once by the UI shell before any state is constructed. Safe to
/// call more than once; later calls are no-ops.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
