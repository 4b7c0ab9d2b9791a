mod access;
mod admin;
mod auth;
pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
