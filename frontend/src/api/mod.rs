mod admin;
mod attendance;
mod auth;
pub mod client;
pub mod types;

pub use attendance::PhotoUpload;
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
