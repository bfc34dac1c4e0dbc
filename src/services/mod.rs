pub mod draft_service;

#[cfg(target_arch = "wasm32")]
pub mod api_client;

pub use draft_service::*;

#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;
