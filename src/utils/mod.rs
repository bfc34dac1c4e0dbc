// Utils compartidos

pub mod constants;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod leaflet_ffi;
#[cfg(target_arch = "wasm32")]
pub mod flatpickr_ffi;

pub use constants::*;
pub use storage::*;
