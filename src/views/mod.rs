// ============================================================================
// VIEWS - Un binding por paso del wizard (solo wasm)
// ============================================================================

pub mod form_fields;
pub mod navigation;
pub mod identity_view;
pub mod map_pick_view;
pub mod hours_view;
pub mod amenities_view;
pub mod summary_view;
pub mod images_view;

pub use form_fields::{DraftBinding, PageWizard};
pub use navigation::{bind_previous, bind_reset};
pub use identity_view::bind_identity_step;
pub use hours_view::bind_hours_step;
pub use amenities_view::bind_amenities_step;
pub use summary_view::bind_summary_step;
pub use images_view::bind_images_step;
