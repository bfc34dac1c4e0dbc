// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod image_state;

pub use reactivity::*;
pub use image_state::*;
