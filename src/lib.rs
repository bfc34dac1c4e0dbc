// ============================================================================
// BUSINESS LOCATION WIZARD - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: bindings por paso sobre los formularios del servidor (solo wasm)
// - ViewModels: validación + transiciones del wizard (sin DOM, testeables)
// - Services: borradores locales + comunicación HTTP
// - State: estado compartido del paso de imágenes con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use wasm_logger::Config;

    use crate::app::WizardApp;
    use crate::config::CONFIG;

    // Instancia global del wizard montado
    thread_local! {
        static APP: RefCell<Option<WizardApp>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(Config::default());
        }
        log::info!("🚀 Business Location Wizard - Rust Puro + MVVM");

        let app = WizardApp::mount()?;
        APP.with(|app_cell| {
            *app_cell.borrow_mut() = Some(app);
        });

        Ok(())
    }

    /// Paso montado (0 si el wizard no está montado), llamable desde JavaScript
    #[wasm_bindgen]
    pub fn current_step() -> u8 {
        APP.with(|app_cell| {
            app_cell
                .borrow()
                .as_ref()
                .map(|app| app.step().number())
                .unwrap_or(0)
        })
    }
}
