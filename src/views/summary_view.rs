// ============================================================================
// SUMMARY VIEW - Paso 4: resumen, limpia los borradores y envía
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, query_all_in, submit_form};
use crate::utils::constants::NEXT_BUTTON_SELECTOR;
use crate::views::form_fields::PageWizard;

pub fn bind_summary_step(form: &Element, wizard: &PageWizard) -> Result<(), JsValue> {
    for button in query_all_in(form, NEXT_BUTTON_SELECTOR) {
        let form = form.clone();
        let wizard = wizard.clone();
        on_click(&button, move |e| {
            e.prevent_default();
            wizard.finalize();
            log::info!("✅ [WIZARD] Resumen validado, enviando");
            if let Err(err) = submit_form(&form) {
                log::error!("❌ [STEP4] Error enviando formulario: {:?}", err);
            }
        })?;
    }
    Ok(())
}
