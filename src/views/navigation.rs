// ============================================================================
// NAVIGATION - Botón "Précédent" y reinicio del wizard
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, Url};

use crate::dom::{confirm, current_href, get_element_by_id, navigate_to, on_click, query_all_in};
use crate::models::WizardStep;
use crate::utils::constants::{PREV_BUTTON_SELECTOR, RESET_BUTTON_ID, RESET_CONFIRM_MESSAGE};
use crate::views::form_fields::PageWizard;

/// URL actual con `step` reemplazado
fn step_url(step: WizardStep) -> Result<String, JsValue> {
    let href = current_href().ok_or_else(|| JsValue::from_str("No location"))?;
    let url = Url::new(&href)?;
    url.search_params().set("step", &step.number().to_string());
    Ok(url.href())
}

/// Retroceso: sin guardar ni borrar borradores
pub fn bind_previous(form: &Element, wizard: &PageWizard) -> Result<(), JsValue> {
    let Some(previous) = wizard.previous_step() else {
        return Ok(());
    };
    for button in query_all_in(form, PREV_BUTTON_SELECTOR) {
        on_click(&button, move |e| {
            e.prevent_default();
            log::info!("⬅️ [WIZARD] Volviendo al paso {}", previous.number());
            if let Err(err) = step_url(previous).and_then(|url| navigate_to(&url)) {
                log::error!("❌ [WIZARD] Error navegando al paso anterior: {:?}", err);
            }
        })?;
    }
    Ok(())
}

/// Botón de reinicio (solo creación)
pub fn bind_reset(wizard: &PageWizard) -> Result<(), JsValue> {
    if !wizard.can_reset() {
        return Ok(());
    }
    let Some(button) = get_element_by_id(RESET_BUTTON_ID) else {
        return Ok(());
    };

    let wizard = wizard.clone();
    on_click(&button, move |e| {
        e.prevent_default();
        if !confirm(RESET_CONFIRM_MESSAGE) {
            return;
        }
        if let Some(url) = wizard.reset() {
            if let Err(err) = navigate_to(&url) {
                log::error!("❌ [WIZARD] Error navegando a {}: {:?}", url, err);
            }
        }
    })
}
