// ============================================================================
// IDENTITY VIEW - Paso 1: campos obligatorios + fecha + envío
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{
    clear_invalid_marks, field_by_name, on_click, query_all_in, scroll_into_view_smooth,
    set_invalid, submit_form,
};
use crate::utils::constants::NEXT_BUTTON_SELECTOR;
use crate::utils::flatpickr_ffi::attach_date_picker;
use crate::viewmodels::{IdentityError, IdentityViewModel};
use crate::views::form_fields::{snapshot_form, DraftBinding};
use crate::views::map_pick_view;

pub fn bind_identity_step(form: &Element, draft: DraftBinding) -> Result<(), JsValue> {
    if let Err(e) = attach_date_picker(&CONFIG.date_picker) {
        log::warn!("⚠️ [DATE] No se pudo montar el selector de fecha: {:?}", e);
    }

    for button in query_all_in(form, NEXT_BUTTON_SELECTOR) {
        let form = form.clone();
        on_click(&button, move |e| {
            e.prevent_default();
            advance(&form);
        })?;
    }
    map_pick_view::bind_map_pick(draft)
}

fn advance(form: &Element) {
    clear_invalid_marks(form);

    match IdentityViewModel::validate(&snapshot_form(form)) {
        Ok(()) => {
            if let Err(e) = submit_form(form) {
                log::error!("❌ [STEP1] Error enviando formulario: {:?}", e);
            }
        }
        Err(IdentityError::MissingFields(fields)) => {
            for name in &fields {
                if let Some(field) = field_by_name(form, name) {
                    set_invalid(&field, true);
                }
            }
            scroll_into_view_smooth(form);
        }
    }
}
