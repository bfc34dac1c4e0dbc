// ============================================================================
// AMENITIES VIEW - Paso 3: comodidades + detalle opcional
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    clear_invalid_marks, closest, event_element, field_by_name, field_value, get_attribute,
    insert_error_banner, is_checked, on_change, on_click, query_all_in, remove_error_banners,
    scroll_into_view_smooth, set_disabled, set_display, set_field_value, submit_form,
};
use crate::models::amenity::AmenityEntry;
use crate::utils::constants::{
    AMENITY_CHECKBOX_SELECTOR, AMENITY_DETAILS_CONTAINER_SELECTOR, NEXT_BUTTON_SELECTOR,
};
use crate::viewmodels::AmenitiesViewModel;
use crate::views::form_fields::DraftBinding;

struct AmenitiesView {
    form: Element,
    draft: DraftBinding,
}

pub fn bind_amenities_step(form: &Element, draft: DraftBinding) -> Result<(), JsValue> {
    let view = Rc::new(AmenitiesView {
        form: form.clone(),
        draft,
    });

    // Visibilidad inicial acorde al borrador restaurado
    for entry in view.read().entries() {
        view.render_details(entry);
    }

    for checkbox in query_all_in(form, AMENITY_CHECKBOX_SELECTOR) {
        let view = view.clone();
        on_change(&checkbox, move |e| {
            if let Some(checkbox) = event_element(&e) {
                view.toggle(&checkbox);
            }
        })?;
    }

    for button in query_all_in(form, NEXT_BUTTON_SELECTOR) {
        let view = view.clone();
        on_click(&button, move |e| {
            e.prevent_default();
            view.advance();
        })?;
    }

    Ok(())
}

impl AmenitiesView {
    fn details_input(&self, entry: &AmenityEntry) -> Option<Element> {
        field_by_name(&self.form, &entry.details_field_name())
    }

    fn read(&self) -> AmenitiesViewModel {
        let entries = query_all_in(&self.form, AMENITY_CHECKBOX_SELECTOR)
            .iter()
            .filter_map(|checkbox| {
                let id = get_attribute(checkbox, "data-amenity-id")?;
                let mut entry = AmenityEntry::new(id, is_checked(checkbox), "");
                entry.details = self
                    .details_input(&entry)
                    .and_then(|input| field_value(&input))
                    .unwrap_or_default();
                Some(entry)
            })
            .collect();
        AmenitiesViewModel::new(entries)
    }

    fn render_details(&self, entry: &AmenityEntry) {
        let Some(input) = self.details_input(entry) else {
            return;
        };
        let container = closest(&input, AMENITY_DETAILS_CONTAINER_SELECTOR)
            .or_else(|| input.parent_element());
        let enabled = entry.details_enabled();
        if let Some(container) = container {
            set_display(&container, if enabled { "block" } else { "none" });
        }
        set_disabled(&input, !enabled);
        set_field_value(&input, &entry.details);
    }

    fn toggle(&self, checkbox: &Element) {
        let Some(id) = get_attribute(checkbox, "data-amenity-id") else {
            return;
        };
        let mut vm = self.read();
        if let Some(entry) = vm.toggle(&id, is_checked(checkbox)) {
            self.render_details(entry);
        }
        self.draft.save_now();
    }

    fn advance(&self) {
        remove_error_banners(&self.form);
        clear_invalid_marks(&self.form);

        match self.read().validate_for_advance() {
            Ok(()) => {
                if let Err(e) = submit_form(&self.form) {
                    log::error!("❌ [STEP3] Error enviando formulario: {:?}", e);
                }
            }
            Err(error) => {
                if let Err(e) = insert_error_banner(&self.form, &error.to_string()) {
                    log::error!("❌ [STEP3] Error mostrando banner: {:?}", e);
                }
                scroll_into_view_smooth(&self.form);
            }
        }
    }
}
