// ============================================================================
// FORM FIELDS - Lectura/escritura de los campos del formulario + borradores
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{
    field_name, field_type, field_value, is_checked, on_input, query_all, query_all_in, set_checked,
    set_field_value,
};
use crate::models::{capture_field, is_draftable_field, restore_field, DraftData, FieldRestore};
use crate::utils::storage::BrowserStorage;
use crate::viewmodels::WizardViewModel;

pub type PageWizard = Rc<WizardViewModel<BrowserStorage>>;

const FIELD_SELECTOR: &str = "input, textarea, select";

/// Campos con `name` que entran en el borrador, con su tipo
fn draftable_fields(form: &Element) -> impl Iterator<Item = (Element, String, String)> {
    query_all_in(form, FIELD_SELECTOR)
        .into_iter()
        .filter_map(|element| {
            let name = field_name(&element)?;
            let kind = field_type(&element);
            is_draftable_field(&kind, &name, &CONFIG.endpoints.csrf_field_name)
                .then_some((element, name, kind))
        })
}

/// Mapa nombre -> valor de todos los campos con `name` del formulario
pub fn snapshot_form(form: &Element) -> DraftData {
    draftable_fields(form)
        .filter_map(|(element, name, kind)| {
            capture_field(&kind, field_value(&element), is_checked(&element)).map(|v| (name, v))
        })
        .collect()
}

/// Aplica un borrador: los campos se emparejan por `name`
pub fn apply_draft(form: &Element, draft: &DraftData) {
    for (element, name, kind) in draftable_fields(form) {
        let Some(saved) = draft.get(&name) else {
            continue;
        };
        match restore_field(&kind, field_value(&element).as_deref(), saved) {
            FieldRestore::Checked(checked) => set_checked(&element, checked),
            FieldRestore::Value(value) => set_field_value(&element, &value),
        }
    }
}

/// Borrador del paso enlazado a su formulario
#[derive(Clone)]
pub struct DraftBinding {
    form: Element,
    wizard: PageWizard,
}

impl DraftBinding {
    /// Restaura el borrador (una vez) y guarda en cada `input`.
    /// En edición no hace nada.
    pub fn attach(form: &Element, wizard: PageWizard) -> Result<Self, JsValue> {
        let binding = Self {
            form: form.clone(),
            wizard,
        };
        if !binding.wizard.session().drafts_enabled() {
            return Ok(binding);
        }

        if let Some(draft) = binding.wizard.restore_draft() {
            log::info!("📥 [DRAFT] Restaurando {} campos", draft.len());
            apply_draft(&binding.form, &draft);
        }

        let on_change = binding.clone();
        on_input(&binding.form, move |_| on_change.save_now())?;
        Ok(binding)
    }

    /// Guardado explícito tras cambios hechos por código (no disparan `input`)
    pub fn save_now(&self) {
        if self.wizard.session().drafts_enabled() {
            self.wizard.save_draft(&snapshot_form(&self.form));
        }
    }
}

/// Token anti-CSRF del formulario renderizado por el servidor
pub fn csrf_token() -> String {
    query_all(&format!("input[name=\"{}\"]", CONFIG.endpoints.csrf_field_name))
        .first()
        .and_then(field_value)
        .unwrap_or_default()
}
