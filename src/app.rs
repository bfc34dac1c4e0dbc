// ============================================================================
// APP - Montaje del wizard sobre la página renderizada por el servidor
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, Url};

use crate::dom::{current_href, get_attribute, get_element_by_id, query_all};
use crate::models::{SessionConfig, WizardStep};
use crate::utils::constants::WIZARD_CONTAINER_SELECTOR;
use crate::utils::storage::BrowserStorage;
use crate::viewmodels::WizardViewModel;
use crate::views::{self, DraftBinding, PageWizard};

/// Aplicación principal
pub struct WizardApp {
    wizard: PageWizard,
}

impl WizardApp {
    /// Lee la sesión y el paso de la página y enlaza la vista del paso activo
    pub fn mount() -> Result<Self, JsValue> {
        let session = read_session();
        let (step, form) = resolve_step(step_from_url());
        log::info!(
            "🧭 [WIZARD] Paso {} ({:?}, entidad {:?})",
            step.number(),
            session.mode,
            session.entity_id
        );

        let wizard: PageWizard = Rc::new(WizardViewModel::new(session, step, BrowserStorage));
        views::bind_reset(&wizard)?;

        let Some(form) = form else {
            log::warn!("⚠️ [WIZARD] Ningún formulario del wizard en la página");
            return Ok(Self { wizard });
        };
        views::bind_previous(&form, &wizard)?;

        match step {
            WizardStep::Identity => {
                let draft = DraftBinding::attach(&form, wizard.clone())?;
                views::bind_identity_step(&form, draft)?;
            }
            WizardStep::Hours => {
                let draft = DraftBinding::attach(&form, wizard.clone())?;
                views::bind_hours_step(&form, draft)?;
            }
            WizardStep::Amenities => {
                let draft = DraftBinding::attach(&form, wizard.clone())?;
                views::bind_amenities_step(&form, draft)?;
            }
            WizardStep::Summary => views::bind_summary_step(&form, &wizard)?,
            WizardStep::Images => views::bind_images_step(&form)?,
        }

        Ok(Self { wizard })
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }
}

/// `data-is-edit` / `data-business-id` del contenedor
fn read_session() -> SessionConfig {
    let container = query_all(WIZARD_CONTAINER_SELECTOR).into_iter().next();
    let is_edit = container.as_ref().and_then(|c| get_attribute(c, "data-is-edit"));
    let entity_id = container.as_ref().and_then(|c| get_attribute(c, "data-business-id"));
    SessionConfig::from_data_attributes(is_edit.as_deref(), entity_id.as_deref())
}

fn step_from_url() -> WizardStep {
    let raw = current_href()
        .and_then(|href| Url::new(&href).ok())
        .and_then(|url| url.search_params().get("step"));
    WizardStep::from_query(raw.as_deref())
}

/// Formulario del paso pedido; si no está en la página, el primero presente
fn resolve_step(requested: WizardStep) -> (WizardStep, Option<Element>) {
    WizardStep::resolve(requested, |step| get_element_by_id(&step.form_id()))
}
