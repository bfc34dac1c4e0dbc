// ============================================================================
// WIZARD VIEWMODEL - Flujo entre pasos + borradores locales
// ============================================================================
// Devuelve valores (URLs, borradores); las vistas aplican los efectos en el DOM
// ============================================================================

use crate::config::CONFIG;
use crate::models::{DraftData, DraftPhase, SessionConfig, WizardStep};
use crate::services::draft_service::DraftService;
use crate::utils::storage::KeyValueStore;

pub struct WizardViewModel<S: KeyValueStore> {
    session: SessionConfig,
    step: WizardStep,
    drafts: DraftService<S>,
}

impl<S: KeyValueStore> WizardViewModel<S> {
    pub fn new(session: SessionConfig, step: WizardStep, store: S) -> Self {
        let drafts = DraftService::new(session.clone(), store);
        Self { session, step, drafts }
    }

    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    fn draft_phase(&self) -> Option<DraftPhase> {
        self.step.draft_phase()
    }

    /// Guardado en cada `input` del formulario del paso
    pub fn save_draft(&self, data: &DraftData) {
        let Some(phase) = self.draft_phase() else {
            return;
        };
        if let Err(e) = self.drafts.save(phase, data) {
            log::error!("❌ [WIZARD] Error guardando borrador: {}", e);
        }
    }

    /// Borrador a aplicar al cargar la página (una sola vez)
    pub fn restore_draft(&self) -> Option<DraftData> {
        self.drafts.restore(self.draft_phase()?)
    }

    pub fn previous_step(&self) -> Option<WizardStep> {
        self.step.previous()
    }

    /// El botón de reinicio solo existe en creación
    pub fn can_reset(&self) -> bool {
        !self.session.is_edit() && self.session.entity_id.is_some()
    }

    /// Reinicio confirmado por el usuario: borra los borradores y
    /// devuelve la URL de reinicio del servidor
    pub fn reset(&self) -> Option<String> {
        if !self.can_reset() {
            return None;
        }
        let entity_id = self.session.entity_id.as_deref()?;
        if let Err(e) = self.drafts.clear_all() {
            log::error!("❌ [WIZARD] Error borrando borradores: {}", e);
        }
        log::info!("🔄 [WIZARD] Reinicio del wizard para {}", entity_id);
        Some(CONFIG.endpoints.reset_url(entity_id))
    }

    /// Envío final del resumen (paso 4): en creación borra los tres borradores
    /// antes de enviar el formulario
    pub fn finalize(&self) {
        if self.session.is_edit() {
            return;
        }
        if let Err(e) = self.drafts.clear_all() {
            log::error!("❌ [WIZARD] Error borrando borradores: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftValue, WizardMode};
    use crate::utils::storage::MemoryStore;

    fn create_session() -> SessionConfig {
        SessionConfig::new(WizardMode::Create, Some("42".to_string()), "business_location")
    }

    fn edit_session() -> SessionConfig {
        SessionConfig::new(WizardMode::Edit, Some("42".to_string()), "business_location")
    }

    fn identity_form(name: &str) -> DraftData {
        let mut data = DraftData::new();
        data.insert("name".to_string(), DraftValue::from(name));
        data.insert("city".to_string(), DraftValue::from("Douala"));
        data
    }

    #[test]
    fn test_edits_are_restored_after_reload() {
        let store = MemoryStore::new();
        let page = WizardViewModel::new(create_session(), WizardStep::Identity, store.clone());
        page.save_draft(&identity_form("C"));
        page.save_draft(&identity_form("Ch"));
        page.save_draft(&identity_form("Chez Mama"));

        let reloaded = WizardViewModel::new(create_session(), WizardStep::Identity, store);
        assert_eq!(reloaded.restore_draft(), Some(identity_form("Chez Mama")));
    }

    #[test]
    fn test_edit_mode_ignores_existing_drafts() {
        let store = MemoryStore::new();
        WizardViewModel::new(create_session(), WizardStep::Identity, store.clone())
            .save_draft(&identity_form("Draft"));

        let page = WizardViewModel::new(edit_session(), WizardStep::Identity, store.clone());
        assert_eq!(page.restore_draft(), None);
        assert!(!page.can_reset());
        assert_eq!(page.reset(), None);

        page.save_draft(&identity_form("Edited"));
        let create_page = WizardViewModel::new(create_session(), WizardStep::Identity, store);
        assert_eq!(create_page.restore_draft(), Some(identity_form("Draft")));
    }

    #[test]
    fn test_steps_without_draft_phase_do_not_store() {
        let store = MemoryStore::new();
        let page = WizardViewModel::new(create_session(), WizardStep::Summary, store.clone());
        page.save_draft(&identity_form("x"));
        assert!(store.is_empty());
        assert_eq!(page.restore_draft(), None);
    }

    #[test]
    fn test_finalize_clears_all_phases() {
        let store = MemoryStore::new();
        for step in [WizardStep::Identity, WizardStep::Hours, WizardStep::Amenities] {
            WizardViewModel::new(create_session(), step, store.clone())
                .save_draft(&identity_form("Chez Mama"));
        }
        assert_eq!(store.len(), 3);

        WizardViewModel::new(create_session(), WizardStep::Summary, store.clone()).finalize();
        assert!(store.is_empty());

        // Volver al paso 1 con la misma entidad: valores por defecto
        let step1 = WizardViewModel::new(create_session(), WizardStep::Identity, store);
        assert_eq!(step1.restore_draft(), None);
    }

    #[test]
    fn test_finalize_in_edit_mode_is_noop() {
        let store = MemoryStore::new();
        store.set_item("wizard_business_location_create_42", "{}").unwrap();
        WizardViewModel::new(edit_session(), WizardStep::Summary, store.clone()).finalize();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_reset_clears_drafts_and_returns_url() {
        let store = MemoryStore::new();
        let page = WizardViewModel::new(create_session(), WizardStep::Hours, store.clone());
        page.save_draft(&identity_form("x"));
        assert!(page.can_reset());

        assert_eq!(
            page.reset(),
            Some("/business/location/wizard/reset/42/".to_string())
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_previous_step_does_not_touch_drafts() {
        let store = MemoryStore::new();
        let page = WizardViewModel::new(create_session(), WizardStep::Amenities, store.clone());
        page.save_draft(&identity_form("x"));
        assert_eq!(page.previous_step(), Some(WizardStep::Hours));
        assert_eq!(store.len(), 1);
    }
}
