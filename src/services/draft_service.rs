// ============================================================================
// DRAFT SERVICE - Borradores locales del wizard (solo modo creación)
// ============================================================================

use crate::models::{DraftData, DraftPhase, SessionConfig};
use crate::utils::storage::KeyValueStore;

/// Decodifica un borrador guardado. Cualquier error => sin borrador.
pub fn decode_draft(raw: &str) -> Option<DraftData> {
    match serde_json::from_str::<DraftData>(raw) {
        Ok(data) => Some(data),
        Err(e) => {
            log::debug!("⚠️ [DRAFT] Borrador ilegible, se ignora: {}", e);
            None
        }
    }
}

pub struct DraftService<S: KeyValueStore> {
    session: SessionConfig,
    store: S,
}

impl<S: KeyValueStore> DraftService<S> {
    pub fn new(session: SessionConfig, store: S) -> Self {
        Self { session, store }
    }

    pub fn is_enabled(&self) -> bool {
        self.session.drafts_enabled()
    }

    /// Clave de almacenamiento de una fase (None si los borradores están desactivados)
    pub fn key(&self, phase: DraftPhase) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }
        let entity_id = self.session.entity_id.as_deref()?;
        Some(phase.storage_key(&self.session.entity_kind, entity_id))
    }

    /// Guarda el formulario completo de la fase (sobrescribe el anterior)
    pub fn save(&self, phase: DraftPhase, data: &DraftData) -> Result<(), String> {
        let Some(key) = self.key(phase) else {
            return Ok(());
        };
        let json = serde_json::to_string(data)
            .map_err(|e| format!("Error serializando borrador: {}", e))?;
        self.store.set_item(&key, &json)
    }

    pub fn restore(&self, phase: DraftPhase) -> Option<DraftData> {
        let key = self.key(phase)?;
        let raw = self.store.get_item(&key)?;
        let data = decode_draft(&raw)?;
        log::info!("📋 [DRAFT] Borrador restaurado: {} ({} campos)", key, data.len());
        Some(data)
    }

    /// Borra las tres fases de la entidad
    pub fn clear_all(&self) -> Result<(), String> {
        for phase in DraftPhase::ALL {
            if let Some(key) = self.key(phase) {
                self.store.remove_item(&key)?;
            }
        }
        log::info!("🗑️ [DRAFT] Borradores eliminados");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftValue, WizardMode};
    use crate::utils::storage::MemoryStore;

    fn session(mode: WizardMode) -> SessionConfig {
        SessionConfig::new(mode, Some("42".to_string()), "business_location")
    }

    fn sample() -> DraftData {
        let mut data = DraftData::new();
        data.insert("name".to_string(), DraftValue::from("Chez Mama"));
        data.insert("city".to_string(), DraftValue::from("Douala"));
        data
    }

    #[test]
    fn test_save_and_restore_after_reload() {
        let store = MemoryStore::new();
        let service = DraftService::new(session(WizardMode::Create), store.clone());
        service.save(DraftPhase::Create, &sample()).unwrap();
        assert!(store.contains("wizard_business_location_create_42"));

        // Nueva página, mismo almacenamiento
        let reloaded = DraftService::new(session(WizardMode::Create), store);
        assert_eq!(reloaded.restore(DraftPhase::Create), Some(sample()));
        assert_eq!(reloaded.restore(DraftPhase::Hours), None);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let store = MemoryStore::new();
        let service = DraftService::new(session(WizardMode::Create), store);
        service.save(DraftPhase::Create, &sample()).unwrap();

        let mut edited = sample();
        edited.insert("city".to_string(), DraftValue::from("Yaoundé"));
        service.save(DraftPhase::Create, &edited).unwrap();

        assert_eq!(service.restore(DraftPhase::Create), Some(edited));
    }

    #[test]
    fn test_edit_mode_never_saves_nor_restores() {
        let store = MemoryStore::new();
        // Datos residuales de una creación anterior
        store
            .set_item("wizard_business_location_create_42", r#"{"name":"Old"}"#)
            .unwrap();

        let service = DraftService::new(session(WizardMode::Edit), store.clone());
        assert_eq!(service.key(DraftPhase::Create), None);
        assert_eq!(service.restore(DraftPhase::Create), None);

        service.save(DraftPhase::Hours, &sample()).unwrap();
        assert!(!store.contains("wizard_business_location_hours_42"));
    }

    #[test]
    fn test_without_entity_id_drafts_are_disabled() {
        let store = MemoryStore::new();
        let service = DraftService::new(
            SessionConfig::new(WizardMode::Create, None, "business_location"),
            store.clone(),
        );
        service.save(DraftPhase::Create, &sample()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_draft_is_treated_as_absent() {
        let store = MemoryStore::new();
        store
            .set_item("wizard_business_location_create_42", "{not json")
            .unwrap();
        store
            .set_item("wizard_business_location_hours_42", r#"{"is_open_0": 3}"#)
            .unwrap();

        let service = DraftService::new(session(WizardMode::Create), store);
        assert_eq!(service.restore(DraftPhase::Create), None);
        assert_eq!(service.restore(DraftPhase::Hours), None);
    }

    #[test]
    fn test_clear_all_removes_three_phases() {
        let store = MemoryStore::new();
        store.set_item("unrelated", "x").unwrap();
        let service = DraftService::new(session(WizardMode::Create), store.clone());
        for phase in DraftPhase::ALL {
            service.save(phase, &sample()).unwrap();
        }
        assert_eq!(store.len(), 4);

        service.clear_all().unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.contains("unrelated"));
    }
}
