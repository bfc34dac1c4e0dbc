use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Valor de un campo guardado en borrador: booleano para checkboxes, texto para el resto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftValue {
    Flag(bool),
    Text(String),
}

impl DraftValue {
    /// Valor aplicado a un checkbox
    pub fn is_truthy(&self) -> bool {
        match self {
            DraftValue::Flag(flag) => *flag,
            DraftValue::Text(text) => !text.is_empty(),
        }
    }

    /// Valor aplicado a un input de texto/select/textarea
    pub fn as_text(&self) -> String {
        match self {
            DraftValue::Flag(flag) => flag.to_string(),
            DraftValue::Text(text) => text.clone(),
        }
    }
}

impl From<bool> for DraftValue {
    fn from(flag: bool) -> Self {
        DraftValue::Flag(flag)
    }
}

impl From<&str> for DraftValue {
    fn from(text: &str) -> Self {
        DraftValue::Text(text.to_string())
    }
}

impl From<String> for DraftValue {
    fn from(text: String) -> Self {
        DraftValue::Text(text)
    }
}

/// Nombre de campo -> valor
pub type DraftData = BTreeMap<String, DraftValue>;

/// Tipos de input que nunca van al borrador
const SKIPPED_FIELD_TYPES: [&str; 5] = ["file", "submit", "button", "reset", "image"];

/// Un campo entra en el borrador salvo el token CSRF y los tipos sin valor editable
pub fn is_draftable_field(field_type: &str, name: &str, csrf_field_name: &str) -> bool {
    name != csrf_field_name && !SKIPPED_FIELD_TYPES.contains(&field_type)
}

/// Valor guardado para un campo: checkbox => booleano, radio solo si está
/// marcado, el resto como texto
pub fn capture_field(field_type: &str, value: Option<String>, checked: bool) -> Option<DraftValue> {
    match field_type {
        "checkbox" => Some(DraftValue::Flag(checked)),
        "radio" => checked.then(|| DraftValue::Text(value.unwrap_or_default())),
        _ => value.map(DraftValue::Text),
    }
}

/// Cómo se aplica un valor guardado a un campo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRestore {
    Checked(bool),
    Value(String),
}

pub fn restore_field(field_type: &str, own_value: Option<&str>, saved: &DraftValue) -> FieldRestore {
    match field_type {
        "checkbox" => FieldRestore::Checked(saved.is_truthy()),
        "radio" => FieldRestore::Checked(own_value == Some(saved.as_text().as_str())),
        _ => FieldRestore::Value(saved.as_text()),
    }
}

/// Fase del borrador (una clave de almacenamiento por fase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftPhase {
    Create,
    Hours,
    Amenities,
}

impl DraftPhase {
    pub const ALL: [DraftPhase; 3] = [DraftPhase::Create, DraftPhase::Hours, DraftPhase::Amenities];

    pub fn as_str(self) -> &'static str {
        match self {
            DraftPhase::Create => "create",
            DraftPhase::Hours => "hours",
            DraftPhase::Amenities => "amenities",
        }
    }

    /// `wizard_<entity-kind>_<phase>_<entityId>`
    pub fn storage_key(self, entity_kind: &str, entity_id: &str) -> String {
        format!("wizard_{}_{}_{}", entity_kind, self.as_str(), entity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        assert_eq!(
            DraftPhase::Create.storage_key("business_location", "42"),
            "wizard_business_location_create_42"
        );
        assert_eq!(
            DraftPhase::Hours.storage_key("business_location", "42"),
            "wizard_business_location_hours_42"
        );
        assert_eq!(
            DraftPhase::Amenities.storage_key("business_location", "42"),
            "wizard_business_location_amenities_42"
        );
    }

    #[test]
    fn test_draft_json_shape() {
        let mut data = DraftData::new();
        data.insert("name".to_string(), DraftValue::from("Hotel du Lac"));
        data.insert("is_open_0".to_string(), DraftValue::from(true));

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"is_open_0":true,"name":"Hotel du Lac"}"#);

        let decoded: DraftData = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_truthiness() {
        assert!(DraftValue::Flag(true).is_truthy());
        assert!(!DraftValue::Flag(false).is_truthy());
        assert!(DraftValue::from("on").is_truthy());
        assert!(!DraftValue::from("").is_truthy());
        assert_eq!(DraftValue::Flag(false).as_text(), "false");
    }

    #[test]
    fn test_draftable_fields() {
        assert!(is_draftable_field("text", "name", "csrfmiddlewaretoken"));
        assert!(is_draftable_field("", "description", "csrfmiddlewaretoken"));
        assert!(!is_draftable_field("hidden", "csrfmiddlewaretoken", "csrfmiddlewaretoken"));
        for skipped in ["file", "submit", "button", "reset", "image"] {
            assert!(!is_draftable_field(skipped, "field", "csrfmiddlewaretoken"));
        }
    }

    #[test]
    fn test_capture_field_shapes() {
        assert_eq!(capture_field("checkbox", Some("on".into()), false), Some(DraftValue::Flag(false)));
        assert_eq!(capture_field("checkbox", Some("on".into()), true), Some(DraftValue::Flag(true)));
        assert_eq!(capture_field("radio", Some("cash".into()), false), None);
        assert_eq!(capture_field("radio", Some("cash".into()), true), Some(DraftValue::from("cash")));
        assert_eq!(capture_field("time", Some("08:00".into()), false), Some(DraftValue::from("08:00")));
        assert_eq!(capture_field("", None, false), None);
    }

    #[test]
    fn test_restore_field_shapes() {
        assert_eq!(
            restore_field("checkbox", Some("on"), &DraftValue::Flag(true)),
            FieldRestore::Checked(true)
        );
        // Borradores antiguos guardaban el value del checkbox como texto
        assert_eq!(restore_field("checkbox", None, &DraftValue::from("on")), FieldRestore::Checked(true));
        assert_eq!(restore_field("checkbox", None, &DraftValue::from("")), FieldRestore::Checked(false));
        assert_eq!(
            restore_field("radio", Some("card"), &DraftValue::from("cash")),
            FieldRestore::Checked(false)
        );
        assert_eq!(
            restore_field("radio", Some("cash"), &DraftValue::from("cash")),
            FieldRestore::Checked(true)
        );
        assert_eq!(
            restore_field("text", Some("old"), &DraftValue::from("Hotel du Lac")),
            FieldRestore::Value("Hotel du Lac".to_string())
        );
    }
}
