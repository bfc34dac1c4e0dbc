// ============================================================================
// IDENTITY VIEWMODEL - Paso 1 (identidad y localización)
// ============================================================================

use std::fmt;

use crate::models::DraftData;

/// Campos obligatorios del paso 1 (no vacíos tras `trim`)
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "business_location_type", "description", "city"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    MissingFields(Vec<String>),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::MissingFields(fields) => {
                write!(f, "Champs obligatoires manquants : {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for IdentityError {}

pub struct IdentityViewModel;

impl IdentityViewModel {
    /// Valida los campos obligatorios presentes en el formulario.
    /// Un campo que no existe en el formulario no se marca.
    pub fn validate(values: &DraftData) -> Result<(), IdentityError> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| {
                values
                    .get(**field)
                    .is_some_and(|value| value.as_text().trim().is_empty())
            })
            .map(|field| field.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            log::info!("⚠️ [STEP1] Campos obligatorios vacíos: {:?}", missing);
            Err(IdentityError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DraftValue;

    fn form(values: &[(&str, &str)]) -> DraftData {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), DraftValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_all_required_fields_filled() {
        let values = form(&[
            ("name", "Hôtel du Port"),
            ("business_location_type", "hotel"),
            ("description", "Face à la mer"),
            ("city", "Kribi"),
            ("postal_code", ""),
        ]);
        assert!(IdentityViewModel::validate(&values).is_ok());
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let values = form(&[
            ("name", "   "),
            ("business_location_type", "hotel"),
            ("description", "\n"),
            ("city", "Kribi"),
        ]);
        assert_eq!(
            IdentityViewModel::validate(&values),
            Err(IdentityError::MissingFields(vec![
                "name".to_string(),
                "description".to_string()
            ]))
        );
    }

    #[test]
    fn test_field_absent_from_form_is_not_flagged() {
        let values = form(&[("name", "A"), ("description", "B"), ("city", "C")]);
        assert!(IdentityViewModel::validate(&values).is_ok());
    }
}
