// ============================================================================
// AMENITIES VIEWMODEL - Paso 3 (comodidades)
// ============================================================================

use std::fmt;

use crate::models::amenity::AmenityEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmenitiesError {
    NoneSelected,
}

impl fmt::Display for AmenitiesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmenitiesError::NoneSelected => {
                write!(f, "Veuillez sélectionner au moins une commodité.")
            }
        }
    }
}

impl std::error::Error for AmenitiesError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenitiesViewModel {
    entries: Vec<AmenityEntry>,
}

impl AmenitiesViewModel {
    pub fn new(entries: Vec<AmenityEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AmenityEntry] {
        &self.entries
    }

    /// Marcar/desmarcar: desmarcar borra el detalle
    pub fn toggle(&mut self, amenity_id: &str, checked: bool) -> Option<&AmenityEntry> {
        let entry = self.entries.iter_mut().find(|e| e.id == amenity_id)?;
        entry.checked = checked;
        if !checked {
            entry.details.clear();
        }
        Some(entry)
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.checked).count()
    }

    pub fn validate_for_advance(&self) -> Result<(), AmenitiesError> {
        if self.selected_count() == 0 {
            Err(AmenitiesError::NoneSelected)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm() -> AmenitiesViewModel {
        AmenitiesViewModel::new(vec![
            AmenityEntry::new("1", false, ""),
            AmenityEntry::new("2", false, ""),
        ])
    }

    #[test]
    fn test_none_selected_blocks_advance() {
        let vm = vm();
        assert_eq!(vm.validate_for_advance(), Err(AmenitiesError::NoneSelected));
        assert_eq!(
            AmenitiesError::NoneSelected.to_string(),
            "Veuillez sélectionner au moins une commodité."
        );
    }

    #[test]
    fn test_uncheck_clears_details() {
        let mut vm = AmenitiesViewModel::new(vec![AmenityEntry::new("wifi", true, "Fibre 100 Mb")]);
        assert_eq!(vm.validate_for_advance(), Ok(()));

        let entry = vm.toggle("wifi", false).unwrap();
        assert!(!entry.checked);
        assert!(!entry.details_enabled());
        assert_eq!(entry.details, "");
        assert_eq!(entry.details_field_name(), "details_wifi");
        assert_eq!(vm.validate_for_advance(), Err(AmenitiesError::NoneSelected));
    }

    #[test]
    fn test_check_one_allows_advance() {
        let mut vm = vm();
        let entry = vm.toggle("2", true).unwrap();
        assert!(entry.checked);
        assert!(entry.details_enabled());
        assert_eq!(vm.selected_count(), 1);
        assert!(vm.validate_for_advance().is_ok());
        assert!(vm.toggle("unknown", true).is_none());
    }
}
