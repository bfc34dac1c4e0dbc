// ============================================================================
// HOURS VIEWMODEL - Paso 2 (horarios semanales)
// ============================================================================
// SOLO lógica: la vista lee las filas del DOM, llama aquí y vuelve a escribir
// ============================================================================

use std::fmt;

use chrono::NaiveTime;

use crate::models::hours::{DayHours, RowValidation, TimeField, WEEK_DAYS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoursError {
    NoOpenDay,
    /// Días abiertos con horarios inválidos
    InvalidRows(Vec<u8>),
}

impl fmt::Display for HoursError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoursError::NoOpenDay => {
                write!(f, "Veuillez sélectionner au moins un jour d'ouverture.")
            }
            HoursError::InvalidRows(_) => write!(
                f,
                "Veuillez corriger les erreurs dans les horaires avant de continuer."
            ),
        }
    }
}

impl std::error::Error for HoursError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursViewModel {
    days: Vec<DayHours>,
}

impl Default for HoursViewModel {
    fn default() -> Self {
        Self::new(WEEK_DAYS.iter().map(|day| DayHours::closed(*day)).collect())
    }
}

impl HoursViewModel {
    pub fn new(mut days: Vec<DayHours>) -> Self {
        days.sort_by_key(|d| d.day);
        Self { days }
    }

    pub fn days(&self) -> &[DayHours] {
        &self.days
    }

    pub fn day(&self, day: u8) -> Option<&DayHours> {
        self.days.iter().find(|d| d.day == day)
    }

    fn day_mut(&mut self, day: u8) -> Option<&mut DayHours> {
        self.days.iter_mut().find(|d| d.day == day)
    }

    /// Checkbox abierto/cerrado
    pub fn toggle_day(&mut self, day: u8, open: bool) -> Option<&DayHours> {
        let row = self.day_mut(day)?;
        row.set_open(open);
        Some(row)
    }

    /// Cambio de un input horario: devuelve la validación de la fila
    pub fn set_time(&mut self, day: u8, field: TimeField, value: Option<NaiveTime>) -> Option<RowValidation> {
        let row = self.day_mut(day)?;
        row.set(field, value);
        Some(row.validate())
    }

    pub fn validate_day(&self, day: u8) -> Option<RowValidation> {
        self.day(day).map(DayHours::validate)
    }

    /// Copia el horario de `source` al resto de días y revalida cada fila copiada
    pub fn duplicate_day(&mut self, source: u8) -> Vec<(u8, RowValidation)> {
        let Some(template) = self.day(source).cloned() else {
            log::warn!("⚠️ [STEP2] Día {} no encontrado para duplicar", source);
            return Vec::new();
        };

        let copied: Vec<(u8, RowValidation)> = self
            .days
            .iter_mut()
            .filter(|row| row.day != source)
            .map(|row| {
                row.copy_schedule_from(&template);
                (row.day, row.validate())
            })
            .collect();

        log::info!("📋 [STEP2] Horario del día {} copiado a {} días", source, copied.len());
        copied
    }

    pub fn row_validations(&self) -> Vec<(u8, RowValidation)> {
        self.days.iter().map(|row| (row.day, row.validate())).collect()
    }

    pub fn open_days(&self) -> usize {
        self.days.iter().filter(|row| row.is_open).count()
    }

    /// Condiciones para pasar al paso 3
    pub fn validate_for_advance(&self) -> Result<(), HoursError> {
        if self.open_days() == 0 {
            return Err(HoursError::NoOpenDay);
        }

        let invalid: Vec<u8> = self
            .row_validations()
            .into_iter()
            .filter(|(_, validation)| !validation.is_valid())
            .map(|(day, _)| day)
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(HoursError::InvalidRows(invalid))
        }
    }
}
