use crate::config::CONFIG;
use crate::models::draft::DraftPhase;

/// Modo del wizard: creación de un nuevo establecimiento o edición de uno existente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit,
}

/// Configuración de la sesión del wizard, leída una sola vez al cargar la página
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: WizardMode,
    pub entity_id: Option<String>,
    pub entity_kind: String,
}

impl SessionConfig {
    pub fn new(mode: WizardMode, entity_id: Option<String>, entity_kind: impl Into<String>) -> Self {
        Self {
            mode,
            entity_id: entity_id.filter(|id| !id.trim().is_empty()),
            entity_kind: entity_kind.into(),
        }
    }

    pub fn create(entity_id: impl Into<String>) -> Self {
        Self::new(WizardMode::Create, Some(entity_id.into()), CONFIG.entity_kind.clone())
    }

    pub fn edit(entity_id: impl Into<String>) -> Self {
        Self::new(WizardMode::Edit, Some(entity_id.into()), CONFIG.entity_kind.clone())
    }

    /// Construye la sesión desde los data-attributes del contenedor
    /// (`data-is-edit="True"`, `data-business-id="..."`)
    pub fn from_data_attributes(is_edit: Option<&str>, entity_id: Option<&str>) -> Self {
        let mode = if is_edit == Some("True") {
            WizardMode::Edit
        } else {
            WizardMode::Create
        };
        Self::new(mode, entity_id.map(|s| s.to_string()), CONFIG.entity_kind.clone())
    }

    pub fn is_edit(&self) -> bool {
        self.mode == WizardMode::Edit
    }

    /// Los borradores locales solo existen en creación y con una entidad identificada
    pub fn drafts_enabled(&self) -> bool {
        self.mode == WizardMode::Create && self.entity_id.is_some()
    }
}

/// Pasos del wizard, en orden
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Identity = 1,
    Hours = 2,
    Amenities = 3,
    Summary = 4,
    Images = 5,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Identity,
        WizardStep::Hours,
        WizardStep::Amenities,
        WizardStep::Summary,
        WizardStep::Images,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|step| i64::from(step.number()) == number)
    }

    /// Paso actual desde el query parameter `step` (por defecto 1).
    /// Solo cuenta el entero inicial: `"2abc"` y `"2.5"` son el paso 2.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(leading_integer)
            .and_then(Self::from_number)
            .unwrap_or(WizardStep::Identity)
    }

    /// Paso pedido si `find` encuentra su formulario; si no, el primer paso
    /// que lo tenga. Sin ninguno se conserva el pedido.
    pub fn resolve<T>(requested: Self, mut find: impl FnMut(Self) -> Option<T>) -> (Self, Option<T>) {
        if let Some(found) = find(requested) {
            return (requested, Some(found));
        }
        Self::ALL
            .into_iter()
            .find_map(|step| find(step).map(|found| (step, Some(found))))
            .unwrap_or((requested, None))
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(i64::from(self.number()) - 1)
    }

    /// Fase de borrador asociada (solo pasos 1-3)
    pub fn draft_phase(self) -> Option<DraftPhase> {
        match self {
            WizardStep::Identity => Some(DraftPhase::Create),
            WizardStep::Hours => Some(DraftPhase::Hours),
            WizardStep::Amenities => Some(DraftPhase::Amenities),
            WizardStep::Summary | WizardStep::Images => None,
        }
    }

    /// ID del formulario renderizado por el servidor para este paso
    pub fn form_id(self) -> String {
        format!("wizardStep{}Form", self.number())
    }
}

/// Entero al inicio del texto (espacios iniciales y signo permitidos)
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let end = trimmed.len() - unsigned.len() + digits;
    if digits == 0 {
        return None;
    }
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_from_query() {
        assert_eq!(WizardStep::from_query(None), WizardStep::Identity);
        assert_eq!(WizardStep::from_query(Some("3")), WizardStep::Amenities);
        assert_eq!(WizardStep::from_query(Some(" 5 ")), WizardStep::Images);
        assert_eq!(WizardStep::from_query(Some("abc")), WizardStep::Identity);
        assert_eq!(WizardStep::from_query(Some("")), WizardStep::Identity);
        assert_eq!(WizardStep::from_query(Some("9")), WizardStep::Identity);
        assert_eq!(WizardStep::from_query(Some("0")), WizardStep::Identity);
        assert_eq!(WizardStep::from_query(Some("-2")), WizardStep::Identity);
    }

    #[test]
    fn test_step_from_query_uses_leading_integer() {
        assert_eq!(WizardStep::from_query(Some("2abc")), WizardStep::Hours);
        assert_eq!(WizardStep::from_query(Some("2.5")), WizardStep::Hours);
        assert_eq!(WizardStep::from_query(Some("+4")), WizardStep::Summary);
        assert_eq!(WizardStep::from_query(Some("x2")), WizardStep::Identity);
    }

    #[test]
    fn test_resolve_falls_back_to_first_form_present() {
        let present = [WizardStep::Amenities, WizardStep::Images];
        let find = |step: WizardStep| present.contains(&step).then(|| step.form_id());

        assert_eq!(
            WizardStep::resolve(WizardStep::Images, find),
            (WizardStep::Images, Some("wizardStep5Form".to_string()))
        );
        assert_eq!(
            WizardStep::resolve(WizardStep::Hours, find),
            (WizardStep::Amenities, Some("wizardStep3Form".to_string()))
        );
        assert_eq!(
            WizardStep::resolve(WizardStep::Summary, |_| None::<String>),
            (WizardStep::Summary, None)
        );
    }

    #[test]
    fn test_previous_step() {
        assert_eq!(WizardStep::Identity.previous(), None);
        assert_eq!(WizardStep::Hours.previous(), Some(WizardStep::Identity));
        assert_eq!(WizardStep::Images.previous(), Some(WizardStep::Summary));
    }

    #[test]
    fn test_draft_phase_only_for_first_three_steps() {
        assert_eq!(WizardStep::Identity.draft_phase(), Some(DraftPhase::Create));
        assert_eq!(WizardStep::Hours.draft_phase(), Some(DraftPhase::Hours));
        assert_eq!(WizardStep::Amenities.draft_phase(), Some(DraftPhase::Amenities));
        assert_eq!(WizardStep::Summary.draft_phase(), None);
        assert_eq!(WizardStep::Images.draft_phase(), None);
    }

    #[test]
    fn test_session_from_data_attributes() {
        let session = SessionConfig::from_data_attributes(Some("True"), Some("12"));
        assert!(session.is_edit());
        assert!(!session.drafts_enabled());

        let session = SessionConfig::from_data_attributes(Some("False"), Some("12"));
        assert_eq!(session.mode, WizardMode::Create);
        assert!(session.drafts_enabled());

        let session = SessionConfig::from_data_attributes(None, Some("  "));
        assert_eq!(session.entity_id, None);
        assert!(!session.drafts_enabled());
    }

    #[test]
    fn test_form_id() {
        assert_eq!(WizardStep::Hours.form_id(), "wizardStep2Form");
    }
}
