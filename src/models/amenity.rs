/// Comodidad del paso 3: checkbox + campo de detalle opcional
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AmenityEntry {
    pub id: String,
    pub checked: bool,
    pub details: String,
}

impl AmenityEntry {
    pub fn new(id: impl Into<String>, checked: bool, details: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            checked,
            details: details.into(),
        }
    }

    /// El detalle se muestra y se puede editar solo con la casilla marcada
    pub fn details_enabled(&self) -> bool {
        self.checked
    }

    /// Nombre del input de detalle (`details_<id>`)
    pub fn details_field_name(&self) -> String {
        format!("details_{}", self.id)
    }
}
