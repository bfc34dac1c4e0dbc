// ============================================================================
// MAP PICK VIEWMODEL - Selección de coordenadas en el modal del mapa (paso 1)
// ============================================================================
// El mapa y el geocoder son externos: aquí solo el estado de la selección
// ============================================================================

use crate::models::geocoding::{AddressFill, GeoPoint, ReverseGeocodeResponse};
use crate::utils::constants::GEOCODE_FAILED_MESSAGE;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapPickViewModel {
    pending: Option<GeoPoint>,
    status: String,
}

impl MapPickViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<GeoPoint> {
        self.pending
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Cada apertura del modal descarta la selección sin confirmar
    pub fn open(&mut self) {
        self.pending = None;
        self.status.clear();
    }

    /// Click en el mapa: nuevo punto pendiente
    pub fn select(&mut self, point: GeoPoint) {
        self.pending = Some(point);
        self.status = point.status_label();
    }

    /// Resultado del reverse geocoding para `point`.
    /// Se ignora si el usuario ya eligió otro punto.
    pub fn apply_geocode(
        &mut self,
        point: GeoPoint,
        response: &ReverseGeocodeResponse,
    ) -> Option<AddressFill> {
        if self.pending != Some(point) {
            log::debug!("↩️ [MAP] Respuesta de geocoding obsoleta ignorada");
            return None;
        }
        self.status = response.display_name.clone().unwrap_or_default();
        response.address.as_ref().map(AddressFill::from)
    }

    pub fn geocode_failed(&mut self, point: GeoPoint) {
        if self.pending == Some(point) {
            self.status = GEOCODE_FAILED_MESSAGE.to_string();
        }
    }

    /// Confirmación: valores para `latitude` / `longitude`
    pub fn confirm(&self) -> Option<(String, String)> {
        self.pending.map(|point| point.form_values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(display_name: &str, city: &str) -> ReverseGeocodeResponse {
        serde_json::from_str(&format!(
            r#"{{"display_name": "{}", "address": {{"city": "{}"}}}}"#,
            display_name, city
        ))
        .unwrap()
    }

    #[test]
    fn test_select_then_confirm() {
        let mut vm = MapPickViewModel::new();
        assert_eq!(vm.confirm(), None);

        vm.select(GeoPoint::new(4.0483, 9.7043));
        assert!(vm.status().starts_with("Lat: 4.048300"));
        assert_eq!(
            vm.confirm(),
            Some(("4.04830000".to_string(), "9.70430000".to_string()))
        );
    }

    #[test]
    fn test_reopen_resets_pending_selection() {
        let mut vm = MapPickViewModel::new();
        vm.select(GeoPoint::new(1.0, 2.0));
        vm.open();
        assert_eq!(vm.pending(), None);
        assert_eq!(vm.status(), "");
        assert_eq!(vm.confirm(), None);
    }

    #[test]
    fn test_geocode_fills_address_and_status() {
        let mut vm = MapPickViewModel::new();
        let point = GeoPoint::new(4.05, 9.7);
        vm.select(point);

        let fill = vm.apply_geocode(point, &response("Douala, Cameroun", "Douala")).unwrap();
        assert_eq!(fill.city, "Douala");
        assert_eq!(vm.status(), "Douala, Cameroun");
    }

    #[test]
    fn test_stale_geocode_is_ignored() {
        let mut vm = MapPickViewModel::new();
        let first = GeoPoint::new(4.05, 9.7);
        let second = GeoPoint::new(3.87, 11.52);
        vm.select(first);
        vm.select(second);

        assert!(vm.apply_geocode(first, &response("Douala", "Douala")).is_none());
        assert!(vm.status().starts_with("Lat: 3.870000"));

        vm.geocode_failed(second);
        assert_eq!(vm.status(), GEOCODE_FAILED_MESSAGE);
        // La selección sigue pudiéndose confirmar
        assert!(vm.confirm().is_some());
    }
}
