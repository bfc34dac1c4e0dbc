use serde::{Deserialize, Serialize};

/// Punto elegido en el mapa
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Texto de estado mientras se resuelve la dirección
    pub fn status_label(&self) -> String {
        format!("Lat: {:.6}, Lon: {:.6}...", self.lat, self.lng)
    }

    /// Valores para los inputs `latitude` / `longitude`
    pub fn form_values(&self) -> (String, String) {
        (format!("{:.8}", self.lat), format!("{:.8}", self.lng))
    }
}

/// Respuesta del reverse geocoding (formato Nominatim jsonv2)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub address: Option<GeocodedAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodedAddress {
    #[serde(default)]
    pub road: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
}

/// Valores a escribir en los campos de dirección del paso 1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFill {
    pub street_address: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postal_code: String,
    pub neighborhood: String,
}

impl AddressFill {
    /// Pares (id del input, valor)
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("street_address", &self.street_address),
            ("city", &self.city),
            ("region", &self.region),
            ("country", &self.country),
            ("postal_code", &self.postal_code),
            ("neighborhood", &self.neighborhood),
        ]
    }
}

impl From<&GeocodedAddress> for AddressFill {
    fn from(address: &GeocodedAddress) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            street_address: text(&address.road),
            city: address
                .city
                .clone()
                .or_else(|| address.town.clone())
                .or_else(|| address.village.clone())
                .unwrap_or_default(),
            region: text(&address.state),
            country: text(&address.country),
            postal_code: text(&address.postcode),
            neighborhood: text(&address.suburb),
        }
    }
}
