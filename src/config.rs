use serde::{Deserialize, Serialize};

use crate::models::geocoding::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Tipo de entidad usado en las claves de borrador (`wizard_<kind>_<phase>_<id>`)
    pub entity_kind: String,
    pub enable_logging: bool,
    pub endpoints: EndpointConfig,
    pub image_config: ImageConfig,
    pub map_config: MapConfig,
    pub date_picker: DatePickerConfig,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            entity_kind: "business_location".to_string(),
            enable_logging: true,
            endpoints: EndpointConfig::default(),
            image_config: ImageConfig::default(),
            map_config: MapConfig::default(),
            date_picker: DatePickerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub upload_image_path: String,
    pub list_images_path: String,
    /// Prefijo; el id de la imagen se añade al final
    pub delete_image_path: String,
    /// Prefijo; el id de la entidad se añade al final
    pub reset_path: String,
    pub geocoder_url: String,
    pub csrf_field_name: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            upload_image_path: "/business/location/upload-image-temp/".to_string(),
            list_images_path: "/business/location/list-image-temp/".to_string(),
            delete_image_path: "/business/location/delete-image-temp/".to_string(),
            reset_path: "/business/location/wizard/reset/".to_string(),
            geocoder_url: "https://nominatim.openstreetmap.org".to_string(),
            csrf_field_name: "csrfmiddlewaretoken".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    pub max_images: usize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self { max_images: 5 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    /// Espera antes de crear el mapa (el modal tiene que estar visible)
    pub init_delay_ms: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        // Camerún como centro por defecto
        Self {
            default_center_lat: 4.05,
            default_center_lng: 9.7,
            default_zoom: 7.0,
            init_delay_ms: 300,
        }
    }
}

/// Opciones de flatpickr para la fecha de fundación (paso 1).
/// Se serializan tal cual como objeto de opciones JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePickerConfig {
    #[serde(skip)]
    pub field_selector: String,
    pub locale: String,
    pub date_format: String,
    pub max_date: String,
    pub allow_input: bool,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            field_selector: "#founded_date".to_string(),
            locale: "fr".to_string(),
            date_format: "Y-m-d".to_string(),
            max_date: "today".to_string(),
            allow_input: true,
        }
    }
}

impl WizardConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            entity_kind: option_env!("WIZARD_ENTITY_KIND")
                .map(|s| s.to_string())
                .unwrap_or(defaults.entity_kind),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            endpoints: EndpointConfig {
                upload_image_path: option_env!("UPLOAD_IMAGE_PATH")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.endpoints.upload_image_path),
                list_images_path: option_env!("LIST_IMAGES_PATH")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.endpoints.list_images_path),
                delete_image_path: option_env!("DELETE_IMAGE_PATH")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.endpoints.delete_image_path),
                reset_path: option_env!("WIZARD_RESET_PATH")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.endpoints.reset_path),
                geocoder_url: option_env!("GEOCODER_URL")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.endpoints.geocoder_url),
                csrf_field_name: option_env!("CSRF_FIELD_NAME")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.endpoints.csrf_field_name),
            },
            image_config: ImageConfig {
                max_images: option_env!("MAX_IMAGES")
                    .unwrap_or("5").parse().unwrap_or(5),
            },
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("4.05").parse().unwrap_or(4.05),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("9.7").parse().unwrap_or(9.7),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("7").parse().unwrap_or(7.0),
                init_delay_ms: option_env!("MAP_INIT_DELAY_MS")
                    .unwrap_or("300").parse().unwrap_or(300),
            },
            date_picker: DatePickerConfig {
                locale: option_env!("DATE_PICKER_LOCALE")
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "fr".to_string()),
                ..DatePickerConfig::default()
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn max_images(&self) -> usize {
        self.image_config.max_images
    }
}

impl EndpointConfig {
    pub fn delete_image_url(&self, image_id: &str) -> String {
        format!("{}{}/", with_trailing_slash(&self.delete_image_path), image_id)
    }

    pub fn reset_url(&self, entity_id: &str) -> String {
        format!("{}{}/", with_trailing_slash(&self.reset_path), entity_id)
    }

    pub fn reverse_geocode_url(&self, point: &GeoPoint) -> String {
        format!(
            "{}/reverse?format=jsonv2&lat={}&lon={}",
            self.geocoder_url.trim_end_matches('/'),
            point.lat,
            point.lng
        )
    }
}

fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: WizardConfig = WizardConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let endpoints = EndpointConfig::default();
        assert_eq!(
            endpoints.delete_image_url("42"),
            "/business/location/delete-image-temp/42/"
        );
        assert_eq!(endpoints.reset_url("7"), "/business/location/wizard/reset/7/");
    }

    #[test]
    fn test_reset_url_without_trailing_slash() {
        let endpoints = EndpointConfig {
            reset_path: "/wizard/reset".to_string(),
            ..EndpointConfig::default()
        };
        assert_eq!(endpoints.reset_url("3"), "/wizard/reset/3/");
    }

    #[test]
    fn test_reverse_geocode_url() {
        let endpoints = EndpointConfig {
            geocoder_url: "https://geo.example.org/".to_string(),
            ..EndpointConfig::default()
        };
        let url = endpoints.reverse_geocode_url(&GeoPoint::new(4.5, 9.25));
        assert_eq!(url, "https://geo.example.org/reverse?format=jsonv2&lat=4.5&lon=9.25");
    }

    #[test]
    fn test_defaults() {
        let config = WizardConfig::default();
        assert_eq!(config.max_images(), 5);
        assert_eq!(config.entity_kind, "business_location");
        assert_eq!(config.map_config.init_delay_ms, 300);
    }

    #[test]
    fn test_date_picker_options_json() {
        let picker = DatePickerConfig::default();
        assert_eq!(picker.field_selector, "#founded_date");
        assert_eq!(
            serde_json::to_string(&picker).unwrap(),
            r#"{"locale":"fr","dateFormat":"Y-m-d","maxDate":"today","allowInput":true}"#
        );
    }
}
