// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Temporary Asset Service (imágenes provisionales) + reverse geocoding.
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::models::geocoding::{GeoPoint, ReverseGeocodeResponse};
use crate::models::image::{
    AssetError, DeleteImageResponse, ImageId, ListImagesResponse, ProvisionalImage,
    UploadImageResponse,
};

const CSRF_HEADER: &str = "X-CSRFToken";

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    csrf_token: String,
}

impl ApiClient {
    /// El token anti-CSRF sale del formulario renderizado
    pub fn new(csrf_token: impl Into<String>) -> Self {
        Self {
            csrf_token: csrf_token.into(),
        }
    }

    /// Subir una imagen (multipart, campo `image`)
    pub async fn upload_image(&self, file: &File) -> Result<ProvisionalImage, AssetError> {
        let url = &CONFIG.endpoints.upload_image_path;
        let form_data = FormData::new()
            .map_err(|_| AssetError::Transport("No se pudo crear FormData".to_string()))?;
        form_data
            .append_with_blob("image", file)
            .map_err(|_| AssetError::Transport("No se pudo adjuntar el fichero".to_string()))?;

        log::info!("📤 [IMAGES] Subiendo {} ({} bytes)", file.name(), file.size());

        let response = Request::post(url)
            .header(CSRF_HEADER, &self.csrf_token)
            .body(form_data)
            .map_err(|e| AssetError::Transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| AssetError::Transport(format!("Network error: {}", e)))?;

        let response = ensure_ok(response).await.map_err(AssetError::Transport)?;
        response
            .json::<UploadImageResponse>()
            .await
            .map_err(|e| AssetError::Transport(format!("Parse error: {}", e)))?
            .into_result()
    }

    /// Listar las imágenes provisionales de la sesión
    pub async fn list_images(&self) -> Result<Option<Vec<ProvisionalImage>>, String> {
        let url = &CONFIG.endpoints.list_images_path;
        let response = Request::get(url)
            .header(CSRF_HEADER, &self.csrf_token)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = ensure_ok(response).await?;
        let data = response
            .json::<ListImagesResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        Ok(data.images)
    }

    /// Borrar una imagen provisional
    pub async fn delete_image(&self, id: &ImageId) -> Result<(), AssetError> {
        let url = CONFIG.endpoints.delete_image_url(id.as_str());

        log::info!("🗑️ [IMAGES] Borrando imagen {}", id);

        let response = Request::post(&url)
            .header(CSRF_HEADER, &self.csrf_token)
            .send()
            .await
            .map_err(|e| AssetError::Transport(format!("Network error: {}", e)))?;

        let response = ensure_ok(response).await.map_err(AssetError::Transport)?;
        response
            .json::<DeleteImageResponse>()
            .await
            .map_err(|e| AssetError::Transport(format!("Parse error: {}", e)))?
            .into_result()
    }

    /// Reverse geocoding de un punto del mapa
    pub async fn reverse_geocode(&self, point: &GeoPoint) -> Result<ReverseGeocodeResponse, String> {
        let url = CONFIG.endpoints.reverse_geocode_url(point);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = ensure_ok(response).await?;
        response
            .json::<ReverseGeocodeResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

async fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(format!("HTTP error {}: {}", status, error_text))
}
