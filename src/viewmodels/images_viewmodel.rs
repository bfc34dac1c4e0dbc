// ============================================================================
// IMAGES VIEWMODEL - Paso 5 (imágenes provisionales)
// ============================================================================
// Lista ordenada de imágenes + imagen principal + límite de subida.
// Solo se modifica desde los callbacks de finalización de las llamadas HTTP
// (un solo hilo: cada callback se aplica completo antes del siguiente).
// ============================================================================

use std::fmt;

use crate::config::CONFIG;
use crate::models::image::{AssetError, ImageId, ProvisionalImage};
use crate::utils::constants::{DELETE_FAILED_MESSAGE, LIST_FAILED_MESSAGE, UPLOAD_FAILED_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// La lista inicial aún no ha llegado
    NotLoaded,
    /// Ya hay un lote subiéndose
    UploadInProgress,
    TooMany { max: usize },
    NoImages,
    NoPrimary,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::NotLoaded => write!(f, "Chargement des images en cours."),
            ImageError::UploadInProgress => write!(f, "Upload en cours."),
            ImageError::TooMany { max } => write!(f, "Maximum {} images.", max),
            ImageError::NoImages => write!(f, "Veuillez ajouter au moins une image."),
            ImageError::NoPrimary => write!(f, "Veuillez choisir une image principale."),
        }
    }
}

impl std::error::Error for ImageError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ImagesViewModel {
    images: Vec<ProvisionalImage>,
    max_images: usize,
    pending_uploads: usize,
    loaded: bool,
    error: Option<String>,
}

impl Default for ImagesViewModel {
    fn default() -> Self {
        Self::new(CONFIG.max_images())
    }
}

impl ImagesViewModel {
    pub fn new(max_images: usize) -> Self {
        Self {
            images: Vec::new(),
            max_images,
            pending_uploads: 0,
            loaded: false,
            error: None,
        }
    }

    pub fn images(&self) -> &[ProvisionalImage] {
        &self.images
    }

    pub fn primary(&self) -> Option<&ProvisionalImage> {
        self.images.iter().find(|img| img.is_primary)
    }

    pub fn is_uploading(&self) -> bool {
        self.pending_uploads > 0
    }

    /// Mensaje de error visible (None => ocultar)
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Carga inicial desde el servicio. Las subidas terminadas antes de la
    /// respuesta se conservan detrás de la lista del servidor.
    pub fn load(&mut self, images: Vec<ProvisionalImage>) {
        let local: Vec<ProvisionalImage> = std::mem::take(&mut self.images)
            .into_iter()
            .filter(|img| !images.iter().any(|server| server.id == img.id))
            .collect();
        self.images = images;
        self.images.extend(local);
        self.loaded = true;
        self.normalize_primary();
        log::info!("🖼️ [IMAGES] {} imágenes cargadas", self.images.len());
    }

    /// La lista no llegó: se sube contra la lista local
    pub fn load_failed(&mut self, error: &str) {
        log::error!("❌ [IMAGES] Error cargando imágenes: {}", error);
        self.loaded = true;
        self.error = Some(LIST_FAILED_MESSAGE.to_string());
    }

    /// Admisión de un lote: todo o nada
    pub fn begin_batch(&mut self, files: usize) -> Result<(), ImageError> {
        if !self.loaded {
            log::warn!("⏳ [IMAGES] Lote ignorado: lista inicial pendiente");
            return Err(ImageError::NotLoaded);
        }
        if self.is_uploading() {
            log::warn!("⏳ [IMAGES] Lote ignorado: ya hay una subida en curso");
            return Err(ImageError::UploadInProgress);
        }
        if self.images.len() + files > self.max_images {
            let error = ImageError::TooMany { max: self.max_images };
            self.error = Some(error.to_string());
            return Err(error);
        }
        self.error = None;
        self.pending_uploads = files;
        Ok(())
    }

    /// Fin de la subida de un fichero del lote
    pub fn upload_completed(&mut self, result: Result<ProvisionalImage, AssetError>) {
        self.pending_uploads = self.pending_uploads.saturating_sub(1);
        match result {
            Ok(mut image) => {
                // La primera imagen de una lista vacía es la principal
                image.is_primary = self.images.is_empty();
                log::info!("✅ [IMAGES] Imagen {} subida", image.id);
                self.images.push(image);
            }
            Err(e) => {
                log::error!("❌ [IMAGES] Error subiendo imagen: {}", e);
                self.error = Some(e.user_message(UPLOAD_FAILED_MESSAGE));
            }
        }
    }

    pub fn set_primary(&mut self, id: &ImageId) -> bool {
        if !self.images.iter().any(|img| &img.id == id) {
            return false;
        }
        for image in &mut self.images {
            image.is_primary = &image.id == id;
        }
        true
    }

    /// Fin del borrado en el servidor
    pub fn delete_completed(&mut self, id: &ImageId, result: Result<(), AssetError>) {
        match result {
            Ok(()) => {
                self.images.retain(|img| &img.id != id);
                self.normalize_primary();
                log::info!("🗑️ [IMAGES] Imagen {} eliminada ({} restantes)", id, self.images.len());
            }
            Err(e) => {
                log::error!("❌ [IMAGES] Error borrando imagen {}: {}", id, e);
                self.error = Some(e.user_message(DELETE_FAILED_MESSAGE));
            }
        }
    }

    /// Condiciones para terminar el wizard
    pub fn validate_for_finish(&mut self) -> Result<(), ImageError> {
        let result = if self.images.is_empty() {
            Err(ImageError::NoImages)
        } else if self.primary().is_none() {
            Err(ImageError::NoPrimary)
        } else {
            Ok(())
        };
        self.error = result.as_ref().err().map(ImageError::to_string);
        result
    }

    /// Exactamente una principal si hay imágenes: la primera marcada,
    /// o la primera de la lista si ninguna lo está
    fn normalize_primary(&mut self) {
        let keep = self.images.iter().position(|img| img.is_primary).unwrap_or(0);
        for (index, image) in self.images.iter_mut().enumerate() {
            image.is_primary = index == keep;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded(id: &str) -> Result<ProvisionalImage, AssetError> {
        Ok(ProvisionalImage::new(ImageId::new(id), format!("/media/{}.jpg", id)))
    }

    fn gallery() -> ImagesViewModel {
        let mut vm = ImagesViewModel::new(5);
        vm.load(Vec::new());
        vm
    }

    fn marked(id: &str) -> ProvisionalImage {
        let mut image = ProvisionalImage::new(ImageId::new(id), format!("/media/{}.jpg", id));
        image.is_primary = true;
        image
    }

    fn ids(vm: &ImagesViewModel) -> Vec<&str> {
        vm.images().iter().map(|img| img.id.as_str()).collect()
    }

    fn upload_batch(vm: &mut ImagesViewModel, ids: &[&str]) -> Result<(), ImageError> {
        vm.begin_batch(ids.len())?;
        for id in ids {
            vm.upload_completed(uploaded(id));
        }
        Ok(())
    }

    fn primary_ids(vm: &ImagesViewModel) -> Vec<&str> {
        vm.images()
            .iter()
            .filter(|img| img.is_primary)
            .map(|img| img.id.as_str())
            .collect()
    }

    #[test]
    fn test_first_upload_is_primary() {
        let mut vm = gallery();
        upload_batch(&mut vm, &["1", "2"]).unwrap();
        assert_eq!(primary_ids(&vm), vec!["1"]);
        assert!(!vm.is_uploading());
    }

    #[test]
    fn test_batch_over_cap_is_rejected_entirely() {
        let mut vm = gallery();
        upload_batch(&mut vm, &["1", "2", "3"]).unwrap();

        let result = upload_batch(&mut vm, &["4", "5", "6"]);
        assert_eq!(result, Err(ImageError::TooMany { max: 5 }));
        assert_eq!(vm.images().len(), 3);
        assert_eq!(vm.error(), Some("Maximum 5 images."));
        assert!(!vm.is_uploading());

        // Un lote que cabe vuelve a estar permitido y limpia el error
        upload_batch(&mut vm, &["4", "5"]).unwrap();
        assert_eq!(vm.images().len(), 5);
        assert_eq!(vm.error(), None);
    }

    #[test]
    fn test_new_batch_ignored_while_uploading() {
        let mut vm = gallery();
        vm.begin_batch(2).unwrap();
        vm.upload_completed(uploaded("1"));
        assert!(vm.is_uploading());
        assert_eq!(vm.begin_batch(1), Err(ImageError::UploadInProgress));

        // Los callbacks ya lanzados se siguen aplicando
        vm.upload_completed(uploaded("2"));
        assert!(!vm.is_uploading());
        assert_eq!(vm.images().len(), 2);
        assert!(vm.begin_batch(1).is_ok());
    }

    #[test]
    fn test_overlapping_uploads_on_empty_list_yield_single_primary() {
        let mut vm = gallery();
        vm.begin_batch(3).unwrap();
        // Orden de llegada distinto al orden de selección
        vm.upload_completed(uploaded("c"));
        vm.upload_completed(uploaded("a"));
        vm.upload_completed(uploaded("b"));

        assert_eq!(primary_ids(&vm), vec!["c"]);
        let order: Vec<&str> = vm.images().iter().map(|img| img.id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_failed_upload_keeps_list_and_shows_message() {
        let mut vm = gallery();
        vm.begin_batch(2).unwrap();
        vm.upload_completed(Err(AssetError::Rejected(Some("Format invalide.".to_string()))));
        vm.upload_completed(Err(AssetError::Transport("Network error".to_string())));
        assert!(vm.images().is_empty());
        assert_eq!(vm.error(), Some(UPLOAD_FAILED_MESSAGE));
        assert!(!vm.is_uploading());
    }

    #[test]
    fn test_set_primary_is_exclusive() {
        let mut vm = gallery();
        upload_batch(&mut vm, &["1", "2", "3"]).unwrap();
        assert!(vm.set_primary(&ImageId::new("3")));
        assert_eq!(primary_ids(&vm), vec!["3"]);
        assert!(!vm.set_primary(&ImageId::new("99")));
        assert_eq!(primary_ids(&vm), vec!["3"]);
    }

    #[test]
    fn test_delete_primary_promotes_remaining() {
        let mut vm = gallery();
        upload_batch(&mut vm, &["1", "2"]).unwrap();
        vm.delete_completed(&ImageId::new("1"), Ok(()));
        assert_eq!(primary_ids(&vm), vec!["2"]);

        vm.delete_completed(&ImageId::new("2"), Ok(()));
        assert!(vm.images().is_empty());
        assert!(vm.primary().is_none());
    }

    #[test]
    fn test_delete_non_primary_keeps_primary() {
        let mut vm = gallery();
        upload_batch(&mut vm, &["1", "2", "3"]).unwrap();
        vm.set_primary(&ImageId::new("2"));
        vm.delete_completed(&ImageId::new("3"), Ok(()));
        assert_eq!(primary_ids(&vm), vec!["2"]);
    }

    #[test]
    fn test_failed_delete_leaves_state() {
        let mut vm = gallery();
        upload_batch(&mut vm, &["1"]).unwrap();
        vm.delete_completed(&ImageId::new("1"), Err(AssetError::Rejected(None)));
        assert_eq!(vm.images().len(), 1);
        assert_eq!(vm.error(), Some(DELETE_FAILED_MESSAGE));
    }

    #[test]
    fn test_load_marks_first_primary_when_none() {
        let mut vm = ImagesViewModel::new(5);
        vm.load(vec![
            ProvisionalImage::new(ImageId::new("7"), "/a"),
            ProvisionalImage::new(ImageId::new("8"), "/b"),
        ]);
        assert_eq!(primary_ids(&vm), vec!["7"]);

        let mut marked = ProvisionalImage::new(ImageId::new("10"), "/d");
        marked.is_primary = true;
        vm.load(vec![ProvisionalImage::new(ImageId::new("9"), "/c"), marked]);
        assert_eq!(primary_ids(&vm), vec!["10"]);
    }

    #[test]
    fn test_load_failure_keeps_previous_images() {
        let mut vm = gallery();
        upload_batch(&mut vm, &["1"]).unwrap();
        vm.load_failed("HTTP error 500");
        assert_eq!(vm.images().len(), 1);
        assert_eq!(vm.error(), Some(LIST_FAILED_MESSAGE));
    }

    #[test]
    fn test_finish_requires_images_and_primary() {
        let mut vm = ImagesViewModel::new(5);
        assert_eq!(vm.validate_for_finish(), Err(ImageError::NoImages));
        assert_eq!(vm.error(), Some("Veuillez ajouter au moins une image."));

        let mut not_primary = ProvisionalImage::new(ImageId::new("1"), "/a");
        not_primary.is_primary = false;
        vm.images.push(not_primary);
        assert_eq!(vm.validate_for_finish(), Err(ImageError::NoPrimary));
        assert_eq!(vm.error(), Some("Veuillez choisir une image principale."));

        vm.set_primary(&ImageId::new("1"));
        assert_eq!(vm.validate_for_finish(), Ok(()));
        assert_eq!(vm.error(), None);
    }

    #[test]
    fn test_load_keeps_single_primary() {
        let mut vm = ImagesViewModel::new(5);
        vm.load(vec![marked("1"), marked("2"), marked("3")]);
        assert_eq!(primary_ids(&vm), vec!["1"]);
    }

    #[test]
    fn test_upload_before_list_arrives_is_rejected() {
        let mut vm = ImagesViewModel::new(5);
        assert!(!vm.is_loaded());
        assert_eq!(vm.begin_batch(1), Err(ImageError::NotLoaded));
        assert!(!vm.is_uploading());

        vm.load(vec![marked("1"), ProvisionalImage::new(ImageId::new("2"), "/b")]);
        assert_eq!(vm.begin_batch(4), Err(ImageError::TooMany { max: 5 }));
        assert!(vm.begin_batch(3).is_ok());
    }

    #[test]
    fn test_load_merges_local_uploads() {
        let mut vm = gallery();
        upload_batch(&mut vm, &["9", "1"]).unwrap();
        assert_eq!(primary_ids(&vm), vec!["9"]);

        // Respuesta tardía del listado: "1" ya está en local
        vm.load(vec![marked("1")]);
        assert_eq!(ids(&vm), vec!["1", "9"]);
        assert_eq!(primary_ids(&vm), vec!["1"]);
    }

    #[test]
    fn test_load_failure_still_allows_uploads() {
        let mut vm = ImagesViewModel::new(5);
        vm.load_failed("Network error");
        assert!(vm.is_loaded());
        assert!(vm.begin_batch(1).is_ok());
    }
}
