/// Clase CSS de Bootstrap para campos inválidos
pub const INVALID_CLASS: &str = "is-invalid";

/// Clase de los banners de error insertados al inicio del formulario
pub const ERROR_BANNER_CLASS: &str = "alert alert-danger mb-3";
pub const ERROR_BANNER_SELECTOR: &str = ".alert-danger";

/// Selectores comunes a todos los pasos
pub const NEXT_BUTTON_SELECTOR: &str = ".btn-next-step";
pub const PREV_BUTTON_SELECTOR: &str = ".btn-prev-step";
pub const FINISH_BUTTON_SELECTOR: &str = ".btn-finish-step";
pub const WIZARD_CONTAINER_SELECTOR: &str = ".container[data-is-edit]";
pub const RESET_BUTTON_ID: &str = "resetWizardBtn";

/// Paso 2
pub const OPEN_CHECKBOX_CLASS: &str = "is-open-checkbox";
pub const DUPLICATE_BUTTON_SELECTOR: &str = ".btn-duplicate";

/// Paso 3
pub const AMENITY_CHECKBOX_SELECTOR: &str = ".amenity-checkbox";
pub const AMENITY_DETAILS_CONTAINER_SELECTOR: &str = ".amenity-details-input";

/// Paso 5
pub const DROP_ZONE_ID: &str = "imageDropZone";
pub const FILE_INPUT_ID: &str = "imageInput";
pub const PREVIEW_LIST_ID: &str = "imagePreviewList";
pub const IMAGE_ERROR_ID: &str = "imageDropZoneError";
pub const DROP_HIGHLIGHT_CLASSES: [&str; 2] = ["bg-primary", "text-white"];
pub const PRIMARY_RADIO_NAME: &str = "is_primary";
pub const DELETE_IMAGE_SELECTOR: &str = ".btn-delete-image";

/// Modal del mapa (paso 1)
pub const OPEN_MAP_BUTTON_ID: &str = "openMapModal";
pub const MAP_MODAL_ID: &str = "mapModal";
pub const MAP_CONTAINER_ID: &str = "leafletMap";
pub const MAP_CONFIRM_BUTTON_ID: &str = "confirmMapSelection";
pub const MAP_STATUS_ID: &str = "mapStatus";
pub const TILE_LAYER_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Mensajes para el usuario
pub const RESET_CONFIRM_MESSAGE: &str =
    "Êtes-vous sûr de vouloir recommencer le wizard ? Toutes les données saisies seront perdues.";
pub const GEOCODE_FAILED_MESSAGE: &str = "Reverse geocoding échoué.";
pub const UPLOAD_FAILED_MESSAGE: &str = "Erreur lors de l'upload.";
pub const DELETE_FAILED_MESSAGE: &str = "Erreur lors de la suppression.";
pub const LIST_FAILED_MESSAGE: &str = "Erreur lors du chargement des images.";
