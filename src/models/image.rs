use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identificador asignado por el servidor (opaco; llega como número o texto)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ImageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ImageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => ImageId(n.to_string()),
            RawId::Text(s) => ImageId(s),
        })
    }
}

/// Imagen subida pero aún no asociada a un establecimiento guardado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvisionalImage {
    pub id: ImageId,
    pub url: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl ProvisionalImage {
    pub fn new(id: ImageId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            is_primary: false,
        }
    }
}

/// Fallo de una llamada al Temporary Asset Service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// El servidor respondió `success: false` (con o sin mensaje)
    Rejected(Option<String>),
    /// Red, HTTP o respuesta ilegible
    Transport(String),
}

impl AssetError {
    /// Mensaje para el usuario: el del servidor si lo hay, si no el mensaje fijo
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AssetError::Rejected(Some(message)) if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Rejected(Some(message)) => write!(f, "Rejected: {}", message),
            AssetError::Rejected(None) => write!(f, "Rejected"),
            AssetError::Transport(message) => write!(f, "Transport error: {}", message),
        }
    }
}

impl std::error::Error for AssetError {}

/// Respuesta de `upload-image-temp`
#[derive(Debug, Clone, Deserialize)]
pub struct UploadImageResponse {
    pub success: bool,
    #[serde(default)]
    pub id: Option<ImageId>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadImageResponse {
    pub fn into_result(self) -> Result<ProvisionalImage, AssetError> {
        match (self.success, self.id, self.url) {
            (true, Some(id), Some(url)) => Ok(ProvisionalImage::new(id, url)),
            (true, _, _) => Err(AssetError::Transport("Respuesta de upload incompleta".to_string())),
            (false, _, _) => Err(AssetError::Rejected(self.error)),
        }
    }
}

/// Respuesta de `list-image-temp`
#[derive(Debug, Clone, Deserialize)]
pub struct ListImagesResponse {
    #[serde(default)]
    pub images: Option<Vec<ProvisionalImage>>,
}

/// Respuesta de `delete-image-temp/<id>/`
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteImageResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl DeleteImageResponse {
    pub fn into_result(self) -> Result<(), AssetError> {
        if self.success {
            Ok(())
        } else {
            Err(AssetError::Rejected(self.error))
        }
    }
}
