use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// One stored image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub public_url: String,
    pub object_key: String,
}

impl ImageRecord {
    pub fn new(public_url: impl Into<String>, object_key: impl Into<String>) -> Self {
        Self {
            public_url: public_url.into(),
            object_key: object_key.into(),
        }
    }

    /// Last path segment of the object key, for captions.
    pub fn display_name(&self) -> &str {
        self.object_key
            .rsplit('/')
            .next()
            .unwrap_or(&self.object_key)
    }
}

/// A file selected by the user and not yet sent.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

// Payloads can be megabytes; keep them out of logs.
impl std::fmt::Debug for PendingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Record shape as sent by the backend, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImageRecord {
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default)]
    pub object_key: Option<String>,
}

impl TryFrom<RawImageRecord> for ImageRecord {
    type Error = GalleryError;

    fn try_from(raw: RawImageRecord) -> Result<Self, Self::Error> {
        let public_url = raw
            .public_url
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| GalleryError::MalformedResponse("record without public_url".into()))?;
        let object_key = raw
            .object_key
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| GalleryError::MalformedResponse("record without object_key".into()))?;
        Ok(ImageRecord {
            public_url,
            object_key,
        })
    }
}

/// `{ "data": ... }` envelope used by every backend response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    pub file_name: String,
}
