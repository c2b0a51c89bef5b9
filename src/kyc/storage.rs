//! Filesystem storage for uploaded KYC documents
//!
//! Documents land under `{root}/kyc/{user_id}/` and are exposed to clients
//! under `/uploads/kyc/{user_id}/...`. The per-user directory keeps uploads
//! from different users from ever contending for the same path.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

use crate::error::ApiError;

/// Upload size limit per document
pub const MAX_DOCUMENT_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf"];

/// Document storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Only images (jpg, jpeg, png) and PDF files are allowed")]
    UnsupportedFileType,

    #[error("File exceeds the 5MB size limit")]
    FileTooLarge,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::UnsupportedFileType | StorageError::FileTooLarge => {
                ApiError::BadRequest(e.to_string())
            }
            StorageError::Io(err) => ApiError::InternalError(err.to_string()),
        }
    }
}

/// The three document slots of a KYC submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    IdProof,
    AddressProof,
    Selfie,
}

impl DocumentKind {
    /// Multipart field name, which doubles as the stored file stem
    pub fn field_name(&self) -> &'static str {
        match self {
            DocumentKind::IdProof => "idProof",
            DocumentKind::AddressProof => "addressProof",
            DocumentKind::Selfie => "selfie",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "idProof" => Some(DocumentKind::IdProof),
            "addressProof" => Some(DocumentKind::AddressProof),
            "selfie" => Some(DocumentKind::Selfie),
            _ => None,
        }
    }
}

/// Check the file name carries an allowed extension, returning it lowercased
pub fn validate_extension(file_name: &str) -> Result<String, StorageError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or(StorageError::UnsupportedFileType)?;

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(StorageError::UnsupportedFileType)
    }
}

/// Persists KYC documents under a configurable root directory
#[derive(Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write one document and return its public path
    ///
    /// Re-uploading the same kind for the same user overwrites the previous
    /// file; concurrent same-field uploads last-write-win.
    pub async fn save(
        &self,
        user_id: Uuid,
        kind: DocumentKind,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        if bytes.len() > MAX_DOCUMENT_BYTES {
            return Err(StorageError::FileTooLarge);
        }
        let ext = validate_extension(file_name)?;

        let dir = self.root.join("kyc").join(user_id.to_string());
        fs::create_dir_all(&dir).await?;

        let stored_name = format!("{}.{}", kind.field_name(), ext);
        fs::write(dir.join(&stored_name), bytes).await?;

        tracing::debug!(user_id = %user_id, field = kind.field_name(), "KYC document stored");

        Ok(format!("/uploads/kyc/{}/{}", user_id, stored_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_extension_accepts_allowed_types() {
        assert_eq!(validate_extension("passport.jpg").unwrap(), "jpg");
        assert_eq!(validate_extension("scan.PDF").unwrap(), "pdf");
        assert_eq!(validate_extension("selfie.PNG").unwrap(), "png");
        assert_eq!(validate_extension("photo.Jpeg").unwrap(), "jpeg");
    }

    #[test]
    fn test_validate_extension_rejects_others() {
        assert!(matches!(
            validate_extension("malware.exe"),
            Err(StorageError::UnsupportedFileType)
        ));
        assert!(matches!(
            validate_extension("archive.tar.gz"),
            Err(StorageError::UnsupportedFileType)
        ));
        assert!(matches!(
            validate_extension("no_extension"),
            Err(StorageError::UnsupportedFileType)
        ));
    }

    #[test]
    fn test_document_kind_field_names_round_trip() {
        for kind in [
            DocumentKind::IdProof,
            DocumentKind::AddressProof,
            DocumentKind::Selfie,
        ] {
            assert_eq!(DocumentKind::from_field_name(kind.field_name()), Some(kind));
        }
        assert_eq!(DocumentKind::from_field_name("somethingElse"), None);
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_public_path() {
        let root = std::env::temp_dir().join(format!("goldvest-test-{}", Uuid::new_v4()));
        let store = DocumentStore::new(&root);
        let user_id = Uuid::new_v4();

        let path = store
            .save(user_id, DocumentKind::Selfie, "me.png", b"fake image bytes")
            .await
            .unwrap();

        assert_eq!(path, format!("/uploads/kyc/{}/selfie.png", user_id));
        let on_disk = root.join("kyc").join(user_id.to_string()).join("selfie.png");
        assert_eq!(std::fs::read(on_disk).unwrap(), b"fake image bytes");

        std::fs::remove_dir_all(root).ok();
    }

    #[tokio::test]
    async fn test_save_rejects_oversized_file() {
        let root = std::env::temp_dir().join(format!("goldvest-test-{}", Uuid::new_v4()));
        let store = DocumentStore::new(&root);

        let too_big = vec![0u8; MAX_DOCUMENT_BYTES + 1];
        let result = store
            .save(Uuid::new_v4(), DocumentKind::IdProof, "id.jpg", &too_big)
            .await;

        assert!(matches!(result, Err(StorageError::FileTooLarge)));
    }
}
