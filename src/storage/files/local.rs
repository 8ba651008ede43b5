//! Local file system image storage

use crate::utils::error::{CatalogError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Image files stored flat under one directory, keyed by original filename
#[derive(Debug, Clone)]
pub struct ImageStore {
    base_path: PathBuf,
}

impl ImageStore {
    /// Create a new image store, creating the directory if needed
    pub async fn new<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let path = base_path.as_ref().to_path_buf();

        if !path.exists() {
            fs::create_dir_all(&path).await.map_err(|e| {
                CatalogError::FileStorage(format!("Failed to create storage directory: {}", e))
            })?;
        }

        info!("Image storage initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    /// Directory the images live in
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Write an image under its filename; an existing file is replaced
    pub async fn store(&self, filename: &str, content: &[u8]) -> Result<()> {
        let file_path = self.file_path(filename)?;

        let mut file = fs::File::create(&file_path)
            .await
            .map_err(|e| CatalogError::FileStorage(format!("Failed to create file: {}", e)))?;

        file.write_all(content)
            .await
            .map_err(|e| CatalogError::FileStorage(format!("Failed to write file: {}", e)))?;
        file.flush()
            .await
            .map_err(|e| CatalogError::FileStorage(format!("Failed to flush file: {}", e)))?;

        debug!(filename, bytes = content.len(), "Image stored");
        Ok(())
    }

    /// Read an image's bytes
    pub async fn read(&self, filename: &str) -> Result<Vec<u8>> {
        let file_path = self.file_path(filename)?;

        if !file_path.exists() {
            return Err(CatalogError::NotFound(format!("Image not found: {}", filename)));
        }

        fs::read(&file_path)
            .await
            .map_err(|e| CatalogError::FileStorage(format!("Failed to read file: {}", e)))
    }

    /// Delete an image. Missing files are not an error.
    pub async fn delete(&self, filename: &str) -> Result<bool> {
        let file_path = self.file_path(filename)?;

        if !file_path.exists() {
            return Ok(false);
        }

        fs::remove_file(&file_path)
            .await
            .map_err(|e| CatalogError::FileStorage(format!("Failed to delete file: {}", e)))?;

        debug!(filename, "Image deleted");
        Ok(true)
    }

    /// Check if an image exists
    pub async fn exists(&self, filename: &str) -> Result<bool> {
        let file_path = self.file_path(filename)?;
        Ok(fs::try_exists(&file_path).await.unwrap_or(false))
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        if !self.base_path.exists() {
            return Err(CatalogError::FileStorage(
                "Storage directory does not exist".to_string(),
            ));
        }

        let test_file = self.base_path.join(".health_check");
        fs::write(&test_file, b"health_check")
            .await
            .map_err(|e| CatalogError::FileStorage(format!("Storage not writable: {}", e)))?;

        let _ = fs::remove_file(&test_file).await;

        Ok(())
    }

    /// Detect content type from filename
    pub fn content_type(filename: &str) -> &'static str {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("heic") => "image/heic",
            Some("bmp") => "image/bmp",
            _ => "application/octet-stream",
        }
    }

    /// Resolve a filename inside the base directory
    fn file_path(&self, filename: &str) -> Result<PathBuf> {
        validate_filename(filename)?;
        Ok(self.base_path.join(filename))
    }
}

/// Reject names that could escape the storage directory
pub(crate) fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty()
        || filename == "."
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains('\0')
    {
        return Err(CatalogError::Validation(format!(
            "Invalid image filename: {}",
            filename
        )));
    }
    Ok(())
}
