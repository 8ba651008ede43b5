use crate::core::models::ProductGroup;
use crate::storage::files::validate_filename;
use crate::storage::ImageStore;
use crate::utils::error::Result;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, warn};

/// A file received in an upload
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename, possibly with a directory prefix
    pub filename: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Why a file was left out of every group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    FileTooLarge,
    InvalidFilenamePattern,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::FileTooLarge => "File too large",
            SkipReason::InvalidFilenamePattern => "Invalid filename pattern",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedFile {
    pub filename: String,
    pub reason: SkipReason,
}

/// Result of partitioning an upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadGrouping {
    /// Groups in order of first appearance
    pub groups: Vec<ProductGroup>,
    pub skipped: Vec<SkippedFile>,
}

impl UploadGrouping {
    pub fn total_images(&self) -> usize {
        self.groups.iter().map(|group| group.images.len()).sum()
    }

    pub fn group(&self, management_number: &str) -> Option<&ProductGroup> {
        self.groups
            .iter()
            .find(|group| group.management_number == management_number)
    }

    fn push(&mut self, management_number: &str, filename: &str) {
        match self
            .groups
            .iter_mut()
            .find(|group| group.management_number == management_number)
        {
            Some(group) => {
                if !group.images.iter().any(|image| image == filename) {
                    group.images.push(filename.to_string());
                }
            }
            None => self.groups.push(ProductGroup {
                management_number: management_number.to_string(),
                images: vec![filename.to_string()],
            }),
        }
    }
}

/// Split a filename into its stored name and management number
///
/// The directory prefix is dropped; the management number is everything
/// before the first `_`.
pub fn management_number(filename: &str) -> Option<(&str, &str)> {
    let name = filename.rsplit('/').next().unwrap_or(filename);
    let (prefix, _) = name.split_once('_')?;

    if prefix.is_empty() || validate_filename(name).is_err() {
        return None;
    }
    Some((name, prefix))
}

/// Partitions uploads by management number
#[derive(Debug, Clone, Copy)]
pub struct UploadGrouper {
    max_file_size: u64,
}

impl UploadGrouper {
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Group files given as `(filename, size)` pairs
    pub fn group<'a, I>(&self, files: I) -> UploadGrouping
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut grouping = UploadGrouping::default();

        for (filename, size) in files {
            if size > self.max_file_size {
                warn!(filename, size, "Skipping upload: file too large");
                grouping.skipped.push(SkippedFile {
                    filename: filename.to_string(),
                    reason: SkipReason::FileTooLarge,
                });
                continue;
            }

            match management_number(filename) {
                Some((name, number)) => grouping.push(number, name),
                None => {
                    warn!(filename, "Skipping upload: invalid filename pattern");
                    grouping.skipped.push(SkippedFile {
                        filename: filename.to_string(),
                        reason: SkipReason::InvalidFilenamePattern,
                    });
                }
            }
        }

        debug!(
            groups = grouping.groups.len(),
            skipped = grouping.skipped.len(),
            "Upload grouped"
        );
        grouping
    }

    /// Group uploaded files without touching storage
    pub fn group_files(&self, files: &[UploadedFile]) -> UploadGrouping {
        self.group(files.iter().map(|file| (file.filename.as_str(), file.size())))
    }

    /// Write every groupable file to image storage, returning how many were written
    pub async fn write(&self, files: &[UploadedFile], images: &ImageStore) -> Result<usize> {
        let mut written = 0;
        for file in files {
            if file.size() > self.max_file_size {
                continue;
            }
            if let Some((name, _)) = management_number(&file.filename) {
                images.store(name, &file.content).await?;
                written += 1;
            }
        }
        Ok(written)
    }

    /// Group files and write the valid ones to image storage
    pub async fn store(&self, files: &[UploadedFile], images: &ImageStore) -> Result<UploadGrouping> {
        let grouping = self.group_files(files);
        self.write(files, images).await?;
        Ok(grouping)
    }
}
