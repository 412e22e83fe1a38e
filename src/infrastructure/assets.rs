use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::domain::document::BadgeImage;
use crate::domain::use_cases::resume_export::BadgeSource;
use crate::errors::DocumentError;

/// Loads the certification badge image from a configured path. A missing or
/// unreadable file rejects the whole export; a resume without its badge is a
/// content defect, never a degraded-but-acceptable output.
#[derive(Debug, Clone)]
pub struct FsBadgeSource {
    path: PathBuf,
}

impl FsBadgeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FsBadgeSource { path: path.into() }
    }
}

#[async_trait]
impl BadgeSource for FsBadgeSource {
    async fn load(&self) -> Result<BadgeImage, DocumentError> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            DocumentError::AssetLoad(format!("{}: {}", self.path.display(), e))
        })?;

        if bytes.is_empty() {
            return Err(DocumentError::AssetLoad(format!(
                "{}: file is empty",
                self.path.display()
            )));
        }

        Ok(BadgeImage(bytes))
    }
}
