use async_trait::async_trait;

use crate::domain::document::{compose, render_html, render_rtf, BadgeImage};
use crate::entities::resume::ResumeData;
use crate::errors::DocumentError;

/// Provider of the certification badge image embedded in every resume.
/// Injected so exports can be exercised without touching the filesystem.
#[async_trait]
pub trait BadgeSource: Send + Sync {
    async fn load(&self) -> Result<BadgeImage, DocumentError>;
}

/// Orchestrates one export attempt: gate on required fields, load the badge,
/// compose, render. A failed attempt leaves the caller's `ResumeData`
/// untouched and is always retryable.
pub struct ResumeExporter<B: BadgeSource> {
    badge_source: B,
}

impl<B: BadgeSource> ResumeExporter<B> {
    pub fn new(badge_source: B) -> Self {
        ResumeExporter { badge_source }
    }

    /// Produces the editable document blob (RTF).
    pub async fn export_document(&self, data: &ResumeData) -> Result<Vec<u8>, DocumentError> {
        validate_required(data)?;
        let badge = self.badge_source.load().await?;
        Ok(render_rtf(&compose(data, badge)))
    }

    /// Produces the standalone printable HTML page.
    pub async fn export_printable(&self, data: &ResumeData) -> Result<String, DocumentError> {
        validate_required(data)?;
        let badge = self.badge_source.load().await?;
        Ok(render_html(&compose(data, badge)))
    }
}

// The gate runs before any asset work so a missing name or email can never
// trigger a badge load.
fn validate_required(data: &ResumeData) -> Result<(), DocumentError> {
    if data.personal_info.name.trim().is_empty() {
        return Err(DocumentError::MissingField("name".to_string()));
    }
    if data.personal_info.email.trim().is_empty() {
        return Err(DocumentError::MissingField("email".to_string()));
    }
    Ok(())
}
