mod test_utils;

use std::sync::atomic::Ordering;

use coachdesk_backend::errors::DocumentError;
use coachdesk_backend::use_cases::resume_export::ResumeExporter;

use test_utils::{full_resume, minimal_resume, StubBadgeSource};

#[tokio::test]
async fn export_with_empty_name_rejects_before_asset_load() {
    let (source, calls) = StubBadgeSource::ok();
    let exporter = ResumeExporter::new(source);

    let mut data = minimal_resume();
    data.personal_info.name = String::new();

    let result = exporter.export_document(&data).await;
    assert_eq!(result, Err(DocumentError::MissingField("name".to_string())));
    assert_eq!(calls.load(Ordering::SeqCst), 0, "badge must not be touched");
}

#[tokio::test]
async fn export_with_empty_email_rejects_before_asset_load() {
    let (source, calls) = StubBadgeSource::ok();
    let exporter = ResumeExporter::new(source);

    let mut data = minimal_resume();
    data.personal_info.email = String::new();

    let result = exporter.export_printable(&data).await;
    assert_eq!(result, Err(DocumentError::MissingField("email".to_string())));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn successful_export_loads_badge_once() {
    let (source, calls) = StubBadgeSource::ok();
    let exporter = ResumeExporter::new(source);

    let blob = exporter
        .export_document(&full_resume())
        .await
        .expect("export succeeds");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(blob.starts_with(b"{\\rtf1"));
}

#[tokio::test]
async fn asset_failure_rejects_the_whole_export() {
    let exporter = ResumeExporter::new(StubBadgeSource::failing());

    let result = exporter.export_document(&full_resume()).await;
    assert!(matches!(result, Err(DocumentError::AssetLoad(_))));

    let result = exporter.export_printable(&full_resume()).await;
    assert!(matches!(result, Err(DocumentError::AssetLoad(_))));
}

#[tokio::test]
async fn failed_export_is_retryable() {
    let data = full_resume();

    let failing = ResumeExporter::new(StubBadgeSource::failing());
    assert!(failing.export_document(&data).await.is_err());

    // The snapshot is untouched; a retry against a healthy source succeeds.
    let (source, _) = StubBadgeSource::ok();
    let healthy = ResumeExporter::new(source);
    assert!(healthy.export_document(&data).await.is_ok());
}

#[tokio::test]
async fn printable_export_returns_full_markup() {
    let (source, _) = StubBadgeSource::ok();
    let exporter = ResumeExporter::new(source);

    let markup = exporter
        .export_printable(&full_resume())
        .await
        .expect("export succeeds");

    assert!(markup.starts_with("<!DOCTYPE html>"));
    assert!(markup.contains("STRENGTHS"));
}
