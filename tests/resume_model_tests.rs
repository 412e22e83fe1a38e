use coachdesk_backend::entities::resume::{
    next_entry_id, Certification, ResumeData, DEFAULT_DECLARATION_TEXT,
};

#[test]
fn new_resume_is_empty_except_declaration_text() {
    let data = ResumeData::default();

    assert!(data.personal_info.name.is_empty());
    assert!(data.profile_summary.is_empty());
    assert!(data.certifications.is_empty());
    assert!(data.professional_experience.is_empty());
    assert!(data.strengths.is_empty());
    assert_eq!(data.declaration.text, DEFAULT_DECLARATION_TEXT);
    assert!(data.declaration.date.is_empty());
}

#[test]
fn append_then_remove_restores_summary_list() {
    let data = ResumeData::default()
        .add_summary_point("one".to_string())
        .add_summary_point("two".to_string());
    let before = data.profile_summary.clone();

    let edited = data
        .add_summary_point("transient".to_string())
        .remove_summary_point(2);

    assert_eq!(edited.profile_summary, before);
}

#[test]
fn edits_never_mutate_the_original_snapshot() {
    let original = ResumeData::default().add_strength("calm".to_string());
    let snapshot = original.clone();

    let _edited = original
        .add_strength("curious".to_string())
        .remove_strength(0);

    assert_eq!(original, snapshot);
}

#[test]
fn certification_removal_is_by_id_and_order_preserving() {
    let data = ResumeData::default()
        .add_certification(cert("a", "First"))
        .add_certification(cert("b", "Middle"))
        .add_certification(cert("c", "Last"));

    let edited = data.remove_certification("b");

    let names: Vec<&str> = edited
        .certifications
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["First", "Last"]);
}

#[test]
fn certification_update_replaces_matching_entry_in_place() {
    let data = ResumeData::default()
        .add_certification(cert("a", "Old name"))
        .add_certification(cert("b", "Untouched"));

    let edited = data.update_certification(cert("a", "New name"));

    assert_eq!(edited.certifications[0].name, "New name");
    assert_eq!(edited.certifications[1].name, "Untouched");
    assert_eq!(edited.certifications.len(), 2);
}

#[test]
fn entry_ids_differ_across_calls() {
    let a = next_entry_id();
    let b = next_entry_id();
    // Same-millisecond calls still differ through the random suffix; a
    // collision here is possible in principle but vanishingly unlikely.
    assert_ne!(a, b);
}

#[test]
fn resume_round_trips_through_json() {
    let data = ResumeData::default()
        .add_strength("ownership".to_string())
        .add_certification(cert("a", "CKA"));

    let json = serde_json::to_string(&data).expect("serializes");
    let back: ResumeData = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(data, back);
}

#[test]
fn resume_deserializes_from_partial_json() {
    // Client payloads may omit untouched fields entirely.
    let back: ResumeData =
        serde_json::from_str(r#"{"personalInfo":{"name":"A","email":"a@b.c"}}"#)
            .expect("partial payload deserializes");
    assert_eq!(back.personal_info.name, "A");
    assert!(back.strengths.is_empty());
}

fn cert(id: &str, name: &str) -> Certification {
    Certification {
        id: id.to_string(),
        name: name.to_string(),
        issuer: String::new(),
        year: String::new(),
    }
}
