mod test_utils;

use coachdesk_backend::document::{compose, render_html, render_rtf};
use coachdesk_backend::entities::resume::{Certification, Declaration, ResumeData};

use test_utils::{badge, full_resume, minimal_resume};

fn rtf_string(data: &ResumeData) -> String {
    String::from_utf8(render_rtf(&compose(data, badge()))).expect("RTF output is ASCII")
}

#[test]
fn renderers_are_deterministic() {
    let data = full_resume();

    let rtf_a = render_rtf(&compose(&data, badge()));
    let rtf_b = render_rtf(&compose(&data, badge()));
    assert_eq!(rtf_a, rtf_b);

    let html_a = render_html(&compose(&data, badge()));
    let html_b = render_html(&compose(&data, badge()));
    assert_eq!(html_a, html_b);
}

#[test]
fn section_sets_match_between_renderers() {
    let data = full_resume();
    let doc = compose(&data, badge());

    let rtf = rtf_string(&data);
    let html = render_html(&doc);

    assert!(!doc.sections.is_empty());
    for title in doc.section_titles() {
        assert!(rtf.contains(title), "RTF output missing section {title}");
        assert!(
            html.contains(&format!("<div class=\"section-label\">{title}</div>")),
            "HTML output missing section {title}"
        );
    }
}

#[test]
fn full_resume_includes_every_section_in_order() {
    let doc = compose(&full_resume(), badge());
    assert_eq!(
        doc.section_titles(),
        vec![
            "OBJECTIVE",
            "PROFILE SUMMARY",
            "ACADEMIC PROFILE",
            "CERTIFICATIONS",
            "TECHNICAL SKILLS",
            "WORK EXPERIENCE",
            "PROFESSIONAL EXPERIENCE",
            "STRENGTHS",
            "PERSONAL PROFILE",
            "DECLARATION",
        ]
    );
}

#[test]
fn nameless_certifications_are_filtered_in_order() {
    let data = minimal_resume()
        .add_certification(Certification {
            id: "a".into(),
            name: "First".into(),
            issuer: String::new(),
            year: String::new(),
        })
        .add_certification(Certification {
            id: "b".into(),
            name: String::new(),
            issuer: "Ghost Issuer".into(),
            year: "2020".into(),
        })
        .add_certification(Certification {
            id: "c".into(),
            name: "Second".into(),
            issuer: String::new(),
            year: String::new(),
        });

    let html = render_html(&compose(&data, badge()));
    assert!(html.contains("First"));
    assert!(html.contains("Second"));
    assert!(!html.contains("Ghost Issuer"));

    let first = html.find("First").expect("First present");
    let second = html.find("Second").expect("Second present");
    assert!(first < second, "relative order must be preserved");
}

#[test]
fn only_strengths_yields_exactly_header_and_strengths() {
    // Declaration text defaults to non-empty, so the scenario clears it:
    // only name, email, and one strength are populated.
    let data = minimal_resume()
        .add_strength("Fast learner".to_string())
        .with_declaration(Declaration {
            text: String::new(),
            date: String::new(),
            place: String::new(),
            signature: String::new(),
        });

    let doc = compose(&data, badge());
    assert_eq!(doc.section_titles(), vec!["STRENGTHS"]);

    let html = render_html(&doc);
    assert_eq!(html.matches("<li>").count(), 1);
    assert!(html.contains("Asha Verma"));
    assert!(html.contains("Fast learner"));
}

#[test]
fn personal_profile_not_included_by_owner_name_alone() {
    let data = minimal_resume().with_declaration(Declaration {
        text: String::new(),
        date: String::new(),
        place: String::new(),
        signature: String::new(),
    });

    let doc = compose(&data, badge());
    assert!(!doc.section_titles().contains(&"PERSONAL PROFILE"));
}

#[test]
fn personal_profile_renders_name_first_when_included() {
    let mut data = minimal_resume();
    data.personal_profile.nationality = "Indian".to_string();

    let html = render_html(&compose(&data, badge()));
    let name_line = html.find("<span class=\"label\">Name</span> : Asha Verma");
    let nationality_line = html.find("<span class=\"label\">Nationality</span> : Indian");
    assert!(name_line.is_some());
    assert!(nationality_line.is_some());
    assert!(name_line < nationality_line);
}

#[test]
fn work_experience_renders_one_conditional_sentence() {
    let html = render_html(&compose(&full_resume(), badge()));
    assert!(html.contains("Working as DevOps Engineer at Acme Corp, Hyderabad for 2 years."));

    let mut data = full_resume();
    data.work_experience.location = String::new();
    data.work_experience.duration = String::new();
    let html = render_html(&compose(&data, badge()));
    assert!(html.contains("Working as DevOps Engineer at Acme Corp."));
}

#[test]
fn technical_skills_render_only_non_empty_fields() {
    let html = render_html(&compose(&full_resume(), badge()));
    assert!(html.contains("<span class=\"label\">Operating Systems</span> : Linux"));
    assert!(html.contains("<span class=\"label\">CI/CD</span> : Jenkins, GitHub Actions"));
    assert!(!html.contains("Ticketing Tools"));
    assert!(!html.contains("Version Control"));
}

#[test]
fn declaration_renders_footer_with_signature_label() {
    let html = render_html(&compose(&full_resume(), badge()));
    assert!(html.contains("Date : 2025-06-01"));
    assert!(html.contains("Place : Hyderabad"));
    assert!(html.contains("Signature"));

    // Signature name sits above the literal label in the right column.
    let sig_name = html.rfind("Asha Verma").expect("signature present");
    let sig_label = html.rfind(">Signature<").expect("label present");
    assert!(sig_name < sig_label);
}

#[test]
fn rtf_output_is_valid_rtf_with_embedded_badge() {
    let rtf = rtf_string(&full_resume());
    assert!(rtf.starts_with("{\\rtf1"));
    assert!(rtf.ends_with('}'));
    assert!(rtf.contains("\\pngblip"));
    // Badge PNG signature, hex-encoded.
    assert!(rtf.contains("89504e47"));
    // Bullets use the literal glyph, not RTF list numbering.
    assert!(rtf.contains("\\u8226?"));
    assert!(!rtf.contains("\\listtext"));
}

#[test]
fn html_output_is_standalone() {
    let html = render_html(&compose(&full_resume(), badge()));
    assert!(html.contains("<style>"));
    assert!(html.contains("data:image/png;base64,"));
    assert!(!html.contains("http://"), "no external resources");
    assert!(!html.contains("src=\"https://"), "no external resources");
}

#[test]
fn user_text_is_html_escaped() {
    let data = minimal_resume().add_strength("<script>alert(1)</script>".to_string());
    let html = render_html(&compose(&data, badge()));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}
