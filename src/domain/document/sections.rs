use crate::entities::resume::ResumeData;

use super::model::{
    Align, BadgeImage, Block, HeaderBlock, Paragraph, ResumeDocument, Run, SectionBlock,
};

/// One row of the section-inclusion table: a title, the predicate deciding
/// whether the section appears, and the builder producing its blocks.
/// Evaluated exactly once per assembly and shared by both renderers.
struct SectionSpec {
    title: &'static str,
    included: fn(&ResumeData) -> bool,
    build: fn(&ResumeData) -> Vec<Block>,
}

const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        title: "OBJECTIVE",
        included: |d| !d.personal_info.objective.trim().is_empty(),
        build: |d| vec![Block::Paragraph(Paragraph::text(d.personal_info.objective.trim()))],
    },
    SectionSpec {
        title: "PROFILE SUMMARY",
        included: |d| !d.profile_summary.is_empty(),
        build: |d| vec![Block::Bullets(d.profile_summary.clone())],
    },
    SectionSpec {
        title: "ACADEMIC PROFILE",
        included: |d| !d.academic_profile.trim().is_empty(),
        build: |d| vec![Block::Paragraph(Paragraph::text(d.academic_profile.trim()))],
    },
    SectionSpec {
        title: "CERTIFICATIONS",
        included: |d| d.certifications.iter().any(|c| c.is_present()),
        build: build_certifications,
    },
    SectionSpec {
        title: "TECHNICAL SKILLS",
        included: |d| d.technical_skills.has_any(),
        build: build_technical_skills,
    },
    SectionSpec {
        title: "WORK EXPERIENCE",
        included: |d| d.work_experience.is_present(),
        build: build_work_experience,
    },
    SectionSpec {
        title: "PROFESSIONAL EXPERIENCE",
        included: |d| d.professional_experience.iter().any(|e| e.is_present()),
        build: build_professional_experience,
    },
    SectionSpec {
        title: "STRENGTHS",
        included: |d| !d.strengths.is_empty(),
        build: |d| vec![Block::Bullets(d.strengths.clone())],
    },
    SectionSpec {
        title: "PERSONAL PROFILE",
        included: |d| d.personal_profile.has_any(),
        build: build_personal_profile,
    },
    SectionSpec {
        title: "DECLARATION",
        included: |d| d.declaration.is_present(),
        build: build_declaration,
    },
];

/// Builds the renderer-independent document for one resume snapshot.
/// The header is always present; sections follow the fixed table order.
pub fn compose(data: &ResumeData, badge: BadgeImage) -> ResumeDocument {
    let sections = SECTIONS
        .iter()
        .filter(|spec| (spec.included)(data))
        .map(|spec| SectionBlock {
            title: spec.title,
            blocks: (spec.build)(data),
        })
        .collect();

    ResumeDocument {
        header: build_header(data, badge),
        sections,
    }
}

fn build_header(data: &ResumeData, badge: BadgeImage) -> HeaderBlock {
    let info = &data.personal_info;
    let contact_lines = [&info.email, &info.phone, &info.location]
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();

    HeaderBlock {
        name: info.name.trim().to_string(),
        contact_lines,
        badge,
    }
}

fn build_certifications(data: &ResumeData) -> Vec<Block> {
    let items = data
        .certifications
        .iter()
        .filter(|c| c.is_present())
        .map(|c| {
            let mut line = c.name.trim().to_string();
            if !c.issuer.trim().is_empty() {
                line.push_str(&format!(" - {}", c.issuer.trim()));
            }
            if !c.year.trim().is_empty() {
                line.push_str(&format!(" ({})", c.year.trim()));
            }
            line
        })
        .collect();

    vec![Block::Bullets(items)]
}

fn build_technical_skills(data: &ResumeData) -> Vec<Block> {
    data.technical_skills
        .labeled_fields()
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| Block::LabelValue {
            label: (*label).to_string(),
            value: value.trim().to_string(),
        })
        .collect()
}

// One narrative sentence; each clause appears only when its field is set.
// Inclusion requires position or company, so the sentence is never bare.
fn build_work_experience(data: &ResumeData) -> Vec<Block> {
    let exp = &data.work_experience;
    let mut sentence = String::from("Working");
    if !exp.position.trim().is_empty() {
        sentence.push_str(&format!(" as {}", exp.position.trim()));
    }
    if !exp.company.trim().is_empty() {
        sentence.push_str(&format!(" at {}", exp.company.trim()));
    }
    if !exp.location.trim().is_empty() {
        sentence.push_str(&format!(", {}", exp.location.trim()));
    }
    if !exp.duration.trim().is_empty() {
        sentence.push_str(&format!(" for {}", exp.duration.trim()));
    }
    sentence.push('.');

    vec![Block::Paragraph(Paragraph::text(sentence))]
}

fn build_professional_experience(data: &ResumeData) -> Vec<Block> {
    let mut blocks = Vec::new();

    for entry in data.professional_experience.iter().filter(|e| e.is_present()) {
        let fields = [
            ("Project", entry.project_name.as_str()),
            ("Client", entry.client.as_str()),
            ("Role", entry.role.as_str()),
            ("Designation", entry.designation.as_str()),
            ("Duration", entry.duration.as_str()),
        ];
        for (label, value) in fields {
            if !value.trim().is_empty() {
                blocks.push(Block::LabelValue {
                    label: label.to_string(),
                    value: value.trim().to_string(),
                });
            }
        }

        let responsibilities: Vec<String> = entry
            .roles_responsibilities
            .iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        if !responsibilities.is_empty() {
            blocks.push(Block::Paragraph(Paragraph {
                runs: vec![Run::bold("Roles & Responsibilities:")],
                align: Align::Left,
            }));
            blocks.push(Block::Bullets(responsibilities));
        }
    }

    blocks
}

fn build_personal_profile(data: &ResumeData) -> Vec<Block> {
    let profile = &data.personal_profile;
    // Fixed line order; the owner's name renders first when present but
    // does not by itself pull the section in.
    let fields = [
        ("Name", data.personal_info.name.as_str()),
        ("Father's Name", profile.father_name.as_str()),
        ("Date of Birth", profile.dob.as_str()),
        ("Nationality", profile.nationality.as_str()),
        ("Languages", profile.languages.as_str()),
        ("Marital Status", profile.marital_status.as_str()),
    ];

    fields
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| Block::LabelValue {
            label: (*label).to_string(),
            value: value.trim().to_string(),
        })
        .collect()
}

fn build_declaration(data: &ResumeData) -> Vec<Block> {
    let decl = &data.declaration;
    let mut blocks = Vec::new();

    if !decl.text.trim().is_empty() {
        blocks.push(Block::Paragraph(Paragraph::text(decl.text.trim())));
    }

    let mut left = Vec::new();
    if !decl.date.trim().is_empty() {
        left.push(Paragraph::text(format!("Date : {}", decl.date.trim())));
    }
    if !decl.place.trim().is_empty() {
        left.push(Paragraph::text(format!("Place : {}", decl.place.trim())));
    }

    let mut right = Vec::new();
    if !decl.signature.trim().is_empty() {
        right.push(Paragraph::right(decl.signature.trim()));
    }
    right.push(Paragraph::right("Signature"));

    blocks.push(Block::TwoColumn { left, right });
    blocks
}
