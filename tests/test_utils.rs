use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use coachdesk_backend::document::BadgeImage;
use coachdesk_backend::entities::resume::{
    Certification, PersonalInfo, ProfessionalExperience, ResumeData, TechnicalSkills,
    WorkExperience,
};
use coachdesk_backend::errors::DocumentError;
use coachdesk_backend::use_cases::resume_export::BadgeSource;

pub const BADGE_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Badge source that counts invocations and can be told to fail, so tests
/// can assert the required-field gate runs before any asset work.
pub struct StubBadgeSource {
    pub calls: Arc<AtomicUsize>,
    pub fail: bool,
}

impl StubBadgeSource {
    pub fn ok() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            StubBadgeSource {
                calls: Arc::clone(&calls),
                fail: false,
            },
            calls,
        )
    }

    pub fn failing() -> Self {
        StubBadgeSource {
            calls: Arc::new(AtomicUsize::new(0)),
            fail: true,
        }
    }
}

#[async_trait]
impl BadgeSource for StubBadgeSource {
    async fn load(&self) -> Result<BadgeImage, DocumentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(DocumentError::AssetLoad("stub: asset unavailable".into()))
        } else {
            Ok(BadgeImage(BADGE_BYTES.to_vec()))
        }
    }
}

pub fn badge() -> BadgeImage {
    BadgeImage(BADGE_BYTES.to_vec())
}

/// Minimal valid resume: just enough to pass the export gate.
pub fn minimal_resume() -> ResumeData {
    let data = ResumeData::default();
    data.with_personal_info(PersonalInfo {
        name: "Asha Verma".to_string(),
        email: "asha.verma@example.com".to_string(),
        ..PersonalInfo::default()
    })
}

/// A resume exercising every section of the inclusion table.
pub fn full_resume() -> ResumeData {
    let mut data = minimal_resume();

    data.personal_info.phone = "+91 98765 43210".to_string();
    data.personal_info.location = "Hyderabad".to_string();
    data.personal_info.objective = "DevOps engineer focused on reliable delivery.".to_string();

    data = data
        .with_profile_summary(vec![
            "4+ years of infrastructure automation".to_string(),
            "Kubernetes in production since 2021".to_string(),
        ])
        .with_academic_profile("B.Tech in Computer Science, JNTU Hyderabad".to_string())
        .add_certification(Certification {
            id: "c1".to_string(),
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            year: "2023".to_string(),
        })
        .with_technical_skills(TechnicalSkills {
            operating_system: "Linux".to_string(),
            cloud_platform: "AWS".to_string(),
            cicd: "Jenkins, GitHub Actions".to_string(),
            ..TechnicalSkills::default()
        })
        .with_work_experience(WorkExperience {
            position: "DevOps Engineer".to_string(),
            company: "Acme Corp".to_string(),
            location: "Hyderabad".to_string(),
            duration: "2 years".to_string(),
        })
        .add_professional_experience(ProfessionalExperience {
            id: "p1".to_string(),
            project_name: "Payments platform migration".to_string(),
            client: "FinBank".to_string(),
            role: "DevOps".to_string(),
            designation: "Engineer".to_string(),
            duration: "8 months".to_string(),
            roles_responsibilities: vec![
                "Built the CI pipeline".to_string(),
                "Automated blue/green deployments".to_string(),
            ],
        })
        .with_strengths(vec!["Ownership".to_string(), "Calm under incident".to_string()]);

    data.personal_profile.father_name = "R. Verma".to_string();
    data.personal_profile.nationality = "Indian".to_string();
    data.declaration.date = "2025-06-01".to_string();
    data.declaration.place = "Hyderabad".to_string();
    data.declaration.signature = "Asha Verma".to_string();

    data
}
