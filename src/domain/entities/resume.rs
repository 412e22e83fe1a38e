use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Pre-filled declaration wording; present on every freshly created resume.
pub const DEFAULT_DECLARATION_TEXT: &str = "I hereby declare that the information \
furnished above is true to the best of my knowledge and belief.";

/// In-memory resume content for one editing session.
///
/// The model is transient: it is created empty when an editing session
/// starts, lives only for that session, and is never autosaved. Sequence
/// fields change only by whole-sequence replacement — the edit operations
/// below clone and return a new value, never splice in place — so callers
/// can treat each edit as producing a structurally fresh snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub profile_summary: Vec<String>,
    pub academic_profile: String,
    pub certifications: Vec<Certification>,
    pub technical_skills: TechnicalSkills,
    pub work_experience: WorkExperience,
    pub professional_experience: Vec<ProfessionalExperience>,
    pub strengths: Vec<String>,
    pub personal_profile: PersonalProfile,
    pub declaration: Declaration,
}

impl Default for ResumeData {
    fn default() -> Self {
        ResumeData {
            personal_info: PersonalInfo::default(),
            profile_summary: Vec::new(),
            academic_profile: String::new(),
            certifications: Vec::new(),
            technical_skills: TechnicalSkills::default(),
            work_experience: WorkExperience::default(),
            professional_experience: Vec::new(),
            strengths: Vec::new(),
            personal_profile: PersonalProfile::default(),
            declaration: Declaration::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub objective: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub year: String,
}

impl Certification {
    /// A certification renders only when it has a name.
    pub fn is_present(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalSkills {
    pub operating_system: String,
    pub cloud_platform: String,
    pub orchestration: String,
    pub ticketing_tools: String,
    pub cicd: String,
    pub iaac: String,
    pub version_control: String,
    pub scripting: String,
}

impl TechnicalSkills {
    /// Fields in their fixed display order, paired with their labels.
    pub fn labeled_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("Operating Systems", self.operating_system.as_str()),
            ("Cloud Platform", self.cloud_platform.as_str()),
            ("Orchestration", self.orchestration.as_str()),
            ("Ticketing Tools", self.ticketing_tools.as_str()),
            ("CI/CD", self.cicd.as_str()),
            ("IaaC", self.iaac.as_str()),
            ("Version Control", self.version_control.as_str()),
            ("Scripting", self.scripting.as_str()),
        ]
    }

    pub fn has_any(&self) -> bool {
        self.labeled_fields()
            .iter()
            .any(|(_, value)| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub position: String,
    pub company: String,
    pub location: String,
    pub duration: String,
}

impl WorkExperience {
    pub fn is_present(&self) -> bool {
        !self.position.trim().is_empty() || !self.company.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfessionalExperience {
    pub id: String,
    pub project_name: String,
    pub client: String,
    pub role: String,
    pub designation: String,
    pub duration: String,
    pub roles_responsibilities: Vec<String>,
}

impl ProfessionalExperience {
    /// An experience entry renders only when it names a project.
    pub fn is_present(&self) -> bool {
        !self.project_name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalProfile {
    pub father_name: String,
    pub dob: String,
    pub nationality: String,
    pub languages: String,
    pub marital_status: String,
}

impl PersonalProfile {
    pub fn has_any(&self) -> bool {
        [
            &self.father_name,
            &self.dob,
            &self.nationality,
            &self.languages,
            &self.marital_status,
        ]
        .iter()
        .any(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Declaration {
    pub text: String,
    pub date: String,
    pub place: String,
    pub signature: String,
}

impl Default for Declaration {
    fn default() -> Self {
        Declaration {
            text: DEFAULT_DECLARATION_TEXT.to_string(),
            date: String::new(),
            place: String::new(),
            signature: String::new(),
        }
    }
}

impl Declaration {
    pub fn is_present(&self) -> bool {
        !self.text.trim().is_empty()
            || !self.date.trim().is_empty()
            || !self.place.trim().is_empty()
    }
}

/// Generates a session-unique id for list entries (certifications,
/// professional experience). Timestamp plus a random suffix; collision
/// probability within one editing session is negligible and acceptable —
/// these ids never leave the session.
pub fn next_entry_id() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(1000..10_000);
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

impl ResumeData {
    pub fn with_personal_info(&self, info: PersonalInfo) -> Self {
        let mut next = self.clone();
        next.personal_info = info;
        next
    }

    pub fn with_profile_summary(&self, points: Vec<String>) -> Self {
        let mut next = self.clone();
        next.profile_summary = points;
        next
    }

    pub fn add_summary_point(&self, point: String) -> Self {
        let mut points = self.profile_summary.clone();
        points.push(point);
        self.with_profile_summary(points)
    }

    pub fn remove_summary_point(&self, index: usize) -> Self {
        let points = self
            .profile_summary
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p.clone())
            .collect();
        self.with_profile_summary(points)
    }

    pub fn with_academic_profile(&self, text: String) -> Self {
        let mut next = self.clone();
        next.academic_profile = text;
        next
    }

    pub fn add_certification(&self, cert: Certification) -> Self {
        let mut next = self.clone();
        let mut certs = self.certifications.clone();
        certs.push(cert);
        next.certifications = certs;
        next
    }

    pub fn remove_certification(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.certifications = self
            .certifications
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        next
    }

    pub fn update_certification(&self, cert: Certification) -> Self {
        let mut next = self.clone();
        next.certifications = self
            .certifications
            .iter()
            .map(|c| if c.id == cert.id { cert.clone() } else { c.clone() })
            .collect();
        next
    }

    pub fn with_technical_skills(&self, skills: TechnicalSkills) -> Self {
        let mut next = self.clone();
        next.technical_skills = skills;
        next
    }

    pub fn with_work_experience(&self, experience: WorkExperience) -> Self {
        let mut next = self.clone();
        next.work_experience = experience;
        next
    }

    pub fn add_professional_experience(&self, entry: ProfessionalExperience) -> Self {
        let mut next = self.clone();
        let mut entries = self.professional_experience.clone();
        entries.push(entry);
        next.professional_experience = entries;
        next
    }

    pub fn remove_professional_experience(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.professional_experience = self
            .professional_experience
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        next
    }

    pub fn update_professional_experience(&self, entry: ProfessionalExperience) -> Self {
        let mut next = self.clone();
        next.professional_experience = self
            .professional_experience
            .iter()
            .map(|e| if e.id == entry.id { entry.clone() } else { e.clone() })
            .collect();
        next
    }

    pub fn with_strengths(&self, strengths: Vec<String>) -> Self {
        let mut next = self.clone();
        next.strengths = strengths;
        next
    }

    pub fn add_strength(&self, strength: String) -> Self {
        let mut strengths = self.strengths.clone();
        strengths.push(strength);
        self.with_strengths(strengths)
    }

    pub fn remove_strength(&self, index: usize) -> Self {
        let strengths = self
            .strengths
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, s)| s.clone())
            .collect();
        self.with_strengths(strengths)
    }

    pub fn with_personal_profile(&self, profile: PersonalProfile) -> Self {
        let mut next = self.clone();
        next.personal_profile = profile;
        next
    }

    pub fn with_declaration(&self, declaration: Declaration) -> Self {
        let mut next = self.clone();
        next.declaration = declaration;
        next
    }
}
