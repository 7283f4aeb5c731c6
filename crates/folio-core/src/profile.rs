//! Portfolio content.
//!
//! Everything the page shows comes from a [`Profile`]. The built-in default is
//! the full portfolio; the `[profile]` table in `config.toml` overrides any
//! field.

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::motion::{MotionConfigError, PhraseList, Threshold};

/// Content sections of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Section {
    Hero,
    About,
    Education,
    Skills,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Education,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    /// Config key and anchor name.
    pub fn name(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// Label in the header navigation.
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "HOME",
            Section::About => "ABOUT",
            Section::Education => "EDUCATION",
            Section::Skills => "SKILLS",
            Section::Experience => "EXPERIENCE",
            Section::Contact => "CONTACT",
        }
    }

    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Built-in reveal threshold. About and Education reveal a little later.
    pub fn default_threshold(self) -> Threshold {
        match self {
            Section::About | Section::Education => Threshold::new(0.2).unwrap_or_default(),
            _ => Threshold::DEFAULT,
        }
    }
}

/// A labelled fact tile (e.g. "Location" / "New Delhi, India").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

impl Fact {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub note: String,
    pub status: String,
}

impl EducationItem {
    /// Short badge shown next to the card: the first word of the degree.
    pub fn badge(&self) -> &str {
        self.degree.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0..=100.
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// Page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Short credential used in the footer and the hero badge.
    pub headline: String,
    /// Subtitle on the profile card.
    pub title: String,
    pub badge: String,
    pub badge_note: String,
    pub tagline: String,
    pub summary: String,
    /// Phrases cycled by the hero typewriter.
    pub roles: Vec<String>,
    pub email: String,
    pub linkedin: String,
    /// Local path or URL of a resume document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    pub milestones: Vec<Fact>,
    pub about: String,
    pub facts: Vec<Fact>,
    pub education: Vec<EducationItem>,
    pub certifications: Vec<String>,
    pub skills: Vec<Skill>,
    pub experience: Vec<ExperienceItem>,
    pub contact_notes: Vec<String>,
}

impl Profile {
    /// Typewriter phrases.
    ///
    /// # Errors
    /// Returns an error if `roles` is empty.
    pub fn phrases(&self) -> Result<PhraseList, MotionConfigError> {
        PhraseList::new(self.roles.iter().cloned())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Checks content invariants.
    ///
    /// # Errors
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("profile.name must not be empty".to_string());
        }
        if let Err(err) = self.phrases() {
            return Err(format!("profile.roles: {err}"));
        }
        if let Some(skill) = self.skills.iter().find(|s| s.percent > 100) {
            return Err(format!(
                "profile.skills: '{}' has percent {} (max 100)",
                skill.name, skill.percent
            ));
        }
        Ok(())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Anjali Shukla".to_string(),
            headline: "CA Finalist".to_string(),
            title: "CA Finalist • Audit & Tax".to_string(),
            badge: "CA Candidate".to_string(),
            badge_note: "Articleship".to_string(),
            tagline: "Numbers that speak. Taxes that comply.".to_string(),
            summary: "I solve complex tax problems, perform detailed audits, and produce \
                      accurate financial statements. I combine technical CA training with \
                      practical Articleship experience."
                .to_string(),
            roles: ["CA Finalist", "Auditor", "Tax Expert", "Finance Enthusiast"]
                .map(String::from)
                .to_vec(),
            email: "shuklaanjali536@gmail.com".to_string(),
            linkedin: "https://www.linkedin.com/in/anjali-shukla-040140276".to_string(),
            resume: None,
            milestones: vec![
                Fact::new("Articleship", "Ongoing"),
                Fact::new("OC & IT", "Completed"),
            ],
            about: "I am Anjali Shukla, focused on auditing, taxation and financial \
                    accounting. I work with teams to deliver accurate reports, support \
                    compliance, and improve financial processes."
                .to_string(),
            facts: vec![
                Fact::new("Location", "New Delhi, India"),
                Fact::new("Availability", "Open to opportunities"),
                Fact::new("Focus", "Taxation · Audit · Finance"),
            ],
            education: vec![
                EducationItem {
                    degree: "CA Finalist".to_string(),
                    institution: "Institute of Chartered Accountants of India".to_string(),
                    note: "OC & IT training completed".to_string(),
                    status: "Pursuing".to_string(),
                },
                EducationItem {
                    degree: "B.Com".to_string(),
                    institution: "Patliputra University".to_string(),
                    note: "Major in Accounting".to_string(),
                    status: "2023".to_string(),
                },
            ],
            certifications: vec!["PwC Certification".to_string(), "EY Certification".to_string()],
            skills: [
                ("Taxation", 90),
                ("Auditing", 85),
                ("Financial Accounting", 88),
                ("Communication", 82),
                ("MS Excel", 80),
                ("Tally", 75),
            ]
            .into_iter()
            .map(|(name, percent)| Skill {
                name: name.to_string(),
                percent,
            })
            .collect(),
            experience: vec![
                ExperienceItem {
                    role: "Articleship Trainee".to_string(),
                    company: "Your Firm".to_string(),
                    duration: "2024 - Present".to_string(),
                    description: "Assisting audits & tax compliance for clients.".to_string(),
                },
                ExperienceItem {
                    role: "Tax Intern".to_string(),
                    company: "ABC Tax Advisors".to_string(),
                    duration: "2023 - 2024".to_string(),
                    description: "Worked on GST & Income Tax filings.".to_string(),
                },
            ],
            contact_notes: vec![
                "Open to opportunities".to_string(),
                "Articleship: ongoing".to_string(),
            ],
        }
    }
}
