use std::fmt;

use serde::{Deserialize, Serialize};

/// Technical skills offered on the intake form. Serialized as their display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "Python")]
    Python,
    #[serde(rename = "C++")]
    Cpp,
    #[serde(rename = "Java")]
    Java,
    #[serde(rename = "JavaScript")]
    JavaScript,
    #[serde(rename = "React/Node")]
    ReactNode,
    #[serde(rename = "SQL/DBMS")]
    SqlDbms,
    #[serde(rename = "Data Structures (DSA)")]
    DataStructures,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Cloud (AWS/Azure)")]
    Cloud,
}

impl Skill {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Python,
            Self::Cpp,
            Self::Java,
            Self::JavaScript,
            Self::ReactNode,
            Self::SqlDbms,
            Self::DataStructures,
            Self::MachineLearning,
            Self::Cloud,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Cpp => "C++",
            Self::Java => "Java",
            Self::JavaScript => "JavaScript",
            Self::ReactNode => "React/Node",
            Self::SqlDbms => "SQL/DBMS",
            Self::DataStructures => "Data Structures (DSA)",
            Self::MachineLearning => "Machine Learning",
            Self::Cloud => "Cloud (AWS/Azure)",
        }
    }

    /// Case-insensitive lookup by display label, used by the CLI.
    pub fn from_label(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|skill| skill.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Academic branch. Display only; it never affects eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "CSE")]
    Cse,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "ECE")]
    Ece,
    #[serde(rename = "EEE")]
    Eee,
    #[serde(rename = "Mech")]
    Mech,
    #[serde(rename = "Civil")]
    Civil,
    #[serde(rename = "AI/DS")]
    AiDs,
    #[serde(rename = "Other")]
    Other,
}

impl Branch {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Cse,
            Self::It,
            Self::Ece,
            Self::Eee,
            Self::Mech,
            Self::Civil,
            Self::AiDs,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cse => "CSE",
            Self::It => "IT",
            Self::Ece => "ECE",
            Self::Eee => "EEE",
            Self::Mech => "Mech",
            Self::Civil => "Civil",
            Self::AiDs => "AI/DS",
            Self::Other => "Other",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|branch| branch.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw form input as submitted by the student, before validation or clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    pub name: String,
    pub register_number: String,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub branch: Option<Branch>,
    pub cgpa: f64,
    #[serde(default)]
    pub backlogs: i64,
    #[serde(default)]
    pub backlog_subjects: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Validated profile handed to the engine. Numeric fields are already in range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub name: String,
    pub register_number: String,
    pub college: Option<String>,
    pub branch: Option<Branch>,
    pub cgpa: f64,
    pub backlogs: u32,
    pub backlog_subjects: Option<String>,
    pub skills: Vec<Skill>,
}

impl CandidateProfile {
    pub fn has_skill(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }
}
