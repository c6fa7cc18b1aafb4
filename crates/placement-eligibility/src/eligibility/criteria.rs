use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::domain::Skill;

pub const MAX_CGPA: f64 = 10.0;

/// Skill a company insists on, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "skill", rename_all = "snake_case")]
pub enum SkillRequirement {
    None,
    Skill(Skill),
}

impl SkillRequirement {
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Skill(skill) => skill.label(),
        }
    }
}

/// Display grouping for eligible companies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyTier {
    Premier,
    Standard,
}

impl CompanyTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Premier => "Super Dream",
            Self::Standard => "Dream / Core",
        }
    }
}

/// One row of the criteria table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyCriteria {
    pub company: String,
    pub min_cgpa: f64,
    pub max_backlogs: u32,
    pub required_skill: SkillRequirement,
    pub tier: CompanyTier,
}

impl CompanyCriteria {
    pub fn new(
        company: impl Into<String>,
        min_cgpa: f64,
        max_backlogs: u32,
        required_skill: SkillRequirement,
        tier: CompanyTier,
    ) -> Self {
        Self {
            company: company.into(),
            min_cgpa,
            max_backlogs,
            required_skill,
            tier,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CriteriaError {
    #[error("company '{0}' appears more than once in the criteria table")]
    DuplicateCompany(String),
    #[error("minimum CGPA for '{company}' must be within 0-10 (found {min_cgpa})")]
    InvalidMinimumCgpa { company: String, min_cgpa: f64 },
}

/// Immutable, ordered company cutoffs. Built once and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaTable {
    rows: Vec<CompanyCriteria>,
}

impl CriteriaTable {
    pub fn new(rows: Vec<CompanyCriteria>) -> Result<Self, CriteriaError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !row.min_cgpa.is_finite() || !(0.0..=MAX_CGPA).contains(&row.min_cgpa) {
                return Err(CriteriaError::InvalidMinimumCgpa {
                    company: row.company.clone(),
                    min_cgpa: row.min_cgpa,
                });
            }
            if !seen.insert(row.company.as_str()) {
                return Err(CriteriaError::DuplicateCompany(row.company.clone()));
            }
        }

        Ok(Self { rows })
    }

    /// Industry cutoffs for the 2026 placement season, in display order.
    pub fn standard() -> Self {
        use CompanyTier::{Premier, Standard};
        use SkillRequirement::None as Open;

        let needs = SkillRequirement::Skill;

        Self {
            rows: vec![
                CompanyCriteria::new("Google", 9.0, 0, needs(Skill::DataStructures), Premier),
                CompanyCriteria::new("Microsoft", 8.5, 0, needs(Skill::DataStructures), Premier),
                CompanyCriteria::new("Amazon", 8.5, 0, needs(Skill::Cpp), Premier),
                CompanyCriteria::new("Goldman Sachs", 8.0, 0, needs(Skill::Java), Premier),
                CompanyCriteria::new("JPMorgan Chase", 7.5, 0, needs(Skill::Python), Standard),
                CompanyCriteria::new("Oracle", 7.5, 0, needs(Skill::SqlDbms), Standard),
                CompanyCriteria::new("Deloitte", 6.5, 0, needs(Skill::SqlDbms), Standard),
                CompanyCriteria::new("TCS Digital", 7.0, 0, needs(Skill::Python), Standard),
                CompanyCriteria::new("TCS Ninja", 6.0, 1, Open, Standard),
                CompanyCriteria::new("Infosys", 6.0, 0, Open, Standard),
                CompanyCriteria::new("Wipro", 6.0, 1, Open, Standard),
                CompanyCriteria::new("Accenture", 6.5, 1, Open, Standard),
                // Zoho tolerates backlogs when the candidate is strong in C++.
                CompanyCriteria::new("Zoho", 6.0, 2, needs(Skill::Cpp), Standard),
            ],
        }
    }

    pub fn rows(&self) -> &[CompanyCriteria] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, company: &str) -> Option<&CompanyCriteria> {
        self.rows.iter().find(|row| row.company == company)
    }
}

impl Default for CriteriaTable {
    fn default() -> Self {
        Self::standard()
    }
}
