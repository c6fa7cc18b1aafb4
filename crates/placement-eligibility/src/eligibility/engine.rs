use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::criteria::{CompanyTier, CriteriaTable, SkillRequirement};
use super::domain::{CandidateProfile, Skill};

/// Company the candidate clears on every cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleCompany {
    pub company: String,
    pub tier: CompanyTier,
}

/// Company whose academic cutoffs are met but whose required skill is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub company: String,
    pub missing_skill: Skill,
}

impl fmt::Display for SkillGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Needs {})", self.company, self.missing_skill)
    }
}

/// Result of scanning the criteria table. Companies failing CGPA or backlog
/// cutoffs are omitted from both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub eligible: Vec<EligibleCompany>,
    pub skill_rejected: Vec<SkillGap>,
}

impl EligibilityOutcome {
    pub fn eligible_names(&self) -> Vec<&str> {
        self.eligible
            .iter()
            .map(|entry| entry.company.as_str())
            .collect()
    }

    /// Split eligible companies by tier, keeping table order within each group.
    pub fn categorize(&self) -> CategorizedCompanies {
        let (premier, standard): (Vec<_>, Vec<_>) = self
            .eligible
            .iter()
            .partition(|entry| entry.tier == CompanyTier::Premier);

        CategorizedCompanies {
            premier: premier.into_iter().map(|entry| entry.company.clone()).collect(),
            standard: standard
                .into_iter()
                .map(|entry| entry.company.clone())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizedCompanies {
    pub premier: Vec<String>,
    pub standard: Vec<String>,
}

/// Scan `table` in declaration order and bucket each company for `profile`.
pub fn evaluate(profile: &CandidateProfile, table: &CriteriaTable) -> EligibilityOutcome {
    let mut outcome = EligibilityOutcome::default();

    for row in table.rows() {
        if profile.cgpa < row.min_cgpa || profile.backlogs > row.max_backlogs {
            continue;
        }

        match row.required_skill {
            SkillRequirement::Skill(skill) if !profile.has_skill(skill) => {
                outcome.skill_rejected.push(SkillGap {
                    company: row.company.clone(),
                    missing_skill: skill,
                });
            }
            _ => outcome.eligible.push(EligibleCompany {
                company: row.company.clone(),
                tier: row.tier,
            }),
        }
    }

    outcome
}

/// Stateless evaluator bound to a shared criteria table.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    table: Arc<CriteriaTable>,
}

impl EligibilityEngine {
    pub fn new(table: CriteriaTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &CriteriaTable {
        &self.table
    }

    pub fn evaluate(&self, profile: &CandidateProfile) -> EligibilityOutcome {
        evaluate(profile, &self.table)
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(CriteriaTable::standard())
    }
}
