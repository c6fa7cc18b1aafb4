use serde::Serialize;

use super::domain::{CandidateProfile, Skill};
use super::engine::EligibilityOutcome;

pub const IMPROVEMENT_MESSAGE: &str = "Based on current criteria, you need to improve your CGPA or clear backlogs to meet standard cutoffs.";
pub const BACKLOG_ADVISORY: &str = "Most product companies (Google, Amazon) require 0 standing arrears at the time of the interview.";

/// Missing-skill rejection prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGapView {
    pub company: String,
    pub missing_skill: Skill,
    pub label: String,
}

/// Everything the presentation layer shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityReport {
    pub student_name: String,
    pub register_number: String,
    pub eligible_count: usize,
    pub headline: String,
    pub premier: Vec<String>,
    pub standard: Vec<String>,
    pub skill_gaps: Vec<SkillGapView>,
    pub advisories: Vec<String>,
}

impl EligibilityReport {
    pub fn build(profile: &CandidateProfile, outcome: &EligibilityOutcome) -> Self {
        let eligible_count = outcome.eligible.len();
        let categorized = outcome.categorize();

        let headline = if eligible_count > 0 {
            format!("You are currently eligible for {eligible_count} companies!")
        } else {
            IMPROVEMENT_MESSAGE.to_string()
        };

        let skill_gaps = outcome
            .skill_rejected
            .iter()
            .map(|gap| SkillGapView {
                company: gap.company.clone(),
                missing_skill: gap.missing_skill,
                label: gap.to_string(),
            })
            .collect();

        let mut advisories = Vec::new();
        if profile.backlogs > 0 {
            advisories.push(BACKLOG_ADVISORY.to_string());
        }

        Self {
            student_name: profile.name.clone(),
            register_number: profile.register_number.clone(),
            eligible_count,
            headline,
            premier: categorized.premier,
            standard: categorized.standard,
            skill_gaps,
            advisories,
        }
    }

    pub fn has_eligible(&self) -> bool {
        self.eligible_count > 0
    }

    /// Plain-text rendering used by the CLI.
    pub fn render_text(&self) -> String {
        let mut out = format!("Results for {}\n", self.student_name);
        out.push_str(&self.headline);
        out.push('\n');

        if !self.premier.is_empty() {
            out.push_str("\nSuper Dream Companies:\n");
            for company in &self.premier {
                out.push_str(&format!("- {company}\n"));
            }
        }

        if !self.standard.is_empty() {
            out.push_str("\nDream / Core Companies:\n");
            for company in &self.standard {
                out.push_str(&format!("- {company}\n"));
            }
        }

        if !self.skill_gaps.is_empty() {
            out.push_str("\nMissing skills:\n");
            for gap in &self.skill_gaps {
                out.push_str(&format!("- {}\n", gap.label));
            }
        }

        for advisory in &self.advisories {
            out.push_str(&format!("\nNote: {advisory}\n"));
        }

        out
    }
}
