use super::criteria::MAX_CGPA;
use super::domain::{CandidateProfile, CandidateSubmission, Skill};

/// Raised when a submission is missing the identity fields the form requires.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("Please enter your Name and Register Number to proceed.")]
    MissingIdentity {
        missing_name: bool,
        missing_register_number: bool,
    },
}

/// Validate required fields and bring every numeric field into range.
pub fn validate(submission: CandidateSubmission) -> Result<CandidateProfile, ProfileViolation> {
    let CandidateSubmission {
        name,
        register_number,
        college,
        branch,
        cgpa,
        backlogs,
        backlog_subjects,
        skills,
    } = submission;

    let name = name.trim();
    let register_number = register_number.trim();
    if name.is_empty() || register_number.is_empty() {
        return Err(ProfileViolation::MissingIdentity {
            missing_name: name.is_empty(),
            missing_register_number: register_number.is_empty(),
        });
    }

    Ok(CandidateProfile {
        name: name.to_string(),
        register_number: register_number.to_string(),
        college: non_blank(college),
        branch,
        cgpa: clamp_cgpa(cgpa),
        backlogs: clamp_backlogs(backlogs),
        backlog_subjects: non_blank(backlog_subjects),
        skills: dedup_skills(skills),
    })
}

pub(crate) fn clamp_cgpa(cgpa: f64) -> f64 {
    if cgpa.is_nan() {
        return 0.0;
    }
    cgpa.clamp(0.0, MAX_CGPA)
}

pub(crate) fn clamp_backlogs(backlogs: i64) -> u32 {
    u32::try_from(backlogs.max(0)).unwrap_or(u32::MAX)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn dedup_skills(skills: Vec<Skill>) -> Vec<Skill> {
    let mut unique = Vec::with_capacity(skills.len());
    for skill in skills {
        if !unique.contains(&skill) {
            unique.push(skill);
        }
    }
    unique
}
