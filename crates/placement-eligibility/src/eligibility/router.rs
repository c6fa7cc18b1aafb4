use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::criteria::{CompanyTier, CriteriaTable, SkillRequirement};
use super::domain::{Branch, CandidateSubmission, Skill};
use super::notifier::SubmissionNotifier;
use super::report::EligibilityReport;
use super::service::EligibilityService;
use crate::error::AppError;

/// Criteria listing plus the option sets the intake form offers.
#[derive(Debug, Serialize)]
pub struct CriteriaListing {
    pub companies: Vec<CriteriaEntry>,
    pub skills: Vec<Skill>,
    pub branches: Vec<Branch>,
}

#[derive(Debug, Serialize)]
pub struct CriteriaEntry {
    pub company: String,
    pub min_cgpa: f64,
    pub max_backlogs: u32,
    pub required_skill: Option<Skill>,
    pub tier: CompanyTier,
}

impl CriteriaListing {
    pub fn from_table(table: &CriteriaTable) -> Self {
        let companies = table
            .rows()
            .iter()
            .map(|row| CriteriaEntry {
                company: row.company.clone(),
                min_cgpa: row.min_cgpa,
                max_backlogs: row.max_backlogs,
                required_skill: match row.required_skill {
                    SkillRequirement::None => None,
                    SkillRequirement::Skill(skill) => Some(skill),
                },
                tier: row.tier,
            })
            .collect();

        Self {
            companies,
            skills: Skill::ordered().to_vec(),
            branches: Branch::ordered().to_vec(),
        }
    }
}

/// Router builder exposing assessment and criteria endpoints.
pub fn eligibility_router<N>(service: Arc<EligibilityService<N>>) -> Router
where
    N: SubmissionNotifier + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/assessments", post(assess_handler::<N>))
        .route("/api/v1/eligibility/criteria", get(criteria_handler::<N>))
        .with_state(service)
}

pub(crate) async fn assess_handler<N>(
    State(service): State<Arc<EligibilityService<N>>>,
    Json(submission): Json<CandidateSubmission>,
) -> Result<Json<EligibilityReport>, AppError>
where
    N: SubmissionNotifier + 'static,
{
    let report = service.submit(submission)?;
    Ok(Json(report))
}

pub(crate) async fn criteria_handler<N>(
    State(service): State<Arc<EligibilityService<N>>>,
) -> Json<CriteriaListing>
where
    N: SubmissionNotifier + 'static,
{
    Json(CriteriaListing::from_table(service.criteria()))
}
