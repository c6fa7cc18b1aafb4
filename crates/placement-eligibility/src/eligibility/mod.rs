//! Placement eligibility: intake validation, the criteria-table evaluator, report
//! views, and the submission notifier.

pub mod criteria;
pub mod domain;
pub mod engine;
pub mod intake;
pub mod notifier;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use criteria::{CompanyCriteria, CompanyTier, CriteriaError, CriteriaTable, SkillRequirement};
pub use domain::{Branch, CandidateProfile, CandidateSubmission, Skill};
pub use engine::{
    evaluate, CategorizedCompanies, EligibilityEngine, EligibilityOutcome, EligibleCompany,
    SkillGap,
};
pub use intake::{validate, ProfileViolation};
pub use notifier::{
    format_submission, DisabledNotifier, NotifyError, SubmissionNotifier, WebhookMessage,
    WebhookNotifier, WebhookUrl,
};
pub use report::{EligibilityReport, SkillGapView};
pub use router::{eligibility_router, CriteriaListing};
pub use service::{Assessment, EligibilityService, EligibilityServiceError};
