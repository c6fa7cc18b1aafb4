use std::sync::Arc;

use tracing::debug;

use super::criteria::CriteriaTable;
use super::domain::{CandidateProfile, CandidateSubmission};
use super::engine::{EligibilityEngine, EligibilityOutcome};
use super::intake::{self, ProfileViolation};
use super::notifier::{SubmissionNotifier, WebhookMessage};
use super::report::EligibilityReport;

/// A validated, evaluated submission together with its rendered report.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub profile: CandidateProfile,
    pub outcome: EligibilityOutcome,
    pub report: EligibilityReport,
}

impl Assessment {
    pub fn notification(&self) -> WebhookMessage {
        WebhookMessage::for_submission(&self.profile, &self.outcome)
    }
}

/// Service composing intake validation, the evaluator, and the notifier.
pub struct EligibilityService<N> {
    engine: EligibilityEngine,
    notifier: Arc<N>,
}

impl<N> EligibilityService<N>
where
    N: SubmissionNotifier + 'static,
{
    pub fn new(table: CriteriaTable, notifier: Arc<N>) -> Self {
        Self {
            engine: EligibilityEngine::new(table),
            notifier,
        }
    }

    pub fn criteria(&self) -> &CriteriaTable {
        self.engine.table()
    }

    /// Validate and evaluate without side effects.
    pub fn assess(
        &self,
        submission: CandidateSubmission,
    ) -> Result<Assessment, EligibilityServiceError> {
        let profile = intake::validate(submission)?;
        let outcome = self.engine.evaluate(&profile);
        let report = EligibilityReport::build(&profile, &outcome);

        debug!(
            eligible = outcome.eligible.len(),
            skill_rejected = outcome.skill_rejected.len(),
            "assessment complete"
        );

        Ok(Assessment {
            profile,
            outcome,
            report,
        })
    }

    /// Assess, then hand the summary to the notifier. Notification failures
    /// never reach the caller.
    pub fn submit(
        &self,
        submission: CandidateSubmission,
    ) -> Result<EligibilityReport, EligibilityServiceError> {
        let assessment = self.assess(submission)?;

        if let Err(err) = self.notifier.publish(assessment.notification()) {
            debug!(error = %err, "submission notification skipped");
        }

        Ok(assessment.report)
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    Validation(#[from] ProfileViolation),
}
