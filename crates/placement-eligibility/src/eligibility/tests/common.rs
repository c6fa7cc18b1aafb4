use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::eligibility::criteria::CriteriaTable;
use crate::eligibility::domain::{Branch, CandidateProfile, CandidateSubmission, Skill};
use crate::eligibility::intake;
use crate::eligibility::notifier::{NotifyError, SubmissionNotifier, WebhookMessage};
use crate::eligibility::service::EligibilityService;

pub(super) fn submission() -> CandidateSubmission {
    CandidateSubmission {
        name: "Asha Raman".to_string(),
        register_number: "R123".to_string(),
        college: Some("Anna University".to_string()),
        branch: Some(Branch::Cse),
        cgpa: 9.2,
        backlogs: 0,
        backlog_subjects: None,
        skills: vec![Skill::DataStructures, Skill::Python],
    }
}

pub(super) fn weak_submission() -> CandidateSubmission {
    CandidateSubmission {
        cgpa: 5.0,
        backlogs: 3,
        backlog_subjects: Some("Maths II, DSP".to_string()),
        skills: Vec::new(),
        ..submission()
    }
}

pub(super) fn anonymous_submission() -> CandidateSubmission {
    CandidateSubmission {
        name: "   ".to_string(),
        ..submission()
    }
}

pub(super) fn profile_with(cgpa: f64, backlogs: i64, skills: Vec<Skill>) -> CandidateProfile {
    intake::validate(CandidateSubmission {
        cgpa,
        backlogs,
        skills,
        ..submission()
    })
    .expect("fixture profile is valid")
}

pub(super) fn standard_table() -> CriteriaTable {
    CriteriaTable::standard()
}

#[derive(Default)]
pub(super) struct RecordingNotifier {
    messages: Mutex<Vec<WebhookMessage>>,
}

impl RecordingNotifier {
    pub(super) fn messages(&self) -> Vec<WebhookMessage> {
        self.messages.lock().expect("notifier mutex poisoned").clone()
    }
}

impl SubmissionNotifier for RecordingNotifier {
    fn publish(&self, message: WebhookMessage) -> Result<(), NotifyError> {
        self.messages
            .lock()
            .expect("notifier mutex poisoned")
            .push(message);
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl SubmissionNotifier for FailingNotifier {
    fn publish(&self, _message: WebhookMessage) -> Result<(), NotifyError> {
        Err(NotifyError::Status { status: 503 })
    }
}

pub(super) fn build_service() -> (
    Arc<EligibilityService<RecordingNotifier>>,
    Arc<RecordingNotifier>,
) {
    let notifier = Arc::new(RecordingNotifier::default());
    let service = Arc::new(EligibilityService::new(standard_table(), notifier.clone()));
    (service, notifier)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("json body")
}
