use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::CandidateProfile;
use super::engine::EligibilityOutcome;
use crate::config::NotifierConfig;

pub use reqwest::Url as WebhookUrl;

const SEPARATOR: &str = "--------------------------------";
const ABSENT: &str = "None";

/// Chat-webhook payload: `{"content": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub content: String,
}

impl WebhookMessage {
    pub fn for_submission(profile: &CandidateProfile, outcome: &EligibilityOutcome) -> Self {
        Self {
            content: format_submission(profile, outcome),
        }
    }
}

/// Labeled summary of a submission and the companies it qualified for.
pub fn format_submission(profile: &CandidateProfile, outcome: &EligibilityOutcome) -> String {
    let skills = if profile.skills.is_empty() {
        ABSENT.to_string()
    } else {
        profile
            .skills
            .iter()
            .map(|skill| skill.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let eligible = if outcome.eligible.is_empty() {
        ABSENT.to_string()
    } else {
        outcome.eligible_names().join(", ")
    };

    let lines = [
        "🎓 **New Student Data Captured!**".to_string(),
        format!("👤 **Name:** {}", profile.name),
        format!(
            "🏫 **College:** {}",
            profile.college.as_deref().unwrap_or(ABSENT)
        ),
        format!("🆔 **Reg No:** {}", profile.register_number),
        format!(
            "📚 **Branch:** {}",
            profile.branch.map(|branch| branch.label()).unwrap_or(ABSENT)
        ),
        SEPARATOR.to_string(),
        format!("📊 **CGPA:** {:.2}", profile.cgpa),
        format!("⚠️ **Backlogs:** {}", profile.backlogs),
        format!(
            "📝 **Failed Subjects:** {}",
            profile.backlog_subjects.as_deref().unwrap_or(ABSENT)
        ),
        format!("💻 **Skills:** {skills}"),
        SEPARATOR.to_string(),
        format!("✅ **Eligible For:** {eligible}"),
    ];

    lines.join("\n")
}

/// Outbound hook for submission summaries. `publish` must hand the message off
/// without waiting on the network.
pub trait SubmissionNotifier: Send + Sync {
    fn publish(&self, message: WebhookMessage) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook responded with status {status}")]
    Status { status: u16 },
    #[error("no async runtime available to dispatch webhook")]
    RuntimeUnavailable,
}

/// Posts summaries to a chat webhook as detached tasks. One attempt per message.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: WebhookUrl,
}

impl WebhookNotifier {
    pub fn new(url: WebhookUrl, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    /// Build from configuration; `None` when no webhook URL is set.
    pub fn from_config(config: &NotifierConfig) -> Result<Option<Self>, NotifyError> {
        config
            .webhook_url
            .clone()
            .map(|url| Self::new(url, config.timeout))
            .transpose()
    }

    /// Send one POST and wait for the response status.
    pub async fn deliver(&self, message: &WebhookMessage) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

impl SubmissionNotifier for WebhookNotifier {
    fn publish(&self, message: WebhookMessage) -> Result<(), NotifyError> {
        let handle =
            tokio::runtime::Handle::try_current().map_err(|_| NotifyError::RuntimeUnavailable)?;

        let notifier = self.clone();
        handle.spawn(async move {
            if let Err(err) = notifier.deliver(&message).await {
                debug!(error = %err, "submission webhook dropped");
            }
        });
        Ok(())
    }
}

/// Used when no webhook is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

impl SubmissionNotifier for DisabledNotifier {
    fn publish(&self, _message: WebhookMessage) -> Result<(), NotifyError> {
        Ok(())
    }
}
