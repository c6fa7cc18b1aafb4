use metrics_exporter_prometheus::PrometheusHandle;
use placement_eligibility::config::NotifierConfig;
use placement_eligibility::eligibility::{
    Branch, DisabledNotifier, NotifyError, Skill, SubmissionNotifier, WebhookMessage,
    WebhookNotifier,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Notifier selected from configuration at startup.
pub(crate) enum ConfiguredNotifier {
    Webhook(WebhookNotifier),
    Disabled(DisabledNotifier),
}

impl ConfiguredNotifier {
    pub(crate) fn from_config(config: &NotifierConfig) -> Result<Self, NotifyError> {
        Ok(match WebhookNotifier::from_config(config)? {
            Some(notifier) => Self::Webhook(notifier),
            None => Self::Disabled(DisabledNotifier),
        })
    }

    pub(crate) fn is_enabled(&self) -> bool {
        matches!(self, Self::Webhook(_))
    }
}

impl SubmissionNotifier for ConfiguredNotifier {
    fn publish(&self, message: WebhookMessage) -> Result<(), NotifyError> {
        match self {
            Self::Webhook(notifier) => notifier.publish(message),
            Self::Disabled(notifier) => notifier.publish(message),
        }
    }
}

pub(crate) fn parse_skill(raw: &str) -> Result<Skill, String> {
    Skill::from_label(raw).ok_or_else(|| {
        let options: Vec<&str> = Skill::ordered().iter().map(|skill| skill.label()).collect();
        format!("unknown skill '{raw}' (expected one of: {})", options.join(", "))
    })
}

pub(crate) fn parse_branch(raw: &str) -> Result<Branch, String> {
    Branch::from_label(raw).ok_or_else(|| {
        let options: Vec<&str> = Branch::ordered()
            .iter()
            .map(|branch| branch.label())
            .collect();
        format!("unknown branch '{raw}' (expected one of: {})", options.join(", "))
    })
}
