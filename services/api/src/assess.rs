use crate::infra::{parse_branch, parse_skill};
use clap::Args;
use placement_eligibility::config::NotifierConfig;
use placement_eligibility::eligibility::{
    Assessment, Branch, CandidateSubmission, CriteriaTable, DisabledNotifier, EligibilityService,
    Skill, WebhookNotifier,
};
use placement_eligibility::error::AppError;
use std::sync::Arc;
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Full name of the student
    #[arg(long)]
    pub(crate) name: String,
    /// University register number
    #[arg(long)]
    pub(crate) register_number: String,
    /// College name
    #[arg(long)]
    pub(crate) college: Option<String>,
    /// Branch (CSE, IT, ECE, EEE, Mech, Civil, AI/DS, Other)
    #[arg(long, value_parser = parse_branch)]
    pub(crate) branch: Option<Branch>,
    /// Current CGPA out of 10
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) cgpa: f64,
    /// Number of standing arrears
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) backlogs: i64,
    /// Names of the subjects with backlogs, comma separated
    #[arg(long)]
    pub(crate) backlog_subjects: Option<String>,
    /// Skill to include; repeat for several
    #[arg(long = "skill", value_parser = parse_skill)]
    pub(crate) skills: Vec<Skill>,
}

impl From<AssessArgs> for CandidateSubmission {
    fn from(args: AssessArgs) -> Self {
        CandidateSubmission {
            name: args.name,
            register_number: args.register_number,
            college: args.college,
            branch: args.branch,
            cgpa: args.cgpa,
            backlogs: args.backlogs,
            backlog_subjects: args.backlog_subjects,
            skills: args.skills,
        }
    }
}

/// Print the report first; the webhook hand-off happens afterwards and its
/// outcome, including any webhook configuration problem, is ignored.
pub(crate) async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let assessment = assess_submission(args)?;
    print!("{}", assessment.report.render_text());

    notify_after_render(&assessment).await;
    Ok(())
}

fn assess_submission(args: AssessArgs) -> Result<Assessment, AppError> {
    let service = EligibilityService::new(CriteriaTable::standard(), Arc::new(DisabledNotifier));
    Ok(service.assess(args.into())?)
}

async fn notify_after_render(assessment: &Assessment) {
    let notifier = match NotifierConfig::load() {
        Ok(config) => WebhookNotifier::from_config(&config),
        Err(err) => {
            debug!(error = %err, "webhook configuration unusable; skipping notification");
            return;
        }
    };

    match notifier {
        Ok(Some(notifier)) => {
            if let Err(err) = notifier.deliver(&assessment.notification()).await {
                debug!(error = %err, "submission webhook dropped");
            }
        }
        Ok(None) => {}
        Err(err) => debug!(error = %err, "webhook client unavailable; skipping notification"),
    }
}

pub(crate) fn run_criteria() {
    print!("{}", render_criteria(&CriteriaTable::standard()));
}

pub(crate) fn render_criteria(table: &CriteriaTable) -> String {
    let mut out = String::from("Company criteria\n");
    for row in table.rows() {
        out.push_str(&format!(
            "- {} [{}]: CGPA >= {:.1}, backlogs <= {}, skill {}\n",
            row.company,
            row.tier.label(),
            row.min_cgpa,
            row.max_backlogs,
            row.required_skill.label()
        ));
    }
    out
}
