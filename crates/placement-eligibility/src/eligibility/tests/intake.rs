use super::common::*;
use crate::eligibility::domain::{CandidateSubmission, Skill};
use crate::eligibility::intake::{validate, ProfileViolation};

#[test]
fn missing_name_is_rejected() {
    let err = validate(anonymous_submission()).expect_err("blank name rejected");

    assert_eq!(
        err,
        ProfileViolation::MissingIdentity {
            missing_name: true,
            missing_register_number: false,
        }
    );
    assert_eq!(
        err.to_string(),
        "Please enter your Name and Register Number to proceed."
    );
}

#[test]
fn missing_register_number_is_rejected() {
    let submission = CandidateSubmission {
        register_number: String::new(),
        ..submission()
    };

    assert!(matches!(
        validate(submission),
        Err(ProfileViolation::MissingIdentity {
            missing_name: false,
            missing_register_number: true,
        })
    ));
}

#[test]
fn identity_and_optional_text_are_trimmed() {
    let submission = CandidateSubmission {
        name: "  Asha Raman ".to_string(),
        register_number: "\tR123 ".to_string(),
        college: Some("   ".to_string()),
        backlog_subjects: Some(" Maths II ".to_string()),
        ..submission()
    };

    let profile = validate(submission).expect("valid submission");

    assert_eq!(profile.name, "Asha Raman");
    assert_eq!(profile.register_number, "R123");
    assert_eq!(profile.college, None);
    assert_eq!(profile.backlog_subjects.as_deref(), Some("Maths II"));
}

#[test]
fn numeric_fields_are_clamped() {
    let high = validate(CandidateSubmission {
        cgpa: 11.4,
        backlogs: -2,
        ..submission()
    })
    .expect("valid submission");
    assert_eq!(high.cgpa, 10.0);
    assert_eq!(high.backlogs, 0);

    let low = validate(CandidateSubmission {
        cgpa: -1.0,
        backlogs: i64::MAX,
        ..submission()
    })
    .expect("valid submission");
    assert_eq!(low.cgpa, 0.0);
    assert_eq!(low.backlogs, u32::MAX);

    let nan = validate(CandidateSubmission {
        cgpa: f64::NAN,
        ..submission()
    })
    .expect("valid submission");
    assert_eq!(nan.cgpa, 0.0);
}

#[test]
fn duplicate_skills_keep_first_selection_order() {
    let profile = validate(CandidateSubmission {
        skills: vec![Skill::Java, Skill::Python, Skill::Java, Skill::Cpp],
        ..submission()
    })
    .expect("valid submission");

    assert_eq!(profile.skills, vec![Skill::Java, Skill::Python, Skill::Cpp]);
}

#[test]
fn submissions_deserialize_from_form_labels() {
    let raw = serde_json::json!({
        "name": "Asha Raman",
        "register_number": "R123",
        "branch": "AI/DS",
        "cgpa": 8.75,
        "backlogs": 1,
        "skills": ["Data Structures (DSA)", "C++", "Cloud (AWS/Azure)"]
    });

    let submission: CandidateSubmission = serde_json::from_value(raw).expect("deserializes");

    assert_eq!(submission.branch.map(|branch| branch.label()), Some("AI/DS"));
    assert_eq!(
        submission.skills,
        vec![Skill::DataStructures, Skill::Cpp, Skill::Cloud]
    );
    assert_eq!(submission.college, None);
}

#[test]
fn skills_and_branches_parse_case_insensitively() {
    assert_eq!(Skill::from_label("sql/dbms"), Some(Skill::SqlDbms));
    assert_eq!(Skill::from_label(" c++ "), Some(Skill::Cpp));
    assert_eq!(Skill::from_label("Rust"), None);
    assert_eq!(
        crate::eligibility::domain::Branch::from_label("mech"),
        Some(crate::eligibility::domain::Branch::Mech)
    );
}
