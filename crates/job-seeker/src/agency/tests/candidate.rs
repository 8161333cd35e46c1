use super::common::*;
use crate::agency::{ApplicationError, CandidateError, ErrorKind};

#[test]
fn when_created_has_not_applied_to_jobs() {
    let candidate = john_doe_candidate();
    assert!(!candidate.has_applied_to_jobs());
    assert!(!candidate.has_applied_to_job(POSITION, COMPANY));
    assert_eq!(candidate.number_of_applications(), 0);
    assert_eq!(candidate.user().username(), JOHN_DOE_USERNAME);
}

#[test]
fn can_apply_to_jobs() {
    let mut candidate = john_doe_candidate();
    candidate
        .apply_to_job(POSITION, COMPANY, DESCRIPTION, application_date())
        .expect("first application");

    assert!(candidate.has_applied_to_jobs());
    assert!(candidate.has_applied_to_job(POSITION, COMPANY));
    assert_eq!(candidate.number_of_applications(), 1);

    let application = candidate
        .application(POSITION, COMPANY)
        .expect("application stored");
    assert_eq!(application.applied_on(), application_date());
    assert_eq!(application.description(), DESCRIPTION);
}

#[test]
fn cannot_apply_to_job_more_than_once() {
    let mut candidate = john_doe_candidate();
    candidate
        .apply_to_job(POSITION, COMPANY, DESCRIPTION, application_date())
        .expect("first application");

    let error = candidate
        .apply_to_job(POSITION, COMPANY, DESCRIPTION, application_date())
        .expect_err("duplicate application");

    assert_eq!(error, CandidateError::AlreadyApplied);
    assert_eq!(error.to_string(), "Cannot apply to an already applied job");
    assert_eq!(error.kind(), ErrorKind::Conflict);
    assert_eq!(candidate.number_of_applications(), 1);
}

#[test]
fn duplicate_detection_ignores_letter_case() {
    let mut candidate = john_doe_candidate();
    candidate
        .apply_to_job(POSITION, COMPANY, DESCRIPTION, application_date())
        .expect("first application");

    let error = candidate
        .apply_to_job("JAVA", "accenture", "", application_date())
        .expect_err("case-insensitive duplicate");
    assert_eq!(error, CandidateError::AlreadyApplied);
    assert_eq!(candidate.number_of_applications(), 1);
    assert!(!candidate.has_applied_to_job("JAVA", "accenture"));
}

#[test]
fn can_apply_to_multiple_jobs_in_same_company() {
    let mut candidate = john_doe_candidate();
    candidate
        .apply_to_job(POSITION, COMPANY, DESCRIPTION, application_date())
        .expect("java");
    candidate
        .apply_to_job(OTHER_POSITION, COMPANY, DESCRIPTION, application_date())
        .expect(".net");

    assert_eq!(candidate.number_of_applications(), 2);
    assert!(candidate.has_applied_to_job(POSITION, COMPANY));
    assert!(candidate.has_applied_to_job(OTHER_POSITION, COMPANY));
}

#[test]
fn can_apply_to_same_position_in_different_companies() {
    let mut candidate = john_doe_candidate();
    candidate
        .apply_to_job(POSITION, OTHER_COMPANY, DESCRIPTION, application_date())
        .expect("globant");
    candidate
        .apply_to_job(POSITION, COMPANY, DESCRIPTION, application_date())
        .expect("accenture");

    assert_eq!(candidate.number_of_applications(), 2);
    let companies: Vec<_> = candidate
        .applications()
        .map(|application| application.company())
        .collect();
    assert_eq!(companies, vec![COMPANY, OTHER_COMPANY]);
}

#[test]
fn blank_fields_surface_application_errors() {
    let mut candidate = john_doe_candidate();
    let error = candidate
        .apply_to_job(BLANK, COMPANY, DESCRIPTION, application_date())
        .expect_err("blank position");
    assert_eq!(error, CandidateError::Application(ApplicationError::BlankPosition));
    assert_eq!(error.to_string(), "Position cannot be blank");
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(!candidate.has_applied_to_jobs());
}

#[test]
fn can_add_comments_to_applied_jobs() {
    let mut candidate = john_doe_candidate();
    candidate
        .apply_to_job(POSITION, COMPANY, DESCRIPTION, application_date())
        .expect("application");
    candidate
        .comment_application(POSITION, COMPANY, "A comment", application_date())
        .expect("comment");

    assert!(candidate.application_has_comment(POSITION, COMPANY, "A comment"));
    assert!(!candidate.application_has_comment(POSITION, COMPANY, "Another comment"));
}

#[test]
fn cannot_comment_on_not_applied_company() {
    let mut candidate = john_doe_candidate();
    let error = candidate
        .comment_application(POSITION, COMPANY, "A comment", application_date())
        .expect_err("no application");

    assert_eq!(error, CandidateError::NonExistingJob);
    assert_eq!(error.to_string(), "Cannot add a comment to non existing job");
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert!(!candidate.application_has_comment(POSITION, COMPANY, "A comment"));
}

#[test]
fn cannot_comment_on_not_applied_position() {
    let mut candidate = john_doe_candidate();
    candidate
        .apply_to_job(POSITION, COMPANY, DESCRIPTION, application_date())
        .expect("application");

    let error = candidate
        .comment_application(OTHER_POSITION, COMPANY, "A comment", application_date())
        .expect_err("no .net application");
    assert_eq!(error, CandidateError::NonExistingJob);
    assert!(!candidate.application_has_comment(POSITION, COMPANY, "A comment"));
}

#[test]
fn comment_ordering_errors_propagate_unchanged() {
    let mut candidate = john_doe_candidate();
    candidate
        .apply_to_job(POSITION, COMPANY, DESCRIPTION, date(2020, 1, 1))
        .expect("application");
    candidate
        .comment_application(POSITION, COMPANY, "looks good", date(2020, 1, 2))
        .expect("comment");

    let error = candidate
        .comment_application(POSITION, COMPANY, "follow up", date(2020, 1, 1))
        .expect_err("earlier than latest comment");
    assert_eq!(
        error,
        CandidateError::Application(ApplicationError::CommentBeforeLastOne)
    );
    assert_eq!(error.kind(), ErrorKind::Ordering);
}
