use super::common::*;
use crate::agency::{ErrorKind, User, UserError, UsernamePolicy};

#[test]
fn cannot_be_created_with_blank_username() {
    let error = User::named(BLANK, UsernamePolicy::NonBlank).expect_err("blank rejected");
    assert_eq!(error, UserError::BlankUsername);
    assert_eq!(error.to_string(), "Candidate username cannot be blank");
    assert_eq!(error.kind(), ErrorKind::Validation);
}

#[test]
fn knows_its_username() {
    let user = john_doe();
    assert!(user.has_username(JOHN_DOE_USERNAME));
    assert!(!user.has_username(JANE_DOE_USERNAME));
}

#[test]
fn guid_policy_rejects_free_form_usernames() {
    let error = User::named("no guid username", UsernamePolicy::Guid).expect_err("not a guid");
    assert_eq!(error.to_string(), "Candidate username must have a GUID format");

    let user = User::named("no guid username", UsernamePolicy::NonBlank).expect("lenient policy");
    assert_eq!(user.username(), "no guid username");
}

#[test]
fn guid_policy_still_reports_blank_usernames_first() {
    let error = User::named("", UsernamePolicy::Guid).expect_err("blank rejected");
    assert_eq!(error, UserError::BlankUsername);
}

#[test]
fn profile_requires_name_and_email() {
    let missing_email = User::with_profile("jdoe", "John Doe", BLANK, UsernamePolicy::NonBlank)
        .expect_err("blank email");
    assert_eq!(missing_email.to_string(), "Candidate email cannot be blank");

    let missing_name = User::with_profile("jdoe", "", "jdoe@gmail.com", UsernamePolicy::NonBlank)
        .expect_err("blank name");
    assert_eq!(missing_name.to_string(), "Candidate name cannot be blank");

    let user = User::with_profile("jdoe", "John Doe", "jdoe@gmail.com", UsernamePolicy::NonBlank)
        .expect("complete profile");
    assert!(user.is_named("John Doe"));
    assert!(!user.is_named("Jane Doe"));
    assert_eq!(user.email(), Some("jdoe@gmail.com"));
}

#[test]
fn equality_is_keyed_on_username() {
    let plain = User::named("jdoe", UsernamePolicy::NonBlank).expect("valid");
    let profiled = User::with_profile("jdoe", "John Doe", "jdoe@gmail.com", UsernamePolicy::NonBlank)
        .expect("valid");
    assert_eq!(plain, profiled);
}
