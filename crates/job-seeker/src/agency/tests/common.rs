use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::agency::{
    agency_router, Application, ApplicationDraft, Candidate, FixedClock, HumanResourcesAgency,
    SharedAgency, TransientCandidateFolder, User, UsernamePolicy,
};

pub(super) const JOHN_DOE_USERNAME: &str = "e584f085-52bc-496e-8afb-d23c95b8cb16";
pub(super) const JANE_DOE_USERNAME: &str = "1adc093d-e924-4efd-8d50-c6a4e3088a43";
pub(super) const POSITION: &str = "Java";
pub(super) const OTHER_POSITION: &str = ".Net";
pub(super) const COMPANY: &str = "Accenture";
pub(super) const OTHER_COMPANY: &str = "Globant";
pub(super) const DESCRIPTION: &str = "Description";
pub(super) const BLANK: &str = " ";

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn application_date() -> NaiveDate {
    date(2010, 10, 1)
}

pub(super) fn java_at(company: &str) -> Application {
    ApplicationDraft {
        applied_on: Some(application_date()),
        description: Some(DESCRIPTION.to_string()),
        ..ApplicationDraft::new(POSITION, company)
    }
    .build()
    .expect("valid application")
}

pub(super) fn john_doe() -> Arc<User> {
    Arc::new(User::named(JOHN_DOE_USERNAME, UsernamePolicy::Guid).expect("valid user"))
}

pub(super) fn john_doe_candidate() -> Candidate {
    Candidate::with(john_doe())
}

pub(super) fn build_agency() -> (
    HumanResourcesAgency<TransientCandidateFolder>,
    Arc<FixedClock>,
) {
    let clock = Arc::new(FixedClock::new(application_date()));
    let agency = HumanResourcesAgency::new(TransientCandidateFolder::new()).with_clock(clock.clone());
    (agency, clock)
}

pub(super) fn shared_agency() -> (SharedAgency<TransientCandidateFolder>, Arc<FixedClock>) {
    let (agency, clock) = build_agency();
    (Arc::new(Mutex::new(agency)), clock)
}

pub(super) fn router_with(agency: SharedAgency<TransientCandidateFolder>) -> axum::Router {
    agency_router(agency)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
