//! Candidate registration and job application tracking.
//!
//! [`HumanResourcesAgency`] is the entry point: it registers usernames, keeps one [`Candidate`]
//! per registered [`User`] inside a [`CandidateFolder`], and routes application and comment
//! requests to the right candidate. Every rejected request surfaces as a typed error whose
//! [`ErrorKind`] lets transports choose a response without matching on messages.

pub mod application;
pub mod candidate;
pub mod clock;
pub mod folder;
pub mod router;
pub mod service;
pub mod user;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use application::{
    Application, ApplicationDraft, ApplicationError, ApplicationKey, ApplicationView,
    CommentDayView,
};
pub use candidate::{Candidate, CandidateError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use folder::{CandidateEntry, CandidateFolder, FolderError, TransientCandidateFolder};
pub use router::{agency_router, SharedAgency, SUBJECT_HEADER};
pub use service::{AgencyError, HumanResourcesAgency};
pub use user::{User, UserError, UserView, UsernamePolicy};

/// Coarse classification shared by every agency error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required field was blank or malformed.
    Validation,
    /// The request would duplicate a registration or an application.
    Conflict,
    /// The user or application the request refers to does not exist.
    NotFound,
    /// A comment was dated before the application or the latest comment.
    Ordering,
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
