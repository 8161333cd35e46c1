use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::application::Application;
use super::candidate::{Candidate, CandidateError};
use super::clock::{Clock, SystemClock};
use super::folder::{CandidateFolder, FolderError};
use super::user::{User, UserError, UsernamePolicy};
use super::ErrorKind;
use crate::config::AgencyConfig;

/// Facade coordinating registration and every candidate operation.
///
/// A username is either unregistered or registered with exactly one [`Candidate`] in the
/// folder. Queries on unregistered usernames answer `false`/`0`; commands fail with
/// [`AgencyError::NotRegistered`].
pub struct HumanResourcesAgency<F> {
    folder: F,
    clock: Arc<dyn Clock>,
    username_policy: UsernamePolicy,
}

impl<F> HumanResourcesAgency<F>
where
    F: CandidateFolder,
{
    pub fn new(folder: F) -> Self {
        Self {
            folder,
            clock: Arc::new(SystemClock),
            username_policy: UsernamePolicy::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_config(mut self, config: &AgencyConfig) -> Self {
        self.username_policy = config.username_policy;
        self
    }

    pub fn folder(&self) -> &F {
        &self.folder
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn register(&mut self, username: &str) -> Result<(), AgencyError> {
        self.assert_not_registered(username)?;
        let user = User::named(username, self.username_policy)?;
        self.store(user)
    }

    pub fn register_with_profile(
        &mut self,
        username: &str,
        name: &str,
        email: &str,
    ) -> Result<(), AgencyError> {
        self.assert_not_registered(username)?;
        let user = User::with_profile(username, name, email, self.username_policy)?;
        self.store(user)
    }

    pub fn user_from(&self, username: &str) -> Result<&User, AgencyError> {
        Ok(self.folder.find_user(username)?.user)
    }

    pub fn apply_to_job(
        &mut self,
        username: &str,
        position: &str,
        company: &str,
        description: &str,
    ) -> Result<(), AgencyError> {
        let today = self.today();
        self.registered_candidate_mut(username)?
            .apply_to_job(position, company, description, today)
            .inspect_err(|error| warn!(username, position, company, %error, "application rejected"))?;

        info!(username, position, company, "candidate applied to job");
        Ok(())
    }

    pub fn candidate_has_applied_to(&self, username: &str, position: &str, company: &str) -> bool {
        self.candidate(username)
            .is_some_and(|candidate| candidate.has_applied_to_job(position, company))
    }

    pub fn number_of_user_applications(&self, username: &str) -> usize {
        self.candidate(username)
            .map_or(0, Candidate::number_of_applications)
    }

    pub fn applications_of(&self, username: &str) -> Result<Vec<&Application>, AgencyError> {
        self.assert_registered(username)?;
        Ok(self.folder.candidate_from(username)?.applications().collect())
    }

    pub fn comment_application(
        &mut self,
        username: &str,
        position: &str,
        company: &str,
        text: &str,
    ) -> Result<(), AgencyError> {
        let today = self.today();
        self.registered_candidate_mut(username)?
            .comment_application(position, company, text, today)
            .inspect_err(|error| warn!(username, position, company, %error, "comment rejected"))?;

        debug!(username, position, company, %today, "comment added");
        Ok(())
    }

    pub fn application_has_comment(
        &self,
        username: &str,
        position: &str,
        company: &str,
        text: &str,
    ) -> bool {
        self.candidate(username)
            .is_some_and(|candidate| candidate.application_has_comment(position, company, text))
    }

    fn store(&mut self, user: User) -> Result<(), AgencyError> {
        let user = Arc::new(user);
        let candidate = Candidate::with(Arc::clone(&user));
        self.folder.add_candidate(Arc::clone(&user), candidate)?;
        info!(username = user.username(), "candidate registered");
        Ok(())
    }

    fn candidate(&self, username: &str) -> Option<&Candidate> {
        self.folder.candidate_from(username).ok()
    }

    fn registered_candidate_mut(&mut self, username: &str) -> Result<&mut Candidate, AgencyError> {
        self.assert_registered(username)?;
        Ok(self.folder.candidate_mut(username)?)
    }

    fn assert_registered(&self, username: &str) -> Result<(), AgencyError> {
        if self.folder.has_registered_user(username) {
            Ok(())
        } else {
            warn!(username, "unregistered user attempted an operation");
            Err(AgencyError::NotRegistered)
        }
    }

    fn assert_not_registered(&self, username: &str) -> Result<(), AgencyError> {
        if self.folder.has_registered_user(username) {
            warn!(username, "duplicate registration rejected");
            Err(AgencyError::AlreadyRegistered)
        } else {
            Ok(())
        }
    }
}

/// Error raised by the agency facade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgencyError {
    #[error("Cannot register a user more than once")]
    AlreadyRegistered,
    #[error("Not registered user cannot operate")]
    NotRegistered,
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Candidate(#[from] CandidateError),
    #[error(transparent)]
    Folder(#[from] FolderError),
}

impl AgencyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyRegistered => ErrorKind::Conflict,
            Self::NotRegistered => ErrorKind::NotFound,
            Self::User(error) => error.kind(),
            Self::Candidate(error) => error.kind(),
            Self::Folder(error) => error.kind(),
        }
    }
}
