use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;

use super::application::{Application, ApplicationDraft, ApplicationError, ApplicationKey};
use super::user::User;
use super::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateError {
    #[error("Cannot apply to an already applied job")]
    AlreadyApplied,
    #[error("Cannot add a comment to non existing job")]
    NonExistingJob,
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CandidateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyApplied => ErrorKind::Conflict,
            Self::NonExistingJob => ErrorKind::NotFound,
            Self::Application(error) => error.kind(),
        }
    }
}

/// A registered user's job search: applications grouped by company name.
#[derive(Debug, Clone)]
pub struct Candidate {
    user: Arc<User>,
    applications_by_company: BTreeMap<String, Vec<Application>>,
    applied: HashSet<ApplicationKey>,
}

impl Candidate {
    pub fn with(user: Arc<User>) -> Self {
        Self {
            user,
            applications_by_company: BTreeMap::new(),
            applied: HashSet::new(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.user.is_named(name)
    }

    pub fn has_applied_to_jobs(&self) -> bool {
        !self.applied.is_empty()
    }

    /// Record a new application dated `applied_on`.
    ///
    /// Duplicates are detected case-insensitively across every company bucket.
    pub fn apply_to_job(
        &mut self,
        position: &str,
        company: &str,
        description: &str,
        applied_on: NaiveDate,
    ) -> Result<(), CandidateError> {
        if self.applied.contains(&ApplicationKey::new(position, company)) {
            return Err(CandidateError::AlreadyApplied);
        }

        let application = ApplicationDraft {
            applied_on: Some(applied_on),
            description: Some(description.to_string()),
            ..ApplicationDraft::new(position, company)
        }
        .build()?;

        self.applied.insert(application.key().clone());
        self.applications_by_company
            .entry(application.company().to_string())
            .or_default()
            .push(application);
        Ok(())
    }

    /// True when the exact `company` bucket holds an application whose position matches exactly.
    pub fn has_applied_to_job(&self, position: &str, company: &str) -> bool {
        self.application(position, company).is_some()
    }

    pub fn number_of_applications(&self) -> usize {
        self.applications_by_company.values().map(Vec::len).sum()
    }

    pub fn comment_application(
        &mut self,
        position: &str,
        company: &str,
        text: &str,
        on: NaiveDate,
    ) -> Result<(), CandidateError> {
        let application = self
            .applications_by_company
            .get_mut(company)
            .and_then(|applications| {
                applications
                    .iter_mut()
                    .find(|application| application.has_position(position))
            })
            .ok_or(CandidateError::NonExistingJob)?;

        application.add_comment(text, on)?;
        Ok(())
    }

    pub fn application_has_comment(&self, position: &str, company: &str, text: &str) -> bool {
        self.application(position, company)
            .is_some_and(|application| application.has_comment(text))
    }

    pub fn application(&self, position: &str, company: &str) -> Option<&Application> {
        self.applications_by_company
            .get(company)?
            .iter()
            .find(|application| application.has_position(position))
    }

    /// All applications, grouped by company in company-name order.
    pub fn applications(&self) -> impl Iterator<Item = &Application> {
        self.applications_by_company.values().flatten()
    }
}
