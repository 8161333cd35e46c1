use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::Serialize;

use super::clock::{Clock, SystemClock};
use super::{is_blank, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationError {
    #[error("Position cannot be blank")]
    BlankPosition,
    #[error("Company cannot be blank")]
    BlankCompany,
    #[error("Can not add a comment before application")]
    CommentBeforeApplication,
    #[error("Cannot add a comment before the existing last one")]
    CommentBeforeLastOne,
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BlankPosition | Self::BlankCompany => ErrorKind::Validation,
            Self::CommentBeforeApplication | Self::CommentBeforeLastOne => ErrorKind::Ordering,
        }
    }
}

/// Fields accepted when building an [`Application`].
///
/// `applied_on` defaults to the current local date and `description` to an empty string.
#[derive(Debug, Clone, Default)]
pub struct ApplicationDraft {
    pub position: String,
    pub company: String,
    pub applied_on: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ApplicationDraft {
    pub fn new(position: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            company: company.into(),
            ..Self::default()
        }
    }

    pub fn build(self) -> Result<Application, ApplicationError> {
        Application::build(self)
    }
}

/// Case-insensitive identity of an application: lowercased position and company.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationKey {
    position: String,
    company: String,
}

impl ApplicationKey {
    pub fn new(position: &str, company: &str) -> Self {
        Self {
            position: position.to_lowercase(),
            company: company.to_lowercase(),
        }
    }
}

/// One submission to a `(position, company)` pair together with its dated comment log.
///
/// Equality and hashing only look at [`ApplicationKey`]; the date, description and comments
/// never affect identity.
#[derive(Debug, Clone)]
pub struct Application {
    key: ApplicationKey,
    position: String,
    company: String,
    applied_on: NaiveDate,
    description: String,
    comments_by_date: BTreeMap<NaiveDate, Vec<String>>,
}

impl Application {
    pub fn build(draft: ApplicationDraft) -> Result<Self, ApplicationError> {
        let ApplicationDraft {
            position,
            company,
            applied_on,
            description,
        } = draft;

        if is_blank(&position) {
            return Err(ApplicationError::BlankPosition);
        }
        if is_blank(&company) {
            return Err(ApplicationError::BlankCompany);
        }

        Ok(Self {
            key: ApplicationKey::new(&position, &company),
            position,
            company,
            applied_on: applied_on.unwrap_or_else(|| SystemClock.today()),
            description: description.unwrap_or_default(),
            comments_by_date: BTreeMap::new(),
        })
    }

    pub fn key(&self) -> &ApplicationKey {
        &self.key
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn applied_on(&self) -> NaiveDate {
        self.applied_on
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_comments(&self) -> bool {
        !self.comments_by_date.is_empty()
    }

    /// Append `text` to the log for `date`.
    ///
    /// Comments arrive in non-decreasing date order: several comments may share a day, but a
    /// date earlier than the application date or than the latest logged date is rejected and
    /// the log is left untouched.
    pub fn add_comment(
        &mut self,
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Result<(), ApplicationError> {
        if date < self.applied_on {
            return Err(ApplicationError::CommentBeforeApplication);
        }
        if self.last_comment_date().is_some_and(|last| date < last) {
            return Err(ApplicationError::CommentBeforeLastOne);
        }

        self.comments_by_date
            .entry(date)
            .or_default()
            .push(text.into());
        Ok(())
    }

    pub fn last_comment_date(&self) -> Option<NaiveDate> {
        self.comments_by_date.keys().next_back().copied()
    }

    pub fn number_of_comments(&self) -> usize {
        self.comments_by_date.values().map(Vec::len).sum()
    }

    /// Exact, case-sensitive comparison against the stored position.
    pub fn has_position(&self, position: &str) -> bool {
        self.position == position
    }

    pub fn has_comment(&self, text: &str) -> bool {
        self.comments_by_date
            .values()
            .any(|comments| comments.iter().any(|comment| comment == text))
    }

    /// Comments grouped by day, oldest day first.
    pub fn comments(&self) -> impl Iterator<Item = (NaiveDate, &[String])> {
        self.comments_by_date
            .iter()
            .map(|(date, comments)| (*date, comments.as_slice()))
    }

    pub fn view(&self) -> ApplicationView {
        ApplicationView {
            position: self.position.clone(),
            company: self.company.clone(),
            applied_on: self.applied_on,
            description: self.description.clone(),
            number_of_comments: self.number_of_comments(),
            comments: self
                .comments()
                .map(|(date, comments)| CommentDayView {
                    date,
                    comments: comments.to_vec(),
                })
                .collect(),
        }
    }
}

impl PartialEq for Application {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Application {}

impl Hash for Application {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Serializable projection of an [`Application`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationView {
    pub position: String,
    pub company: String,
    pub applied_on: NaiveDate,
    pub description: String,
    pub number_of_comments: usize,
    pub comments: Vec<CommentDayView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDayView {
    pub date: NaiveDate,
    pub comments: Vec<String>,
}
