use std::collections::HashMap;
use std::sync::Arc;

use super::candidate::Candidate;
use super::user::User;
use super::ErrorKind;

/// Borrowed view of one registered `(User, Candidate)` pair.
#[derive(Debug, Clone, Copy)]
pub struct CandidateEntry<'a> {
    pub user: &'a User,
    pub candidate: &'a Candidate,
}

/// Storage abstraction holding every registered user and their candidate record.
pub trait CandidateFolder: Send {
    fn add_candidate(&mut self, user: Arc<User>, candidate: Candidate) -> Result<(), FolderError>;
    fn has_registered_user(&self, username: &str) -> bool;
    fn find_user(&self, username: &str) -> Result<CandidateEntry<'_>, FolderError>;
    fn candidate_mut(&mut self, username: &str) -> Result<&mut Candidate, FolderError>;
    fn number_of_users(&self) -> usize;

    fn has_users(&self) -> bool {
        self.number_of_users() != 0
    }

    fn candidate_from(&self, username: &str) -> Result<&Candidate, FolderError> {
        self.find_user(username).map(|entry| entry.candidate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FolderError {
    #[error("No candidate registered under username '{username}'")]
    NotFound { username: String },
    #[error("A candidate is already registered under username '{username}'")]
    Conflict { username: String },
}

impl FolderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
        }
    }

    fn not_found(username: &str) -> Self {
        Self::NotFound {
            username: username.to_string(),
        }
    }
}

#[derive(Debug)]
struct FolderRecord {
    user: Arc<User>,
    candidate: Candidate,
}

/// In-memory folder that lives as long as the process.
#[derive(Debug, Default)]
pub struct TransientCandidateFolder {
    records: HashMap<String, FolderRecord>,
}

impl TransientCandidateFolder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CandidateFolder for TransientCandidateFolder {
    fn add_candidate(&mut self, user: Arc<User>, candidate: Candidate) -> Result<(), FolderError> {
        if self.records.contains_key(user.username()) {
            return Err(FolderError::Conflict {
                username: user.username().to_string(),
            });
        }
        self.records
            .insert(user.username().to_string(), FolderRecord { user, candidate });
        Ok(())
    }

    fn has_registered_user(&self, username: &str) -> bool {
        self.records.contains_key(username)
    }

    fn find_user(&self, username: &str) -> Result<CandidateEntry<'_>, FolderError> {
        self.records
            .get(username)
            .map(|record| CandidateEntry {
                user: &record.user,
                candidate: &record.candidate,
            })
            .ok_or_else(|| FolderError::not_found(username))
    }

    fn candidate_mut(&mut self, username: &str) -> Result<&mut Candidate, FolderError> {
        self.records
            .get_mut(username)
            .map(|record| &mut record.candidate)
            .ok_or_else(|| FolderError::not_found(username))
    }

    fn number_of_users(&self) -> usize {
        self.records.len()
    }
}
