use std::hash::{Hash, Hasher};

use serde::Serialize;
use uuid::Uuid;

use super::{is_blank, ErrorKind};

/// How strictly usernames are checked at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsernamePolicy {
    /// Any non-blank username is accepted.
    #[default]
    NonBlank,
    /// Usernames must also be hyphenated GUIDs, as issued by the identity provider.
    Guid,
}

impl UsernamePolicy {
    fn check(self, username: &str) -> Result<(), UserError> {
        if is_blank(username) {
            return Err(UserError::BlankUsername);
        }
        match self {
            Self::NonBlank => Ok(()),
            Self::Guid => Uuid::parse_str(username)
                .map(|_| ())
                .map_err(|_| UserError::UsernameNotGuid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("Candidate username cannot be blank")]
    BlankUsername,
    #[error("Candidate name cannot be blank")]
    BlankName,
    #[error("Candidate email cannot be blank")]
    BlankEmail,
    #[error("Candidate username must have a GUID format")]
    UsernameNotGuid,
}

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// Registered identity. Two users are the same user when their usernames match.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    name: Option<String>,
    email: Option<String>,
}

impl User {
    pub fn named(username: impl Into<String>, policy: UsernamePolicy) -> Result<Self, UserError> {
        let username = username.into();
        policy.check(&username)?;
        Ok(Self {
            username,
            name: None,
            email: None,
        })
    }

    /// Build a user that also carries a display name and contact e-mail.
    pub fn with_profile(
        username: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        policy: UsernamePolicy,
    ) -> Result<Self, UserError> {
        let username = username.into();
        let name = name.into();
        let email = email.into();

        policy.check(&username)?;
        if is_blank(&email) {
            return Err(UserError::BlankEmail);
        }
        if is_blank(&name) {
            return Err(UserError::BlankName);
        }

        Ok(Self {
            username,
            name: Some(name),
            email: Some(email),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn has_username(&self, username: &str) -> bool {
        self.username == username
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    pub fn view(&self) -> UserView {
        UserView {
            username: self.username.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}

/// Serializable projection of a [`User`] for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
