//! New-comment input validation

use super::ValidationError;

/// A validated comment submission.
///
/// Both fields are required; which one is missing decides the error
/// message, so the checks are ordered: both absent first, then username,
/// then body.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub username: String,
    pub body: String,
}

impl NewComment {
    pub fn new(username: Option<String>, body: Option<String>) -> Result<Self, ValidationError> {
        // An empty string counts as absent, same as the field being
        // left out entirely.
        let username = username.filter(|u| !u.is_empty());
        let body = body.filter(|b| !b.is_empty());

        match (username, body) {
            (None, None) => Err(ValidationError::MissingCommentFields),
            (None, Some(_)) => Err(ValidationError::MissingUsername),
            (Some(_), None) => Err(ValidationError::MissingBody),
            (Some(username), Some(body)) => Ok(Self { username, body }),
        }
    }
}
