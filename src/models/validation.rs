//! Validation error types
//!
//! Each variant maps to one of the fixed client-facing messages. The
//! messages are part of the API contract, so they live here as statics
//! rather than being formatted per call site.

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// sort_by value outside the sortable-column allow-list
    BadSortBy,

    /// order value other than asc/desc
    BadOrder,

    /// inc_votes missing from the patch body, or not an integer
    MissingIncVotes,

    /// Comment body had neither username nor body
    MissingCommentFields,

    /// Comment body present but username missing
    MissingUsername,

    /// Username present but comment body missing
    MissingBody,
}

impl ValidationError {
    /// The exact message serialized to clients.
    pub fn msg(&self) -> &'static str {
        match self {
            Self::BadSortBy => "Bad sort_by Request",
            Self::BadOrder => "Bad order Request",
            Self::MissingIncVotes => "Bad Request",
            Self::MissingCommentFields => "Bad Request",
            Self::MissingUsername => "Username Not Found",
            Self::MissingBody => "Comment Not Found",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.msg())
    }
}

impl std::error::Error for ValidationError {}
