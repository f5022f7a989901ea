//! Allow-list types for the article list query
//!
//! Sort column and direction are the one place identifiers end up
//! interpolated into SQL, so both are closed enums: parsing accepts only
//! the fixed public names, and `as_column`/`as_sql` emit only known-safe
//! identifiers. Raw query-string values never reach the SQL text.

use super::ValidationError;

/// Sortable article columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Title,
    Topic,
    Author,
    Body,
    CreatedAt,
    Votes,
    ArticleImgUrl,
}

impl SortBy {
    /// Parse a `sort_by` query value, defaulting to `created_at`.
    pub fn parse(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            None => Ok(Self::CreatedAt),
            Some("title") => Ok(Self::Title),
            Some("topic") => Ok(Self::Topic),
            Some("author") => Ok(Self::Author),
            Some("body") => Ok(Self::Body),
            Some("created_at") => Ok(Self::CreatedAt),
            Some("votes") => Ok(Self::Votes),
            Some("article_img_url") => Ok(Self::ArticleImgUrl),
            Some(_) => Err(ValidationError::BadSortBy),
        }
    }

    /// The column identifier interpolated into ORDER BY.
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Topic => "topic",
            Self::Author => "author",
            Self::Body => "body",
            Self::CreatedAt => "created_at",
            Self::Votes => "votes",
            Self::ArticleImgUrl => "article_img_url",
        }
    }
}

impl Default for SortBy {
    fn default() -> Self {
        Self::CreatedAt
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    /// Parse an `order` query value, defaulting to descending.
    pub fn parse(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            None => Ok(Self::Desc),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(_) => Err(ValidationError::BadOrder),
        }
    }

    /// The direction keyword interpolated into ORDER BY.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::Desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_defaults_to_created_at() {
        assert_eq!(SortBy::parse(None).unwrap(), SortBy::CreatedAt);
    }

    #[test]
    fn sort_by_accepts_every_allowed_column() {
        for name in [
            "title",
            "topic",
            "author",
            "body",
            "created_at",
            "votes",
            "article_img_url",
        ] {
            let sort = SortBy::parse(Some(name)).unwrap();
            assert_eq!(sort.as_column(), name);
        }
    }

    #[test]
    fn sort_by_rejects_unknown_column() {
        let err = SortBy::parse(Some("banana")).unwrap_err();
        assert_eq!(err, ValidationError::BadSortBy);
    }

    #[test]
    fn sort_by_rejects_injection_attempt() {
        // Values never reach SQL; parsing is the only gate.
        let err = SortBy::parse(Some("votes; DROP TABLE articles")).unwrap_err();
        assert_eq!(err, ValidationError::BadSortBy);
    }

    #[test]
    fn order_defaults_to_desc() {
        assert_eq!(Order::parse(None).unwrap(), Order::Desc);
        assert_eq!(Order::parse(Some("asc")).unwrap(), Order::Asc);
    }

    #[test]
    fn order_rejects_unknown_direction() {
        let err = Order::parse(Some("sideways")).unwrap_err();
        assert_eq!(err, ValidationError::BadOrder);
    }
}
