use thiserror::Error;

use crate::Kind;

/// Contract violations raised by node constructors and tree mutations.
///
/// Every error is reported at the offending call, before anything in the
/// tree has been changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Missing value: {field} is required")]
    MissingValue { field: &'static str },

    #[error("Value out of range for {field}: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    #[error("{child} cannot be added to {parent}")]
    NotAllowed { child: Kind, parent: Kind },

    #[error("Node has no parent")]
    Detached,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn out_of_range(field: &'static str, reason: impl Into<String>) -> Error {
    Error::OutOfRange {
        field,
        reason: reason.into(),
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::MissingValue { field })
    } else {
        Ok(())
    }
}

/// URLs are written verbatim, so whitespace would break the destination.
pub(crate) fn check_url(url: &str) -> Result<()> {
    match url.chars().find(|c| c.is_whitespace()) {
        Some(c) => Err(out_of_range(
            "url",
            format!("{url:?} contains whitespace {c:?}"),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_allowed_names_both_kinds() {
        let err = Error::NotAllowed {
            child: Kind::Bold,
            parent: Kind::Table,
        };
        assert_eq!(err.to_string(), "Bold cannot be added to Table");
    }

    #[test]
    fn url_with_space_is_rejected() {
        assert!(matches!(
            check_url("http://a b"),
            Err(Error::OutOfRange { field: "url", .. })
        ));
        assert!(check_url("http://example.com/a%20b").is_ok());
    }

    #[test]
    fn empty_required_field() {
        assert_eq!(
            require("name", ""),
            Err(Error::MissingValue { field: "name" })
        );
    }
}
