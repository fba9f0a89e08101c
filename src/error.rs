/// Errors raised by the union-find forest and the spanning tree solver
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A count that must be non-negative was negative
    #[error("invalid argument: {what} must be non-negative, got {value}")]
    InvalidArgument { what: &'static str, value: i64 },

    /// A vertex index fell outside `[0, len)`
    #[error("vertex {index} out of range for {len} vertices")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convert a signed count into a `usize`, rejecting negatives
pub(crate) fn non_negative(what: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidArgument { what, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("n", 0), Ok(0));
        assert_eq!(non_negative("n", 7), Ok(7));
        assert_eq!(
            non_negative("n", -1),
            Err(Error::InvalidArgument {
                what: "n",
                value: -1
            })
        );
    }

    #[test]
    fn test_messages() {
        let err = Error::OutOfRange { index: 5, len: 5 };
        assert_eq!(err.to_string(), "vertex 5 out of range for 5 vertices");

        let err = Error::InvalidArgument {
            what: "vertex count",
            value: -3,
        };
        assert_eq!(
            err.to_string(),
            "invalid argument: vertex count must be non-negative, got -3"
        );
    }
}
