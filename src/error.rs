use thiserror::Error;

/// Failure kinds surfaced by the record core.
///
/// Every variant is reported at the call site; none are retried or silently
/// swallowed. Reads on malformed buffers never panic on bounds — a short or
/// truncated buffer is always a `BadLength`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("tag key must be exactly two bytes, got {0}")]
    BadKey(usize),

    #[error("{field} out of range: {value}")]
    BadLength { field: &'static str, value: i64 },

    #[error("unrecognized tag type byte {0:#04x}")]
    UnknownTagType(u8),

    #[error("invalid CIGAR operation code {0:#04x}")]
    InvalidCigarOp(u8),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::BadKey(a), Error::BadKey(b)) => a == b,
            (
                Error::BadLength {
                    field: f1,
                    value: v1,
                },
                Error::BadLength {
                    field: f2,
                    value: v2,
                },
            ) => f1 == f2 && v1 == v2,
            (Error::UnknownTagType(a), Error::UnknownTagType(b)) => a == b,
            (Error::InvalidCigarOp(a), Error::InvalidCigarOp(b)) => a == b,
            _ => false,
        }
    }
}
