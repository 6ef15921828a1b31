use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum SeqError {
    /// A static parameter was out of its valid domain. Raised at call time.
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        param: &'static str,
        reason: &'static str,
    },
    /// The source ended before it could fill the first window.
    #[error("source yielded {found} elements but {required} are needed")]
    SourceTooSmall { required: usize, found: usize },
}

impl SeqError {
    pub(crate) fn invalid(param: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { param, reason }
    }

    /// Name of the offending parameter, if this is an argument error.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { param, .. } => Some(param),
            Self::SourceTooSmall { .. } => None,
        }
    }
}

pub type Result<T, E = SeqError> = std::result::Result<T, E>;
