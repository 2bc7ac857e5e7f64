//! The failure record carried by failure outcomes.

use std::error::Error as StdError;

use thiserror::Error;

use crate::code::Code;

/// Boxed error type used for failure causes.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Raised-error record owned by a failure [`Outcome`](crate::Outcome).
///
/// Carries a stable [`Code`], a human-readable message, and an optional
/// cause. The cause is reachable through [`std::error::Error::source`], so
/// standard error-chain traversal sees the full provenance.
///
/// The code is immutable after construction. The message can be rewritten
/// exactly once, by [`Outcome::expect_or_msg`](crate::Outcome::expect_or_msg).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FailureError {
    code: Code,
    message: String,
    #[source]
    cause: Option<BoxError>,
}

impl FailureError {
    /// Create a record with the generated message
    /// `error occurred with code '<code>'`.
    pub fn new(code: impl Into<Code>) -> Self {
        let code = code.into();
        let message = generated_message(&code);
        Self {
            code,
            message,
            cause: None,
        }
    }

    /// Create a record with an explicit message.
    pub fn with_message(code: impl Into<Code>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Create a record from a triggering error, reusing its display text as
    /// the message and retaining it as the cause.
    pub fn from_cause(code: impl Into<Code>, cause: impl Into<BoxError>) -> Self {
        let cause = cause.into();
        Self {
            code: code.into(),
            message: cause.to_string(),
            cause: Some(cause),
        }
    }

    /// Create a record with every field explicit.
    pub fn full(
        code: impl Into<Code>,
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Whether an arbitrary error belongs to this error family.
    ///
    /// Lets downstream code distinguish outcome failures from unrelated
    /// errors after they have been erased to `dyn Error`.
    pub fn is(error: &(dyn StdError + 'static)) -> bool {
        error.is::<Self>()
    }

    /// The stable discriminant of this failure.
    pub const fn code(&self) -> &Code {
        &self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The triggering lower-level error, when one was recorded.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Attach a cause to an existing record.
    pub(crate) fn caused_by(mut self, cause: BoxError) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Replace the message, substituting the literal `{code}` token with the
    /// textual form of the code.
    pub(crate) fn rewrite_message(mut self, message: &str) -> Self {
        self.message = message.replace("{code}", &self.code.to_string());
        self
    }
}

fn generated_message(code: &Code) -> String {
    format!("error occurred with code '{code}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    #[test]
    fn generated_message_spells_out_code() {
        assert_eq!(
            FailureError::new(Code::None).message(),
            "error occurred with code 'null'"
        );
        assert_eq!(
            FailureError::new("E_IO").message(),
            "error occurred with code 'E_IO'"
        );
    }

    #[test]
    fn explicit_message_is_verbatim() {
        let record = FailureError::with_message("E_IO", "disk on fire");
        assert_eq!(record.message(), "disk on fire");
        assert_eq!(record.code(), &Code::from("E_IO"));
    }

    #[test]
    fn from_cause_reuses_cause_message() {
        let cause = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let record = FailureError::from_cause("E_IO", cause);
        assert_eq!(record.message(), "missing file");
        assert!(record.cause().is_some());
    }

    #[test]
    fn cause_is_visible_through_source() {
        let cause = io::Error::other("root cause");
        let record = FailureError::full("E_IO", "outer", cause);
        let source = StdError::source(&record).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("root cause"));
    }

    #[test]
    fn family_marker_distinguishes_foreign_errors() {
        let ours: BoxError = Box::new(FailureError::new("E_IO"));
        let foreign: BoxError = Box::new(io::Error::other("nope"));
        assert!(FailureError::is(ours.as_ref()));
        assert!(!FailureError::is(foreign.as_ref()));
    }

    #[test]
    fn rewrite_substitutes_code_token() {
        let record = FailureError::new("E_IO").rewrite_message("failed with {code}");
        assert_eq!(record.message(), "failed with E_IO");

        let record = FailureError::new(Code::None).rewrite_message("failed with {code}");
        assert_eq!(record.message(), "failed with null");
    }
}
