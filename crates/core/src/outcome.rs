//! The two-variant outcome container and its combinators.
//!
//! An [`Outcome`] represents failure as data instead of control-flow
//! interruption: combinators inspect, repair, or convert it, and the
//! unwrapping operations hand the owned [`FailureError`] back to the host's
//! `Result`/`?` machinery when the caller wants interrupt-style propagation.

use std::fmt;
use std::future::Future;

use crate::code::Code;
use crate::error::{BoxError, FailureError};

/// A value that is either a success carrying a payload or a failure
/// carrying a coded [`FailureError`].
///
/// The variant tag is fixed at construction; every combinator consumes
/// `self` and produces a new value, so no operation can flip a success into
/// a failure in place.
///
/// # Examples
///
/// ```
/// use resultify_core::Outcome;
///
/// fn lookup(port: &str) -> Outcome<u16> {
///     match port.parse() {
///         Ok(port) => Outcome::success(port),
///         Err(e) => Outcome::failure_from("E_PORT", e),
///     }
/// }
///
/// let port = lookup("nope")
///     .fix_code("E_PORT", |_| Outcome::success(8080))
///     .unwrap_or(0);
/// assert_eq!(port, 8080);
/// ```
#[derive(Debug)]
pub enum Outcome<T> {
    /// The operation produced a payload.
    Success(T),
    /// The operation failed; the record carries code, message, and cause.
    Failure(FailureError),
}

impl<T> Outcome<T> {
    /// Construct a success carrying `value`.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Construct a failure with a generated message
    /// (`error occurred with code '<code>'`).
    pub fn failure(code: impl Into<Code>) -> Self {
        Self::Failure(FailureError::new(code))
    }

    /// Construct a failure with an explicit message.
    pub fn failure_msg(code: impl Into<Code>, message: impl Into<String>) -> Self {
        Self::Failure(FailureError::with_message(code, message))
    }

    /// Construct a failure from a triggering error, reusing its display
    /// text as the message and retaining it as the cause.
    pub fn failure_from(code: impl Into<Code>, cause: impl Into<BoxError>) -> Self {
        Self::Failure(FailureError::from_cause(code, cause))
    }

    /// Whether this outcome is the success variant.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this outcome is the failure variant.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The failure's code, or `None` on success.
    pub const fn code(&self) -> Option<&Code> {
        match self {
            Self::Success(_) => None,
            Self::Failure(record) => Some(record.code()),
        }
    }

    /// The owned failure record, or `None` on success.
    pub const fn error(&self) -> Option<&FailureError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(record) => Some(record),
        }
    }

    /// Return the payload, or raise the failure record as `Err`.
    ///
    /// # Errors
    ///
    /// Returns the owned [`FailureError`] on the failure variant.
    pub fn expect(self) -> Result<T, FailureError> {
        self.into_result()
    }

    /// Like [`expect`](Self::expect), but on failure first rewrites the
    /// record's message, substituting the literal `{code}` token with the
    /// textual form of the code (`null` for [`Code::None`]).
    ///
    /// # Errors
    ///
    /// Returns the rewritten [`FailureError`] on the failure variant.
    pub fn expect_or_msg(self, message: &str) -> Result<T, FailureError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(record) => Err(record.rewrite_message(message)),
        }
    }

    /// Return the payload, or raise the failure record as `Err`.
    ///
    /// # Errors
    ///
    /// Returns the owned [`FailureError`] on the failure variant.
    pub fn unwrap(self) -> Result<T, FailureError> {
        self.into_result()
    }

    /// Return the payload, or the eagerly evaluated `default` on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(record) => {
                tracing::debug!(code = %record.code(), "substituting default for failure");
                default
            }
        }
    }

    /// Return the payload, or the result of `fallback` applied to the
    /// failure record. The fallback runs exactly once, and only on failure.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(FailureError) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(record) => fallback(record),
        }
    }

    /// Deferred form of [`unwrap_or_else`](Self::unwrap_or_else): the
    /// fallback is asynchronous and is awaited only on failure.
    pub async fn unwrap_or_else_async<F, Fut>(self, fallback: F) -> T
    where
        F: FnOnce(FailureError) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(record) => fallback(record).await,
        }
    }

    /// Repair a failure: success passes through untouched, a failure is
    /// handed to `handler` together with its owned record.
    pub fn fix<F>(self, handler: F) -> Self
    where
        F: FnOnce(FailureError) -> Self,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(record) => handler(record),
        }
    }

    /// Repair a failure with a literal replacement outcome. Success passes
    /// through and the replacement is discarded.
    pub fn fix_with(self, replacement: Self) -> Self {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(_) => replacement,
        }
    }

    /// Repair only a failure whose code equals `code` (strict structural
    /// equality). A non-matching failure is returned unchanged.
    pub fn fix_code<F>(self, code: impl Into<Code>, handler: F) -> Self
    where
        F: FnOnce(FailureError) -> Self,
    {
        match self {
            Self::Failure(record) if *record.code() == code.into() => handler(record),
            other => other,
        }
    }

    /// Literal-replacement form of [`fix_code`](Self::fix_code).
    pub fn fix_code_with(self, code: impl Into<Code>, replacement: Self) -> Self {
        match self {
            Self::Failure(record) if *record.code() == code.into() => replacement,
            other => other,
        }
    }

    /// Deferred form of [`fix`](Self::fix): the handler is asynchronous and
    /// is awaited only on failure.
    pub async fn fix_async<F, Fut>(self, handler: F) -> Self
    where
        F: FnOnce(FailureError) -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(record) => handler(record).await,
        }
    }

    /// Deferred form of [`fix_code`](Self::fix_code).
    pub async fn fix_code_async<F, Fut>(self, code: impl Into<Code>, handler: F) -> Self
    where
        F: FnOnce(FailureError) -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            Self::Failure(record) if *record.code() == code.into() => handler(record).await,
            other => other,
        }
    }

    /// Replace a success payload; a failure passes through unchanged.
    ///
    /// Discarding the payload is `ok_to(())`.
    pub fn ok_to<U>(self, value: U) -> Outcome<U> {
        match self {
            Self::Success(_) => Outcome::Success(value),
            Self::Failure(record) => Outcome::Failure(record),
        }
    }

    /// Replace a failure with a brand-new one carrying `code` and a
    /// generated message; the original record becomes the new record's
    /// cause, preserving provenance. Success passes through unchanged.
    pub fn err_to(self, code: impl Into<Code>) -> Self {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(original) => {
                Self::Failure(FailureError::new(code).caused_by(Box::new(original)))
            }
        }
    }

    /// Like [`err_to`](Self::err_to) with an explicit message.
    pub fn err_to_msg(self, code: impl Into<Code>, message: impl Into<String>) -> Self {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(original) => {
                Self::Failure(FailureError::with_message(code, message).caused_by(Box::new(original)))
            }
        }
    }

    /// Bridge to the host's fallible type.
    ///
    /// # Errors
    ///
    /// Returns the owned [`FailureError`] on the failure variant.
    pub fn into_result(self) -> Result<T, FailureError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(record) => Err(record),
        }
    }
}

impl Outcome<()> {
    /// The unit success, for operations with nothing to report.
    #[must_use]
    pub const fn unit() -> Self {
        Self::Success(())
    }
}

impl<T> From<FailureError> for Outcome<T> {
    fn from(record: FailureError) -> Self {
        Self::Failure(record)
    }
}

impl<T, E: Into<BoxError>> From<Result<T, E>> for Outcome<T> {
    /// `Ok` becomes a success; `Err` becomes a codeless failure whose
    /// message and cause come from the error.
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure_from(Code::None, error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, FailureError> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Result Ok({value})"),
            Self::Failure(record) => {
                write!(f, "Result Err({} {})", record.code(), record.message())
            }
        }
    }
}
