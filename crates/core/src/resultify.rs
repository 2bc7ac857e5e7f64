//! Adapters that convert fallible callables into outcomes.
//!
//! A callable "raises" in Rust by returning the `Err` arm of a `Result`;
//! the adapters capture that into a failure [`Outcome`] carrying the raised
//! error as its cause. Synchronous callables yield an outcome synchronously
//! with no deferral; asynchronous callables go through the `_async`
//! adapters, which are `async fn`s awaiting the callable's future.

use std::any::type_name;
use std::future::Future;

use crate::code::Code;
use crate::error::{BoxError, FailureError};
use crate::outcome::Outcome;

/// Options for the [`resultify`] adapters.
///
/// Absent fields fall back to the adapter defaults: a [`Code::None`] code
/// and the message `error occurred while calling '<name>' function`.
#[derive(Debug, Clone, Default)]
pub struct ResultifyOptions {
    code: Option<Code>,
    message: Option<String>,
    callable: Option<&'static str>,
}

impl ResultifyOptions {
    /// Options with every field defaulted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: None,
            message: None,
            callable: None,
        }
    }

    /// Code given to the failure when the callable raises.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<Code>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Message given to the failure when the callable raises.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Callable name used in the generated failure message.
    ///
    /// Named `fn` items report their own identifier automatically; closures
    /// report `anonymous` unless overridden here.
    #[must_use]
    pub fn with_callable(mut self, name: &'static str) -> Self {
        self.callable = Some(name);
        self
    }
}

/// Wrap a synchronous fallible callable into an [`Outcome`].
///
/// The success value is returned synchronously; a raised error becomes the
/// cause of a codeless failure.
///
/// # Examples
///
/// ```
/// use resultify_core::resultify;
///
/// let port = resultify(|| "8080".parse::<u16>());
/// assert_eq!(port.unwrap_or(0), 8080);
/// ```
pub fn resultify<T, E, F>(callable: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    resultify_with(ResultifyOptions::new(), callable)
}

/// Like [`resultify`] with an explicit code, message, or callable name.
pub fn resultify_with<T, E, F>(options: ResultifyOptions, callable: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    let name = options.callable.unwrap_or_else(callable_name::<F>);
    match callable() {
        Ok(value) => Outcome::Success(value),
        Err(error) => wrap_failure(options, name, error.into()),
    }
}

/// Wrap an asynchronous fallible callable into a deferred [`Outcome`].
///
/// The callable's future is awaited exactly once; its rejection becomes the
/// cause of the failure, under the same defaulting rules as [`resultify`].
pub async fn resultify_async<T, E, F, Fut>(callable: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    resultify_async_with(ResultifyOptions::new(), callable).await
}

/// Like [`resultify_async`] with an explicit code, message, or callable name.
pub async fn resultify_async_with<T, E, F, Fut>(options: ResultifyOptions, callable: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    let name = options.callable.unwrap_or_else(callable_name::<F>);
    match callable().await {
        Ok(value) => Outcome::Success(value),
        Err(error) => wrap_failure(options, name, error.into()),
    }
}

fn wrap_failure<T>(options: ResultifyOptions, name: &str, cause: BoxError) -> Outcome<T> {
    let code = options.code.unwrap_or_default();
    let message = options
        .message
        .unwrap_or_else(|| calling_message(name));
    tracing::debug!(%code, callable = name, "wrapped callable raised");
    Outcome::Failure(FailureError::full(code, message, cause))
}

pub(crate) fn calling_message(name: &str) -> String {
    format!("error occurred while calling '{name}' function")
}

/// Best-effort callable name: the last path segment of the type name.
/// Named `fn` items yield their identifier; closures yield `anonymous`.
pub(crate) fn callable_name<F>() -> &'static str {
    let full = type_name::<F>();
    let segment = full.rsplit("::").next().unwrap_or(full);
    if segment.contains("closure") {
        "anonymous"
    } else {
        segment
    }
}
