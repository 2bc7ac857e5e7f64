//! Callback-style adapter: completion handles over a one-shot resolution.
//!
//! Instead of reporting through injected callback properties, a wrapped
//! callable receives a [`Completion`] handle and resolves it exactly once,
//! by calling [`Completion::succeed`] or [`Completion::fail`]. The adapter
//! returns a deferred [`Outcome`] that resolves with whichever came first.

use std::fmt;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::oneshot;

use crate::code::Code;
use crate::error::{BoxError, FailureError};
use crate::outcome::Outcome;
use crate::resultify::{callable_name, calling_message};

/// Options for the [`callback_resultify`] adapters.
///
/// Absent fields fall back to the adapter defaults: a [`Code::None`] code
/// and the message `error occurred while calling '<name>' function`.
#[derive(Debug, Clone, Default)]
pub struct CallbackOptions {
    code: Option<Code>,
    message: Option<String>,
    callable: Option<&'static str>,
}

impl CallbackOptions {
    /// Options with every field defaulted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: None,
            message: None,
            callable: None,
        }
    }

    /// Code given to the failure when the callable fails.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<Code>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Message given to the failure when the callable fails.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Callable name used in the generated failure message.
    #[must_use]
    pub fn with_callable(mut self, name: &'static str) -> Self {
        self.callable = Some(name);
        self
    }
}

/// Result type returned by callback-style callables.
///
/// Returning `Err` before resolving the [`Completion`] counts as a raise
/// and is captured into a failure resolution.
pub type CallbackResult = Result<(), BoxError>;

struct ResolveConfig {
    code: Code,
    message: Option<String>,
    callable: &'static str,
}

impl ResolveConfig {
    fn failure(&self, cause: BoxError) -> FailureError {
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| calling_message(self.callable));
        FailureError::full(self.code.clone(), message, cause)
    }
}

/// Single-use resolution handle passed to a callback-style callable.
///
/// The handle is cheap to clone and may be moved into spawned work; all
/// clones share one resolution slot. The first call to
/// [`succeed`](Self::succeed) or [`fail`](Self::fail) resolves the adapter's
/// outcome; later calls are no-ops.
pub struct Completion<T> {
    slot: Arc<Mutex<Option<oneshot::Sender<Outcome<T>>>>>,
    config: Arc<ResolveConfig>,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T> fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("callable", &self.config.callable)
            .finish_non_exhaustive()
    }
}

impl<T> Completion<T> {
    /// Resolve the outcome as a success carrying `value`.
    pub fn succeed(&self, value: T) {
        self.resolve(Outcome::Success(value));
    }

    /// Resolve the outcome as a failure caused by `error`, using the
    /// adapter's configured code and message defaults.
    pub fn fail(&self, error: impl Into<BoxError>) {
        self.resolve(Outcome::Failure(self.config.failure(error.into())));
    }

    fn resolve(&self, outcome: Outcome<T>) {
        let sender = match self.slot.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        match sender {
            // a dead receiver means the caller dropped the adapter future
            Some(sender) => drop(sender.send(outcome)),
            None => tracing::debug!(
                callable = self.config.callable,
                "ignoring resolution, outcome already resolved"
            ),
        }
    }
}

#[derive(Debug, Error)]
#[error("callable finished without resolving its completion handle")]
struct Unresolved;

/// Wrap a callback-style callable into a deferred [`Outcome`].
///
/// The callable receives a [`Completion`] handle and reports through it;
/// the first resolution wins. A synchronous `Err` return before any
/// resolution is captured into a failure, and dropping every handle without
/// resolving yields a failure rather than pending forever.
///
/// # Examples
///
/// ```
/// use resultify_core::{callback_resultify, Completion};
///
/// # futures::executor::block_on(async {
/// let outcome = callback_resultify(|done: Completion<i32>| {
///     done.succeed(1 + 1);
///     Ok(())
/// })
/// .await;
/// assert_eq!(outcome.unwrap_or(0), 2);
/// # });
/// ```
pub async fn callback_resultify<T, F>(callable: F) -> Outcome<T>
where
    F: FnOnce(Completion<T>) -> CallbackResult,
{
    callback_resultify_with(CallbackOptions::new(), callable).await
}

/// Like [`callback_resultify`] with an explicit code, message, or callable
/// name.
pub async fn callback_resultify_with<T, F>(options: CallbackOptions, callable: F) -> Outcome<T>
where
    F: FnOnce(Completion<T>) -> CallbackResult,
{
    let config = Arc::new(ResolveConfig {
        code: options.code.unwrap_or_default(),
        message: options.message,
        callable: options.callable.unwrap_or_else(callable_name::<F>),
    });

    let (sender, receiver) = oneshot::channel();
    let completion = Completion {
        slot: Arc::new(Mutex::new(Some(sender))),
        config: Arc::clone(&config),
    };

    // kept aside so a synchronous raise can still resolve the slot
    let raise_guard = completion.clone();
    if let Err(error) = callable(completion) {
        raise_guard.fail(error);
    }
    drop(raise_guard);

    match receiver.await {
        Ok(outcome) => outcome,
        Err(_) => Outcome::Failure(config.failure(Box::new(Unresolved))),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn double(input: i32) -> impl FnOnce(Completion<i32>) -> CallbackResult {
        move |done| {
            done.succeed(input * 2);
            Ok(())
        }
    }

    #[tokio::test]
    async fn resolves_with_the_first_success() {
        let outcome = callback_resultify(double(21)).await;
        assert_eq!(outcome.unwrap_or(0), 42);
    }

    #[tokio::test]
    async fn failure_uses_configured_code() {
        let outcome: Outcome<i32> = callback_resultify_with(
            CallbackOptions::new().with_code("E_CB"),
            |done: Completion<i32>| {
                done.fail("went sideways");
                Ok(())
            },
        )
        .await;
        let record = outcome.unwrap().unwrap_err();
        assert_eq!(record.code(), &Code::from("E_CB"));
        assert_eq!(record.cause().map(ToString::to_string).unwrap(), "went sideways");
    }

    #[tokio::test]
    async fn first_resolution_wins() {
        let outcome = callback_resultify(|done: Completion<i32>| {
            done.succeed(1);
            done.succeed(2);
            done.fail("late failure");
            Ok(())
        })
        .await;
        assert_eq!(outcome.unwrap_or(0), 1);
    }

    #[tokio::test]
    async fn synchronous_raise_is_captured() {
        let outcome: Outcome<i32> =
            callback_resultify(|_done: Completion<i32>| Err("raised before resolving".into()))
                .await;
        let record = outcome.unwrap().unwrap_err();
        assert_eq!(
            record.cause().map(ToString::to_string).unwrap(),
            "raised before resolving"
        );
    }

    #[tokio::test]
    async fn dropped_handle_yields_a_failure() {
        let outcome: Outcome<i32> = callback_resultify(|done: Completion<i32>| {
            drop(done);
            Ok(())
        })
        .await;
        let record = outcome.unwrap().unwrap_err();
        assert_eq!(
            record.cause().map(ToString::to_string).unwrap(),
            "callable finished without resolving its completion handle"
        );
    }

    #[tokio::test]
    async fn resolution_from_spawned_work() {
        let outcome = callback_resultify(|done: Completion<i32>| {
            tokio::spawn(async move {
                done.succeed(7);
            });
            Ok(())
        })
        .await;
        assert_eq!(outcome.unwrap_or(0), 7);
    }
}
