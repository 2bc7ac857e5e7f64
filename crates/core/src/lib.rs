//! Coded success/failure outcomes for fallible code.
//!
//! This crate represents failure as data instead of control-flow
//! interruption. Key pieces:
//!
//! - **[`Outcome`]**: the two-variant success/failure container, with
//!   combinators for inspection, unwrapping, repair, and conversion
//! - **[`FailureError`]**: the raised-error record behind every failure,
//!   carrying a stable [`Code`], a message, and an optional cause chain
//! - **[`resultify`]** / [`resultify_async`]: adapters wrapping fallible
//!   callables into outcomes
//! - **[`callback_resultify`]**: adapter wrapping callback-style callables
//!   into a single deferred outcome via a [`Completion`] handle
//!
//! # Example
//!
//! ```
//! use resultify_core::{Outcome, resultify_with, ResultifyOptions};
//!
//! let port: Outcome<u16> = resultify_with(
//!     ResultifyOptions::new().with_code("E_PORT"),
//!     || "not-a-port".parse(),
//! );
//!
//! // failure is data: branch on the code, repair, then extract
//! let port = port
//!     .fix_code("E_PORT", |_| Outcome::success(8080))
//!     .unwrap_or(0);
//! assert_eq!(port, 8080);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod callback;
pub mod code;
pub mod error;
pub mod outcome;
pub mod resultify;

// Re-export the public surface
pub use callback::{
    CallbackOptions, CallbackResult, Completion, callback_resultify, callback_resultify_with,
};
pub use code::Code;
pub use error::{BoxError, FailureError};
pub use outcome::Outcome;
pub use resultify::{
    ResultifyOptions, resultify, resultify_async, resultify_async_with, resultify_with,
};
