//! A single-iteration sequence for scoped early exit.
//!
//! This crate exports one value, [`ONCE`]: a sequence that yields exactly one
//! element when iterated. A `for` loop over it runs its body exactly once, so
//! a `break` anywhere inside the body becomes a localized early exit — control
//! jumps to the first statement after the loop block instead of leaving the
//! enclosing function. This keeps functions at a single exit point: outcome
//! variables are set before the `break` and reported once, after the loop.
//!
//! The value is a zero-sized constant. It carries no state, performs no
//! allocation, and is safe to iterate from any number of call sites or threads
//! concurrently; no run affects any other.
//!
//! # Examples
//!
//! ## Early exit with a single exit point
//!
//! ```rust
//! use loop_once::ONCE;
//!
//! fn parse_port(raw: &str) -> Result<u16, String> {
//!    let mut port: u16 = 0;
//!    let mut error = None;
//!
//!    for _ in ONCE {
//!       let trimmed = raw.trim();
//!       if trimmed.is_empty() {
//!          error = Some("empty input".to_string());
//!          break;
//!       }
//!       match trimmed.parse() {
//!          Ok(p) => port = p,
//!          Err(e) => {
//!             error = Some(e.to_string());
//!             break;
//!          }
//!       }
//!    }
//!
//!    // Single exit point.
//!    match error {
//!       Some(e) => Err(e),
//!       None => Ok(port),
//!    }
//! }
//!
//! assert_eq!(parse_port(" 8080 "), Ok(8080));
//! assert!(parse_port("").is_err());
//! assert!(parse_port("eighty").is_err());
//! ```
//!
//! ## Nesting
//!
//! A `break` only ends the loop it appears in. Nested loops over [`ONCE`]
//! stay independent: breaking out of the inner one resumes the outer body.
//!
//! ```rust
//! use loop_once::ONCE;
//!
//! let mut trace = Vec::new();
//! for _ in ONCE {
//!    trace.push("outer: before inner");
//!    for _ in ONCE {
//!       trace.push("inner: before break");
//!       break;
//!    }
//!    trace.push("outer: after inner");
//! }
//! assert_eq!(
//!    trace,
//!    ["outer: before inner", "inner: before break", "outer: after inner"]
//! );
//! ```
//!
//! # When not to use this
//!
//! Rust has labeled blocks, which express the same control flow natively and
//! without a loop in sight:
//!
//! ```rust
//! let mut error = None;
//! 'done: {
//!    if true {
//!       error = Some("bail");
//!       break 'done;
//!    }
//! }
//! assert_eq!(error, Some("bail"));
//! ```
//!
//! Prefer those where they read well. This crate exists for code bases that
//! standardize on the loop-shaped spelling of the idiom, or that want the
//! one-element sequence as an actual [`IntoIterator`] value.

#![no_std]

/// The one-element iterator.
mod iter;

/// The single-iteration sequence value and its shared constant.
mod once;

pub use iter::Iter;
pub use once::{Once, ONCE};
