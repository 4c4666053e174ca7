//! # Pipe Core
//!
//! `pipe_core` provides the building blocks of the conditional pipe pattern:
//! independent boolean conditions that are each bound to their own context
//! and combined with logical AND into a single decision.
//!
//! ## Core Concepts
//!
//! 1. **Conditional Pipe**: anything implementing [`ConditionalPipe`]. A pipe
//!    takes no input at check time; whatever it inspects was bound when it
//!    was constructed.
//!
//! 2. **Composer**: [`check`] reduces an ordered sequence of pipes with
//!    short-circuit AND. An empty sequence is vacuously `true`:
//!    ```text
//!    check(p1, .., pn) := p1.check() ∧ .. ∧ pn.check()
//!    ```
//!
//! 3. **Nesting**: [`AllOf`] owns a list of pipes and is itself a pipe, so a
//!    composed decision can be reused inside a larger one.
//!
//! ## Usage Example
//!
//! ```rust
//! use pipe_core::{check, conditional_pipes, pipe_fn, ConditionalPipe};
//!
//! let logged_in = pipe_fn(|| true);
//! let verified = pipe_fn(|| true);
//! let banned = pipe_fn(|| false);
//!
//! assert!(check([&logged_in as &dyn ConditionalPipe, &verified]));
//! assert!(!conditional_pipes!(logged_in, verified, banned));
//! ```
//!
//! ## Crate Structure
//!
//! - **error**: Error types shared by crates built on top of the core
//! - **traits**: The [`ConditionalPipe`] contract and closure adapter
//! - **compose**: The AND composer and the [`AllOf`] pipe
//! - **macros**: Variadic composition and decision logging macros

pub mod compose;
pub mod error;
pub mod macros;
pub mod traits;

pub use compose::{check, AllOf};
pub use error::{Error, Result};
pub use traits::{pipe_fn, ConditionalPipe, FnPipe};

// Used by exported macros so callers don't need their own tracing dependency.
#[doc(hidden)]
pub use tracing as __tracing;
