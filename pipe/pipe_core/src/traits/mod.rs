//! Core traits.

pub mod pipe;

pub use pipe::{pipe_fn, ConditionalPipe, FnPipe};
