//! Convenience macros for conditional pipes.

/// Check a fixed list of pipes without boxing them.
///
/// The pipes may be of different types. They are evaluated left to right
/// and evaluation stops at the first one that does not hold. With no
/// arguments the result is `true`.
///
/// # Examples
///
/// ```
/// use pipe_core::{conditional_pipes, pipe_fn};
///
/// let always = pipe_fn(|| true);
/// let never = pipe_fn(|| false);
///
/// assert!(conditional_pipes!());
/// assert!(conditional_pipes!(always));
/// assert!(!conditional_pipes!(always, never));
/// ```
#[macro_export]
macro_rules! conditional_pipes {
    () => {
        true
    };

    ($($pipe:expr),+ $(,)?) => {
        $crate::check([$(&$pipe as &dyn $crate::ConditionalPipe),+])
    };
}

/// Log the outcome of a composed check against a subject.
///
/// Granted decisions are logged at info level and rejected ones at warn
/// level, each carrying the subject and any extra key/value context.
///
/// # Examples
///
/// ```
/// use pipe_core::log_decision;
///
/// let granted = true;
/// log_decision!("Izuku Midoriya", granted);
/// log_decision!("Izuku Midoriya", !granted, pipes => 3);
/// ```
#[macro_export]
macro_rules! log_decision {
    ($subject:expr, $granted:expr) => {
        if $granted {
            $crate::__tracing::info!(subject = %$subject, "Access granted");
        } else {
            $crate::__tracing::warn!(subject = %$subject, "Access denied");
        }
    };

    ($subject:expr, $granted:expr, $($key:ident => $value:expr),+ $(,)?) => {
        if $granted {
            $crate::__tracing::info!(subject = %$subject, $($key = %$value),+, "Access granted");
        } else {
            $crate::__tracing::warn!(subject = %$subject, $($key = %$value),+, "Access denied");
        }
    };
}
