//! Conditional pipe trait definitions.
//!
//! A conditional pipe is one independently testable boolean condition. All
//! the context it needs is bound when the pipe is constructed, so checking
//! takes no arguments. Pipes are immutable after construction; if they hold
//! a handle to a shared subject, the answer reflects the subject as it is at
//! check time, not as it was when the pipe was built.

use std::fmt;
use std::sync::Arc;

/// Core trait for conditional pipes.
///
/// # Examples
///
/// ```
/// use pipe_core::ConditionalPipe;
///
/// struct MinimumAge {
///     age: u32,
///     minimum: u32,
/// }
///
/// impl ConditionalPipe for MinimumAge {
///     fn check(&self) -> bool {
///         self.age >= self.minimum
///     }
/// }
///
/// assert!(MinimumAge { age: 21, minimum: 18 }.check());
/// assert!(!MinimumAge { age: 16, minimum: 18 }.check());
/// ```
pub trait ConditionalPipe: Send + Sync {
    /// Evaluates the condition against the context bound at construction.
    ///
    /// Implementations must not have observable side effects.
    fn check(&self) -> bool;

    /// Returns a short label for this pipe, used in diagnostics.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<P> ConditionalPipe for &P
where
    P: ConditionalPipe + ?Sized,
{
    fn check(&self) -> bool {
        (**self).check()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<P> ConditionalPipe for Box<P>
where
    P: ConditionalPipe + ?Sized,
{
    fn check(&self) -> bool {
        (**self).check()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<P> ConditionalPipe for Arc<P>
where
    P: ConditionalPipe + ?Sized,
{
    fn check(&self) -> bool {
        (**self).check()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// A conditional pipe backed by a closure.
///
/// The closure captures its context the same way a hand-written pipe would
/// hold it in fields.
#[derive(Clone)]
pub struct FnPipe<F> {
    label: String,
    condition: F,
}

impl<F> FnPipe<F>
where
    F: Fn() -> bool + Send + Sync,
{
    /// Creates a new closure pipe with a generic label.
    pub fn new(condition: F) -> Self {
        Self {
            label: "closure".to_string(),
            condition,
        }
    }

    /// Replaces the label reported by [`ConditionalPipe::describe`].
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl<F> fmt::Debug for FnPipe<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPipe").field("label", &self.label).finish()
    }
}

impl<F> ConditionalPipe for FnPipe<F>
where
    F: Fn() -> bool + Send + Sync,
{
    fn check(&self) -> bool {
        (self.condition)()
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// Wraps a closure as a [`ConditionalPipe`].
pub fn pipe_fn<F>(condition: F) -> FnPipe<F>
where
    F: Fn() -> bool + Send + Sync,
{
    FnPipe::new(condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct Fixed(bool);

    impl ConditionalPipe for Fixed {
        fn check(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_forwarding_impls() {
        let pipe = Fixed(true);
        assert!((&pipe).check());
        assert!(Box::new(Fixed(true)).check());
        assert!(!Arc::new(Fixed(false)).check());

        let boxed: Box<dyn ConditionalPipe> = Box::new(Fixed(false));
        assert!(!boxed.check());
    }

    #[test]
    fn test_default_describe_uses_type_name() {
        assert!(Fixed(true).describe().ends_with("Fixed"));
        assert_eq!((&Fixed(true)).describe(), Fixed(true).describe());
    }

    #[test]
    fn test_fn_pipe_reads_captured_state_at_check_time() {
        let flag = Arc::new(AtomicBool::new(true));
        let captured = flag.clone();
        let pipe = pipe_fn(move || captured.load(Ordering::SeqCst)).labeled("flag_set");

        assert!(pipe.check());
        flag.store(false, Ordering::SeqCst);
        assert!(!pipe.check());
        assert_eq!(pipe.describe(), "flag_set");
    }

    #[test]
    fn test_fn_pipe_debug() {
        let pipe = pipe_fn(|| true);
        assert_eq!(format!("{:?}", pipe), "FnPipe { label: \"closure\" }");
    }
}
