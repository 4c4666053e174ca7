//! Composition of conditional pipes.
//!
//! The composer reduces an ordered sequence of pipes to a single decision
//! using short-circuit AND. It keeps no state between calls, never mutates a
//! pipe, and does not catch or translate anything a pipe raises.

use std::fmt;

use tracing::{debug, trace};

use crate::traits::ConditionalPipe;

/// Checks whether every pipe in the sequence holds.
///
/// Pipes are evaluated in order and evaluation stops at the first pipe that
/// returns `false`. An empty sequence returns `true`.
///
/// # Examples
///
/// ```
/// use pipe_core::{check, pipe_fn, ConditionalPipe};
///
/// let pipes: Vec<Box<dyn ConditionalPipe>> = vec![
///     Box::new(pipe_fn(|| true)),
///     Box::new(pipe_fn(|| 2 + 2 == 4)),
/// ];
/// assert!(check(&pipes));
///
/// let none: [&dyn ConditionalPipe; 0] = [];
/// assert!(check(none));
/// ```
pub fn check<I>(pipes: I) -> bool
where
    I: IntoIterator,
    I::Item: ConditionalPipe,
{
    let mut evaluated = 0usize;

    for pipe in pipes {
        evaluated += 1;
        let passed = pipe.check();
        trace!(pipe = %pipe.describe(), passed, "Evaluated conditional pipe");

        if !passed {
            debug!(evaluated, "Conditional pipes rejected");
            return false;
        }
    }

    debug!(evaluated, "Conditional pipes passed");
    true
}

/// A pipe that holds when all of its inner pipes hold.
///
/// This lets a composed decision be stored and reused as a single pipe,
/// including inside another composition.
#[derive(Default)]
pub struct AllOf {
    pipes: Vec<Box<dyn ConditionalPipe>>,
}

impl AllOf {
    /// Creates an empty composition, which holds vacuously.
    pub fn new() -> Self {
        Self { pipes: Vec::new() }
    }

    /// Creates a composition from already boxed pipes.
    pub fn from_pipes(pipes: Vec<Box<dyn ConditionalPipe>>) -> Self {
        Self { pipes }
    }

    /// Appends a pipe, builder style.
    pub fn with(mut self, pipe: impl ConditionalPipe + 'static) -> Self {
        self.push(pipe);
        self
    }

    /// Appends a pipe.
    pub fn push(&mut self, pipe: impl ConditionalPipe + 'static) {
        self.pipes.push(Box::new(pipe));
    }

    /// Gets the pipes in evaluation order
    pub fn pipes(&self) -> &[Box<dyn ConditionalPipe>] {
        &self.pipes
    }

    /// Gets the number of pipes
    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    /// Returns true if there are no pipes
    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }
}

impl fmt::Debug for AllOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOf")
            .field(
                "pipes",
                &self.pipes.iter().map(|p| p.describe()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ConditionalPipe for AllOf {
    fn check(&self) -> bool {
        check(&self.pipes)
    }

    fn describe(&self) -> String {
        let names: Vec<String> = self.pipes.iter().map(|p| p.describe()).collect();
        format!("all_of({})", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::pipe_fn;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// A pipe that returns a fixed value and counts how often it was asked.
    struct Counting {
        value: bool,
        calls: Arc<AtomicUsize>,
    }

    impl Counting {
        fn new(value: bool) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    value,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    impl ConditionalPipe for Counting {
        fn check(&self) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.value
        }
    }

    fn fixed(values: &[bool]) -> Vec<Box<dyn ConditionalPipe>> {
        values
            .iter()
            .map(|&v| Box::new(pipe_fn(move || v)) as Box<dyn ConditionalPipe>)
            .collect()
    }

    #[test]
    fn test_empty_sequence_is_true() {
        assert!(check(Vec::<Box<dyn ConditionalPipe>>::new()));
        assert!(AllOf::new().check());
    }

    #[test]
    fn test_all_true() {
        assert!(check(fixed(&[true])));
        assert!(check(fixed(&[true, true, true])));
    }

    #[test]
    fn test_any_false_is_false() {
        assert!(!check(fixed(&[false])));
        assert!(!check(fixed(&[false, true, true])));
        assert!(!check(fixed(&[true, false, true])));
        assert!(!check(fixed(&[true, true, false])));
    }

    #[test]
    fn test_matches_and_of_every_combination() {
        for mask in 0u8..16 {
            let values: Vec<bool> = (0..4).map(|bit| mask & (1 << bit) != 0).collect();
            let expected = values.iter().all(|v| *v);
            assert_eq!(check(fixed(&values)), expected, "values: {:?}", values);

            let mut reversed = values.clone();
            reversed.reverse();
            assert_eq!(check(fixed(&reversed)), expected, "reversed: {:?}", reversed);
        }
    }

    #[test]
    fn test_short_circuits_after_first_false() {
        let (first, first_calls) = Counting::new(true);
        let (second, second_calls) = Counting::new(false);
        let (third, third_calls) = Counting::new(true);

        assert!(!check([&first, &second, &third]));

        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(third_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_repeatable() {
        let pipes = fixed(&[true, false]);
        assert_eq!(check(&pipes), check(&pipes));
        assert!(!check(&pipes));
    }

    #[test]
    fn test_all_of_nests() {
        let inner = AllOf::new()
            .with(pipe_fn(|| true))
            .with(pipe_fn(|| true));
        assert_eq!(inner.len(), 2);
        assert!(inner.check());

        let outer = AllOf::new().with(inner).with(pipe_fn(|| false));
        assert!(!outer.check());
        assert!(!outer.is_empty());
    }

    #[test]
    fn test_all_of_from_pipes() {
        let all = AllOf::from_pipes(fixed(&[true, true, false]));
        assert_eq!(all.len(), 3);
        assert!(!all.check());

        let answers: Vec<bool> = all.pipes().iter().map(|p| p.check()).collect();
        assert_eq!(answers, vec![true, true, false]);

        assert!(AllOf::from_pipes(Vec::new()).check());
    }

    #[test]
    fn test_all_of_describe() {
        let all = AllOf::new()
            .with(pipe_fn(|| true).labeled("a"))
            .with(pipe_fn(|| true).labeled("b"));
        assert_eq!(all.describe(), "all_of(a, b)");
        assert_eq!(format!("{:?}", all), "AllOf { pipes: [\"a\", \"b\"] }");
    }

    /// A list of answers together with a shuffled copy of it.
    fn answers_and_permutation() -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
        prop::collection::vec(any::<bool>(), 0..24)
            .prop_flat_map(|values| (Just(values.clone()), Just(values).prop_shuffle()))
    }

    proptest! {
        #[test]
        fn check_is_and_of_answers((values, shuffled) in answers_and_permutation()) {
            let expected = values.iter().all(|v| *v);
            prop_assert_eq!(check(fixed(&values)), expected);
            prop_assert_eq!(check(fixed(&shuffled)), expected);
            prop_assert_eq!(AllOf::from_pipes(fixed(&shuffled)).check(), expected);
        }

        #[test]
        fn check_stops_at_first_false(values in prop::collection::vec(any::<bool>(), 0..24)) {
            let counters: Vec<(Counting, Arc<AtomicUsize>)> =
                values.iter().map(|&v| Counting::new(v)).collect();
            let pipes: Vec<&Counting> = counters.iter().map(|(pipe, _)| pipe).collect();

            check(pipes);

            let cutoff = values.iter().position(|v| !*v).map_or(values.len(), |i| i + 1);
            for (index, (_, calls)) in counters.iter().enumerate() {
                let expected = if index < cutoff { 1 } else { 0 };
                prop_assert_eq!(calls.load(Ordering::SeqCst), expected);
            }
        }
    }
}
