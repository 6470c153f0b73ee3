//! Fibonacci membership.

/// Returns `true` when `n` appears in the sequence 0, 1, 1, 2, 3, 5, 8, ...
///
/// Walks the sequence until it reaches or passes `n`, so the cost is
/// logarithmic in `n`. The walk stops at the last term that fits in a `u64`;
/// anything above that term is not a Fibonacci number.
///
/// ```
/// use fizzfib_classifier::is_fibonacci;
///
/// assert!(is_fibonacci(0));
/// assert!(is_fibonacci(13));
/// assert!(!is_fibonacci(4));
/// ```
pub fn is_fibonacci(n: u64) -> bool {
    let mut previous: u64 = 0;
    let mut current: u64 = 1;
    while current < n {
        let Some(next) = previous.checked_add(current) else {
            return false;
        };
        previous = current;
        current = next;
    }
    // The walk starts at 1, so 0 is checked separately.
    n == 0 || current == n
}
