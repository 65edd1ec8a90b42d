//! Lazy iterators over the seeded Fibonacci recurrences.
//!
//! Both iterators use checked arithmetic and simply end once the next
//! term would overflow `u64`; callers that need a term past the end
//! treat exhaustion as an overflow condition.

use crate::constants::{EVEN_FIB_SEED, FIB_SEED};

/// Lazy iterator over the full sequence from seed (1, 2).
///
/// # Example
/// ```
/// use fibbound_core::recurrence::FibTerms;
/// let first: Vec<u64> = FibTerms::new().take(6).collect();
/// assert_eq!(first, [1, 2, 3, 5, 8, 13]);
/// ```
pub struct FibTerms {
    current: Option<u64>,
    next: Option<u64>,
}

impl FibTerms {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Some(FIB_SEED.0),
            next: Some(FIB_SEED.1),
        }
    }

    /// Resume the standard recurrence from a consecutive term pair.
    ///
    /// Used to extend a finished scan past its bound, e.g. when deriving
    /// the odd boundary term from the full-sequence boundary pair.
    #[must_use]
    pub fn from_pair(a: u64, b: u64) -> Self {
        Self {
            current: Some(a),
            next: Some(b),
        }
    }
}

impl Default for FibTerms {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibTerms {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.current?;
        let next = self.next;
        self.next = next.and_then(|b| b.checked_add(current));
        self.current = next;
        Some(current)
    }
}

/// Lazy iterator over the even subsequence from seed (2, 8).
///
/// Advances with E(n) = 4·E(n−1) + E(n−2), producing exactly the
/// even-valued terms of the full sequence in one third of the steps.
///
/// # Example
/// ```
/// use fibbound_core::recurrence::EvenFibTerms;
/// let first: Vec<u64> = EvenFibTerms::new().take(5).collect();
/// assert_eq!(first, [2, 8, 34, 144, 610]);
/// ```
pub struct EvenFibTerms {
    current: Option<u64>,
    next: Option<u64>,
}

impl EvenFibTerms {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Some(EVEN_FIB_SEED.0),
            next: Some(EVEN_FIB_SEED.1),
        }
    }
}

impl Default for EvenFibTerms {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for EvenFibTerms {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.current?;
        let next = self.next;
        self.next = next
            .and_then(|b| b.checked_mul(4))
            .and_then(|q| q.checked_add(current));
        self.current = next;
        Some(current)
    }
}
