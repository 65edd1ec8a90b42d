//! # fibbound-core
//!
//! Core library for fibbound: bounded analysis of the Fibonacci sequence
//! and its even/odd subsequences, Dedekind cut bookkeeping at the bound,
//! and closed-form multiples summation.

pub mod analyzer;
pub mod constants;
pub mod cut;
pub mod filter;
pub mod multiples;
pub mod recurrence;

// Re-exports
pub use analyzer::{analyze, verify_partition, AnalysisError, AnalysisResult};
pub use constants::{exit_codes, DEFAULT_BOUND, EVEN_FIB_SEED, FIB_SEED};
pub use cut::{dedekind_cut, DedekindCut};
pub use filter::FilterKind;
pub use recurrence::{EvenFibTerms, FibTerms};

/// Sum of the even-valued Fibonacci terms not exceeding `bound`.
///
/// This is a convenience function for the most common query. For the
/// full record (sequence, count, boundary terms), use [`analyze`].
///
/// # Example
/// ```
/// assert_eq!(fibbound_core::even_fibonacci_sum(100).unwrap(), 44);
/// assert_eq!(fibbound_core::even_fibonacci_sum(4_000_000).unwrap(), 4_613_732);
/// ```
pub fn even_fibonacci_sum(bound: u64) -> Result<u64, AnalysisError> {
    analyze(bound, FilterKind::Even).map(|result| result.sum)
}
