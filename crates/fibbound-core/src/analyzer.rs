//! Bound analysis over filtered Fibonacci sequences.
//!
//! [`analyze`] is the public entry point. Each filter runs the cheapest
//! recurrence that is correct for it: the full sequence uses the
//! standard recurrence, the even subsequence its direct recurrence, and
//! the odd subsequence is derived as the set difference of the two.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filter::FilterKind;
use crate::recurrence::{EvenFibTerms, FibTerms};

/// Error type for bound analysis and multiples summation.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The inclusive bound must be at least 1.
    #[error("invalid bound: {0} (must be at least 1)")]
    InvalidBound(u64),

    /// The multiple must be at least 1.
    #[error("invalid multiple: {0} (must be at least 1)")]
    InvalidMultiple(u64),

    /// The filter name was not recognized.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// A term or sum exceeded the `u64` range.
    #[error("u64 overflow while scanning {0} terms")]
    Overflow(&'static str),

    /// Filtered sums did not partition the full sum.
    #[error("filtered sums do not partition the full sum")]
    Mismatch,
}

/// Complete record of one filtered bound analysis.
///
/// `sequence` holds the qualifying terms in ascending order; `glb` is
/// its last element (0 when empty) and `lub` the least qualifying term
/// beyond the bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The filter that was applied.
    pub filter: FilterKind,
    /// The inclusive bound.
    pub bound: u64,
    /// Sum of the qualifying terms.
    pub sum: u64,
    /// The qualifying terms, ascending.
    pub sequence: Vec<u64>,
    /// Number of qualifying terms.
    pub count: usize,
    /// Greatest qualifying term not exceeding the bound (0 if none).
    pub glb: u64,
    /// Least qualifying term exceeding the bound.
    pub lub: u64,
}

/// Analyze the Fibonacci terms selected by `filter` up to `bound` inclusive.
///
/// Deterministic and side-effect free. Fails on `bound < 1`, or when a
/// required term or sum does not fit in `u64`; an empty filtered
/// sequence is a valid, non-error outcome.
pub fn analyze(bound: u64, filter: FilterKind) -> Result<AnalysisResult, AnalysisError> {
    if bound < 1 {
        return Err(AnalysisError::InvalidBound(bound));
    }

    let result = match filter {
        FilterKind::All => analyze_all(bound),
        FilterKind::Even => analyze_even(bound),
        FilterKind::Odd => analyze_odd(bound),
    }?;

    debug!(
        filter = %filter,
        bound,
        sum = result.sum,
        count = result.count,
        glb = result.glb,
        lub = result.lub,
        "analysis complete"
    );
    Ok(result)
}

/// Verify that the even and odd analyses partition the full analysis.
///
/// Checks `sum(All) == sum(Even) + sum(Odd)` and the matching count
/// identity for three results computed at the same bound.
pub fn verify_partition(
    all: &AnalysisResult,
    even: &AnalysisResult,
    odd: &AnalysisResult,
) -> Result<(), AnalysisError> {
    let sums_match = even
        .sum
        .checked_add(odd.sum)
        .is_some_and(|total| total == all.sum);
    let counts_match = even.count + odd.count == all.count;

    if sums_match && counts_match {
        Ok(())
    } else {
        Err(AnalysisError::Mismatch)
    }
}

/// Walk `terms`, collecting and summing those `<= bound`.
///
/// Returns the collected sequence, its sum, and the first term past the
/// bound. The iterator ending before a term exceeds the bound means the
/// boundary term is not representable.
fn scan<I>(terms: I, bound: u64, label: &'static str) -> Result<(Vec<u64>, u64, u64), AnalysisError>
where
    I: Iterator<Item = u64>,
{
    let mut sequence = Vec::new();
    let mut sum: u64 = 0;

    for term in terms {
        if term > bound {
            return Ok((sequence, sum, term));
        }
        sum = sum
            .checked_add(term)
            .ok_or(AnalysisError::Overflow(label))?;
        sequence.push(term);
    }

    Err(AnalysisError::Overflow(label))
}

/// Full sequence via the standard recurrence (a, b) -> (b, a + b).
fn analyze_all(bound: u64) -> Result<AnalysisResult, AnalysisError> {
    let (sequence, sum, lub) = scan(FibTerms::new(), bound, "all")?;
    let glb = sequence.last().copied().unwrap_or(0);
    Ok(AnalysisResult {
        filter: FilterKind::All,
        bound,
        sum,
        count: sequence.len(),
        sequence,
        glb,
        lub,
    })
}

/// Even subsequence via the direct recurrence (a, b) -> (b, 4b + a).
fn analyze_even(bound: u64) -> Result<AnalysisResult, AnalysisError> {
    let (sequence, sum, lub) = scan(EvenFibTerms::new(), bound, "even")?;
    let glb = sequence.last().copied().unwrap_or(0);
    Ok(AnalysisResult {
        filter: FilterKind::Even,
        bound,
        sum,
        count: sequence.len(),
        sequence,
        glb,
        lub,
    })
}

/// Odd subsequence by set difference: run both other analyses, subtract
/// the sums, and drop even elements from the full sequence.
fn analyze_odd(bound: u64) -> Result<AnalysisResult, AnalysisError> {
    let all = analyze_all(bound)?;
    let even = analyze_even(bound)?;

    let sequence: Vec<u64> = all
        .sequence
        .iter()
        .copied()
        .filter(|&term| FilterKind::Odd.matches(term))
        .collect();
    let sum = all.sum - even.sum;
    let glb = sequence.last().copied().unwrap_or(0);
    let lub = odd_boundary_term(&all)?;

    Ok(AnalysisResult {
        filter: FilterKind::Odd,
        bound,
        sum,
        count: sequence.len(),
        sequence,
        glb,
        lub,
    })
}

/// First odd term past the bound, resuming the standard recurrence from
/// the full-sequence boundary pair (glb, lub) and advancing until an odd
/// term appears.
fn odd_boundary_term(all: &AnalysisResult) -> Result<u64, AnalysisError> {
    if FilterKind::Odd.matches(all.lub) {
        return Ok(all.lub);
    }
    let successor = all
        .lub
        .checked_add(all.glb)
        .ok_or(AnalysisError::Overflow("odd"))?;
    FibTerms::from_pair(all.lub, successor)
        .find(|&term| FilterKind::Odd.matches(term))
        .ok_or(AnalysisError::Overflow("odd"))
}
