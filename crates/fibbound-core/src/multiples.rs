//! Closed-form summation of multiples below a bound.
//!
//! Arithmetic-series formula plus inclusion-exclusion; O(1) per query,
//! no iteration. Intermediates are computed in `u128` and must fit back
//! into `u64`.

use std::collections::HashMap;

use tracing::debug;

use crate::analyzer::AnalysisError;

/// Sum of all multiples of `m` strictly below `n`.
///
/// Uses `m·k·(k+1)/2` with `k = (n − 1) div m`.
///
/// # Example
/// ```
/// // 3 + 6 + 9
/// assert_eq!(fibbound_core::multiples::sum_multiples_below(10, 3).unwrap(), 18);
/// ```
pub fn sum_multiples_below(n: u64, m: u64) -> Result<u64, AnalysisError> {
    if m < 1 {
        return Err(AnalysisError::InvalidMultiple(m));
    }
    if n <= m {
        return Ok(0);
    }

    let k = u128::from((n - 1) / m);
    let sum = u128::from(m) * k * (k + 1) / 2;
    u64::try_from(sum).map_err(|_| AnalysisError::Overflow("multiples"))
}

/// Sum of all multiples of 3 or 5 strictly below `n`.
///
/// Inclusion-exclusion: multiples of 15 are counted by both the 3 and 5
/// series and subtracted once.
///
/// # Example
/// ```
/// assert_eq!(fibbound_core::multiples::sum_of_multiples_3_or_5(10).unwrap(), 23);
/// assert_eq!(fibbound_core::multiples::sum_of_multiples_3_or_5(1000).unwrap(), 233_168);
/// ```
pub fn sum_of_multiples_3_or_5(n: u64) -> Result<u64, AnalysisError> {
    let sum_3 = u128::from(sum_multiples_below(n, 3)?);
    let sum_5 = u128::from(sum_multiples_below(n, 5)?);
    let sum_15 = u128::from(sum_multiples_below(n, 15)?);

    let total = sum_3 + sum_5 - sum_15;
    u64::try_from(total).map_err(|_| AnalysisError::Overflow("multiples"))
}

/// Answer a batch of bounds, deduplicating repeated values.
///
/// Each unique bound is computed once; answers come back in input order.
pub fn solve_batch(bounds: &[u64]) -> Result<Vec<u64>, AnalysisError> {
    let mut cache: HashMap<u64, u64> = HashMap::with_capacity(bounds.len());
    for &n in bounds {
        if !cache.contains_key(&n) {
            cache.insert(n, sum_of_multiples_3_or_5(n)?);
        }
    }
    debug!(
        cases = bounds.len(),
        unique = cache.len(),
        "multiples batch solved"
    );
    Ok(bounds.iter().map(|n| cache[n]).collect())
}
