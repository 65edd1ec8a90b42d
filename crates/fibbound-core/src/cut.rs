//! Dedekind cut bookkeeping at the bound.
//!
//! A bound splits a filtered sequence into a lower set (terms ≤ bound)
//! and an upper set (terms > bound). The cut records both sides, the
//! boundary terms, and their 1-based positions in the filtered sequence.

use serde::{Deserialize, Serialize};

use crate::analyzer::{analyze, AnalysisError};
use crate::constants::UPPER_WINDOW;
use crate::filter::FilterKind;
use crate::recurrence::{EvenFibTerms, FibTerms};

/// A Dedekind cut of a filtered Fibonacci sequence at a bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedekindCut {
    /// The boundary value.
    pub bound: u64,
    /// The filter that was applied.
    pub filter: FilterKind,
    /// All qualifying terms ≤ bound.
    pub lower: Vec<u64>,
    /// The first [`UPPER_WINDOW`] qualifying terms > bound.
    pub upper: Vec<u64>,
    /// Greatest lower bound (0 if the lower set is empty).
    pub glb: u64,
    /// Least upper bound; equals `upper[0]`.
    pub lub: u64,
    /// 1-based position of the glb in the filtered sequence.
    pub glb_index: usize,
    /// 1-based position of the lub in the filtered sequence.
    pub lub_index: usize,
}

/// Compute the Dedekind cut of the filtered sequence at `bound`.
///
/// Fails like [`analyze`] does, and additionally when the upper window
/// cannot be produced within the `u64` range.
pub fn dedekind_cut(bound: u64, filter: FilterKind) -> Result<DedekindCut, AnalysisError> {
    let result = analyze(bound, filter)?;
    let upper = upper_window(bound, filter)?;

    debug_assert_eq!(upper.first().copied(), Some(result.lub));

    Ok(DedekindCut {
        bound,
        filter,
        glb: result.glb,
        lub: result.lub,
        glb_index: result.count,
        lub_index: result.count + 1,
        lower: result.sequence,
        upper,
    })
}

/// First [`UPPER_WINDOW`] qualifying terms past the bound.
fn upper_window(bound: u64, filter: FilterKind) -> Result<Vec<u64>, AnalysisError> {
    let upper: Vec<u64> = match filter {
        FilterKind::All => FibTerms::new()
            .skip_while(|&term| term <= bound)
            .take(UPPER_WINDOW)
            .collect(),
        FilterKind::Even => EvenFibTerms::new()
            .skip_while(|&term| term <= bound)
            .take(UPPER_WINDOW)
            .collect(),
        FilterKind::Odd => FibTerms::new()
            .filter(|&term| FilterKind::Odd.matches(term))
            .skip_while(|&term| term <= bound)
            .take(UPPER_WINDOW)
            .collect(),
    };

    if upper.len() < UPPER_WINDOW {
        return Err(AnalysisError::Overflow(filter.name()));
    }
    Ok(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_all_at_100() {
        let cut = dedekind_cut(100, FilterKind::All).unwrap();
        assert_eq!(cut.lower.last().copied(), Some(89));
        assert_eq!(cut.upper, [144, 233, 377]);
        assert_eq!(cut.glb, 89);
        assert_eq!(cut.lub, 144);
        assert_eq!(cut.glb_index, 10);
        assert_eq!(cut.lub_index, 11);
    }

    #[test]
    fn cut_even_at_100() {
        let cut = dedekind_cut(100, FilterKind::Even).unwrap();
        assert_eq!(cut.lower, [2, 8, 34]);
        assert_eq!(cut.upper, [144, 610, 2584]);
    }

    #[test]
    fn cut_odd_at_100() {
        let cut = dedekind_cut(100, FilterKind::Odd).unwrap();
        assert_eq!(cut.lower, [1, 3, 5, 13, 21, 55, 89]);
        assert_eq!(cut.upper, [233, 377, 987]);
        assert_eq!(cut.lub, 233);
    }

    #[test]
    fn cut_separates_the_sets() {
        for filter in FilterKind::variants() {
            let cut = dedekind_cut(5000, filter).unwrap();
            assert!(cut.lower.iter().all(|&t| t <= 5000), "{filter}");
            assert!(cut.upper.iter().all(|&t| t > 5000), "{filter}");
        }
    }

    #[test]
    fn cut_with_empty_lower_set() {
        let cut = dedekind_cut(1, FilterKind::Even).unwrap();
        assert!(cut.lower.is_empty());
        assert_eq!(cut.glb, 0);
        assert_eq!(cut.glb_index, 0);
        assert_eq!(cut.upper, [2, 8, 34]);
    }

    #[test]
    fn cut_invalid_bound() {
        assert!(matches!(
            dedekind_cut(0, FilterKind::All),
            Err(AnalysisError::InvalidBound(0))
        ));
    }
}
