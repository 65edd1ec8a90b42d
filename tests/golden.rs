//! Golden file integration tests.
//!
//! Reads tests/testdata/bounds_golden.json and verifies the analyzer
//! against known filtered-analysis records, then cross-checks the
//! filters against each other over a spread of bounds.

use serde::Deserialize;

use fibbound_core::{analyze, verify_partition, FilterKind};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    bound: u64,
    filter: FilterKind,
    sum: u64,
    count: usize,
    glb: u64,
    lub: u64,
    #[serde(default)]
    sequence: Option<Vec<u64>>,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/bounds_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Golden: exact records
// ---------------------------------------------------------------------------

#[test]
fn golden_exact_records() {
    let data = load_golden_data();
    for case in &data.cases {
        let result = analyze(case.bound, case.filter).unwrap();
        assert_eq!(
            result.sum, case.sum,
            "sum mismatch at bound={} filter={}",
            case.bound, case.filter
        );
        assert_eq!(
            result.count, case.count,
            "count mismatch at bound={} filter={}",
            case.bound, case.filter
        );
        assert_eq!(
            result.glb, case.glb,
            "glb mismatch at bound={} filter={}",
            case.bound, case.filter
        );
        assert_eq!(
            result.lub, case.lub,
            "lub mismatch at bound={} filter={}",
            case.bound, case.filter
        );
        if let Some(expected) = &case.sequence {
            assert_eq!(
                &result.sequence, expected,
                "sequence mismatch at bound={} filter={}",
                case.bound, case.filter
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Cross-filter consistency
// ---------------------------------------------------------------------------

#[test]
fn partition_holds_at_golden_bounds() {
    let data = load_golden_data();
    for case in &data.cases {
        let all = analyze(case.bound, FilterKind::All).unwrap();
        let even = analyze(case.bound, FilterKind::Even).unwrap();
        let odd = analyze(case.bound, FilterKind::Odd).unwrap();
        verify_partition(&all, &even, &odd)
            .unwrap_or_else(|e| panic!("partition broken at bound={}: {e}", case.bound));
    }
}

#[test]
fn filters_partition_the_sequence() {
    for bound in [1, 2, 7, 13, 144, 10_000, 832_040, 4_000_000] {
        let all = analyze(bound, FilterKind::All).unwrap();
        let even = analyze(bound, FilterKind::Even).unwrap();
        let odd = analyze(bound, FilterKind::Odd).unwrap();

        // Merging the two filtered sequences must rebuild the full one.
        let mut merged = [even.sequence.as_slice(), odd.sequence.as_slice()].concat();
        merged.sort_unstable();
        assert_eq!(merged, all.sequence, "bound={bound}");
    }
}

#[test]
fn lub_equals_analysis_at_next_term() {
    // Re-analyzing with the bound raised to the lub must absorb exactly
    // that one term into the sequence.
    for filter in FilterKind::variants() {
        let result = analyze(1000, filter).unwrap();
        let extended = analyze(result.lub, filter).unwrap();
        assert_eq!(extended.count, result.count + 1, "{filter}");
        assert_eq!(extended.glb, result.lub, "{filter}");
    }
}
