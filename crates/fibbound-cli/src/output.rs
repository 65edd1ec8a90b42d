//! Report output formatting.

use std::io::{self, Write};

use tracing::debug;

use fibbound_core::AnalysisResult;

/// How many leading terms a truncated sequence listing shows.
const HEAD_TERMS: usize = 10;
/// How many trailing terms a truncated sequence listing shows.
const TAIL_TERMS: usize = 5;

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a term sequence for display.
///
/// Short sequences (and verbose mode) are printed whole; long ones show
/// the first 10 and last 5 terms.
#[must_use]
pub fn format_terms(terms: &[u64], verbose: bool) -> String {
    if verbose || terms.len() <= HEAD_TERMS + TAIL_TERMS {
        return join_terms(terms);
    }
    format!(
        "{} ... {} ({} terms)",
        join_terms(&terms[..HEAD_TERMS]),
        join_terms(&terms[terms.len() - TAIL_TERMS..]),
        terms.len()
    )
}

fn join_terms(terms: &[u64]) -> String {
    terms
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write an analysis record to a file as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: &str, result: &AnalysisResult) -> io::Result<()> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{json}")?;
    debug!(path, filter = %result.filter, "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibbound_core::{analyze, FilterKind};

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(4_613_732), "4,613,732");
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn format_terms_short() {
        assert_eq!(format_terms(&[2, 8, 34], false), "2, 8, 34");
    }

    #[test]
    fn format_terms_empty() {
        assert_eq!(format_terms(&[], false), "");
    }

    #[test]
    fn format_terms_truncates_long_sequences() {
        let terms: Vec<u64> = (1..=20).collect();
        let s = format_terms(&terms, false);
        assert!(s.starts_with("1, 2, 3"));
        assert!(s.contains("..."));
        assert!(s.ends_with("(20 terms)"));
    }

    #[test]
    fn format_terms_verbose_prints_all() {
        let terms: Vec<u64> = (1..=20).collect();
        let s = format_terms(&terms, true);
        assert!(!s.contains("..."));
        assert!(s.contains("20"));
    }

    #[test]
    fn write_report_round_trips() {
        let dir = std::env::temp_dir().join("fibbound-output-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.json");

        let result = analyze(100, FilterKind::Even).unwrap();
        write_report(path.to_str().unwrap(), &result).unwrap();

        let data = std::fs::read_to_string(&path).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&data).unwrap();
        assert_eq!(parsed, result);
    }
}
