//! Filter selection for Fibonacci subsequences.

use std::fmt;
use std::str::FromStr;

use num_integer::Integer;
use serde::{Deserialize, Serialize};

use crate::analyzer::AnalysisError;

/// Which parity subclass of Fibonacci terms to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Every term.
    All,
    /// Even-valued terms only.
    Even,
    /// Odd-valued terms only.
    Odd,
}

impl FilterKind {
    /// Whether `term` belongs to this filter's subclass.
    #[must_use]
    pub fn matches(self, term: u64) -> bool {
        match self {
            Self::All => true,
            Self::Even => term.is_even(),
            Self::Odd => term.is_odd(),
        }
    }

    /// Stable lowercase name, used for CLI selection and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }

    /// All filters, in report order.
    #[must_use]
    pub fn variants() -> [Self; 3] {
        [Self::All, Self::Even, Self::Odd]
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "even" => Ok(Self::Even),
            "odd" => Ok(Self::Odd),
            other => Err(AnalysisError::UnknownFilter(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_parity() {
        assert!(FilterKind::All.matches(7));
        assert!(FilterKind::All.matches(8));
        assert!(FilterKind::Even.matches(8));
        assert!(!FilterKind::Even.matches(7));
        assert!(FilterKind::Odd.matches(7));
        assert!(!FilterKind::Odd.matches(8));
    }

    #[test]
    fn parse_known_names() {
        assert_eq!("all".parse::<FilterKind>().unwrap(), FilterKind::All);
        assert_eq!("even".parse::<FilterKind>().unwrap(), FilterKind::Even);
        assert_eq!("ODD".parse::<FilterKind>().unwrap(), FilterKind::Odd);
    }

    #[test]
    fn parse_unknown_name_errors() {
        let err = "fibonacci".parse::<FilterKind>().unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownFilter(_)));
        assert_eq!(err.to_string(), "unknown filter: fibonacci");
    }

    #[test]
    fn display_round_trips() {
        for kind in FilterKind::variants() {
            assert_eq!(kind.to_string().parse::<FilterKind>().unwrap(), kind);
        }
    }
}
