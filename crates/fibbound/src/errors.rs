//! Error handling and exit codes.

use fibbound_core::exit_codes;
use fibbound_core::AnalysisError;

/// Map an analysis error to the process exit code.
#[allow(dead_code)]
pub fn handle_error(err: &AnalysisError) -> i32 {
    match err {
        AnalysisError::InvalidBound(_)
        | AnalysisError::InvalidMultiple(_)
        | AnalysisError::UnknownFilter(_) => exit_codes::ERROR_CONFIG,
        AnalysisError::Overflow(_) => exit_codes::ERROR_OVERFLOW,
        AnalysisError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}
