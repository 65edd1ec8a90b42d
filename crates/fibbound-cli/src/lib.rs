//! # fibbound-cli
//!
//! Report formatting, JSON output, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::ReportPresenter;
