//! Human-readable report presentation.

use console::style;

use fibbound_core::{AnalysisResult, DedekindCut};

use crate::output::{format_number, format_terms};

/// Prints analysis reports to stdout.
pub struct ReportPresenter {
    verbose: bool,
    quiet: bool,
}

impl ReportPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print one filtered analysis.
    ///
    /// Quiet mode prints only the headline sum.
    pub fn present_analysis(&self, result: &AnalysisResult, details: bool) {
        if self.quiet {
            println!("{}", result.sum);
            return;
        }

        println!("Fibonacci analysis ({})", result.filter);
        println!("  Bound: {}", format_number(result.bound));
        println!("  Sum:   {}", format_number(result.sum));
        println!("  Count: {}", result.count);
        println!("  GLB:   {}", format_number(result.glb));
        println!("  LUB:   {}", format_number(result.lub));

        if details {
            println!("  Terms: {}", format_terms(&result.sequence, self.verbose));
        }
    }

    /// Print the three filtered analyses and the partition verdict.
    pub fn present_partition(
        &self,
        all: &AnalysisResult,
        even: &AnalysisResult,
        odd: &AnalysisResult,
        verified: bool,
        details: bool,
    ) {
        if self.quiet {
            println!("{}", even.sum);
            return;
        }

        for result in [all, even, odd] {
            self.present_analysis(result, details);
        }

        let verdict = if verified {
            style("verified").green()
        } else {
            style("MISMATCH").red()
        };
        println!(
            "Partition: {} = {} + {} [{verdict}]",
            format_number(all.sum),
            format_number(even.sum),
            format_number(odd.sum),
        );
    }

    /// Print a Dedekind cut report.
    pub fn present_cut(&self, cut: &DedekindCut) {
        if self.quiet {
            println!("{} {}", cut.glb, cut.lub);
            return;
        }

        println!("Dedekind cut ({}) at {}", cut.filter, format_number(cut.bound));
        println!(
            "  GLB: {} (position {})",
            format_number(cut.glb),
            cut.glb_index
        );
        println!(
            "  LUB: {} (position {})",
            format_number(cut.lub),
            cut.lub_index
        );
        println!(
            "  Lower set: {} elements: {}",
            cut.lower.len(),
            format_terms(&cut.lower, self.verbose)
        );
        println!("  Upper set: {}", format_terms(&cut.upper, self.verbose));
    }

    /// Print a multiples summation answer.
    pub fn present_multiples(&self, n: u64, sum: u64) {
        if self.quiet {
            println!("{sum}");
            return;
        }
        println!(
            "Sum of multiples of 3 or 5 below {}: {}",
            format_number(n),
            format_number(sum)
        );
    }

    /// Print an error to stderr.
    pub fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
