//! Application entry point and dispatch.

use anyhow::Result;

use fibbound_cli::output::write_report;
use fibbound_cli::presenter::ReportPresenter;
use fibbound_core::{analyze, dedekind_cut, multiples, verify_partition, FilterKind};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibbound_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter = ReportPresenter::new(config.verbose, config.quiet);

    // Handle multiples summation (Project Euler 1)
    if let Some(n) = config.multiples {
        let sum = multiples::sum_of_multiples_3_or_5(n)?;
        presenter.present_multiples(n, sum);
        return Ok(());
    }

    // Handle Dedekind cut report
    if config.cut {
        let filter: FilterKind = config.filter.parse()?;
        let cut = dedekind_cut(config.bound, filter)?;
        presenter.present_cut(&cut);
        return Ok(());
    }

    // Handle the three-way partition report
    if config.all_filters {
        return run_partition(config, &presenter);
    }

    // Single-filter analysis
    let filter: FilterKind = config.filter.parse()?;
    let result = analyze(config.bound, filter)?;
    presenter.present_analysis(&result, config.details);

    if let Some(ref path) = config.output {
        write_report(path, &result)?;
    }

    Ok(())
}

fn run_partition(config: &AppConfig, presenter: &ReportPresenter) -> Result<()> {
    let all = analyze(config.bound, FilterKind::All)?;
    let even = analyze(config.bound, FilterKind::Even)?;
    let odd = analyze(config.bound, FilterKind::Odd)?;

    let verdict = verify_partition(&all, &even, &odd);
    presenter.present_partition(&all, &even, &odd, verdict.is_ok(), config.details);

    if let Some(ref path) = config.output {
        write_report(path, &even)?;
    }

    verdict?;
    Ok(())
}
