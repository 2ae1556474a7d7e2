//! Check command implementation.

use crate::models::config::Config;
use crate::preflight;
use anyhow::Result;
use colored::Colorize;

/// Run the preflight checks and fail if any of them fails.
pub async fn check(config: &Config) -> Result<()> {
    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config).await;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
