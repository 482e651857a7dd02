use std::io;

use anyhow::Result;
use lens_core::config::ReportConfig;
use lens_core::report;

use crate::load_universe;

/// Run the statistics report across every defined function's body.
pub fn stats_command(input: &str, config: &ReportConfig) -> Result<()> {
    let universe = load_universe(input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::statistics_report(&universe, config, &mut out)?;
    Ok(())
}
