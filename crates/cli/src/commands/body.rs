use std::io;

use anyhow::Result;
use lens_core::config::ReportConfig;
use lens_core::report;

use crate::load_universe;

/// Run the body report for an exact raw-name match on defined functions.
pub fn body_command(input: &str, config: &ReportConfig, name: &str) -> Result<()> {
    let universe = load_universe(input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::body_report(&universe, config, name, &mut out)?;
    Ok(())
}
