use std::io;

use anyhow::Result;
use lens_core::config::ReportConfig;
use lens_core::report;

use crate::load_universe;

/// Run the single-symbol report for an exact raw-name match.
///
/// A name that matches nothing prints only the query header; that is a
/// successful run, not an error.
pub fn symbol_command(input: &str, config: &ReportConfig, name: &str) -> Result<()> {
    let universe = load_universe(input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::symbol_report(&universe, config, name, &mut out)?;
    Ok(())
}
