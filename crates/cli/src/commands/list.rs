use std::io::{self, Write};

use anyhow::{Context, Result};
use lens_core::config::ReportConfig;
use lens_core::report;

use crate::load_universe;

/// Run the inventory report, as text or as JSON row buffers.
pub fn list_command(input: &str, config: &ReportConfig, json: bool) -> Result<()> {
    let universe = load_universe(input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        // Same row buffers as the text report, in the same final order.
        let (functions, variables) = report::inventory_rows(&universe, config);
        let doc = serde_json::json!({ "functions": functions, "variables": variables });
        let serialized = serde_json::to_string_pretty(&doc)
            .context("Failed to serialize inventory rows to JSON")?;
        writeln!(out, "{serialized}")?;
        return Ok(());
    }

    report::inventory_report(&universe, config, &mut out)?;
    Ok(())
}
