use std::path::Path;

use anyhow::Result;
use lens_core::universe::SymbolUniverse;

pub mod commands;

/// Load a symbol-table document into a universe.
///
/// Any ingest failure is propagated before report work starts, so commands
/// never produce partial output for a broken input.
pub fn load_universe(input: &str) -> Result<SymbolUniverse> {
    lens_core::ingest::load_path(Path::new(input))
}
