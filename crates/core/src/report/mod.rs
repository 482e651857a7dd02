//! Report generators: inventory, single-symbol, body, and statistics.
//!
//! Each entry point takes the populated universe, the reporting
//! configuration, and an output stream, and returns instead of exiting; the
//! driver decides what a failure means for the process. The only mutation
//! any generator performs is idempotent body materialization.

use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use crate::config::ReportConfig;
use crate::model::{FunctionSymbol, StatementKind, VariableSymbol};
use crate::ordering::{self, SortEntry};
use crate::render;
use crate::universe::SymbolUniverse;

/// Error type for report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output stream rejected a write.
    #[error("failed to write report output")]
    Io(#[from] io::Error),
}

/// Convenience result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

const NAME_WIDTH: usize = 24;
const FIELD_WIDTH: usize = 10;

/// One row of the inventory listing, already resolved against the
/// configuration (name form selected, size computed, value rendered).
#[derive(Debug, Clone, Serialize)]
pub struct InventoryRow {
    pub name: String,
    pub kind: &'static str,
    pub visibility: &'static str,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SortEntry for InventoryRow {
    fn sort_size(&self) -> u64 {
        self.size
    }

    fn sort_name(&self) -> &str {
        &self.name
    }
}

fn function_row(function: &FunctionSymbol, config: &ReportConfig) -> InventoryRow {
    InventoryRow {
        name: function.name(config.demangle).to_string(),
        kind: "function",
        visibility: function.visibility().as_str(),
        size: function.size(),
        value: None,
    }
}

fn variable_row(variable: &VariableSymbol, config: &ReportConfig) -> InventoryRow {
    let value = if config.print_value {
        variable.initializer().map(render::render_value)
    } else {
        None
    };
    InventoryRow {
        name: variable.name(config.demangle).to_string(),
        kind: "variable",
        visibility: variable.visibility().as_str(),
        size: variable.size(),
        value,
    }
}

/// Build the two ordered row buffers of the inventory: functions first,
/// variables second, each filtered, sorted, and reversed independently.
///
/// Shared by the text report and by frontends that serialize rows directly.
pub fn inventory_rows(
    universe: &SymbolUniverse,
    config: &ReportConfig,
) -> (Vec<InventoryRow>, Vec<InventoryRow>) {
    let mut functions = Vec::new();
    for function in universe.functions() {
        // Size computation needs the body; materialize before sorting.
        if function.is_definition() {
            function.body();
        }
        if config.defined_only && !function.is_definition() {
            continue;
        }
        functions.push(function_row(function, config));
    }
    ordering::apply(&mut functions, config.sort_order(), config.reverse_sort);

    let mut variables = Vec::new();
    for variable in universe.variables() {
        if config.defined_only && !variable.is_definition() {
            continue;
        }
        variables.push(variable_row(variable, config));
    }
    ordering::apply(&mut variables, config.sort_order(), config.reverse_sort);

    (functions, variables)
}

fn write_section<W: Write>(
    out: &mut W,
    rows: &[InventoryRow],
    print_value: bool,
) -> io::Result<()> {
    writeln!(out)?;
    write!(
        out,
        "{:>NAME_WIDTH$} {:>FIELD_WIDTH$} {:>FIELD_WIDTH$} {:>FIELD_WIDTH$}",
        "Name", "Type", "Visibility", "Size"
    )?;
    if print_value {
        write!(out, " {:>FIELD_WIDTH$}", "Value")?;
    }
    writeln!(out)?;
    writeln!(out)?;

    for row in rows {
        write!(
            out,
            "{:>NAME_WIDTH$} {:>FIELD_WIDTH$} {:>FIELD_WIDTH$} {:>FIELD_WIDTH$}",
            row.name, row.kind, row.visibility, row.size
        )?;
        if let Some(value) = &row.value {
            write!(out, " {value:>FIELD_WIDTH$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Inventory report: every function, then every variable, one row each.
///
/// Each kind-group gets its own header and is ordered independently; the
/// two groups are never interleaved in one sort pass.
pub fn inventory_report<W: Write>(
    universe: &SymbolUniverse,
    config: &ReportConfig,
    out: &mut W,
) -> ReportResult<()> {
    let (functions, variables) = inventory_rows(universe, config);
    write_section(out, &functions, config.print_value)?;
    write_section(out, &variables, config.print_value)?;
    Ok(())
}

/// Single-symbol report: a structural dump of every symbol whose raw name
/// matches `name` exactly, in universe order.
///
/// Zero matches print only the query header; that is not an error.
pub fn symbol_report<W: Write>(
    universe: &SymbolUniverse,
    config: &ReportConfig,
    name: &str,
    out: &mut W,
) -> ReportResult<()> {
    writeln!(out, "Symbol: {name}")?;
    for symbol in universe.symbols() {
        if symbol.raw_name() == name {
            render::write_symbol_dump(out, symbol, config.demangle)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Body report: dump the materialized body of every *defined* function
/// whose raw name matches `name` exactly, at the configured dump level.
pub fn body_report<W: Write>(
    universe: &SymbolUniverse,
    config: &ReportConfig,
    name: &str,
    out: &mut W,
) -> ReportResult<()> {
    writeln!(out, "Body of function: {name}")?;
    for function in universe.functions() {
        if function.raw_name() != name {
            continue;
        }
        if let Some(body) = function.body() {
            writeln!(out)?;
            render::write_body(out, body, config.dump_level)?;
        }
    }
    Ok(())
}

/// Statistics report: statement-kind counts and operand node-kind
/// counts/sizes across every defined function's materialized body.
pub fn statistics_report<W: Write>(
    universe: &SymbolUniverse,
    _config: &ReportConfig,
    out: &mut W,
) -> ReportResult<()> {
    universe.materialize_defined();

    let mut stmt_counts = [0u64; StatementKind::ALL.len()];
    let mut operand_counts = [0u64; 3];
    let mut operand_sizes = [0u64; 3];
    for function in universe.functions() {
        let Some(body) = function.body() else { continue };
        for stmt in body.statements() {
            stmt_counts[stmt.kind as usize] += 1;
            for operand in &stmt.operands {
                operand_counts[operand.kind_index()] += 1;
                operand_sizes[operand.kind_index()] += operand.size_bytes() as u64;
            }
        }
    }

    writeln!(out, "Statement statistics:")?;
    writeln!(out)?;
    writeln!(out, "{:>FIELD_WIDTH$} {:>FIELD_WIDTH$}", "Kind", "Count")?;
    for kind in StatementKind::ALL {
        writeln!(
            out,
            "{:>FIELD_WIDTH$} {:>FIELD_WIDTH$}",
            kind.as_str(),
            stmt_counts[kind as usize]
        )?;
    }
    writeln!(out, "{:>FIELD_WIDTH$} {:>FIELD_WIDTH$}", "Total", stmt_counts.iter().sum::<u64>())?;

    writeln!(out)?;
    writeln!(out, "Operand statistics:")?;
    writeln!(out)?;
    writeln!(
        out,
        "{:>FIELD_WIDTH$} {:>FIELD_WIDTH$} {:>FIELD_WIDTH$}",
        "Kind", "Count", "Size"
    )?;
    for (index, label) in ["temp", "name", "const"].into_iter().enumerate() {
        writeln!(
            out,
            "{:>FIELD_WIDTH$} {:>FIELD_WIDTH$} {:>FIELD_WIDTH$}",
            label, operand_counts[index], operand_sizes[index]
        )?;
    }
    Ok(())
}
