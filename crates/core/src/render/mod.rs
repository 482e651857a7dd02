//! Rendering collaborator: value pretty-printing and structural dumps.
//!
//! Everything here writes deterministic, human-readable text. The dump
//! routines take the output stream from the caller; nothing prints to
//! stdout directly.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{FunctionBody, Operand, SymbolRef, Value};

/// Detail level for body dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpLevel {
    /// Block labels and statement text.
    #[default]
    None,
    /// Adds successor edges per block.
    Blocks,
    /// Adds statement kinds and operand detail.
    Full,
}

impl DumpLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            DumpLevel::None => "none",
            DumpLevel::Blocks => "blocks",
            DumpLevel::Full => "full",
        }
    }
}

/// Error for unrecognized dump-level spellings.
#[derive(Debug, Error)]
#[error("unknown dump level `{0}`; expected none, blocks, or full")]
pub struct ParseDumpLevelError(String);

impl FromStr for DumpLevel {
    type Err = ParseDumpLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(DumpLevel::None),
            "blocks" => Ok(DumpLevel::Blocks),
            "full" => Ok(DumpLevel::Full),
            other => Err(ParseDumpLevelError(other.to_string())),
        }
    }
}

impl fmt::Display for DumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a constant value on one line.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Int(i) => i.to_string(),
        Value::Float(x) => x.to_string(),
        Value::Str(s) => format!("\"{s}\""),
        Value::Aggregate(values) => {
            let inner: Vec<String> = values.iter().map(render_value).collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

fn render_operand(operand: &Operand) -> String {
    match operand {
        Operand::Temp(s) | Operand::Name(s) => s.clone(),
        Operand::Const(value) => render_value(value),
    }
}

/// Structural dump of one symbol, used by the single-symbol report.
///
/// Shows both name forms, the kind and visibility tags, the definition
/// flag, and the size. Sizing a defined function materializes its body,
/// which is the one side effect this dump is allowed.
pub fn write_symbol_dump<W: Write>(
    out: &mut W,
    symbol: SymbolRef<'_>,
    demangle: bool,
) -> io::Result<()> {
    writeln!(out, "{}: {}", symbol.kind().as_str(), symbol.name(demangle))?;
    writeln!(out, "  raw name:    {}", symbol.raw_name())?;
    let demangled = match symbol {
        SymbolRef::Function(f) => f.symbol_name().demangled(),
        SymbolRef::Variable(v) => v.symbol_name().demangled(),
    };
    writeln!(out, "  demangled:   {}", demangled.unwrap_or("-"))?;
    writeln!(out, "  visibility:  {}", symbol.visibility().as_str())?;
    writeln!(out, "  defined:     {}", if symbol.is_definition() { "yes" } else { "no" })?;
    writeln!(out, "  size:        {}", symbol.size())?;
    if let SymbolRef::Variable(v) = symbol {
        if let Some(value) = v.initializer() {
            writeln!(out, "  value:       {}", render_value(value))?;
        }
    }
    Ok(())
}

/// Dump a materialized function body at the given detail level.
pub fn write_body<W: Write>(out: &mut W, body: &FunctionBody, level: DumpLevel) -> io::Result<()> {
    for block in &body.blocks {
        writeln!(out, "block {}:", block.label)?;
        for stmt in &block.stmts {
            match level {
                DumpLevel::None | DumpLevel::Blocks => writeln!(out, "  {}", stmt.text)?,
                DumpLevel::Full => {
                    writeln!(out, "  [{}] {}", stmt.kind.as_str(), stmt.text)?;
                    for operand in &stmt.operands {
                        writeln!(
                            out,
                            "    operand {}: {}",
                            operand.kind_label(),
                            render_operand(operand)
                        )?;
                    }
                }
            }
        }
        if level != DumpLevel::None && !block.successors.is_empty() {
            let labels: Vec<&str> =
                block.successors.iter().map(|&i| body.blocks[i].label.as_str()).collect();
            writeln!(out, "  succs: {}", labels.join(" "))?;
        }
    }
    Ok(())
}
