//! Loading merged symbol-table documents into a universe.
//!
//! This is the boundary to the upstream streaming subsystem: a document
//! (JSON or YAML, chosen by file extension) describes every function and
//! variable of the linked program. Documents are validated here — duplicate
//! block labels and dangling successor references are rejected — so body
//! materialization never fails later. A load either produces a complete
//! universe or an error; there is no partial population.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    BlockSpec, BodyBlueprint, FunctionSymbol, SymbolName, Value, VariableSymbol, Visibility,
};
use crate::universe::SymbolUniverse;

/// Error type for symbol-table ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported symbol table format `{0}`; expected .json, .yaml, or .yml")]
    UnsupportedFormat(String),

    #[error("failed to parse JSON symbol table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML symbol table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("function `{function}` has duplicate block label `{label}`")]
    DuplicateLabel { function: String, label: String },

    #[error("function `{function}` block `{block}` references unknown successor `{target}`")]
    UnknownSuccessor { function: String, block: String, target: String },
}

/// Convenience result type for ingest operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// On-disk document describing one merged symbol table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolTableDoc {
    pub functions: Vec<FunctionDoc>,
    pub variables: Vec<VariableDoc>,
}

/// Document entry for one function symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDoc {
    /// Raw linkage name.
    pub name: String,
    /// Demangled form; filled in via `rustc-demangle` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demangled: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    /// Stored body blocks. Present exactly for definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<BlockSpec>>,
}

/// Document entry for one variable symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDoc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demangled: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub defined: bool,
    /// Declared storage size in bytes; 0 when not statically known.
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

fn symbol_name(raw: String, demangled: Option<String>) -> SymbolName {
    let demangled = demangled.or_else(|| {
        let guess = rustc_demangle::demangle(&raw).to_string();
        (guess != raw).then_some(guess)
    });
    SymbolName::new(raw, demangled)
}

fn validate_blocks(function: &str, blocks: &[BlockSpec]) -> IngestResult<()> {
    let mut labels = HashSet::new();
    for block in blocks {
        if !labels.insert(block.label.as_str()) {
            return Err(IngestError::DuplicateLabel {
                function: function.to_string(),
                label: block.label.clone(),
            });
        }
    }
    for block in blocks {
        for target in &block.succs {
            if !labels.contains(target.as_str()) {
                return Err(IngestError::UnknownSuccessor {
                    function: function.to_string(),
                    block: block.label.clone(),
                    target: target.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Build a universe from a parsed document, preserving document order as
/// the universe's registration order.
pub fn universe_from_doc(doc: SymbolTableDoc) -> IngestResult<SymbolUniverse> {
    let mut universe = SymbolUniverse::new();
    for function in doc.functions {
        let blueprint = match function.blocks {
            Some(blocks) => {
                validate_blocks(&function.name, &blocks)?;
                Some(BodyBlueprint { blocks })
            }
            None => None,
        };
        universe.register_function(FunctionSymbol::new(
            symbol_name(function.name, function.demangled),
            function.visibility,
            blueprint,
        ));
    }
    for variable in doc.variables {
        universe.register_variable(VariableSymbol::new(
            symbol_name(variable.name, variable.demangled),
            variable.visibility,
            variable.defined,
            variable.size,
            variable.value,
        ));
    }
    Ok(universe)
}

/// Parse document text in the given format ("json", "yaml", or "yml").
pub fn parse_doc(text: &str, format: &str) -> IngestResult<SymbolTableDoc> {
    match format {
        "json" => Ok(serde_json::from_str(text)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(text)?),
        other => Err(IngestError::UnsupportedFormat(other.to_string())),
    }
}

/// Load a symbol-table document from disk and build the universe.
///
/// The format is chosen by file extension. Any failure is propagated before
/// report work starts; no partial universe is ever returned.
pub fn load_path(path: &Path) -> anyhow::Result<SymbolUniverse> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read symbol table {}", path.display()))?;
    let format = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let doc = parse_doc(&text, format)
        .with_context(|| format!("Failed to parse symbol table {}", path.display()))?;
    let universe = universe_from_doc(doc)
        .with_context(|| format!("Invalid symbol table {}", path.display()))?;
    Ok(universe)
}
