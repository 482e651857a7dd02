//! Core data model for reportable symbols.
//!
//! A symbol is either a function or a global variable from the merged
//! whole-program symbol table. Functions carry an optional stored body form
//! (a [`BodyBlueprint`]) that is expanded into a control-flow graph on first
//! use; variables carry a declared storage size and an optional constant
//! initializer.

use std::mem;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Linkage/export classification of a symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Default,
    Protected,
    Hidden,
    Internal,
}

impl Visibility {
    /// Label used in inventory rows and symbol dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Default => "default",
            Visibility::Protected => "protected",
            Visibility::Hidden => "hidden",
            Visibility::Internal => "internal",
        }
    }
}

/// Kind tag distinguishing the two symbol variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Variable,
}

impl SymbolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Variable => "variable",
        }
    }
}

/// A symbol's display name in both of its forms.
///
/// The raw linkage name always exists; the demangled human-readable form is
/// optional and falls back to the raw name when selected but absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolName {
    raw: String,
    demangled: Option<String>,
}

impl SymbolName {
    pub fn new(raw: impl Into<String>, demangled: Option<String>) -> Self {
        Self { raw: raw.into(), demangled }
    }

    /// Raw (mangled) name as it appears in the merged symbol table.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Demangled human-friendly name if one is known.
    pub fn demangled(&self) -> Option<&str> {
        self.demangled.as_deref()
    }

    /// Select the display form for one report invocation.
    pub fn select(&self, demangle: bool) -> &str {
        if demangle {
            self.demangled.as_deref().unwrap_or(&self.raw)
        } else {
            &self.raw
        }
    }
}

/// Constant initializer value of a variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Aggregate(Vec<Value>),
}

impl Value {
    /// Approximate in-memory footprint, counted by the operand statistics.
    pub fn size_bytes(&self) -> usize {
        let heap = match self {
            Value::Str(s) => s.len(),
            Value::Aggregate(values) => values.iter().map(Value::size_bytes).sum(),
            Value::Int(_) | Value::Float(_) => 0,
        };
        mem::size_of::<Value>() + heap
    }
}

/// Kind of an IR statement inside a function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    Assign,
    Call,
    Cond,
    Switch,
    Return,
    Label,
    Asm,
    Nop,
}

impl StatementKind {
    /// Every kind, in declaration order; the statistics report tallies over
    /// this list so zero-count kinds still show up.
    pub const ALL: [StatementKind; 8] = [
        StatementKind::Assign,
        StatementKind::Call,
        StatementKind::Cond,
        StatementKind::Switch,
        StatementKind::Return,
        StatementKind::Label,
        StatementKind::Asm,
        StatementKind::Nop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Assign => "assign",
            StatementKind::Call => "call",
            StatementKind::Cond => "cond",
            StatementKind::Switch => "switch",
            StatementKind::Return => "return",
            StatementKind::Label => "label",
            StatementKind::Asm => "asm",
            StatementKind::Nop => "nop",
        }
    }
}

/// Operand of an IR statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// Compiler-generated temporary.
    Temp(String),
    /// Reference to a named symbol.
    Name(String),
    /// Embedded constant.
    Const(Value),
}

impl Operand {
    pub fn kind_label(&self) -> &'static str {
        match self {
            Operand::Temp(_) => "temp",
            Operand::Name(_) => "name",
            Operand::Const(_) => "const",
        }
    }

    /// Index into the operand statistics tallies.
    pub fn kind_index(&self) -> usize {
        match self {
            Operand::Temp(_) => 0,
            Operand::Name(_) => 1,
            Operand::Const(_) => 2,
        }
    }

    /// Approximate in-memory footprint, counted by the operand statistics.
    pub fn size_bytes(&self) -> usize {
        let heap = match self {
            Operand::Temp(s) | Operand::Name(s) => s.len(),
            Operand::Const(value) => value.size_bytes(),
        };
        mem::size_of::<Operand>() + heap
    }
}

/// One IR statement: its kind, a rendered text form, and its operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operands: Vec<Operand>,
}

/// Stored form of one basic block: successor edges are label references
/// that get resolved to block indices during materialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stmts: Vec<Statement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub succs: Vec<String>,
}

/// Stored (streamed-in) form of a function body.
///
/// Blueprints are validated at ingest time (unique labels, resolvable
/// successors), so [`BodyBlueprint::expand`] is infallible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyBlueprint {
    pub blocks: Vec<BlockSpec>,
}

impl BodyBlueprint {
    /// Expand the stored form into a materialized control-flow graph.
    pub fn expand(&self) -> FunctionBody {
        let index_of = |label: &str| self.blocks.iter().position(|b| b.label == label);
        let blocks = self
            .blocks
            .iter()
            .map(|spec| BasicBlock {
                label: spec.label.clone(),
                stmts: spec.stmts.clone(),
                successors: spec.succs.iter().filter_map(|s| index_of(s)).collect(),
            })
            .collect();
        FunctionBody { blocks }
    }
}

/// A materialized basic block with successor edges resolved to indices.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicBlock {
    pub label: String,
    pub stmts: Vec<Statement>,
    pub successors: Vec<usize>,
}

/// Materialized control-flow graph of a defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionBody {
    pub blocks: Vec<BasicBlock>,
}

impl FunctionBody {
    /// Number of basic blocks; this is the size metric for functions.
    pub fn block_count(&self) -> u64 {
        self.blocks.len() as u64
    }

    /// Iterate every statement across all blocks.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.blocks.iter().flat_map(|b| b.stmts.iter())
    }
}

/// A function symbol from the merged symbol table.
///
/// The body is expanded from the blueprint at most once per session; repeat
/// calls to [`FunctionSymbol::body`] or [`FunctionSymbol::size`] reuse the
/// cached graph.
#[derive(Debug)]
pub struct FunctionSymbol {
    name: SymbolName,
    visibility: Visibility,
    blueprint: Option<BodyBlueprint>,
    body: OnceCell<FunctionBody>,
}

impl FunctionSymbol {
    /// A function is a definition exactly when it carries a stored body.
    pub fn new(name: SymbolName, visibility: Visibility, blueprint: Option<BodyBlueprint>) -> Self {
        Self { name, visibility, blueprint, body: OnceCell::new() }
    }

    pub fn name(&self, demangle: bool) -> &str {
        self.name.select(demangle)
    }

    pub fn raw_name(&self) -> &str {
        self.name.raw()
    }

    pub fn symbol_name(&self) -> &SymbolName {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_definition(&self) -> bool {
        self.blueprint.is_some()
    }

    /// Materialize and return the body. Idempotent: the first call expands
    /// the blueprint, later calls return the cached graph. `None` for mere
    /// declarations.
    pub fn body(&self) -> Option<&FunctionBody> {
        self.blueprint.as_ref().map(|bp| self.body.get_or_init(|| bp.expand()))
    }

    /// Whether the body has already been materialized this session.
    pub fn is_materialized(&self) -> bool {
        self.body.get().is_some()
    }

    /// Number of basic blocks for definitions, 0 for declarations.
    ///
    /// May materialize the body on first use; the cache keeps the result
    /// stable across report passes.
    pub fn size(&self) -> u64 {
        self.body().map_or(0, FunctionBody::block_count)
    }
}

/// A global-variable symbol from the merged symbol table.
#[derive(Debug, Clone)]
pub struct VariableSymbol {
    name: SymbolName,
    visibility: Visibility,
    defined: bool,
    size_bytes: u64,
    initializer: Option<Value>,
}

impl VariableSymbol {
    pub fn new(
        name: SymbolName,
        visibility: Visibility,
        defined: bool,
        size_bytes: u64,
        initializer: Option<Value>,
    ) -> Self {
        Self { name, visibility, defined, size_bytes, initializer }
    }

    pub fn name(&self, demangle: bool) -> &str {
        self.name.select(demangle)
    }

    pub fn raw_name(&self) -> &str {
        self.name.raw()
    }

    pub fn symbol_name(&self) -> &SymbolName {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_definition(&self) -> bool {
        self.defined
    }

    /// Declared storage size in bytes; 0 when not statically known.
    pub fn size(&self) -> u64 {
        self.size_bytes
    }

    /// Constant initializer, when one exists. Absence is not an error.
    pub fn initializer(&self) -> Option<&Value> {
        self.initializer.as_ref()
    }
}

/// Kind-tagged reference to either symbol variant, exposing the uniform
/// reporting contract.
#[derive(Debug, Clone, Copy)]
pub enum SymbolRef<'a> {
    Function(&'a FunctionSymbol),
    Variable(&'a VariableSymbol),
}

impl<'a> SymbolRef<'a> {
    pub fn kind(self) -> SymbolKind {
        match self {
            SymbolRef::Function(_) => SymbolKind::Function,
            SymbolRef::Variable(_) => SymbolKind::Variable,
        }
    }

    pub fn name(self, demangle: bool) -> &'a str {
        match self {
            SymbolRef::Function(f) => f.name(demangle),
            SymbolRef::Variable(v) => v.name(demangle),
        }
    }

    pub fn raw_name(self) -> &'a str {
        match self {
            SymbolRef::Function(f) => f.raw_name(),
            SymbolRef::Variable(v) => v.raw_name(),
        }
    }

    pub fn visibility(self) -> Visibility {
        match self {
            SymbolRef::Function(f) => f.visibility(),
            SymbolRef::Variable(v) => v.visibility(),
        }
    }

    pub fn is_definition(self) -> bool {
        match self {
            SymbolRef::Function(f) => f.is_definition(),
            SymbolRef::Variable(v) => v.is_definition(),
        }
    }

    pub fn size(self) -> u64 {
        match self {
            SymbolRef::Function(f) => f.size(),
            SymbolRef::Variable(v) => v.size(),
        }
    }
}
