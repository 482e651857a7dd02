//! The symbol universe: every function and variable of one linked program.
//!
//! The universe is populated once by the ingest layer and is read-only for
//! the reporting session. Iteration order is registration order, which the
//! reports treat as the canonical "universe order" for no-sort output and
//! for tie-breaking.

use crate::model::{FunctionSymbol, SymbolRef, VariableSymbol};

/// Read-only collection of all symbols available to one reporting session.
#[derive(Debug, Default)]
pub struct SymbolUniverse {
    functions: Vec<FunctionSymbol>,
    variables: Vec<VariableSymbol>,
}

impl SymbolUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function. Called by the ingest layer during population;
    /// the reporting layer never adds or removes symbols.
    pub fn register_function(&mut self, function: FunctionSymbol) {
        self.functions.push(function);
    }

    /// Register a variable.
    pub fn register_variable(&mut self, variable: VariableSymbol) {
        self.variables.push(variable);
    }

    /// All functions in registration order. Restartable: each call starts a
    /// fresh traversal.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionSymbol> {
        self.functions.iter()
    }

    /// All variables in registration order.
    pub fn variables(&self) -> impl Iterator<Item = &VariableSymbol> {
        self.variables.iter()
    }

    /// All symbols, kind-tagged: functions first, then variables, each group
    /// in registration order.
    pub fn symbols(&self) -> impl Iterator<Item = SymbolRef<'_>> {
        self.functions
            .iter()
            .map(SymbolRef::Function)
            .chain(self.variables.iter().map(SymbolRef::Variable))
    }

    /// Force body materialization for every defined function.
    ///
    /// Idempotent: bodies already expanded are reused. The statistics report
    /// calls this up front; the inventory materializes per-function while
    /// building rows.
    pub fn materialize_defined(&self) {
        for function in self.functions.iter().filter(|f| f.is_definition()) {
            function.body();
        }
    }

    pub fn len(&self) -> usize {
        self.functions.len() + self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.variables.is_empty()
    }
}
