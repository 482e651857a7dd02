//! Reporting configuration.
//!
//! One immutable record describing the recognized reporting options. The
//! driver builds it from user-supplied flags and passes it into every report
//! entry point; nothing in the core reads global state.

use serde::{Deserialize, Serialize};

use crate::ordering::SortOrder;
use crate::render::DumpLevel;

/// Options recognized by the report generators and the ordering engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Display demangled names instead of raw linkage names.
    pub demangle: bool,
    /// Restrict inventories to symbols with a body/initializer.
    pub defined_only: bool,
    /// Append rendered constant values to variable inventory rows.
    pub print_value: bool,
    /// Sort by selected display name, byte-wise ascending.
    pub name_sort: bool,
    /// Sort by size ascending.
    pub size_sort: bool,
    /// Suppress both comparators and keep universe order.
    pub no_sort: bool,
    /// Reverse the final ordered sequence, whatever produced it.
    pub reverse_sort: bool,
    /// Detail level for body dumps.
    pub dump_level: DumpLevel,
}

impl ReportConfig {
    /// Resolve the comparator for this invocation.
    ///
    /// `no_sort` beats both comparators; when `size_sort` and `name_sort`
    /// are both set, size wins. Always deterministic, never an error.
    pub fn sort_order(&self) -> SortOrder {
        if self.no_sort {
            SortOrder::Universe
        } else if self.size_sort {
            SortOrder::Size
        } else if self.name_sort {
            SortOrder::Name
        } else {
            SortOrder::Universe
        }
    }
}
