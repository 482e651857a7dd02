use anyhow::Result;
use clap::{Parser, Subcommand};
use lens_core::config::ReportConfig;
use lens_core::render::DumpLevel;
use symtab_lens::commands;

/// Symbol inventory and reporting CLI.
///
/// This CLI is a thin wrapper around `lens-core` (exposed in code as
/// `lens_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "symtab-lens",
    version,
    about = "Symbol inventory and reporting for merged whole-program symbol tables",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every function and variable with name, type, visibility, and size.
    ///
    /// Functions are listed before variables and each group is ordered
    /// independently. Passing both --size-sort and --name-sort is allowed;
    /// size order wins.
    List {
        /// Path to the symbol-table document (.json, .yaml, or .yml).
        #[arg(long)]
        input: String,

        /// Display demangled names instead of raw linkage names.
        #[arg(long)]
        demangle: bool,

        /// List only symbols with a body/initializer.
        #[arg(long)]
        defined_only: bool,

        /// Append constant values to variable rows that have one.
        #[arg(long)]
        print_value: bool,

        /// Sort each group by name, byte-wise ascending.
        #[arg(long)]
        name_sort: bool,

        /// Sort each group by size ascending.
        #[arg(long)]
        size_sort: bool,

        /// Keep the symbol table's own order.
        #[arg(long)]
        no_sort: bool,

        /// Reverse the final order of each group.
        #[arg(long)]
        reverse_sort: bool,

        /// Emit JSON row buffers instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Dump the details of one symbol, matched exactly by raw name.
    Symbol {
        /// Path to the symbol-table document (.json, .yaml, or .yml).
        #[arg(long)]
        input: String,

        /// Raw linkage name to match.
        #[arg(long)]
        name: String,

        /// Display demangled names inside the dump.
        #[arg(long)]
        demangle: bool,
    },

    /// Dump the body of a defined function, matched exactly by raw name.
    Body {
        /// Path to the symbol-table document (.json, .yaml, or .yml).
        #[arg(long)]
        input: String,

        /// Raw linkage name to match.
        #[arg(long)]
        name: String,

        /// Detail level of the dump: none, blocks, or full.
        #[arg(long, default_value = "none")]
        level: String,
    },

    /// Print statement and operand statistics across all defined functions.
    Stats {
        /// Path to the symbol-table document (.json, .yaml, or .yml).
        #[arg(long)]
        input: String,

        /// Accepted for symmetry with list; the tallies only ever cover
        /// defined functions.
        #[arg(long)]
        defined_only: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List {
            input,
            demangle,
            defined_only,
            print_value,
            name_sort,
            size_sort,
            no_sort,
            reverse_sort,
            json,
        } => {
            let config = ReportConfig {
                demangle,
                defined_only,
                print_value,
                name_sort,
                size_sort,
                no_sort,
                reverse_sort,
                ..Default::default()
            };
            commands::list_command(&input, &config, json)?
        }
        Command::Symbol { input, name, demangle } => {
            let config = ReportConfig { demangle, ..Default::default() };
            commands::symbol_command(&input, &config, &name)?
        }
        Command::Body { input, name, level } => {
            let dump_level: DumpLevel = level.parse()?;
            let config = ReportConfig { dump_level, ..Default::default() };
            commands::body_command(&input, &config, &name)?
        }
        Command::Stats { input, defined_only } => {
            let config = ReportConfig { defined_only, ..Default::default() };
            commands::stats_command(&input, &config)?
        }
    }

    Ok(())
}
