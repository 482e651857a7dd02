use lens_core::config::ReportConfig;
use lens_core::model::{
    BlockSpec, BodyBlueprint, FunctionSymbol, SymbolName, Value, VariableSymbol, Visibility,
};
use lens_core::report::{inventory_report, inventory_rows};
use lens_core::universe::SymbolUniverse;

fn blueprint(block_count: usize) -> BodyBlueprint {
    let blocks = (0..block_count)
        .map(|i| BlockSpec { label: format!("bb{i}"), stmts: vec![], succs: vec![] })
        .collect();
    BodyBlueprint { blocks }
}

fn function(name: &str, defined_blocks: Option<usize>) -> FunctionSymbol {
    FunctionSymbol::new(
        SymbolName::new(name, None),
        Visibility::Default,
        defined_blocks.map(blueprint),
    )
}

/// The universe from the specification scenarios: function "a" defined with
/// three blocks, function "b" a mere declaration, variable "x" of size 8.
fn scenario_universe() -> SymbolUniverse {
    let mut universe = SymbolUniverse::new();
    universe.register_function(function("a", Some(3)));
    universe.register_function(function("b", None));
    universe.register_variable(VariableSymbol::new(
        SymbolName::new("x", None),
        Visibility::Default,
        true,
        8,
        Some(Value::Int(7)),
    ));
    universe
}

fn render(universe: &SymbolUniverse, config: &ReportConfig) -> String {
    let mut out = Vec::new();
    inventory_report(universe, config, &mut out).expect("report");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn size_sort_defined_only_scenario() {
    let universe = scenario_universe();
    let config =
        ReportConfig { size_sort: true, defined_only: true, ..Default::default() };
    let (functions, variables) = inventory_rows(&universe, &config);

    let names: Vec<&str> = functions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a"], "declaration `b` is filtered out");
    assert_eq!(functions[0].size, 3);

    let names: Vec<&str> = variables.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["x"]);
    assert_eq!(variables[0].size, 8);
}

#[test]
fn name_sort_reverse_scenario() {
    let universe = scenario_universe();
    let config =
        ReportConfig { name_sort: true, reverse_sort: true, ..Default::default() };
    let (functions, _) = inventory_rows(&universe, &config);
    let names: Vec<&str> = functions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"], "reverse alphabetical");
}

#[test]
fn no_sort_reverse_flips_universe_order() {
    let mut universe = SymbolUniverse::new();
    for name in ["one", "two", "three"] {
        universe.register_function(function(name, Some(1)));
    }
    let config = ReportConfig { no_sort: true, reverse_sort: true, ..Default::default() };
    let (functions, _) = inventory_rows(&universe, &config);
    let names: Vec<&str> = functions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["three", "two", "one"]);
}

#[test]
fn defined_only_is_the_definition_subset() {
    let universe = scenario_universe();
    let all = inventory_rows(&universe, &ReportConfig::default());
    let defined =
        inventory_rows(&universe, &ReportConfig { defined_only: true, ..Default::default() });

    let all_names: Vec<String> = all.0.iter().chain(all.1.iter()).map(|r| r.name.clone()).collect();
    let defined_names: Vec<String> =
        defined.0.iter().chain(defined.1.iter()).map(|r| r.name.clone()).collect();
    assert_eq!(all_names, vec!["a", "b", "x"]);
    assert_eq!(defined_names, vec!["a", "x"]);
    assert!(defined_names.iter().all(|n| all_names.contains(n)));
}

#[test]
fn print_value_only_decorates_variables_with_initializers() {
    let mut universe = scenario_universe();
    universe.register_variable(VariableSymbol::new(
        SymbolName::new("bare", None),
        Visibility::Default,
        true,
        4,
        None,
    ));

    let config = ReportConfig { print_value: true, ..Default::default() };
    let (functions, variables) = inventory_rows(&universe, &config);
    assert!(functions.iter().all(|r| r.value.is_none()), "function rows never carry a value");
    assert_eq!(variables[0].value.as_deref(), Some("7"));
    assert!(variables[1].value.is_none(), "no initializer, no value column entry");

    // Without the flag the initializer stays hidden.
    let (_, variables) = inventory_rows(&universe, &ReportConfig::default());
    assert!(variables.iter().all(|r| r.value.is_none()));
}

#[test]
fn report_prints_one_header_per_kind_group() {
    let universe = scenario_universe();
    let text = render(&universe, &ReportConfig::default());
    let headers: Vec<&str> = text.lines().filter(|l| l.contains("Visibility")).collect();
    assert_eq!(headers.len(), 2, "functions and variables each get a header");
    assert!(!text.lines().any(|l| l.contains("Value")), "no value column unless requested");

    let function_row = text.lines().position(|l| l.trim_start().starts_with("a "));
    let variable_row = text.lines().position(|l| l.trim_start().starts_with("x "));
    assert!(function_row.unwrap() < variable_row.unwrap(), "functions listed before variables");
}

#[test]
fn report_appends_value_column_when_requested() {
    let universe = scenario_universe();
    let config = ReportConfig { print_value: true, ..Default::default() };
    let text = render(&universe, &config);
    assert!(text.lines().filter(|l| l.contains("Value")).count() == 2);
    let row = text.lines().find(|l| l.trim_start().starts_with("x ")).expect("variable row");
    assert!(row.trim_end().ends_with('7'));
}

#[test]
fn demangle_is_constant_across_one_invocation() {
    let mut universe = SymbolUniverse::new();
    universe.register_function(FunctionSymbol::new(
        SymbolName::new("_ZN3app4initE", Some("app::init".to_string())),
        Visibility::Default,
        None,
    ));
    universe.register_function(FunctionSymbol::new(
        SymbolName::new("plain", None),
        Visibility::Default,
        None,
    ));

    let (rows, _) =
        inventory_rows(&universe, &ReportConfig { demangle: true, ..Default::default() });
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["app::init", "plain"], "fallback to raw, never a mixed form");

    let (rows, _) = inventory_rows(&universe, &ReportConfig::default());
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["_ZN3app4initE", "plain"]);
}
