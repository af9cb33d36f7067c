//! Scenario-driven conformance tests.

use std::path::PathBuf;

use coax_testkit::{
    check_agreement, run_conformance_test, standard, CoreRunner, MustRunner, Scenario,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn assert_scenarios_pass(scenarios: &[Scenario]) {
    let core = CoreRunner::new();
    let must = MustRunner::new();
    for scenario in scenarios {
        let result = run_conformance_test(&core, &must, &scenario.cases);
        assert!(
            result.passed(),
            "Scenario '{}' failed: {:?}",
            scenario.name,
            result
        );
    }
}

#[test]
fn standard_scenarios_pass() {
    assert_scenarios_pass(&standard::all());
}

#[test]
fn fixture_scenarios_pass() {
    let scenarios = Scenario::load(fixture("scenarios.json")).unwrap();
    assert_eq!(scenarios.len(), 3);
    assert_scenarios_pass(&scenarios);
}

#[test]
fn fixture_inputs_agree_with_their_predicates() {
    let scenarios = Scenario::load(fixture("scenarios.json")).unwrap();
    for case in scenarios.iter().flat_map(|s| &s.cases) {
        let value = case.input.value();
        let found = check_agreement(&value);
        assert!(found.is_empty(), "{}: {:?}", case.name, found);
    }
}
