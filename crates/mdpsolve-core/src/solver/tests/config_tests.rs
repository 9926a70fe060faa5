use crate::{SolverConfig, SolverConfigError, TieBreak};

#[test]
fn default_config_yaml_matches_default() {
    let config = SolverConfig::from_default_yaml().expect("default yaml should parse");
    assert_eq!(config, SolverConfig::default());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = SolverConfig::from_yaml_str("tie_break: highest_action\n").expect("partial yaml");

    assert_eq!(config.tie_break, TieBreak::HighestAction);
    assert_eq!(config.tolerance, 1e-10);
    assert_eq!(config.max_sweeps, Some(1_000_000));
}

#[test]
fn null_caps_mean_unbounded() {
    let config = SolverConfig::from_yaml_str("max_sweeps: null\nmax_policy_rounds: ~\n")
        .expect("null caps");

    assert_eq!(config, SolverConfig::unbounded());
}

#[test]
fn invalid_values_are_rejected() {
    for yaml in [
        "tolerance: -1.0\n",
        "tolerance: 0.0\n",
        "max_sweeps: 0\n",
        "max_policy_rounds: 0\n",
    ] {
        let err = SolverConfig::from_yaml_str(yaml).expect_err("invalid config");
        assert!(matches!(err, SolverConfigError::Invalid(_)), "{yaml}: {err}");
    }
}

#[test]
fn unknown_tie_break_is_a_yaml_error() {
    let err = SolverConfig::from_yaml_str("tie_break: random\n").expect_err("unknown variant");
    assert!(matches!(err, SolverConfigError::Yaml(_)));
}
