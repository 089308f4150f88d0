use super::*;

#[test]
fn test_defaults_match_reference_run() {
    let config = BenchConfig::default();
    assert_eq!(config.algorithm, Algorithm::Negamax);
    assert_eq!(config.depth, 33);
    assert_eq!(config.window, (-200, 200));
    assert!(!config.use_table);
    assert!(config.search_config().table.is_none());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = BenchConfig::from_toml_str(
        r#"
        algorithm = "negascout"
        depth = 12
        max_positions = 6
        "#,
    )
    .unwrap();
    assert_eq!(config.algorithm, Algorithm::Negascout);
    assert_eq!(config.depth, 12);
    assert_eq!(config.max_positions, Some(6));
    assert_eq!(config.window, (-200, 200));
}

#[test]
fn test_table_settings_flow_into_search_config() {
    let config = BenchConfig::from_toml_str(
        r#"
        use_table = true
        table_capacity = 1000
        table_min_depth = 4
        window = [-50, 50]
        "#,
    )
    .unwrap();
    let search = config.search_config();
    assert_eq!(
        search.table,
        Some(TableConfig {
            max_entries: 1000,
            min_depth: 4
        })
    );
    assert_eq!(search.window, Window::new(-50, 50));
}

#[test]
fn test_rejects_empty_window() {
    let err = BenchConfig::from_toml_str("window = [5, 5]").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWindow { alpha: 5, beta: 5 }));
}

#[test]
fn test_rejects_unnegatable_bound() {
    let config = BenchConfig {
        window: (i32::MIN, 0),
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::WindowOverflow(_))));
}

#[test]
fn test_rejects_bad_toml() {
    let err = BenchConfig::from_toml_str("algorithm = \"minimax-ish\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file() {
    let err = BenchConfig::load(Path::new("/nonexistent/pv_bench.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_rejects_zero_depth() {
    let err = BenchConfig::from_toml_str("depth = 0").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDepth(0)));
    assert!(BenchConfig::from_toml_str("depth = 1").is_ok());
}
