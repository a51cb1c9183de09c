use super::*;

#[test]
fn test_default_config() {
    let config = SearchConfig::default();
    assert_eq!(config.max_depth, 5);
    assert_eq!(config.branching_factor, 2);
    assert!(config.pruning_enabled);
    assert!(config.random_seed.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_depth_rejected() {
    let config = SearchConfig::with_depth(0);
    assert_eq!(config.validate(), Err(ConfigError::ZeroDepth));
}

#[test]
fn test_depth_limit() {
    assert!(SearchConfig::with_depth(MAX_SUPPORTED_DEPTH).validate().is_ok());
    assert_eq!(
        SearchConfig::with_depth(64).validate(),
        Err(ConfigError::DepthTooLarge {
            depth: 64,
            limit: MAX_SUPPORTED_DEPTH
        })
    );
}

#[test]
fn test_non_binary_branching_rejected() {
    for branching_factor in [0, 1, 3, 8] {
        let config = SearchConfig {
            branching_factor,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnsupportedBranching(branching_factor))
        );
    }
}

#[test]
fn test_builders() {
    let config = SearchConfig::with_depth(3).pruning(false).seeded(99);
    assert_eq!(config.max_depth, 3);
    assert!(!config.pruning_enabled);
    assert_eq!(config.random_seed, Some(99));
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config: SearchConfig = toml::from_str("max_depth = 3\nrandom_seed = 7\n").unwrap();
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.branching_factor, 2);
    assert!(config.pruning_enabled);
    assert_eq!(config.random_seed, Some(7));
}
