use std::path::Path;

use ardice::ar::ArDiceConfig;

#[test]
fn sample_config_matches_defaults() {
    let path = Path::new("config/ardice.ron");
    let config = ArDiceConfig::load(path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {e}", path.display()));

    assert_eq!(config, ArDiceConfig::default());
}
