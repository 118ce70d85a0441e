//! Loads the sample configuration file and the amounts a user would type.

use std::path::PathBuf;
use std::time::Duration;

use itax_cli::config::{AppConfig, ConfigError};
use itax_cli::format::format_inr;
use itax_cli::utils::parse_amount;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn sample_config_file_loads() {
    let config = AppConfig::load(&fixture("itax.toml")).unwrap();

    assert_eq!(config.log_level, "itax_data=debug,warn");
    assert_eq!(config.log_file, None);
    assert_eq!(config.world_bank_url, "http://localhost:8080");
    assert_eq!(
        config.indicator_dir,
        Some(PathBuf::from("../itax-data/tests/fixtures/indicators"))
    );
    assert_eq!(config.cache_ttl(), chrono::Duration::hours(12));
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let err = AppConfig::load_or_default(Some(&fixture("missing.toml"))).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn typed_amounts_format_back_in_indian_grouping() {
    for (typed, shown) in [
        ("1250000", "₹12,50,000"),
        ("₹12.5L", "₹12,50,000"),
        ("1.2 crore", "₹1,20,00,000"),
        ("75,000", "₹75,000"),
    ] {
        assert_eq!(format_inr(parse_amount(typed).unwrap()), shown, "{typed}");
    }
}
