//! # Configuration Tests
//!
//! Environment variables are process-global, so every test takes `ENV_LOCK`.

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use video_title_extractor::extractor::ExtractorMode;
use video_title_extractor::server::config::{get_config, AppConfig, ConfigError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: &[&str] = &[
    "TITLES_HOST",
    "TITLES_PORT",
    "TITLES_STATIC_DIR",
    "TITLES_EXTRACTOR_MODE",
    "TITLES_PLAYLIST_END",
    "TITLES_TIMEOUT_SECONDS",
    "TITLES_PROXY",
    "TITLES_COOKIES_PATH",
    "TITLES_YTDLP_PATH",
    "TITLES_PYTHON",
];

fn clear_env_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

fn missing_file() -> String {
    let dir = env::temp_dir().join("video-title-extractor-no-config");
    dir.join("titles.yml").to_string_lossy().into_owned()
}

#[test]
fn test_defaults_without_file_or_env() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    let config = get_config(Some(&missing_file())).expect("defaults should load");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.port, 8000);
    assert_eq!(config.playlist_end, 2000);
    assert_eq!(config.extractor_mode, ExtractorMode::Auto);
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    env::set_var("TITLES_PORT", "9999");
    env::set_var("TITLES_HOST", "127.0.0.1");
    env::set_var("TITLES_EXTRACTOR_MODE", "cli");
    env::set_var("TITLES_PLAYLIST_END", "50");
    env::set_var("TITLES_PROXY", "socks5h://127.0.0.1:1080");
    env::set_var("TITLES_STATIC_DIR", "/srv/static");

    let config = get_config(Some(&missing_file())).expect("env config should load");
    clear_env_vars();

    assert_eq!(config.bind_address(), "127.0.0.1:9999");
    assert_eq!(config.extractor_mode, ExtractorMode::Cli);
    assert_eq!(config.playlist_end, 50);
    assert_eq!(config.proxy.as_deref(), Some("socks5h://127.0.0.1:1080"));
    assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
}

#[test]
fn test_yaml_file_then_env() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(file, "port: 7000\nextractor_mode: python\ntimeout_seconds: 30").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let config = get_config(Some(&path)).expect("file config should load");
    assert_eq!(config.port, 7000);
    assert_eq!(config.extractor_mode, ExtractorMode::Python);
    assert_eq!(config.timeout_seconds, 30);

    env::set_var("TITLES_PORT", "7100");
    let config = get_config(Some(&path)).expect("file + env config should load");
    clear_env_vars();
    assert_eq!(config.port, 7100);
    assert_eq!(config.extractor_mode, ExtractorMode::Python);
}

#[test]
fn test_invalid_values_fail() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    env::set_var("TITLES_PORT", "not-a-port");
    let result = get_config(Some(&missing_file()));
    clear_env_vars();
    assert!(matches!(result, Err(ConfigError::General(_))));

    env::set_var("TITLES_PLAYLIST_END", "0");
    let result = get_config(Some(&missing_file()));
    clear_env_vars();
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}
