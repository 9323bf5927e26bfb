//! Environment-driven configuration. These tests mutate process env vars,
//! so they run serially.

use std::path::PathBuf;
use std::time::Duration;

use rpg_forum::config::{
    ConfigError, ForumConfig, DEFAULT_COMMENTS_URL, ENV_COMMENTS_URL, ENV_LOG_FILE,
    ENV_TIMEOUT_SECS, ENV_TOPICS_URL,
};
use serial_test::serial;

const ALL_VARS: [&str; 4] = [ENV_TOPICS_URL, ENV_COMMENTS_URL, ENV_TIMEOUT_SECS, ENV_LOG_FILE];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_env();
    std::env::set_var(ENV_TOPICS_URL, "http://127.0.0.1:8080/topics");
    std::env::set_var(ENV_TIMEOUT_SECS, "4");
    std::env::set_var(ENV_LOG_FILE, "/tmp/rpg-forum-test.log");

    let config = ForumConfig::from_env();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.topics_url, "http://127.0.0.1:8080/topics");
    assert_eq!(config.comments_url, DEFAULT_COMMENTS_URL);
    assert_eq!(config.timeout, Duration::from_secs(4));
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/rpg-forum-test.log")));
}

#[test]
#[serial]
fn test_from_env_without_vars_is_default() {
    clear_env();
    assert_eq!(ForumConfig::from_env().unwrap(), ForumConfig::default());
}

#[test]
#[serial]
fn test_blank_var_is_ignored() {
    clear_env();
    std::env::set_var(ENV_COMMENTS_URL, "   ");

    let config = ForumConfig::from_env();
    clear_env();

    assert_eq!(config.unwrap().comments_url, DEFAULT_COMMENTS_URL);
}

#[test]
#[serial]
fn test_bad_timeout_is_reported() {
    clear_env();
    std::env::set_var(ENV_TIMEOUT_SECS, "0");

    let result = ForumConfig::from_env();
    clear_env();

    assert_eq!(
        result.unwrap_err(),
        ConfigError::InvalidTimeout {
            var: ENV_TIMEOUT_SECS,
            value: "0".to_string(),
        }
    );
}

#[test]
#[serial]
fn test_non_http_url_is_reported() {
    clear_env();
    std::env::set_var(ENV_TOPICS_URL, "ftp://forum.test/topics");

    let result = ForumConfig::from_env();
    clear_env();

    assert!(matches!(
        result,
        Err(ConfigError::InvalidUrl { var, .. }) if var == ENV_TOPICS_URL
    ));
}
