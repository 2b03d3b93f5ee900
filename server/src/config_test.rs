use super::*;

use std::sync::Mutex;

/// Serializes tests that mutate process env.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: [&str; 4] = [
    "PORT",
    "PREDICT_UPSTREAM_URL",
    "PREDICT_REQUEST_TIMEOUT_SECS",
    "PREDICT_CONNECT_TIMEOUT_SECS",
];

/// # Safety
/// Callers hold `ENV_LOCK`, so no other test reads env concurrently.
unsafe fn clear_env() {
    for var in VARS {
        unsafe { std::env::remove_var(var) };
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_url, None);
    assert_eq!(
        cfg.timeouts,
        UpstreamTimeouts {
            request_secs: DEFAULT_PREDICT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_PREDICT_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("PREDICT_UPSTREAM_URL", "http://model-host:5000/");
        std::env::set_var("PREDICT_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("PREDICT_CONNECT_TIMEOUT_SECS", " 3 ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url.as_deref(), Some("http://model-host:5000"));
    assert_eq!(cfg.timeouts, UpstreamTimeouts { request_secs: 30, connect_secs: 3 });

    unsafe { clear_env() };
}

#[test]
fn from_env_treats_blank_upstream_as_unset() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("PREDICT_UPSTREAM_URL", "   ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.upstream_url, None);

    unsafe { clear_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("PORT", "http");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"), "{err}");
    assert!(err.contains("port number"), "{err}");

    unsafe { clear_env() };
}

#[test]
fn from_env_rejects_bad_timeout() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("PREDICT_REQUEST_TIMEOUT_SECS", "-5");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("PREDICT_REQUEST_TIMEOUT_SECS"), "{err}");

    unsafe { clear_env() };
}
