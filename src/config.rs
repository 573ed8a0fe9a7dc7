//! Server configuration from environment variables

use crate::types::GameConfig;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 4 * 60 * 60;
const DEFAULT_REAPER_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory with index.html, host.html, join.html and assets
    pub static_dir: PathBuf,
    /// How often the idle-room reaper runs
    pub reaper_interval: Duration,
    pub game: GameConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            static_dir: PathBuf::from("public"),
            reaper_interval: Duration::from_secs(DEFAULT_REAPER_INTERVAL_SECS),
            game: GameConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load config from environment variables.
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = GameConfig::default();

        let host: IpAddr = env_or("BIND_ADDR", IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let port: u16 = env_or("PORT", DEFAULT_PORT);
        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("public"));

        let idle_secs: u64 = env_or("ROOM_IDLE_TIMEOUT_SECS", DEFAULT_IDLE_TIMEOUT_SECS);
        let room_idle_timeout = if idle_secs == 0 {
            tracing::warn!("ROOM_IDLE_TIMEOUT_SECS=0, abandoned rooms will never be cleaned up");
            None
        } else {
            Some(Duration::from_secs(idle_secs))
        };

        let reaper_secs: u64 = env_or("REAPER_INTERVAL_SECS", DEFAULT_REAPER_INTERVAL_SECS);

        Self {
            bind_addr: SocketAddr::new(host, port),
            static_dir,
            reaper_interval: Duration::from_secs(reaper_secs.max(1)),
            game: GameConfig {
                max_name_chars: env_or("MAX_NAME_CHARS", defaults.max_name_chars),
                max_word_chars: env_or("MAX_WORD_CHARS", defaults.max_word_chars),
                room_idle_timeout,
            },
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return default;
    }
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Invalid value {:?} for {}, using {}", raw, key, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: &[&str] = &[
        "BIND_ADDR",
        "PORT",
        "STATIC_DIR",
        "MAX_NAME_CHARS",
        "MAX_WORD_CHARS",
        "ROOM_IDLE_TIMEOUT_SECS",
        "REAPER_INTERVAL_SECS",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = ServerConfig::from_env();

        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.game.max_name_chars, 24);
        assert_eq!(config.game.max_word_chars, 64);
        assert_eq!(
            config.game.room_idle_timeout,
            Some(Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS))
        );
        assert_eq!(config.reaper_interval, Duration::from_secs(60));
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("PORT", "8080");
        std::env::set_var("STATIC_DIR", "/srv/party");
        std::env::set_var("MAX_NAME_CHARS", "12");
        std::env::set_var("ROOM_IDLE_TIMEOUT_SECS", "0");

        let config = ServerConfig::from_env();
        clear_env();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("/srv/party"));
        assert_eq!(config.game.max_name_chars, 12);
        assert_eq!(config.game.room_idle_timeout, None);
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("MAX_WORD_CHARS", "-3");

        let config = ServerConfig::from_env();
        clear_env();

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.game.max_word_chars, 64);
    }
}
