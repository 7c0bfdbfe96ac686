use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

// ============================================================================
// Configuration - Environment-Backed Settings
// ============================================================================
//
// Everything is read once at startup. Missing values fall back to defaults
// with a log line; values that are present but unparseable abort startup
// rather than running with a half-applied configuration.
//
// ============================================================================

pub struct Config {
    /// HTTP listen port.
    pub port: u16,
    /// Server-side page size for menu listings.
    pub menu_page_size: usize,
    /// Redis connection URL; unset selects the in-memory store.
    pub redis_url: Option<String>,
    /// Admin shared secret; unset or blank runs the guard in open mode.
    pub admin_password: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "8080"),
            menu_page_size: try_load::<usize>("MENU_PAGE_SIZE", "12").max(1),
            redis_url: optional("REDIS_URL"),
            admin_password: optional("ADMIN_PASSWORD"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

/// Optional string setting; a blank value counts as unset.
fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

// ============================================================================
// Unit Tests
// ============================================================================
