/// Environment-driven application configuration
///
/// Values come from the process environment, optionally seeded from a `.env`
/// file through `dotenvy`. Malformed values surface as `ValidationError`s so
/// startup fails with a readable message instead of a panic.
use crate::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::env;
use std::time::Duration;

pub const DEFAULT_JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4";
const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_MAX_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub catalog: CatalogConfig,
    pub reviews: ReviewsConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_idle: u32,
    /// Upper bound on how long a review transaction waits for a title row lock.
    pub lock_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub jikan_base_url: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ReviewsConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read configuration from the environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(env::vars().collect())
    }

    /// Build configuration from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> AppResult<Self> {
        let url = vars.get("DATABASE_URL").cloned().ok_or_else(|| {
            AppError::ValidationError("DATABASE_URL environment variable not found".to_string())
        })?;
        validate_database_url(&url)?;

        let (default_max, default_min_idle) = optimal_pool_size();
        let max_connections = parse_var(&vars, "DATABASE_MAX_CONNECTIONS", default_max)?;
        if max_connections == 0 {
            return Err(AppError::ValidationError(
                "DATABASE_MAX_CONNECTIONS must be positive".to_string(),
            ));
        }
        let lock_timeout_ms = parse_var(&vars, "DATABASE_LOCK_TIMEOUT_MS", DEFAULT_LOCK_TIMEOUT_MS)?;

        let default_page_size = parse_var(&vars, "REVIEWS_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let max_page_size = parse_var(&vars, "REVIEWS_MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE)?;
        if default_page_size == 0 || max_page_size == 0 {
            return Err(AppError::ValidationError(
                "Review page sizes must be positive".to_string(),
            ));
        }
        if default_page_size > max_page_size {
            return Err(AppError::ValidationError(format!(
                "REVIEWS_DEFAULT_PAGE_SIZE ({}) exceeds REVIEWS_MAX_PAGE_SIZE ({})",
                default_page_size, max_page_size
            )));
        }

        let jikan_base_url = vars
            .get("JIKAN_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_JIKAN_BASE_URL.to_string());

        Ok(Self {
            database: DatabaseConfig {
                url,
                max_connections,
                min_idle: default_min_idle.min(max_connections),
                lock_timeout: Duration::from_millis(lock_timeout_ms),
            },
            catalog: CatalogConfig { jikan_base_url },
            reviews: ReviewsConfig {
                default_page_size,
                max_page_size,
            },
        })
    }
}

fn validate_database_url(url: &str) -> AppResult<()> {
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return Err(AppError::ValidationError(
            "Invalid database URL format. Must start with postgres:// or postgresql://"
                .to_string(),
        ));
    }
    Ok(())
}

fn parse_var<T>(vars: &HashMap<String, String>, key: &str, default: T) -> AppResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match vars.get(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| {
            AppError::ValidationError(format!("Invalid value for {}: {} ({})", key, raw, e))
        }),
    }
}

/// Pool size based on CPU count, capped at 20.
fn optimal_pool_size() -> (u32, u32) {
    let cpu_count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);

    let max_size = std::cmp::min(cpu_count * 2, 20);
    let min_idle = std::cmp::max(2, max_size / 4);
    (max_size as u32, min_idle as u32)
}
