use std::env;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Required unless `dry_run` is set.
    pub database_url: Option<String>,
    pub run_migrations: bool,
    /// Run the session against an in-memory store and write nothing.
    pub dry_run: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let dry_run = flag(&lookup, "DRY_RUN", false)?;
        let run_migrations = flag(&lookup, "RUN_MIGRATIONS", true)?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if database_url.is_none() && !dry_run {
            return Err(AppError::Config(
                "DATABASE_URL must be set (or DRY_RUN=true)".to_string(),
            ));
        }
        Ok(Self {
            database_url,
            run_migrations,
            dry_run,
        })
    }
}

fn flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> Result<bool, AppError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
