use anyhow::{bail, Context, Result};
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::errors::config_context;
use crate::pagination::PaginationConfig;

pub const SHOW_FIRST_PAGE_WHEN_INVALID: &str = "SHOW_FIRST_PAGE_WHEN_INVALID";
pub const PAGINATION_PER_PAGE: &str = "PAGINATION_PER_PAGE";
pub const PAGINATION_ORPHANS: &str = "PAGINATION_ORPHANS";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub pagination: PaginationConfig,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            pagination: PaginationConfig::default(),
        }
    }

    /// Defaults overridden by process environment variables.
    /// Read once at startup and passed down explicitly.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut pagination = PaginationConfig::default();

        if let Some(raw) = lookup(SHOW_FIRST_PAGE_WHEN_INVALID) {
            let enabled = parse_flag(&raw).context(config_context(SHOW_FIRST_PAGE_WHEN_INVALID))?;
            pagination = pagination.with_show_first_page_when_invalid(enabled);
        }
        if let Some(raw) = lookup(PAGINATION_PER_PAGE) {
            let per_page = parse_number::<NonZeroUsize>(&raw)
                .context(config_context(PAGINATION_PER_PAGE))?;
            pagination = pagination.with_default_per_page(per_page);
        }
        if let Some(raw) = lookup(PAGINATION_ORPHANS) {
            let orphans = parse_number::<usize>(&raw).context(config_context(PAGINATION_ORPHANS))?;
            pagination = pagination.with_default_orphans(orphans);
        }

        Ok(Self { pagination })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {:?}", other),
    }
}

fn parse_number<T>(raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(raw.trim().parse::<T>()?)
}
