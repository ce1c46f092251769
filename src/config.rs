//! Runtime settings
//!
//! The command line only carries the batch itself (`-i`, `-o`,
//! `--remove-fields`). Where the batch is sent is configured here, from
//! built-in defaults optionally overridden by environment variables:
//! - `NCI_CT_API_URL` - registry endpoint queried with `?nct_id=<id>`
//! - `NCI_CT_RETRY_DELAY_MS` - pause before retrying a failed request

use crate::constants::{API_URL_ENV, NCI_CT_API_URL, RETRY_DELAY_ENV, RETRY_DELAY_MS};
use anyhow::Context;
use reqwest::Url;
use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct Settings {
    /// Clinical trials endpoint
    pub api_url: Url,
    /// How long to wait before the one retry of a request that failed in transit
    pub retry_delay: Duration,
}

impl Settings {
    pub fn new(api_url: &str, retry_delay: Duration) -> anyhow::Result<Self> {
        let api_url =
            Url::parse(api_url).with_context(|| format!("invalid API URL '{api_url}'"))?;
        Ok(Settings {
            api_url,
            retry_delay,
        })
    }

    /// Build settings from the defaults and any environment overrides
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = non_empty(lookup(API_URL_ENV)).unwrap_or_else(|| NCI_CT_API_URL.into());
        let delay_ms = match non_empty(lookup(RETRY_DELAY_ENV)) {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{RETRY_DELAY_ENV} must be milliseconds, got '{v}'"))?,
            None => RETRY_DELAY_MS,
        };
        Self::new(&api_url, Duration::from_millis(delay_ms))
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
