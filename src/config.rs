use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "https://parking-os-backend.onrender.com";

/// Which fixture set and ticket flavour a run produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedVariant {
    /// Five plain users, `(now, now + 2h)` tickets with stepped fares.
    #[default]
    Fixed,
    /// Seven users with credentials, tickets spread randomly over 2023.
    Randomized,
}

impl FromStr for SeedVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "randomized" | "random" => Ok(Self::Randomized),
            other => Err(AppError::Config(format!(
                "SEED_VARIANT must be `fixed` or `randomized`, got `{}`",
                other
            ))),
        }
    }
}

impl fmt::Display for SeedVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Randomized => write!(f, "randomized"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_name: Option<String>,
    pub api_base_url: String,
    pub variant: SeedVariant,
    pub ticket_count: usize,
    pub user_password: String,
    pub http_timeout_secs: u64,
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost:5432".to_string(),
            database_name: None,
            api_base_url: DEFAULT_API_URL.to_string(),
            variant: SeedVariant::Fixed,
            ticket_count: 10,
            user_password: "password123".to_string(),
            http_timeout_secs: 30,
            rng_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// everything but `DATABASE_URL`.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::Config("DATABASE_URL must be set".to_string()))?;

        Ok(Self {
            database_url,
            database_name: lookup("DATABASE_NAME").filter(|name| !name.trim().is_empty()),
            api_base_url: lookup("PARKING_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            variant: parse_or(&lookup, "SEED_VARIANT", defaults.variant)?,
            ticket_count: parse_or(&lookup, "SEED_TICKET_COUNT", defaults.ticket_count)?,
            user_password: lookup("SEED_USER_PASSWORD").unwrap_or(defaults.user_password),
            http_timeout_secs: parse_or(&lookup, "HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            rng_seed: parse_opt(&lookup, "SEED_RANDOM_SEED")?,
        })
    }

    /// Connection string with `database_name` swapped in as the URL path.
    pub fn connection_url(&self) -> String {
        match &self.database_name {
            Some(name) => with_database_name(&self.database_url, name),
            None => self.database_url.clone(),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_opt<F, T>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{} is invalid: {}", key, e)))
        })
        .transpose()
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

fn with_database_name(url: &str, name: &str) -> String {
    let (head, query) = match url.split_once('?') {
        Some((head, query)) => (head, Some(query)),
        None => (url, None),
    };

    let base = match head.find("://") {
        Some(idx) => {
            let authority_start = idx + 3;
            match head[authority_start..].find('/') {
                Some(slash) => &head[..authority_start + slash],
                None => head,
            }
        }
        None => head,
    };

    let mut out = format!("{}/{}", base.trim_end_matches('/'), name);
    if let Some(query) = query {
        out.push('?');
        out.push_str(query);
    }
    out
}
