// src/config.rs
use sqlx::postgres::PgConnectOptions;
use std::{env, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Call the procedures against the database.
    Execute,
    /// Write the calls to a SQL file for manual review.
    Script,
}

impl FromStr for RunMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "execute" | "exec" => Ok(Self::Execute),
            "script" | "sql" => Ok(Self::Script),
            other => Err(ConfigError::Invalid(format!(
                "RUN_MODE must be 'execute' or 'script', got '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    connect_options: Option<PgConnectOptions>,
    plan_path: PathBuf,
    run_mode: RunMode,
    script_output_path: PathBuf,
    connect_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_plan_path() -> PathBuf {
    "edits.json".into()
}

fn default_script_output_path() -> PathBuf {
    "output.sql".into()
}

fn default_connect_timeout() -> u64 {
    10
}

impl AppConfig {
    /// Build configuration from environment variables. The database
    /// location is resolved lazily so script mode runs without credentials.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connect_options = match lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => Some(PgConnectOptions::from_str(url.trim()).map_err(|err| {
                ConfigError::Invalid(format!("DATABASE_URL is not a valid Postgres URL: {err}"))
            })?),
            None => connect_options_from_parts(&lookup)?,
        };

        let plan_path = lookup("EDIT_PLAN_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_plan_path);

        let run_mode = match lookup("RUN_MODE") {
            Some(value) => value.parse()?,
            None => RunMode::Execute,
        };

        let script_output_path = lookup("SCRIPT_OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_script_output_path);

        let connect_timeout_secs = match lookup("DB_CONNECT_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "DB_CONNECT_TIMEOUT_SECS must be a whole number of seconds, got '{value}'"
                ))
            })?,
            None => default_connect_timeout(),
        };

        Ok(Self {
            connect_options,
            plan_path,
            run_mode,
            script_output_path,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }

    /// Connection settings for execute mode. Fails when neither `DATABASE_URL`
    /// nor the `DB_NAME`/`DB_USER`/`DB_PASSWORD` trio is set.
    pub fn connect_options(&self) -> Result<&PgConnectOptions, ConfigError> {
        self.connect_options
            .as_ref()
            .ok_or(ConfigError::Missing("DATABASE_URL"))
    }

    pub fn plan_path(&self) -> &std::path::Path {
        &self.plan_path
    }

    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    pub fn script_output_path(&self) -> &std::path::Path {
        &self.script_output_path
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

fn connect_options_from_parts<F>(lookup: &F) -> Result<Option<PgConnectOptions>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (Some(name), Some(user), Some(password)) =
        (lookup("DB_NAME"), lookup("DB_USER"), lookup("DB_PASSWORD"))
    else {
        return Ok(None);
    };

    let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());
    let port = match lookup("DB_PORT") {
        Some(value) => value.trim().parse::<u16>().map_err(|_| {
            ConfigError::Invalid(format!("DB_PORT must be a TCP port number, got '{value}'"))
        })?,
        None => 5432,
    };

    Ok(Some(
        PgConnectOptions::new()
            .host(&host)
            .port(port)
            .username(&user)
            .password(&password)
            .database(&name),
    ))
}
