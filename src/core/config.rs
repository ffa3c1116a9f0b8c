// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use crate::models::PolicyOverrides;

pub const DEFAULT_MAX_ATTEMPTS: usize = 100;
pub const DEFAULT_MAX_WORD_BATCHES: usize = 100;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

// Process-level settings for the nzpass binary
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Word source
    pub words_path: Option<PathBuf>,

    // Generation limits
    pub max_attempts: usize,
    pub max_word_batches: usize,

    // Policy overrides picked up from the environment
    pub policy: PolicyOverrides,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            words_path: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_word_batches: DEFAULT_MAX_WORD_BATCHES,
            policy: PolicyOverrides::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("PASSGEN_WORDS_PATH") {
            if !path.trim().is_empty() {
                config.words_path = Some(PathBuf::from(path));
            }
        }

        if let Some(attempts) = parse_var(&lookup, "PASSGEN_MAX_ATTEMPTS") {
            config.max_attempts = attempts;
        }

        if let Some(batches) = parse_var(&lookup, "PASSGEN_MAX_WORD_BATCHES") {
            config.max_word_batches = batches;
        }

        config.policy = policy_from_lookup(&lookup);

        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(filter) => config.log_level = filter,
                None => log::warn!("Unknown log level '{}', keeping {}", level, config.log_level),
            }
        }

        config
    }
}

// Used by main to set up env_logger before the rest of the config is read,
// so warnings from `AppConfig::load` are not dropped
pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

// Read the PASSGEN_* policy variables. Values that fail to parse are skipped.
fn policy_from_lookup<F>(lookup: &F) -> PolicyOverrides
where
    F: Fn(&str) -> Option<String>,
{
    PolicyOverrides {
        enforce_length_limit: parse_var(lookup, "PASSGEN_ENFORCE_LENGTH_LIMIT"),
        special_characters: lookup("PASSGEN_SPECIAL_CHARACTERS"),
        num_special_characters: parse_var(lookup, "PASSGEN_NUM_SPECIAL_CHARACTERS"),
        password_byte_length: parse_var(lookup, "PASSGEN_PASSWORD_BYTE_LENGTH"),
        random_number_max: parse_var(lookup, "PASSGEN_RANDOM_NUMBER_MAX"),
        min_password_length: parse_var(lookup, "PASSGEN_MIN_PASSWORD_LENGTH"),
        max_password_length: parse_var(lookup, "PASSGEN_MAX_PASSWORD_LENGTH"),
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}: cannot parse '{}'", key, raw);
            None
        }
    }
}
