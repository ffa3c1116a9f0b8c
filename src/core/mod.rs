// src/core/mod.rs
pub mod config;
pub mod policy;

pub use config::{parse_log_level, AppConfig, DEFAULT_LOG_LEVEL};
pub use policy::{
    ConfigError, PolicyConfig, DEFAULT_SPECIAL_CHARACTERS, MAX_PASSWORD_BYTE_LENGTH, MAX_PASSWORD_LENGTH,
};
