// src/lib.rs
//! Generate and validate passwords made of a capitalised dictionary word, a
//! number and special characters, inside a configurable length range.
//!
//! ```no_run
//! use nzpass::{generate_password, validate_password};
//!
//! let password = generate_password(None).unwrap();
//! assert!(validate_password(&password, None));
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod utils;
pub mod words;

pub use crate::core::{AppConfig, ConfigError, PolicyConfig};
pub use crate::error::PassgenError;
pub use crate::generators::{GenerationError, PasswordGenerator, RandomSource, SeededRandom, ThreadRandom};
pub use crate::models::{PolicyOverrides, PolicyReport, PolicyViolation};
pub use crate::words::{WordList, WordListError, WordSource};

/// Generate one compliant password with the builtin dictionary.
///
/// `None` uses the default policy.
pub fn generate_password(config: Option<&PolicyConfig>) -> Result<String, GenerationError> {
    let config = config.cloned().unwrap_or_default();
    PasswordGenerator::new(config).get_password()
}

/// Check a password against `config` (or the default policy).
pub fn validate_password(password: &str, config: Option<&PolicyConfig>) -> bool {
    check_password(password, config).is_valid()
}

/// Like [`validate_password`] but reports every broken rule.
pub fn check_password(password: &str, config: Option<&PolicyConfig>) -> PolicyReport {
    match config {
        Some(config) => generators::check_password(password, config),
        None => generators::check_password(password, &PolicyConfig::default()),
    }
}
