// src/core/policy.rs
use thiserror::Error;
use crate::models::PolicyOverrides;
use crate::utils::digit_width;

// List of special characters, taken from OWASP.
// https://owasp.org/www-community/password-special-characters
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "!#$%&'()*+,-./:;<=>?@[]^_{|}~";

/// Largest accepted `password_byte_length`. The word source draws this many
/// words per batch, so the batch is allocated up front.
pub const MAX_PASSWORD_BYTE_LENGTH: usize = 4096;

/// Largest accepted password length bound. Also caps `num_special_characters`,
/// which are drawn one by one for every candidate.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Minimum password length {min} exceeds maximum {max}")]
    LengthRange { min: usize, max: usize },

    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("Special character set is empty")]
    EmptySpecialCharacters,

    /// `num_special_characters` was 0. Validation requires at least one
    /// special character, so every generated candidate would be rejected and
    /// generation could never succeed.
    #[error("At least one special character must be appended")]
    NoSpecialCharacters,

    #[error("Password byte length must be greater than zero")]
    ZeroByteLength,

    /// A count or length above its cap, or one that does not fit in `usize`
    /// on this target.
    #[error("{field} must be at most {max}")]
    TooLarge { field: &'static str, max: usize },

    #[error("No word length fits the policy (a word would need {lower}..={upper} characters)")]
    EmptyWordWindow { lower: usize, upper: usize },
}

/// Resolved, validated password policy.
///
/// Built once from the defaults plus caller overrides; there are no setters,
/// so a policy held by a generator never changes underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    enforce_length_limit: bool,
    special_characters: Vec<char>,
    num_special_characters: usize,
    password_byte_length: usize,
    random_number_max: u64,
    min_password_length: usize,
    max_password_length: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            enforce_length_limit: true,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.chars().collect(),
            num_special_characters: 1,
            password_byte_length: 64,
            random_number_max: 99,
            min_password_length: 10,
            max_password_length: 64,
        }
    }
}

impl PolicyConfig {
    /// Overlay `overrides` onto the defaults and validate the result.
    pub fn resolve(overrides: Option<&PolicyOverrides>) -> Result<Self, ConfigError> {
        let defaults = PolicyConfig::default();
        let Some(o) = overrides else {
            return Ok(defaults);
        };

        let special_characters = match &o.special_characters {
            Some(chars) => dedupe(chars),
            None => defaults.special_characters,
        };

        let config = PolicyConfig {
            enforce_length_limit: o.enforce_length_limit.unwrap_or(defaults.enforce_length_limit),
            special_characters,
            num_special_characters: bounded(
                o.num_special_characters,
                defaults.num_special_characters,
                "num_special_characters",
                MAX_PASSWORD_LENGTH,
            )?,
            password_byte_length: bounded(
                o.password_byte_length,
                defaults.password_byte_length,
                "password_byte_length",
                MAX_PASSWORD_BYTE_LENGTH,
            )?,
            random_number_max: non_negative(
                o.random_number_max,
                defaults.random_number_max as i64,
                "random_number_max",
            )?,
            min_password_length: bounded(
                o.min_password_length,
                defaults.min_password_length,
                "min_password_length",
                MAX_PASSWORD_LENGTH,
            )?,
            max_password_length: bounded(
                o.max_password_length,
                defaults.max_password_length,
                "max_password_length",
                MAX_PASSWORD_LENGTH,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Express the policy as a complete set of overrides, the format read
    /// back from policy files.
    pub fn to_overrides(&self) -> PolicyOverrides {
        PolicyOverrides {
            enforce_length_limit: Some(self.enforce_length_limit),
            special_characters: Some(self.special_characters.iter().collect()),
            num_special_characters: Some(self.num_special_characters as i64),
            password_byte_length: Some(self.password_byte_length as i64),
            random_number_max: Some(self.random_number_max as i64),
            min_password_length: Some(self.min_password_length as i64),
            max_password_length: Some(self.max_password_length as i64),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_password_length > self.max_password_length {
            return Err(ConfigError::LengthRange {
                min: self.min_password_length,
                max: self.max_password_length,
            });
        }
        if self.special_characters.is_empty() {
            return Err(ConfigError::EmptySpecialCharacters);
        }
        if self.num_special_characters == 0 {
            return Err(ConfigError::NoSpecialCharacters);
        }
        if self.password_byte_length == 0 {
            return Err(ConfigError::ZeroByteLength);
        }
        let (lower, upper) = self.word_length_window();
        if upper == 0 || lower > upper {
            return Err(ConfigError::EmptyWordWindow { lower, upper });
        }
        Ok(())
    }

    pub fn enforce_length_limit(&self) -> bool {
        self.enforce_length_limit
    }

    pub fn special_characters(&self) -> &[char] {
        &self.special_characters
    }

    pub fn num_special_characters(&self) -> usize {
        self.num_special_characters
    }

    pub fn password_byte_length(&self) -> usize {
        self.password_byte_length
    }

    /// Inclusive upper bound of the numeric suffix.
    pub fn random_number_max(&self) -> u64 {
        self.random_number_max
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    pub fn max_password_length(&self) -> usize {
        self.max_password_length
    }

    pub fn is_special_character(&self, c: char) -> bool {
        self.special_characters.contains(&c)
    }

    /// Widest number plus the appended special characters.
    pub fn non_word_characters(&self) -> usize {
        digit_width(self.random_number_max) + self.num_special_characters
    }

    /// Inclusive range of word lengths (in chars) the generator may use.
    pub fn word_length_window(&self) -> (usize, usize) {
        let non_word = self.non_word_characters();
        let upper = self.max_password_length.saturating_sub(non_word);
        let lower = (self.min_password_length + 1).saturating_sub(non_word).max(1);
        (lower, upper)
    }
}

fn non_negative(value: Option<i64>, default: i64, field: &'static str) -> Result<u64, ConfigError> {
    let value = value.unwrap_or(default);
    if value < 0 {
        return Err(ConfigError::Negative(field));
    }
    Ok(value as u64)
}

// Non-negative and at most `max`; never truncated on narrow targets
fn bounded(value: Option<i64>, default: usize, field: &'static str, max: usize) -> Result<usize, ConfigError> {
    let value = non_negative(value, default as i64, field)?;
    match usize::try_from(value) {
        Ok(value) if value <= max => Ok(value),
        _ => Err(ConfigError::TooLarge { field, max }),
    }
}

// Keep the first occurrence of each character so draws stay uniform
fn dedupe(chars: &str) -> Vec<char> {
    let mut seen = Vec::new();
    for c in chars.chars() {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}
