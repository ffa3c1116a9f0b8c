// src/generators/validation.rs
use crate::core::PolicyConfig;
use crate::models::{PolicyReport, PolicyViolation};

/// Check `password` against every rule of `config` and collect the failures.
///
/// Length is counted in chars. Never fails: malformed or empty input simply
/// produces violations.
pub fn check_password(password: &str, config: &PolicyConfig) -> PolicyReport {
    let mut violations = Vec::new();
    let length = password.chars().count();

    if config.enforce_length_limit() && length > config.max_password_length() {
        violations.push(PolicyViolation::TooLong);
    }
    if length < config.min_password_length() {
        violations.push(PolicyViolation::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(PolicyViolation::NoCapital);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PolicyViolation::NoNumber);
    }
    if !password.chars().any(|c| config.is_special_character(c)) {
        violations.push(PolicyViolation::NoSpecialCharacter);
    }

    PolicyReport { violations }
}

pub fn is_valid_password(password: &str, config: &PolicyConfig) -> bool {
    check_password(password, config).is_valid()
}
