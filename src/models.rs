// src/models.rs
use serde::{Serialize, Deserialize};
use std::fmt;

// Caller-supplied policy settings. Any field left as None keeps the default.
// Counts are signed so that negative input can be reported instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyOverrides {
    pub enforce_length_limit: Option<bool>,
    pub special_characters: Option<String>,
    pub num_special_characters: Option<i64>,
    pub password_byte_length: Option<i64>,
    pub random_number_max: Option<i64>,
    pub min_password_length: Option<i64>,
    pub max_password_length: Option<i64>,
}

impl PolicyOverrides {
    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: PolicyOverrides) -> PolicyOverrides {
        PolicyOverrides {
            enforce_length_limit: other.enforce_length_limit.or(self.enforce_length_limit),
            special_characters: other.special_characters.or(self.special_characters),
            num_special_characters: other.num_special_characters.or(self.num_special_characters),
            password_byte_length: other.password_byte_length.or(self.password_byte_length),
            random_number_max: other.random_number_max.or(self.random_number_max),
            min_password_length: other.min_password_length.or(self.min_password_length),
            max_password_length: other.max_password_length.or(self.max_password_length),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == PolicyOverrides::default()
    }
}

// A single broken policy rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyViolation {
    TooLong,
    TooShort,
    NoCapital,
    NoNumber,
    NoSpecialCharacter,
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyViolation::TooLong => write!(f, "too long"),
            PolicyViolation::TooShort => write!(f, "too short"),
            PolicyViolation::NoCapital => write!(f, "no capital"),
            PolicyViolation::NoNumber => write!(f, "no number"),
            PolicyViolation::NoSpecialCharacter => write!(f, "no special character"),
        }
    }
}

/// Outcome of checking one password against a policy.
///
/// Violations are listed in rule order: length limits first, then the
/// character-class rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyReport {
    pub violations: Vec<PolicyViolation>,
}

impl PolicyReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has(&self, violation: PolicyViolation) -> bool {
        self.violations.contains(&violation)
    }
}

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "valid");
        }
        let reasons: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", reasons.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_later_fields() {
        let base = PolicyOverrides {
            min_password_length: Some(12),
            max_password_length: Some(40),
            ..Default::default()
        };
        let top = PolicyOverrides {
            min_password_length: Some(16),
            ..Default::default()
        };
        let merged = base.merge(top);
        assert_eq!(merged.min_password_length, Some(16));
        assert_eq!(merged.max_password_length, Some(40));
    }

    #[test]
    fn overrides_parse_from_partial_json() {
        let overrides: PolicyOverrides =
            serde_json::from_str(r#"{"enforce_length_limit": false}"#).unwrap();
        assert_eq!(overrides.enforce_length_limit, Some(false));
        assert!(overrides.special_characters.is_none());
    }

    #[test]
    fn overrides_reject_unknown_fields() {
        let parsed = serde_json::from_str::<PolicyOverrides>(r#"{"length": 3}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn report_display_lists_reasons() {
        let report = PolicyReport {
            violations: vec![PolicyViolation::NoCapital, PolicyViolation::NoNumber],
        };
        assert_eq!(report.to_string(), "no capital, no number");
        assert!(!report.is_valid());
        assert_eq!(PolicyReport::default().to_string(), "valid");
    }
}
