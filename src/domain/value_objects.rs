//! Value objects. Immutable, compared by content, validated on construction.

use crate::domain::DomainError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;
const AGE_MAX: i64 = 150;
const ADULT_AGE: u8 = 18;
const EMAIL_MAX_CHARS: usize = 254;
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// A user's display name. Stored as given; length rules apply to the trimmed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Name cannot be empty"));
        }
        if trimmed.chars().count() < NAME_MIN_CHARS {
            return Err(DomainError::validation(format!(
                "Name must have at least {} characters",
                NAME_MIN_CHARS
            )));
        }
        if value.chars().count() > NAME_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "Name cannot exceed {} characters",
                NAME_MAX_CHARS
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Age in whole years, 0..=150.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Age(u8);

impl Age {
    /// Takes a signed value so out-of-range input surfaces as a domain error
    /// instead of a conversion failure at the edge.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 0 {
            return Err(DomainError::validation("Age cannot be negative"));
        }
        if value > AGE_MAX {
            return Err(DomainError::validation(format!(
                "Age cannot exceed {} years",
                AGE_MAX
            )));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_adult(&self) -> bool {
        self.0 >= ADULT_AGE
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("Email cannot be empty"));
        }
        if !email_regex().is_match(&value) {
            return Err(DomainError::validation("Invalid email format"));
        }
        if value.chars().count() > EMAIL_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "Email cannot exceed {} characters",
                EMAIL_MAX_CHARS
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or_default()
    }

    /// Part before the `@`.
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(l, _)| l).unwrap_or_default()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
