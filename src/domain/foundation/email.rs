//! Email address value object.
//!
//! Syntax-only validation: one `@`, a dot-atom local part and a dotted domain
//! with at least two labels. The address is stored exactly as supplied; no
//! case folding or trimming happens, so `Ann@Example.com` and `ann@example.com`
//! are distinct values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const FIELD: &str = "email";
const MAX_LENGTH: usize = 254;
const MAX_LOCAL_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;
const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates and wraps an address.
    pub fn parse(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        if address.is_empty() {
            return Err(ValidationError::empty_field(FIELD));
        }
        if address.chars().count() > MAX_LENGTH {
            return Err(ValidationError::too_long(FIELD, MAX_LENGTH));
        }

        let (local, domain) = address
            .split_once('@')
            .ok_or_else(|| ValidationError::invalid_format(FIELD, "missing @ symbol"))?;
        if domain.contains('@') {
            return Err(ValidationError::invalid_format(FIELD, "more than one @ symbol"));
        }

        validate_local_part(local)?;
        validate_domain(domain)?;

        Ok(Self(address))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_local_part(local: &str) -> Result<(), ValidationError> {
    if local.is_empty() {
        return Err(ValidationError::invalid_format(FIELD, "missing local part"));
    }
    if local.chars().count() > MAX_LOCAL_LENGTH {
        return Err(ValidationError::invalid_format(FIELD, "local part too long"));
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(ValidationError::invalid_format(
            FIELD,
            "misplaced dot in local part",
        ));
    }
    if let Some(c) = local
        .chars()
        .find(|c| !(c.is_alphanumeric() || *c == '.' || LOCAL_SPECIALS.contains(*c)))
    {
        return Err(ValidationError::invalid_format(
            FIELD,
            format!("invalid character {:?} in local part", c),
        ));
    }
    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), ValidationError> {
    if domain.is_empty() {
        return Err(ValidationError::invalid_format(FIELD, "missing domain"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(ValidationError::invalid_format(
            FIELD,
            "domain must contain a dot",
        ));
    }

    for label in &labels {
        if label.is_empty() || label.chars().count() > MAX_LABEL_LENGTH {
            return Err(ValidationError::invalid_format(FIELD, "invalid domain label"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(ValidationError::invalid_format(
                FIELD,
                "domain label cannot start or end with a hyphen",
            ));
        }
        if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return Err(ValidationError::invalid_format(
                FIELD,
                "invalid character in domain",
            ));
        }
    }

    // labels has at least two entries here
    let tld = labels[labels.len() - 1];
    if tld.chars().count() < 2 || tld.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(
            FIELD,
            "invalid top-level domain",
        ));
    }
    Ok(())
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
