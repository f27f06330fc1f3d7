use crate::errors::DomainError;
use std::fmt;
use std::sync::Arc;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// The zone under test, kept in absolute (trailing-dot) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone {
    fqdn: Arc<str>,
}

impl Zone {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidZone("zone name is empty".to_string()));
        }
        if trimmed == "." {
            return Ok(Self { fqdn: Arc::from(".") });
        }

        let relative = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if relative.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidZone(format!(
                "'{}' is longer than {} octets",
                trimmed, MAX_NAME_LEN
            )));
        }

        for label in relative.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidZone(format!(
                    "'{}' contains an empty label",
                    trimmed
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidZone(format!(
                    "label '{}' is longer than {} octets",
                    label, MAX_LABEL_LEN
                )));
            }
            if label.chars().any(|c| c.is_whitespace()) {
                return Err(DomainError::InvalidZone(format!(
                    "label '{}' contains whitespace",
                    label
                )));
            }
        }

        Ok(Self {
            fqdn: Arc::from(format!("{}.", relative)),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.fqdn
    }

    pub fn is_root(&self) -> bool {
        &*self.fqdn == "."
    }

    /// True if `owner` names this zone's apex (ASCII case-insensitive, trailing dot optional).
    pub fn matches(&self, owner: &str) -> bool {
        normalize_name(owner) == normalize_name(&self.fqdn)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqdn)
    }
}

/// Lower-case form without the trailing dot, used for comparisons and ordering.
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}
