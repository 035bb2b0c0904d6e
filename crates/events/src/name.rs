//! Event name identifiers

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::{HubError, Result};

/// Longest accepted event name, in bytes
pub const MAX_NAME_LEN: usize = 128;

/// A validated event name such as `SUN.SHINE`.
///
/// Names start with an ASCII letter or digit and may then contain letters,
/// digits, `.`, `_`, `-` and `:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventName(String);

impl EventName {
    /// Validate and wrap a name
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Wrap a name without validating it.
    ///
    /// Used by hubs configured with `validate_names = false`.
    pub(crate) fn unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate(name: &str) -> Result<()> {
    let invalid = |reason: &str| HubError::InvalidEventName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let first = name
        .chars()
        .next()
        .ok_or_else(|| invalid("must not be empty"))?;
    if name.len() > MAX_NAME_LEN {
        return Err(invalid("is longer than 128 bytes"));
    }
    if !first.is_ascii_alphanumeric() {
        return Err(invalid("must start with a letter or digit"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | ':')))
    {
        return Err(invalid(&format!("contains invalid character {:?}", c)));
    }
    Ok(())
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EventName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventName {
    type Error = HubError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EventName {
    type Error = HubError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<EventName> for String {
    fn from(name: EventName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["SUN.SHINE", "a", "room:lit", "task_created", "v2-ready", "0day"] {
            assert!(EventName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", " ", ".shine", "a b", "sun/shine", "émoji"] {
            assert!(
                matches!(
                    EventName::new(name),
                    Err(HubError::InvalidEventName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_length_limit() {
        assert!(EventName::new("a".repeat(MAX_NAME_LEN)).is_ok());
        assert!(EventName::new("a".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_empty_name_reason() {
        let err = EventName::new("").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_serde_validates() {
        let name: EventName = serde_json::from_str(r#""SUN.SHINE""#).unwrap();
        assert_eq!(name.as_str(), "SUN.SHINE");
        assert_eq!(serde_json::to_string(&name).unwrap(), r#""SUN.SHINE""#);

        assert!(serde_json::from_str::<EventName>(r#""bad name""#).is_err());
    }
}
