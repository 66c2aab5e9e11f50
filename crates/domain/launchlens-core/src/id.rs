use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity key of a launch. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LaunchId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("launch id must not be empty")]
pub struct InvalidLaunchId;

impl LaunchId {
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidLaunchId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InvalidLaunchId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LaunchId {
    type Error = InvalidLaunchId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LaunchId> for String {
    fn from(value: LaunchId) -> Self {
        value.0
    }
}

impl AsRef<str> for LaunchId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LaunchId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LaunchId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LaunchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
