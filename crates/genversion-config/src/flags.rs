use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One feature-detection result reported by the build system.
///
/// JSON maps naturally: `true`/`false`, integers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Switch(bool),
    Number(i64),
    Text(String),
}

impl FlagValue {
    /// `Switch(false)` is reported by some build systems for disabled
    /// features; it counts as not set.
    pub fn is_set(&self) -> bool {
        !matches!(self, FlagValue::Switch(false))
    }

    /// Textual form used when the value is printed as `key="value"`.
    pub fn as_text(&self) -> String {
        match self {
            FlagValue::Switch(value) => value.to_string(),
            FlagValue::Number(value) => value.to_string(),
            FlagValue::Text(value) => value.clone(),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Switch(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Number(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Text(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::Text(value)
    }
}

/// Flag name to value mapping. A missing name means the flag is not set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagTable {
    values: BTreeMap<String, FlagValue>,
}

impl FlagTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FlagValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`FlagTable::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Inserts `value` only when `name` is not present yet. Returns whether
    /// the table changed.
    pub fn set_if_absent(&mut self, name: &str, value: impl Into<FlagValue>) -> bool {
        if self.values.contains_key(name) {
            return false;
        }
        self.values.insert(name.to_string(), value.into());
        true
    }

    /// Returns the value of `name` when it is set.
    pub fn lookup(&self, name: &str) -> Option<&FlagValue> {
        self.values.get(name).filter(|value| value.is_set())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
