//! Strongly-typed SKU identity: class tag, number, and the derived label.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Product class (ABC-style category tag); the grouping key for class summaries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkuClass {
    A,
    B,
    C,
    D,
}

impl SkuClass {
    pub const ALL: [SkuClass; 4] = [SkuClass::A, SkuClass::B, SkuClass::C, SkuClass::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkuClass::A => "A",
            SkuClass::B => "B",
            SkuClass::C => "C",
            SkuClass::D => "D",
        }
    }
}

impl core::fmt::Display for SkuClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkuClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(SkuClass::A),
            "B" => Ok(SkuClass::B),
            "C" => Ok(SkuClass::C),
            "D" => Ok(SkuClass::D),
            other => Err(DomainError::validation(format!(
                "unknown SKU class {other:?} (expected one of A, B, C, D)"
            ))),
        }
    }
}

/// Identifier of a SKU within its class (e.g. `101`).
///
/// Free text, but never empty and never containing whitespace, so that the
/// derived label `"<class> <number>"` stays unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SkuNumber(String);

impl SkuNumber {
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("SKU number cannot be empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::validation(format!(
                "SKU number {trimmed:?} cannot contain whitespace"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Numeric SKU numbers are always valid.
impl From<u32> for SkuNumber {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl core::fmt::Display for SkuNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SkuNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for SkuNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        SkuNumber::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Unique SKU label, e.g. `A 101`.
///
/// The label is always *derived* from its class and number; the parts are
/// stored independently. Parsing a label back is only done at boundaries
/// (file import, user lookups) and is strict.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkuLabel {
    class: SkuClass,
    number: SkuNumber,
}

impl SkuLabel {
    pub fn new(class: SkuClass, number: SkuNumber) -> Self {
        Self { class, number }
    }

    pub fn class(&self) -> SkuClass {
        self.class
    }

    pub fn number(&self) -> &SkuNumber {
        &self.number
    }
}

impl core::fmt::Display for SkuLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.class, self.number)
    }
}

impl FromStr for SkuLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (class, number) = s.trim().split_once(char::is_whitespace).ok_or_else(|| {
            DomainError::validation(format!("SKU label {s:?} must look like \"<class> <number>\""))
        })?;
        Ok(Self::new(class.parse()?, SkuNumber::new(number)?))
    }
}

impl Serialize for SkuLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SkuLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
