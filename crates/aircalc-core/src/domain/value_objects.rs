//! Domain value objects: ServiceId, Quantity, Unit, Insolation.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! `Quantity` owns the input normalization rules; nothing else in the crate
//! parses user-entered quantities.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ServiceId ────────────────────────────────────────────────────────────────

/// Identifier of a catalog service. Positive once it is inside a `Catalog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub(crate) u32);

impl ServiceId {
    pub fn new(raw: u32) -> Result<Self, DomainError> {
        if raw == 0 {
            return Err(DomainError::InvalidServiceId(0));
        }
        Ok(Self(raw))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidServiceId(0))?;
        let raw = u32::try_from(raw).map_err(|_| DomainError::InvalidServiceId(raw))?;
        Self::new(raw)
    }
}

// ── Quantity ─────────────────────────────────────────────────────────────────

/// A non-negative selected quantity.
///
/// Every constructor normalizes instead of failing: negatives clamp to zero,
/// fractions truncate, garbage becomes zero.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Normalize raw text typed into a quantity field.
    ///
    /// Reads the leading integer (after optional whitespace and sign) and
    /// ignores whatever follows, so `"3.7"` is 3 and `"12abc"` is 12. Empty or
    /// non-numeric text is zero.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        let digits = &digits[..end];

        if digits.is_empty() || negative {
            return Self::ZERO;
        }

        // Only overflow can fail here; saturate.
        Self(digits.parse::<u32>().unwrap_or(u32::MAX))
    }

    pub fn saturating_add(self, n: u32) -> Self {
        Self(self.0.saturating_add(n))
    }

    pub fn saturating_sub(self, n: u32) -> Self {
        Self(self.0.saturating_sub(n))
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Unit ─────────────────────────────────────────────────────────────────────

/// Unit of measure of a service. Descriptive only: it never changes the
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    #[serde(alias = "шт")]
    Item,
    #[serde(alias = "м")]
    Meter,
    #[serde(alias = "height_work")]
    HeightWork,
}

impl Unit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Meter => "meter",
            Self::HeightWork => "height-work",
        }
    }

    /// Short label shown after a price, e.g. `120 BYN/pc`.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Item => "pc",
            Self::Meter => "m",
            Self::HeightWork => "hw",
        }
    }

    /// Kind label shown above a service name.
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Item => "Service",
            Self::Meter => "Length",
            Self::HeightWork => "High-rise work",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "item" | "pc" | "шт" => Ok(Self::Item),
            "meter" | "m" | "м" => Ok(Self::Meter),
            "height-work" | "height_work" | "hw" => Ok(Self::HeightWork),
            other => Err(DomainError::UnknownUnit(other.to_string())),
        }
    }
}

// ── Insolation ───────────────────────────────────────────────────────────────

/// How much direct sunlight the room gets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Insolation {
    Weak,
    #[default]
    Medium,
    Strong,
}

impl Insolation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

impl fmt::Display for Insolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Insolation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(Self::Weak),
            "medium" => Ok(Self::Medium),
            "strong" => Ok(Self::Strong),
            other => Err(DomainError::UnknownInsolation(other.to_string())),
        }
    }
}
