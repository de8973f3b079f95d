// Strictness levels and the category weights they select.

use serde::{Deserialize, Serialize};

/// How aggressively the combiner weighs suspicious signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strictness {
    Lenient,
    #[default]
    Balanced,
    Strict,
}

impl Strictness {
    /// Map a stored/user-supplied level to a strictness.
    ///
    /// 1 is lenient and 3 is strict; every other value, including 2, is balanced.
    pub fn from_level(level: i64) -> Self {
        match level {
            1 => Strictness::Lenient,
            3 => Strictness::Strict,
            _ => Strictness::Balanced,
        }
    }

    pub fn level(&self) -> i64 {
        match self {
            Strictness::Lenient => 1,
            Strictness::Balanced => 2,
            Strictness::Strict => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strictness::Lenient => "Lenient",
            Strictness::Balanced => "Balanced",
            Strictness::Strict => "Strict",
        }
    }
}

impl From<i64> for Strictness {
    fn from(level: i64) -> Self {
        Strictness::from_level(level)
    }
}

impl std::fmt::Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-category weights for the combiner's weighted average.
///
/// Only the ratios between weights matter: the combiner divides by their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    pub username: f64,
    pub followers: f64,
    pub content: f64,
    pub completeness: f64,
    pub engagement: f64,
}

impl WeightSet {
    pub fn total(&self) -> f64 {
        self.username + self.followers + self.content + self.completeness + self.engagement
    }
}

/// Look up the fixed weight table for a strictness level.
pub fn resolve_weights(strictness: Strictness) -> WeightSet {
    match strictness {
        Strictness::Lenient => WeightSet {
            username: 1.8,
            followers: 2.2,
            content: 1.5,
            completeness: 1.2,
            engagement: 2.0,
        },
        Strictness::Balanced => WeightSet {
            username: 2.2,
            followers: 2.8,
            content: 2.0,
            completeness: 1.6,
            engagement: 2.5,
        },
        Strictness::Strict => WeightSet {
            username: 2.8,
            followers: 3.2,
            content: 2.5,
            completeness: 2.0,
            engagement: 3.0,
        },
    }
}
