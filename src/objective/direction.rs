//! Optimization direction
//!
//! This module provides the direction type for registered objectives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction in which an objective improves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Higher values are better
    Maximize,
    /// Lower values are better
    Minimize,
}

impl Direction {
    /// Parse a user-supplied direction string
    ///
    /// Matches a case-insensitive "max"/"min" prefix ("max", "Maximize",
    /// "MINIMISE" all resolve); anything else is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("max") {
            Some(Self::Maximize)
        } else if lower.starts_with("min") {
            Some(Self::Minimize)
        } else {
            None
        }
    }

    /// Check if `a` is strictly better than `b` in this direction
    pub fn better(self, a: f64, b: f64) -> bool {
        match self {
            Self::Maximize => a > b,
            Self::Minimize => a < b,
        }
    }

    /// Check if `a` is no worse than `b` in this direction
    pub fn no_worse(self, a: f64, b: f64) -> bool {
        match self {
            Self::Maximize => a >= b,
            Self::Minimize => a <= b,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maximize => write!(f, "max"),
            Self::Minimize => write!(f, "min"),
        }
    }
}
