//! Objective specification
//!
//! This module provides the user-supplied mapping from response-quantity
//! name to direction string.

use serde::{Deserialize, Serialize};

/// An insertion-ordered mapping from response-quantity name to a
/// direction string
///
/// Direction strings are validated during registration, not here.
/// Insertion order governs diagnostic emission order during registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveSpec {
    entries: Vec<(String, String)>,
}

impl ObjectiveSpec {
    /// Create an empty specification
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a (name, direction) pair
    pub fn push(&mut self, name: impl Into<String>, direction: impl Into<String>) {
        self.entries.push((name.into(), direction.into()));
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the specification is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, direction)| (name.as_str(), direction.as_str()))
    }
}

impl<S1: Into<String>, S2: Into<String>> FromIterator<(S1, S2)> for ObjectiveSpec {
    fn from_iter<I: IntoIterator<Item = (S1, S2)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, direction)| (name.into(), direction.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut spec = ObjectiveSpec::new();
        spec.push("obs2", "min");
        spec.push("obs1", "max");

        let entries: Vec<(&str, &str)> = spec.iter().collect();
        assert_eq!(entries, vec![("obs2", "min"), ("obs1", "max")]);
    }

    #[test]
    fn test_from_iterator() {
        let spec: ObjectiveSpec = [("a", "max"), ("b", "min")].into_iter().collect();
        assert_eq!(spec.len(), 2);
        assert!(!spec.is_empty());
    }

    #[test]
    fn test_empty() {
        let spec = ObjectiveSpec::new();
        assert!(spec.is_empty());
        assert_eq!(spec.len(), 0);
    }
}
