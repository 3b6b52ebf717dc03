//! Response-quantity catalogs
//!
//! This module provides the catalogs that define the problem's response
//! quantities: simulated observations and prior-information quantities
//! derived from parameters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Definition of a single response quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDef {
    /// Group name; constraint tagging tests its prefix
    pub group: String,
    /// Constraint threshold, supplied by the problem definition
    pub target: f64,
}

impl ResponseDef {
    /// Create a new response definition
    pub fn new(group: impl Into<String>, target: f64) -> Self {
        Self {
            group: group.into(),
            target,
        }
    }
}

/// An insertion-ordered catalog of response quantities
///
/// Identity is the quantity name, unique within the catalog. Inserting an
/// existing name replaces its definition in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseCatalog {
    names: Vec<String>,
    defs: Vec<ResponseDef>,
    index: HashMap<String, usize>,
}

impl ResponseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a quantity definition
    pub fn insert(&mut self, name: impl Into<String>, def: ResponseDef) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => self.defs[i] = def,
            None => {
                self.index.insert(name.clone(), self.names.len());
                self.names.push(name);
                self.defs.push(def);
            }
        }
    }

    /// Get the definition for a quantity
    pub fn get(&self, name: &str) -> Option<&ResponseDef> {
        self.index.get(name).map(|&i| &self.defs[i])
    }

    /// Check whether a quantity is in the catalog
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of quantities in the catalog
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over quantities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResponseDef)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.defs.iter())
    }
}

impl<S: Into<String>> FromIterator<(S, ResponseDef)> for ResponseCatalog {
    fn from_iter<I: IntoIterator<Item = (S, ResponseDef)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, def) in iter {
            catalog.insert(name, def);
        }
        catalog
    }
}

/// The static problem definition: two response-quantity namespaces
///
/// A name belongs to the observation catalog or the prior-information
/// catalog, never both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemDef {
    observations: ResponseCatalog,
    prior_info: ResponseCatalog,
}

impl ProblemDef {
    /// Create a problem definition from the two catalogs
    pub fn new(observations: ResponseCatalog, prior_info: ResponseCatalog) -> Self {
        Self {
            observations,
            prior_info,
        }
    }

    /// The observation catalog
    pub fn observations(&self) -> &ResponseCatalog {
        &self.observations
    }

    /// The prior-information catalog
    pub fn prior_info(&self) -> &ResponseCatalog {
        &self.prior_info
    }
}
