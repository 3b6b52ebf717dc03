//! Objective registry
//!
//! This module classifies response quantities into objectives and derives
//! one-sided inequality constraints from group-name markers.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::objective::direction::Direction;
use crate::objective::spec::ObjectiveSpec;
use crate::problem::catalog::{ProblemDef, ResponseCatalog};

/// Group-name markers for less-than constraints
const LESS_TAGS: [&str; 2] = ["l_", "less"];
/// Group-name markers for greater-than constraints
const GREATER_TAGS: [&str; 2] = ["g_", "greater"];

/// A one-sided inequality constraint derived from a group-name marker
///
/// The inequality direction is carried by the constraint list the entry
/// belongs to; the threshold comes from the problem definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Response-quantity name (a table column)
    pub name: String,
    /// Threshold the realization value is compared against
    pub threshold: f64,
}

impl Constraint {
    /// Create a new constraint
    pub fn new(name: impl Into<String>, threshold: f64) -> Self {
        Self {
            name: name.into(),
            threshold,
        }
    }
}

/// Classified objectives and derived constraints for one optimization run
///
/// Built once per run via [`ObjectiveRegistry::classify`] and immutable
/// thereafter. Objective lists keep the specification's insertion order;
/// constraint lists keep catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveRegistry {
    obs_objectives: Vec<(String, Direction)>,
    pi_objectives: Vec<(String, Direction)>,
    obs_less_than: Vec<Constraint>,
    obs_greater_than: Vec<Constraint>,
    pi_less_than: Vec<Constraint>,
    pi_greater_than: Vec<Constraint>,
}

impl ObjectiveRegistry {
    /// Classify a specification against the problem definition
    ///
    /// Each named quantity is registered as an observation objective or a
    /// prior-information objective, with its direction normalized via a
    /// case-insensitive "max"/"min" prefix match. A name found in neither
    /// catalog fails with [`ConfigError::ObjectiveNotFound`]; a direction
    /// string matching neither prefix fails with
    /// [`ConfigError::UnrecognizedDirection`]. A name appearing in both
    /// catalogs (an invalid problem definition) resolves as an observation.
    /// Repeating a name in the specification re-registers it; the last
    /// direction wins.
    ///
    /// Constraint tagging runs over every catalog entry, objective or not:
    /// a group name starting with `"l_"` or `"less"` yields a less-than
    /// constraint, `"g_"` or `"greater"` a greater-than constraint. The two
    /// tests are independent; a group matching both markers constrains in
    /// both directions.
    pub fn classify(problem: &ProblemDef, spec: &ObjectiveSpec) -> Result<Self, ConfigError> {
        let mut obs_objectives: Vec<(String, Direction)> = Vec::new();
        let mut pi_objectives: Vec<(String, Direction)> = Vec::new();

        for (name, direction) in spec.iter() {
            if problem.observations().contains(name) {
                let dir = parse_direction(name, direction)?;
                register(&mut obs_objectives, name, dir);
            } else if problem.prior_info().contains(name) {
                let dir = parse_direction(name, direction)?;
                register(&mut pi_objectives, name, dir);
            } else {
                return Err(ConfigError::ObjectiveNotFound {
                    name: name.to_string(),
                });
            }
        }

        let (obs_less_than, obs_greater_than) = tag_constraints(problem.observations());
        let (pi_less_than, pi_greater_than) = tag_constraints(problem.prior_info());

        tracing::debug!(
            "{} observation objective functions registered",
            obs_objectives.len()
        );
        for (name, direction) in &obs_objectives {
            tracing::debug!("observation objective {name}: direction {direction}");
        }
        tracing::debug!(
            "{} prior-information objective functions registered",
            pi_objectives.len()
        );
        for (name, direction) in &pi_objectives {
            tracing::debug!("prior-information objective {name}: direction {direction}");
        }

        Ok(Self {
            obs_objectives,
            pi_objectives,
            obs_less_than,
            obs_greater_than,
            pi_less_than,
            pi_greater_than,
        })
    }

    /// Observation objectives in registration order
    pub fn observation_objectives(&self) -> &[(String, Direction)] {
        &self.obs_objectives
    }

    /// Prior-information objectives in registration order
    pub fn prior_objectives(&self) -> &[(String, Direction)] {
        &self.pi_objectives
    }

    /// Less-than constraints over observation quantities
    pub fn observation_less_than(&self) -> &[Constraint] {
        &self.obs_less_than
    }

    /// Greater-than constraints over observation quantities
    pub fn observation_greater_than(&self) -> &[Constraint] {
        &self.obs_greater_than
    }

    /// Less-than constraints over prior-information quantities
    pub fn prior_less_than(&self) -> &[Constraint] {
        &self.pi_less_than
    }

    /// Greater-than constraints over prior-information quantities
    pub fn prior_greater_than(&self) -> &[Constraint] {
        &self.pi_greater_than
    }

    /// Number of observation objectives
    pub fn num_observation_objectives(&self) -> usize {
        self.obs_objectives.len()
    }

    /// Number of prior-information objectives
    pub fn num_prior_objectives(&self) -> usize {
        self.pi_objectives.len()
    }

    /// Total number of derived constraints across both namespaces
    pub fn num_constraints(&self) -> usize {
        self.obs_less_than.len()
            + self.obs_greater_than.len()
            + self.pi_less_than.len()
            + self.pi_greater_than.len()
    }
}

fn parse_direction(name: &str, direction: &str) -> Result<Direction, ConfigError> {
    Direction::parse(direction).ok_or_else(|| ConfigError::UnrecognizedDirection {
        name: name.to_string(),
        direction: direction.to_string(),
    })
}

fn register(objectives: &mut Vec<(String, Direction)>, name: &str, direction: Direction) {
    match objectives.iter_mut().find(|(n, _)| n.as_str() == name) {
        Some((_, dir)) => *dir = direction,
        None => objectives.push((name.to_string(), direction)),
    }
}

fn tag_constraints(catalog: &ResponseCatalog) -> (Vec<Constraint>, Vec<Constraint>) {
    let mut less_than = Vec::new();
    let mut greater_than = Vec::new();
    for (name, def) in catalog.iter() {
        // Independent tests: a group may match both markers, or neither.
        if LESS_TAGS.iter().any(|tag| def.group.starts_with(tag)) {
            less_than.push(Constraint::new(name, def.target));
        }
        if GREATER_TAGS.iter().any(|tag| def.group.starts_with(tag)) {
            greater_than.push(Constraint::new(name, def.target));
        }
    }
    (less_than, greater_than)
}
