//! Flat, serializable views of the automaton for external consumers.
//!
//! A renderer or any other collaborator needs only the data exposed here:
//! named states with their reduce candidates, and name-labelled edges. Both
//! lists follow the same traversal order as the naming pass.

use std::collections::HashMap;

use serde::Serialize;

use crate::automaton::Automaton;

/// A state as exposed to consumers. An empty `completed` means the state
/// cannot reduce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateListing {
    pub name: String,
    pub completed: Vec<usize>,
}

/// A transition as exposed to consumers, endpoints given by state name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeListing {
    pub origin: String,
    pub destination: String,
    pub label: String,
}

/// The automaton flattened into ordered state and edge lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomatonListing {
    pub states: Vec<StateListing>,
    pub edges: Vec<EdgeListing>,
}

impl AutomatonListing {
    /// Flatten `automaton`. A state without an assigned name falls back to
    /// its traversal-order label, which is exactly what
    /// [`Automaton::assign_names`] would pick.
    pub fn from_automaton(automaton: &Automaton) -> Self {
        let order = automaton.reachable();
        let mut names: HashMap<usize, String> = HashMap::new();
        for (position, id) in order.iter().enumerate() {
            let name = automaton
                .state(*id)
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("I{position}"));
            names.insert(*id, name);
        }

        let states = order
            .iter()
            .map(|id| {
                let state = automaton.state(*id);
                StateListing {
                    name: names[id].clone(),
                    completed: state.completed().iter().copied().collect(),
                }
            })
            .collect();
        let mut edges = Vec::new();
        for origin in &order {
            for (label, destination) in automaton.state(*origin).transitions() {
                edges.push(EdgeListing {
                    origin: names[origin].clone(),
                    destination: names[destination].clone(),
                    label: label.clone(),
                });
            }
        }
        Self { states, edges }
    }
}
