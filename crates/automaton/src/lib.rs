//! Canonical LR(0) item-set automaton construction.
//!
//! Given a validated, augmented [`Grammar`], [`Automaton::compute`] builds
//! the canonical collection: the deduplicated set of item sets reachable
//! from the augmented start item, connected by goto transitions. The
//! finished graph is read-only and exposes its analyses (state count,
//! sequential naming, flat state/edge listings, accepting-state detection
//! and conflict enumeration) for downstream consumers such as renderers.
//!
//! ```
//! use lr0_automaton::{Automaton, Grammar, GrammarDefinition};
//!
//! let definition: GrammarDefinition = serde_json::from_str(
//!     r#"{
//!         "initial": "S",
//!         "terminals": ["a", "b", "c"],
//!         "nonTerminals": ["S"],
//!         "productions": [
//!             { "left": "S", "right": ["a", "S", "b"] },
//!             { "left": "S", "right": ["c"] }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let grammar = Grammar::from_definition(definition).unwrap();
//! let mut automaton = Automaton::compute(grammar);
//! automaton.assign_names();
//!
//! assert_eq!(automaton.state_count(), 6);
//! assert!(automaton.accepting_state().is_some());
//! ```

pub mod automaton;
pub mod closure;
#[cfg(feature = "dot")]
pub mod dot;
pub mod export;
pub mod item;
pub mod state;

pub use automaton::Automaton;
pub use closure::{closure, goto};
pub use export::{AutomatonListing, EdgeListing, StateListing};
pub use item::Item;
pub use state::{Conflict, Edge, State, StateId};

pub use lr0_grammar::{
    Grammar, GrammarDefinition, GrammarError, Production, ProductionDefinition, Symbol,
    START_PRODUCTION,
};
