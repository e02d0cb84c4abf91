//! Interchange structures for grammar definitions.
//!
//! This is the wire shape produced by external grammar loaders:
//!
//! ```json
//! {
//!     "initial": "S",
//!     "terminals": ["a", "b"],
//!     "nonTerminals": ["S"],
//!     "productions": [ { "left": "S", "right": ["a", "S", "b"] } ]
//! }
//! ```
//!
//! A definition carries raw, unchecked data; [`Grammar::from_definition`]
//! validates and augments it.
//!
//! [`Grammar::from_definition`]: crate::Grammar::from_definition

use serde::{Deserialize, Serialize};

use crate::{Production, Symbol};

/// Raw grammar data, prior to validation and augmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarDefinition {
    pub initial: Symbol,
    pub terminals: Vec<Symbol>,
    pub non_terminals: Vec<Symbol>,
    pub productions: Vec<ProductionDefinition>,
}

/// One `left -> right` rule of a [`GrammarDefinition`]. A missing `right`
/// denotes an ε-production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionDefinition {
    pub left: Symbol,
    #[serde(default)]
    pub right: Vec<Symbol>,
}

impl From<ProductionDefinition> for Production {
    fn from(definition: ProductionDefinition) -> Self {
        Production::new(definition.left, definition.right)
    }
}
