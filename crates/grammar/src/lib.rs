//! Context-free grammar representation, validation and LR augmentation.
//!
//! A [`Grammar`] is built either from parts ([`Grammar::new`]) or from a
//! loader-produced [`GrammarDefinition`]. Construction validates the rule
//! set and then augments it with a fresh start production, so every
//! `Grammar` value in circulation is already augmented and ready for
//! item-set construction.

pub mod definition;
pub mod error;
pub mod production;

pub use definition::{GrammarDefinition, ProductionDefinition};
pub use error::GrammarError;
pub use production::Production;

use std::collections::HashSet;

use log::debug;

/// Interned name of a terminal or non-terminal.
pub type Symbol = String;

/// Index of the augmented start production in every constructed grammar.
pub const START_PRODUCTION: usize = 0;

/// A validated, augmented context-free grammar.
///
/// Productions are ordered and a production's index is its id; after
/// augmentation, production [`START_PRODUCTION`] is `start' -> start` and
/// `start'` is the grammar's start symbol. The terminal and non-terminal
/// vocabularies are disjoint.
#[derive(Debug, Clone)]
pub struct Grammar {
    productions: Vec<Production>,
    terminals: Vec<Symbol>,
    non_terminals: Vec<Symbol>,
    start: Symbol,
}

impl Grammar {
    /// Validate the raw rule set and augment it.
    ///
    /// Augmentation runs exactly once, here: the returned grammar carries
    /// the fresh start production at index 0 and must not be augmented
    /// again.
    pub fn new(
        productions: Vec<Production>,
        terminals: Vec<Symbol>,
        non_terminals: Vec<Symbol>,
        start: Symbol,
    ) -> Result<Self, GrammarError> {
        Self::validate(&productions, &terminals, &non_terminals, &start)?;
        let mut grammar = Self {
            productions,
            terminals,
            non_terminals,
            start,
        };
        grammar.augment();
        Ok(grammar)
    }

    /// Build a grammar from loader output.
    pub fn from_definition(definition: GrammarDefinition) -> Result<Self, GrammarError> {
        Self::new(
            definition.productions.into_iter().map(Into::into).collect(),
            definition.terminals,
            definition.non_terminals,
            definition.initial,
        )
    }

    fn validate(
        productions: &[Production],
        terminals: &[Symbol],
        non_terminals: &[Symbol],
        start: &Symbol,
    ) -> Result<(), GrammarError> {
        let terminal_set: HashSet<&str> = terminals.iter().map(Symbol::as_str).collect();
        let non_terminal_set: HashSet<&str> = non_terminals.iter().map(Symbol::as_str).collect();

        if let Some(overlap) = terminals
            .iter()
            .find(|symbol| non_terminal_set.contains(symbol.as_str()))
        {
            return Err(GrammarError::AmbiguousSymbol(overlap.clone()));
        }
        if !non_terminal_set.contains(start.as_str()) {
            return Err(GrammarError::UndeclaredStart(start.clone()));
        }
        for (id, production) in productions.iter().enumerate() {
            if !non_terminal_set.contains(production.left()) {
                return Err(GrammarError::InvalidLeftHandSide {
                    production: id,
                    symbol: production.left().to_string(),
                });
            }
            for symbol in production.right() {
                if !terminal_set.contains(symbol.as_str())
                    && !non_terminal_set.contains(symbol.as_str())
                {
                    return Err(GrammarError::UndeclaredSymbol {
                        production: id,
                        symbol: symbol.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Insert the fresh start production `start' -> start` at index 0 and
    /// reassign the start symbol.
    fn augment(&mut self) {
        let fresh = self.fresh_start_name();
        debug!("augmenting grammar: {} -> {}", fresh, self.start);
        self.productions
            .insert(0, Production::new(fresh.clone(), vec![self.start.clone()]));
        self.non_terminals.push(fresh.clone());
        self.start = fresh;
    }

    /// Append `'` to the start symbol until the candidate collides with no
    /// existing non-terminal and no production's left-hand side.
    fn fresh_start_name(&self) -> Symbol {
        let mut name = format!("{}'", self.start);
        while self.non_terminals.iter().any(|symbol| *symbol == name)
            || self.productions.iter().any(|p| p.left() == name)
        {
            name.push('\'');
        }
        name
    }

    /// The augmented start symbol.
    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn production(&self, id: usize) -> Option<&Production> {
        self.productions.get(id)
    }

    pub fn terminals(&self) -> &[Symbol] {
        &self.terminals
    }

    pub fn non_terminals(&self) -> &[Symbol] {
        &self.non_terminals
    }

    pub fn is_terminal(&self, name: &str) -> bool {
        self.terminals.iter().any(|symbol| symbol == name)
    }

    pub fn is_non_terminal(&self, name: &str) -> bool {
        self.non_terminals.iter().any(|symbol| symbol == name)
    }

    /// Ids of every production whose left-hand side is `left`, in grammar
    /// order.
    pub fn productions_with_left(&self, left: &str) -> Vec<usize> {
        self.productions
            .iter()
            .enumerate()
            .filter_map(|(id, production)| (production.left() == left).then_some(id))
            .collect()
    }
}
