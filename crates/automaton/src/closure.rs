//! Closure and goto over item sets.
//!
//! Both functions are pure: they read the grammar, build a fresh item set,
//! and mutate nothing. Each runs an explicit worklist to a fixpoint, so no
//! call-stack depth depends on the grammar.

use std::collections::BTreeSet;

use lr0_grammar::Grammar;

use crate::item::Item;

/// Expand `items` until every non-terminal immediately after a dot has all
/// of its productions present at dot 0.
///
/// The result is a unique fixpoint, so `closure(closure(i)) == closure(i)`.
pub fn closure(grammar: &Grammar, items: &BTreeSet<Item>) -> BTreeSet<Item> {
    let mut stack: Vec<Item> = items.iter().copied().collect();
    let mut result = items.clone();
    while let Some(item) = stack.pop() {
        let Some(symbol) = item.pointed_symbol(grammar) else {
            continue;
        };
        if !grammar.is_non_terminal(symbol) {
            continue;
        }
        for production in grammar.productions_with_left(symbol) {
            let item = Item::new(production);
            if result.insert(item) {
                stack.push(item);
            }
        }
    }
    result
}

/// Advance every item of `items` whose dot sits immediately before
/// `symbol`, then take the closure of the advanced set.
///
/// When no item can shift `symbol` the result is empty; the builder creates
/// no transition for it.
pub fn goto(grammar: &Grammar, items: &BTreeSet<Item>, symbol: &str) -> BTreeSet<Item> {
    let advanced: BTreeSet<Item> = items
        .iter()
        .filter(|item| item.pointed_symbol(grammar) == Some(symbol))
        .map(Item::advanced)
        .collect();
    if advanced.is_empty() {
        return advanced;
    }
    closure(grammar, &advanced)
}
