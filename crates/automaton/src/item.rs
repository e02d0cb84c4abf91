use itertools::Itertools;

use lr0_grammar::Grammar;

/// A production paired with a scan position: the first `dot` symbols of the
/// right-hand side have been recognized so far.
///
/// Items are ordered by `(production, dot)` so that item sets iterate in a
/// stable order no matter how they were assembled. An item whose dot sits at
/// the end of the right-hand side is *complete* (a reduce item).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    production: usize,
    dot: usize,
}

impl Item {
    /// Fresh item for `production` with the dot at the far left.
    pub fn new(production: usize) -> Self {
        Self { production, dot: 0 }
    }

    pub fn production(&self) -> usize {
        self.production
    }

    pub fn dot(&self) -> usize {
        self.dot
    }

    /// The symbol immediately after the dot, or `None` for a complete item.
    pub fn pointed_symbol<'g>(&self, grammar: &'g Grammar) -> Option<&'g str> {
        grammar.productions()[self.production]
            .right()
            .get(self.dot)
            .map(|symbol| symbol.as_str())
    }

    pub fn is_complete(&self, grammar: &Grammar) -> bool {
        self.dot == grammar.productions()[self.production].arity()
    }

    /// The same item with the dot advanced over one symbol.
    pub fn advanced(&self) -> Self {
        Self {
            production: self.production,
            dot: self.dot + 1,
        }
    }

    /// Render as `A -> α · β`.
    pub fn render(&self, grammar: &Grammar) -> String {
        let production = &grammar.productions()[self.production];
        let (before, after) = production.right().split_at(self.dot);
        format!(
            "{} -> {}",
            production.left(),
            before
                .iter()
                .map(String::as_str)
                .chain(std::iter::once("·"))
                .chain(after.iter().map(String::as_str))
                .format(" "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lr0_grammar::Production;

    fn grammar() -> Grammar {
        Grammar::new(
            vec![
                Production::new(
                    "S".to_string(),
                    vec!["a".to_string(), "S".to_string(), "b".to_string()],
                ),
                Production::new("S".to_string(), vec!["c".to_string()]),
            ],
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["S".to_string()],
            "S".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn pointed_symbol_follows_the_dot() {
        let grammar = grammar();
        let item = Item::new(1);
        assert_eq!(item.pointed_symbol(&grammar), Some("a"));
        assert_eq!(item.advanced().pointed_symbol(&grammar), Some("S"));
        assert_eq!(
            item.advanced().advanced().advanced().pointed_symbol(&grammar),
            None
        );
    }

    #[test]
    fn completeness_is_dot_at_arity() {
        let grammar = grammar();
        let item = Item::new(2);
        assert!(!item.is_complete(&grammar));
        assert!(item.advanced().is_complete(&grammar));
    }

    #[test]
    fn renders_dot_position() {
        let grammar = grammar();
        assert_eq!(Item::new(1).render(&grammar), "S -> · a S b");
        assert_eq!(Item::new(1).advanced().render(&grammar), "S -> a · S b");
        assert_eq!(Item::new(2).advanced().render(&grammar), "S -> c ·");
    }

    #[test]
    fn orders_by_production_then_dot() {
        let mut items = vec![Item::new(2), Item::new(1).advanced(), Item::new(1)];
        items.sort();
        assert_eq!(items, vec![Item::new(1), Item::new(1).advanced(), Item::new(2)]);
    }
}
