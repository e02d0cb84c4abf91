//! End-to-end construction tests over the self-embedding grammar
//! `S -> a S b | c`, plus determinism, reachability and export checks.

use std::collections::BTreeSet;

use lr0_automaton::{
    Automaton, AutomatonListing, Grammar, GrammarDefinition, Item, START_PRODUCTION,
};

const SELF_EMBEDDING: &str = r#"{
    "initial": "S",
    "terminals": ["a", "b", "c"],
    "nonTerminals": ["S"],
    "productions": [
        { "left": "S", "right": ["a", "S", "b"] },
        { "left": "S", "right": ["c"] }
    ]
}"#;

fn grammar() -> Grammar {
    let definition: GrammarDefinition = serde_json::from_str(SELF_EMBEDDING).unwrap();
    Grammar::from_definition(definition).unwrap()
}

fn named_automaton() -> Automaton {
    let mut automaton = Automaton::compute(grammar());
    automaton.assign_names();
    automaton
}

fn item(production: usize, dot: usize) -> Item {
    let mut item = Item::new(production);
    for _ in 0..dot {
        item = item.advanced();
    }
    item
}

fn items(entries: &[(usize, usize)]) -> BTreeSet<Item> {
    entries.iter().map(|(p, d)| item(*p, *d)).collect()
}

// ---------------------------------------------------------------------------
// The canonical collection of `S -> a S b | c`
// ---------------------------------------------------------------------------

#[test]
fn start_state_is_the_closure_of_the_augmented_item() {
    let automaton = named_automaton();
    let start = automaton.state(automaton.start());
    // S' -> ·S pulls in both S productions at dot 0.
    assert_eq!(start.items(), &items(&[(0, 0), (1, 0), (2, 0)]));
    assert_eq!(start.name(), Some("I0"));
}

#[test]
fn goto_on_a_reenters_the_grammar_of_s() {
    let automaton = named_automaton();
    let start = automaton.state(automaton.start());
    let after_a = automaton.state(start.transition("a").unwrap());
    assert_eq!(after_a.items(), &items(&[(1, 1), (1, 0), (2, 0)]));
}

#[test]
fn goto_on_c_is_a_single_item_reduce_state() {
    let automaton = named_automaton();
    let start = automaton.state(automaton.start());
    let after_c = automaton.state(start.transition("c").unwrap());
    assert_eq!(after_c.items(), &items(&[(2, 1)]));
    assert_eq!(after_c.completed().iter().copied().collect::<Vec<_>>(), [2]);
}

#[test]
fn nested_expansions_reuse_the_inner_a_state() {
    let automaton = named_automaton();
    let start = automaton.state(automaton.start());
    let after_a = start.transition("a").unwrap();
    // Spelling a, a, c, b, b: every further `a` loops back to the same
    // state, and the inner `c` reuses the reduce state reached from I0.
    assert_eq!(automaton.state(after_a).transition("a"), Some(after_a));
    assert_eq!(
        automaton.state(after_a).transition("c"),
        start.transition("c")
    );
    assert_eq!(automaton.state_count(), 6);
}

#[test]
fn full_state_and_edge_enumeration() {
    let automaton = named_automaton();
    let listing = AutomatonListing::from_automaton(&automaton);

    let names: Vec<_> = listing.states.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["I0", "I1", "I2", "I3", "I4", "I5"]);

    let edges: Vec<(&str, &str, &str)> = listing
        .edges
        .iter()
        .map(|e| (e.origin.as_str(), e.label.as_str(), e.destination.as_str()))
        .collect();
    assert_eq!(
        edges,
        [
            ("I0", "S", "I1"),
            ("I0", "a", "I2"),
            ("I0", "c", "I5"),
            ("I2", "a", "I2"),
            ("I2", "S", "I3"),
            ("I2", "c", "I5"),
            ("I3", "b", "I4"),
        ]
    );
}

#[test]
fn completed_sets_land_on_the_reduce_states() {
    let automaton = named_automaton();
    let listing = AutomatonListing::from_automaton(&automaton);
    let completed: Vec<(&str, Vec<usize>)> = listing
        .states
        .iter()
        .map(|s| (s.name.as_str(), s.completed.clone()))
        .collect();
    assert_eq!(
        completed,
        [
            ("I0", vec![]),
            ("I1", vec![START_PRODUCTION]),
            ("I2", vec![]),
            ("I3", vec![]),
            ("I4", vec![1]),
            ("I5", vec![2]),
        ]
    );
}

// ---------------------------------------------------------------------------
// Contract-level properties
// ---------------------------------------------------------------------------

#[test]
fn canonical_uniqueness() {
    let automaton = named_automaton();
    let states = automaton.states();
    for (i, left) in states.iter().enumerate() {
        for right in &states[i + 1..] {
            assert_ne!(left.items(), right.items());
        }
    }
}

#[test]
fn construction_is_deterministic() {
    let first = named_automaton();
    let second = named_automaton();
    assert_eq!(
        AutomatonListing::from_automaton(&first),
        AutomatonListing::from_automaton(&second)
    );
    assert_eq!(first.state_count(), second.state_count());
    assert_eq!(first.edges().len(), second.edges().len());
}

#[test]
fn every_listed_state_is_reachable_by_edges() {
    let automaton = named_automaton();
    let listing = AutomatonListing::from_automaton(&automaton);

    // Walk the listing's own edges from the start name; every listed state
    // must be visited, and no edge may mention an unlisted state.
    let names: BTreeSet<&str> = listing.states.iter().map(|s| s.name.as_str()).collect();
    let mut visited = BTreeSet::from(["I0"]);
    let mut changed = true;
    while changed {
        changed = false;
        for edge in &listing.edges {
            assert!(names.contains(edge.origin.as_str()));
            assert!(names.contains(edge.destination.as_str()));
            if visited.contains(edge.origin.as_str())
                && visited.insert(edge.destination.as_str())
            {
                changed = true;
            }
        }
    }
    assert_eq!(visited, names);
}

#[test]
fn accept_detection_is_unique() {
    let automaton = named_automaton();
    let accepting = automaton.accepting_state().unwrap();
    assert_eq!(automaton.state(accepting).name(), Some("I1"));

    let accepting_count = automaton
        .states()
        .iter()
        .filter(|state| state.completed().contains(&START_PRODUCTION))
        .count();
    assert_eq!(accepting_count, 1);

    // The accept state is reached by shifting the pre-augmentation start
    // symbol out of I0.
    let start = automaton.state(automaton.start());
    assert_eq!(start.transition("S"), Some(accepting));
}

#[test]
fn unambiguous_grammar_has_no_conflicts() {
    let automaton = named_automaton();
    assert!(automaton.conflicts().is_empty());
}
