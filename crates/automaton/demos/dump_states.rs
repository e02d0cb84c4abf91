//! Print the canonical LR(0) collection for a grammar definition.
//!
//! Reads a JSON grammar definition from the path given as the first
//! argument (or falls back to a built-in sample), prints every state with
//! its items, the transition edges and any conflicts, then emits the
//! GraphViz digraph on stdout. Set `RUST_LOG=debug` to watch construction.

use std::{env, fs};

use anyhow::{bail, Context, Result};
use lr0_automaton::{Automaton, AutomatonListing, Grammar, GrammarDefinition};

/// Refuse to emit diagrams beyond this many states; the automaton itself
/// has no size limit.
const MAX_RENDERED_STATES: usize = 32;

const SAMPLE: &str = r#"{
    "initial": "S",
    "terminals": ["a", "b", "c"],
    "nonTerminals": ["S"],
    "productions": [
        { "left": "S", "right": ["a", "S", "b"] },
        { "left": "S", "right": ["c"] }
    ]
}"#;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let definition: GrammarDefinition = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?
        }
        None => serde_json::from_str(SAMPLE)?,
    };

    let grammar = Grammar::from_definition(definition)?;
    let mut automaton = Automaton::compute(grammar);
    automaton.assign_names();

    for state in automaton.states() {
        println!("{}:", state.name().unwrap_or("?"));
        for item in state.items() {
            println!("    {}", item.render(automaton.grammar()));
        }
        if !state.completed().is_empty() {
            let ids: Vec<String> = state.completed().iter().map(usize::to_string).collect();
            println!("    reduces: {}", ids.join(", "));
        }
    }

    println!();
    let listing = AutomatonListing::from_automaton(&automaton);
    for edge in &listing.edges {
        println!("{} --{}--> {}", edge.origin, edge.label, edge.destination);
    }

    for conflict in automaton.conflicts() {
        println!("conflict: {conflict:?}");
    }

    #[cfg(feature = "dot")]
    {
        if automaton.state_count() > MAX_RENDERED_STATES {
            bail!(
                "automaton has {} states; refusing to render more than {MAX_RENDERED_STATES}",
                automaton.state_count()
            );
        }
        println!();
        lr0_automaton::dot::render(&automaton, &mut std::io::stdout())?;
    }

    Ok(())
}
