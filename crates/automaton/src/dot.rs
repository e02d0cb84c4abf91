//! GraphViz `dot` rendering of the automaton graph.
//!
//! Nodes are labelled with their item sets, accepting states are drawn with
//! a double circle, and edges carry their transition symbol. The output is
//! plain `dot` text; laying it out is the consumer's business.

use std::borrow::Cow;
use std::io;

use itertools::Itertools;

use crate::automaton::Automaton;
use crate::state::{Edge, StateId};

/// Borrowed view of an [`Automaton`] implementing the `dot` graph traits.
pub struct DotGraph<'a> {
    automaton: &'a Automaton,
    states: Vec<StateId>,
    edges: Vec<Edge>,
}

impl<'a> DotGraph<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            states: automaton.reachable(),
            edges: automaton.edges(),
            automaton,
        }
    }
}

impl<'a> dot::Labeller<'a, StateId, Edge> for DotGraph<'a> {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("lr0").unwrap()
    }

    fn node_id(&'a self, n: &StateId) -> dot::Id<'a> {
        dot::Id::new(format!("I{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &StateId) -> dot::LabelText<'a> {
        let state = self.automaton.state(*n);
        let items = state
            .items()
            .iter()
            .map(|item| item.render(self.automaton.grammar()))
            .join("\n");
        let label = match state.name() {
            Some(name) => format!("{name}\n{items}"),
            None => items,
        };
        dot::LabelText::LabelStr(label.into())
    }

    fn edge_label(&'a self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(e.label.clone().into())
    }

    fn node_shape(&'a self, n: &StateId) -> Option<dot::LabelText<'a>> {
        let shape: &'static str = if self.automaton.state(*n).is_accepting() {
            "doublecircle"
        } else {
            "box"
        };
        Some(dot::LabelText::LabelStr(shape.into()))
    }
}

impl<'a> dot::GraphWalk<'a, StateId, Edge> for DotGraph<'a> {
    fn nodes(&'a self) -> dot::Nodes<'a, StateId> {
        Cow::Borrowed(&self.states)
    }

    fn edges(&'a self) -> dot::Edges<'a, Edge> {
        Cow::Borrowed(&self.edges)
    }

    fn source(&self, e: &Edge) -> StateId {
        e.origin
    }

    fn target(&self, e: &Edge) -> StateId {
        e.destination
    }
}

/// Render `automaton` as a GraphViz digraph.
pub fn render<W: io::Write>(automaton: &Automaton, writer: &mut W) -> io::Result<()> {
    dot::render(&DotGraph::new(automaton), writer)
}
