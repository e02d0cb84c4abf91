//! Worklist construction of the canonical collection and the read-only
//! analyses over the finished graph.

use std::collections::BTreeSet;

use log::{debug, trace};

use lr0_grammar::{Grammar, START_PRODUCTION};

use crate::closure::{closure, goto};
use crate::item::Item;
use crate::state::{Conflict, Edge, State, StateId};

/// The canonical LR(0) collection for a grammar: every distinct item set
/// reachable from the augmented start item, with the goto transitions
/// between them.
///
/// All states live in one registry owned by the automaton; transitions and
/// edges refer to them by [`StateId`]. After construction the automaton is
/// read-only apart from the [`assign_names`](Automaton::assign_names) pass.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    start: StateId,
    grammar: Grammar,
}

impl Automaton {
    /// Build the canonical collection for `grammar`.
    pub fn compute(grammar: Grammar) -> Self {
        let mut automaton = Self {
            states: Vec::new(),
            start: 0,
            grammar,
        };
        automaton.populate();
        automaton
    }

    /// Expand every registered state exactly once, deduplicating goto
    /// targets against the whole registry by item-set equality.
    fn populate(&mut self) {
        let seed = BTreeSet::from([Item::new(START_PRODUCTION)]);
        self.start = self.register(closure(&self.grammar, &seed));

        let mut pending = vec![self.start];
        while let Some(id) = pending.pop() {
            let items = self.states[id].items().clone();
            for symbol in self.states[id].transition_alphabet(&self.grammar) {
                let target = goto(&self.grammar, &items, &symbol);
                if target.is_empty() {
                    continue;
                }
                let destination = match self
                    .states
                    .iter()
                    .position(|state| state.items() == &target)
                {
                    Some(existing) => existing,
                    None => {
                        let fresh = self.register(target);
                        pending.push(fresh);
                        fresh
                    }
                };
                trace!("state {id} --{symbol}--> state {destination}");
                self.states[id].add_transition(symbol, destination);
            }
        }
        debug!("canonical collection complete: {} states", self.states.len());
    }

    fn register(&mut self, items: BTreeSet<Item>) -> StateId {
        let state = State::new(&self.grammar, items);
        let id = self.states.len();
        debug!(
            "state {id} registered: {} items, {} complete",
            state.items().len(),
            state.completed().len()
        );
        self.states.push(state);
        id
    }

    /// The augmented grammar the automaton was built from.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Id of the start state (the closure of `[start' -> · start]`).
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Look up a state by id. Ids handed out by this automaton are always
    /// valid.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// Reachable state ids, depth-first from the start state, following
    /// each state's transitions in discovery order. Visited states are
    /// skipped, so cycles and shared destinations are walked once.
    pub(crate) fn reachable(&self) -> Vec<StateId> {
        let mut visited = vec![false; self.states.len()];
        let mut order = Vec::with_capacity(self.states.len());
        let mut stack = vec![self.start];
        while let Some(id) = stack.pop() {
            if visited[id] {
                continue;
            }
            visited[id] = true;
            order.push(id);
            for (_, destination) in self.states[id].transitions().iter().rev() {
                if !visited[*destination] {
                    stack.push(*destination);
                }
            }
        }
        order
    }

    /// Number of distinct states reachable from the start state.
    pub fn state_count(&self) -> usize {
        self.reachable().len()
    }

    /// Assign sequential names `I0, I1, …` in depth-first visit order.
    /// Each state is named the first time it is visited and never renamed
    /// within one pass.
    pub fn assign_names(&mut self) {
        for (position, id) in self.reachable().into_iter().enumerate() {
            self.states[id].set_name(format!("I{position}"));
        }
    }

    /// Every reachable state, in traversal order.
    pub fn states(&self) -> Vec<&State> {
        self.reachable().into_iter().map(|id| &self.states[id]).collect()
    }

    /// Every edge of the reachable graph, grouped by origin in traversal
    /// order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for origin in self.reachable() {
            for (label, destination) in self.states[origin].transitions() {
                edges.push(Edge {
                    origin,
                    destination: *destination,
                    label: label.clone(),
                });
            }
        }
        edges
    }

    /// The state that completes the augmented start production.
    pub fn accepting_state(&self) -> Option<StateId> {
        self.reachable()
            .into_iter()
            .find(|id| self.states[*id].is_accepting())
    }

    /// Every conflict in the automaton: states with more than one reduce
    /// candidate, and states that can both shift a terminal and reduce.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        for id in self.reachable() {
            let state = &self.states[id];
            if state.completed().len() > 1 {
                conflicts.push(Conflict::ReduceReduce {
                    state: id,
                    productions: state.completed().iter().copied().collect(),
                });
            }
            if state.completed().is_empty() {
                continue;
            }
            for (label, _) in state.transitions() {
                if self.grammar.is_terminal(label) {
                    conflicts.push(Conflict::ShiftReduce {
                        state: id,
                        symbol: label.clone(),
                    });
                }
            }
        }
        conflicts
    }
}
