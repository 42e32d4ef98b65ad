//! Canonical LR(1) state machine generation (spec.md 4.D). Builds the
//! automaton with a textbook work-list algorithm: state 0's kernel is the
//! augmenting item, each unprocessed state's items are partitioned by their
//! next symbol, and each partition's closure is compared against every
//! existing state's full item set (kernel + closure, lookahead included)
//! before minting a new one.

use std::collections::BTreeMap;

use crate::first::FirstSets;
use crate::grammar::Rule;
use crate::item::{closure, ItemKey, ItemSet, LookaheadSet};
use crate::symbol::{Symbol, Terminal};

#[derive(Debug)]
pub struct State {
    pub id: u32,
    pub items: ItemSet,
    pub transitions: BTreeMap<Symbol, u32>,
}

/// The full canonical LR(1) automaton: states indexed by id, state 0 the
/// start state (spec.md 3, "Automaton").
#[derive(Debug)]
pub struct Automaton {
    pub states: Vec<State>,
}

impl Automaton {
    /// Builds the automaton from `rules` (rule 0 must be the augmenting
    /// `AAStart -> translation-unit`, per `Grammar::new`).
    pub fn build(rules: &[Rule], first_sets: &FirstSets) -> Self {
        let mut eof = LookaheadSet::new();
        eof.insert(Terminal::Eof);
        let mut start_kernel = ItemSet::new();
        start_kernel.merge(ItemKey::start_of(0), &eof);
        let start_items = closure(start_kernel, rules, first_sets);

        let mut states = vec![State {
            id: 0,
            items: start_items,
            transitions: BTreeMap::new(),
        }];
        let mut worklist = vec![0u32];

        while let Some(state_id) = worklist.pop() {
            let symbols = next_symbols(&states[state_id as usize].items, rules);
            for symbol in symbols {
                let kernel = goto_kernel(&states[state_id as usize].items, rules, symbol);
                let candidate = closure(kernel, rules, first_sets);
                if candidate.0.is_empty() {
                    continue;
                }
                let target = match states.iter().position(|s| s.items == candidate) {
                    Some(existing) => existing as u32,
                    None => {
                        let id = states.len() as u32;
                        states.push(State {
                            id,
                            items: candidate,
                            transitions: BTreeMap::new(),
                        });
                        worklist.push(id);
                        id
                    }
                };
                states[state_id as usize].transitions.insert(symbol, target);
            }
        }

        Self { states }
    }
}

/// The distinct symbols appearing at some item's cursor, in the symbol
/// enum's numeric order (spec.md 4.D, "Determinism").
fn next_symbols(items: &ItemSet, rules: &[Rule]) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = items
        .keys()
        .filter_map(|key| key.next_symbol(rules))
        .collect();
    symbols.sort_by_key(Symbol::column);
    symbols.dedup();
    symbols
}

/// The kernel of the successor state reached by shifting/going-to on
/// `symbol`: every item whose cursor sits before `symbol`, advanced by one,
/// with its lookahead carried over unchanged.
fn goto_kernel(items: &ItemSet, rules: &[Rule], symbol: Symbol) -> ItemSet {
    let mut kernel = ItemSet::new();
    for (key, lookahead) in items.iter() {
        if key.next_symbol(rules) == Some(symbol) {
            kernel.merge(key.advanced(), lookahead);
        }
    }
    kernel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    #[test]
    fn state_zero_has_a_shift_on_every_declaration_specifier_head() {
        let grammar = Grammar::new();
        let first_sets = FirstSets::compute(grammar.rules());
        let automaton = Automaton::build(grammar.rules(), &first_sets);
        let state0 = &automaton.states[0];
        assert!(state0
            .transitions
            .contains_key(&Symbol::Terminal(Terminal::KwInt)));
        assert!(state0
            .transitions
            .contains_key(&Symbol::Terminal(Terminal::Identifier)));
    }

    #[test]
    fn automaton_is_finite_and_deterministic_across_builds() {
        let grammar = Grammar::new();
        let first_sets = FirstSets::compute(grammar.rules());
        let first_build = Automaton::build(grammar.rules(), &first_sets);
        let second_build = Automaton::build(grammar.rules(), &first_sets);
        assert_eq!(first_build.states.len(), second_build.states.len());
        for (a, b) in first_build.states.iter().zip(second_build.states.iter()) {
            assert_eq!(a.items, b.items);
            assert_eq!(a.transitions, b.transitions);
        }
    }
}
