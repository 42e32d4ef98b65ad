//! LR(1) items and the closure operation (spec.md 3 "LR(1) Item", 4.C
//! "Item-set Closure"). An item's identity is its `(rule, cursor)` position;
//! its lookahead is a growing `BTreeSet<Terminal>` accumulated as closure
//! discovers the same position from more than one context. See DESIGN.md
//! for why this departs from a literal reading of "canonical LR(1) does not
//! merge items differing in lookahead" (spec.md 4.C) without changing the
//! resulting automaton.

use std::collections::{BTreeMap, BTreeSet};

use crate::first::FirstSets;
use crate::grammar::Rule;
use crate::symbol::{Symbol, Terminal};

pub type LookaheadSet = BTreeSet<Terminal>;

/// The `(rule, cursor)` half of an LR(1) item; the lookahead set lives
/// alongside it in `ItemSet`'s map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey {
    pub rule: usize,
    pub cursor: usize,
}

impl ItemKey {
    pub fn start_of(rule: usize) -> Self {
        Self { rule, cursor: 0 }
    }

    pub fn next_symbol(self, rules: &[Rule]) -> Option<Symbol> {
        rules[self.rule].body.get(self.cursor).copied()
    }

    pub fn is_reducible(self, rules: &[Rule]) -> bool {
        self.cursor >= rules[self.rule].body.len()
    }

    pub fn advanced(self) -> Self {
        Self {
            rule: self.rule,
            cursor: self.cursor + 1,
        }
    }

    /// A kernel item: cursor past the start, or the augmenting rule's
    /// initial item (spec.md GLOSSARY, "Kernel").
    pub fn is_kernel(self, rules: &[Rule]) -> bool {
        self.cursor > 0 || rules[self.rule].head == crate::symbol::NonTerminal::AAStart
    }
}

/// A full LR(1) item set: kernel plus closure items, each mapped to its
/// lookahead set (spec.md 3, "State ... kernel+closure items: set of Item").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSet(pub BTreeMap<ItemKey, LookaheadSet>);

impl ItemSet {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts `lookahead` into the item at `key`, creating it if absent.
    /// Returns `true` if the item's lookahead set grew (used by the
    /// closure fixed point to detect "nothing left to add").
    pub fn merge(&mut self, key: ItemKey, lookahead: &LookaheadSet) -> bool {
        let entry = self.0.entry(key).or_default();
        let before = entry.len();
        entry.extend(lookahead.iter().copied());
        entry.len() > before
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemKey, &LookaheadSet)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ItemKey> {
        self.0.keys()
    }
}

/// Closes `kernel` under spec.md 4.C's fixed point: for every item whose
/// cursor sits before a non-terminal `N`, add `(N -> . gamma, follow_first)`
/// for every rule `N -> gamma`, where `follow_first` is `FIRST(body[cursor+1])`
/// if that symbol exists, else the item's own lookahead (the grammar has no
/// epsilon productions, so looking at a single next symbol suffices).
/// Uses an explicit work-list rather than recursion, per spec.md section 9's
/// guidance against recursive closure on pathological grammars.
pub fn closure(kernel: ItemSet, rules: &[Rule], first_sets: &FirstSets) -> ItemSet {
    let mut out = kernel;
    let mut worklist: Vec<ItemKey> = out.keys().copied().collect();

    while let Some(key) = worklist.pop() {
        let lookahead = out.0.get(&key).cloned().unwrap_or_default();
        let next = match key.next_symbol(rules) {
            Some(Symbol::NonTerminal(n)) => n,
            _ => continue,
        };
        let follow_first = match key.advanced().next_symbol(rules) {
            Some(symbol) => first_sets.of(symbol),
            None => lookahead,
        };
        for (rule_id, rule) in rules.iter().enumerate() {
            if rule.head != next {
                continue;
            }
            let new_key = ItemKey::start_of(rule_id);
            if out.merge(new_key, &follow_first) {
                worklist.push(new_key);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;
    use crate::symbol::{NonTerminal, Terminal::*};

    #[test]
    fn closes_start_state_to_include_external_declaration_heads() {
        let grammar = Grammar::new();
        let first_sets = FirstSets::compute(grammar.rules());
        let mut kernel = ItemSet::new();
        let mut eof = LookaheadSet::new();
        eof.insert(Eof);
        kernel.merge(ItemKey::start_of(0), &eof);

        let closed = closure(kernel, grammar.rules(), &first_sets);

        let has_function_definition_item = closed.keys().any(|k| {
            grammar.rules()[k.rule].head == NonTerminal::FunctionDefinition && k.cursor == 0
        });
        let has_declaration_item = closed
            .keys()
            .any(|k| grammar.rules()[k.rule].head == NonTerminal::Declaration && k.cursor == 0);
        assert!(has_function_definition_item);
        assert!(has_declaration_item);
    }

    #[test]
    fn closure_is_idempotent() {
        let grammar = Grammar::new();
        let first_sets = FirstSets::compute(grammar.rules());
        let mut kernel = ItemSet::new();
        let mut eof = LookaheadSet::new();
        eof.insert(Eof);
        kernel.merge(ItemKey::start_of(0), &eof);

        let once = closure(kernel.clone(), grammar.rules(), &first_sets);
        let twice = closure(once.clone(), grammar.rules(), &first_sets);
        assert_eq!(once, twice);
    }
}
