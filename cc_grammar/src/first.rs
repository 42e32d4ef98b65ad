//! FIRST-set computation over grammar symbols (spec.md 4.B). `head_terminals`
//! follows the spec's contract exactly: recursive, guarded by a `visited`
//! set to break left-recursive cycles, skipping a rule whose own head
//! recurs as its leftmost symbol. `FirstSets` precomputes the table once so
//! item-set closure (4.C) can look it up in O(1) instead of re-deriving it
//! per item.

use std::collections::{BTreeSet, HashMap};

use crate::grammar::Rule;
use crate::symbol::{NonTerminal, Symbol, Terminal};

/// Terminals that may appear as the leftmost symbol of any derivation of
/// `symbol`. For a terminal this is always the singleton `{symbol}`. Does
/// not handle epsilon productions: the C grammar has none (spec.md 4.B).
pub fn head_terminals(
    symbol: Symbol,
    rules: &[Rule],
    visited: &mut BTreeSet<NonTerminal>,
) -> BTreeSet<Terminal> {
    match symbol {
        Symbol::Terminal(t) => {
            let mut set = BTreeSet::new();
            set.insert(t);
            set
        }
        Symbol::NonTerminal(n) => {
            if !visited.insert(n) {
                return BTreeSet::new();
            }
            let mut out = BTreeSet::new();
            for rule in rules.iter().filter(|r| r.head == n) {
                match rule.body.first() {
                    Some(&first) if first == Symbol::NonTerminal(n) => continue,
                    Some(&first) => out.extend(head_terminals(first, rules, visited)),
                    None => unreachable!("grammar has no epsilon productions"),
                }
            }
            out
        }
    }
}

/// Precomputed FIRST sets for every non-terminal in a grammar, built once
/// at automaton-construction time.
#[derive(Debug)]
pub struct FirstSets(HashMap<NonTerminal, BTreeSet<Terminal>>);

impl FirstSets {
    pub fn compute(rules: &[Rule]) -> Self {
        let mut table = HashMap::new();
        for rule in rules {
            table
                .entry(rule.head)
                .or_insert_with(|| head_terminals(Symbol::NonTerminal(rule.head), rules, &mut BTreeSet::new()));
        }
        Self(table)
    }

    /// FIRST of a single grammar symbol, using the precomputed table for
    /// non-terminals and the singleton set for terminals.
    pub fn of(&self, symbol: Symbol) -> BTreeSet<Terminal> {
        match symbol {
            Symbol::Terminal(t) => {
                let mut set = BTreeSet::new();
                set.insert(t);
                set
            }
            Symbol::NonTerminal(n) => self.0.get(&n).cloned().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;
    use crate::symbol::Terminal::*;

    #[test]
    fn terminal_first_is_singleton() {
        let grammar = Grammar::new();
        let firsts = FirstSets::compute(grammar.rules());
        let set = firsts.of(Symbol::Terminal(KwInt));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&KwInt));
    }

    #[test]
    fn declaration_specifiers_starts_with_storage_or_type_or_qualifier() {
        let grammar = Grammar::new();
        let firsts = FirstSets::compute(grammar.rules());
        let set = firsts.of(Symbol::NonTerminal(NonTerminal::DeclarationSpecifiers));
        assert!(set.contains(&KwInt));
        assert!(set.contains(&KwStatic));
        assert!(set.contains(&KwConst));
        assert!(!set.contains(&Identifier));
    }

    #[test]
    fn left_recursive_expression_chain_resolves_to_primary_heads() {
        let grammar = Grammar::new();
        let firsts = FirstSets::compute(grammar.rules());
        let set = firsts.of(Symbol::NonTerminal(NonTerminal::AdditiveExpression));
        assert!(set.contains(&Identifier));
        assert!(set.contains(&IntegerConstant));
        assert!(set.contains(&LParen));
        assert!(set.contains(&PlusPlus));
    }
}
