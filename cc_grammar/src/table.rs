//! Parse-table projection (spec.md 4.E): flattens the automaton into a
//! dense `[state x symbol] -> action` array. Built once (typically behind
//! the `lazy_static!` in `lib.rs`) and held immutable for every parse that
//! follows.

use std::collections::BTreeSet;

use crate::error::GrammarError;
use crate::first::FirstSets;
use crate::grammar::{Grammar, Rule};
use crate::state::Automaton;
use crate::symbol::{NonTerminal, Terminal, NUM_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Shift(u32),
    Reduce(u32),
    Goto(u32),
    Accept,
    Error,
}

/// The dense `[state x symbol]` action table plus the rule table reductions
/// refer back into (spec.md 3, "ParseTable cell").
pub struct ParseTable {
    num_states: usize,
    cells: Vec<Cell>,
    rules: Vec<Rule>,
    shift_reduce_conflicts: usize,
}

impl ParseTable {
    pub fn build() -> Result<Self, GrammarError> {
        let grammar = Grammar::new();
        let first_sets = FirstSets::compute(grammar.rules());
        let automaton = Automaton::build(grammar.rules(), &first_sets);
        Self::project(&automaton, grammar.rules())
    }

    fn project(automaton: &Automaton, rules: &[Rule]) -> Result<Self, GrammarError> {
        let num_states = automaton.states.len();
        let mut cells = vec![Cell::Error; num_states * NUM_COLUMNS];

        // SHIFT / GOTO first: one per outgoing transition (spec.md 4.E).
        // These never collide with each other (every item set has at most
        // one transition per symbol), so they always win the cell.
        for state in &automaton.states {
            for (&symbol, &target) in state.transitions.iter() {
                let column = symbol.column();
                let index = state.id as usize * NUM_COLUMNS + column;
                cells[index] = if symbol.is_terminal() {
                    Cell::Shift(target)
                } else {
                    Cell::Goto(target)
                };
            }
        }

        // REDUCE next: one per terminal in a reducible item's lookahead
        // set; reducing the augmenting rule 0 is ACCEPT instead (spec.md
        // 4.E, "Accept is encoded as REDUCE of the start rule on
        // end-of-input"). A cell already holding a SHIFT wins silently —
        // the standard shift-preference convention every LR tool applies
        // to resolve textbook ambiguities like dangling-else (spec.md 8
        // scenario 4); a REDUCE/REDUCE collision has no such convention
        // and is a fatal grammar error.
        let mut shift_reduce_conflicts = 0;
        for state in &automaton.states {
            for (key, lookahead) in state.items.iter() {
                if !key.is_reducible(rules) {
                    continue;
                }
                for &terminal in lookahead.iter() {
                    let column = terminal.column();
                    let index = state.id as usize * NUM_COLUMNS + column;
                    let action = if key.rule == Grammar::start_rule_id() {
                        Cell::Accept
                    } else {
                        Cell::Reduce(key.rule as u32)
                    };
                    match cells[index] {
                        Cell::Error => cells[index] = action,
                        existing if existing == action => (),
                        Cell::Shift(_) => shift_reduce_conflicts += 1,
                        Cell::Reduce(other_rule) => {
                            return Err(GrammarError {
                                state: state.id,
                                symbol: terminal,
                                first_rule: other_rule,
                                second_rule: key.rule as u32,
                            })
                        }
                        Cell::Goto(_) | Cell::Accept => unreachable!(
                            "a terminal column never receives a GOTO, and ACCEPT only ever \
                             competes with itself"
                        ),
                    }
                }
            }
        }

        Ok(Self {
            num_states,
            cells,
            rules: rules.to_vec(),
            shift_reduce_conflicts,
        })
    }

    fn cell(&self, state: u32, column: usize) -> Cell {
        self.cells[state as usize * NUM_COLUMNS + column]
    }

    pub fn action(&self, state: u32, terminal: Terminal) -> Cell {
        self.cell(state, terminal.column())
    }

    pub fn goto(&self, state: u32, non_terminal: NonTerminal) -> Cell {
        self.cell(state, non_terminal.column())
    }

    pub fn rule(&self, id: u32) -> &Rule {
        &self.rules[id as usize]
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Shift/reduce conflicts silently resolved in favour of SHIFT while
    /// building the table (e.g. one per dangling-else). Not an error: just
    /// informational, the way the teacher's own generator reports its
    /// `total_unresolved_conflicts()` count rather than failing the build.
    pub fn shift_reduce_conflicts(&self) -> usize {
        self.shift_reduce_conflicts
    }

    /// Terminals with a non-empty cell in `state`'s row (spec.md section 7,
    /// "the set of terminals that would have been valid in the current
    /// state").
    pub fn look_ahead_set(&self, state: u32) -> BTreeSet<Terminal> {
        Terminal::ALL
            .iter()
            .copied()
            .filter(|&t| !matches!(self.action(state, t), Cell::Error))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::INVALID_COLUMN;

    #[test]
    fn eof_column_is_the_invalid_sentinel_column() {
        assert_eq!(INVALID_COLUMN, Terminal::Eof.column());
    }

    #[test]
    fn builds_without_conflicts() {
        let table = ParseTable::build().expect("K&R C grammar must be conflict-free");
        assert!(table.num_states() > 0);
    }

    #[test]
    fn dangling_else_is_the_only_shift_reduce_conflict() {
        let table = ParseTable::build().unwrap();
        assert_eq!(table.shift_reduce_conflicts(), 1);
    }

    #[test]
    fn state_zero_shifts_on_int_and_accepts_only_via_translation_unit() {
        let table = ParseTable::build().unwrap();
        assert!(matches!(table.action(0, Terminal::KwInt), Cell::Shift(_)));
    }
}
