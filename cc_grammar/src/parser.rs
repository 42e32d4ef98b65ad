//! Wires `ParseTable` into `lalr1::Parser` (spec.md 4.F, "Driver"): every
//! query the trait asks is a direct lookup against the table built once in
//! `lib.rs`. The only work this module adds is translating `table::Cell`
//! into `lalr1::Action` and building `Ast` nodes as the driver shifts and
//! reduces.

use lalr1::{Action, Parser, ReportError};

use crate::ast::Ast;
use crate::lexer::LEXICAL_ANALYZER;
use crate::symbol::{NonTerminal, Terminal};
use crate::table::{Cell, ParseTable};

/// A shift/reduce driver over the K&R C grammar. Holds no per-parse state
/// of its own: the parse stack lives in `lalr1::Parser::parse_text`, and
/// the table it consults is the static one built in `lib.rs`.
pub struct CParser<'t> {
    table: &'t ParseTable,
}

impl<'t> CParser<'t> {
    pub fn new(table: &'t ParseTable) -> Self {
        Self { table }
    }
}

impl<'t> ReportError<Terminal> for CParser<'t> {}

impl<'t> Parser<Terminal, NonTerminal, Ast> for CParser<'t> {
    fn lexical_analyzer(&self) -> &lexan::LexicalAnalyzer<Terminal> {
        &LEXICAL_ANALYZER
    }

    fn next_action(&self, state: u32, token: &lexan::Token<Terminal>) -> Action {
        match self.table.action(state, *token.tag()) {
            Cell::Shift(next_state) => Action::Shift(next_state),
            Cell::Reduce(rule_id) => Action::Reduce(rule_id),
            Cell::Accept => Action::Accept,
            Cell::Goto(_) | Cell::Error => Action::Error,
        }
    }

    fn production_data(&self, production_id: u32) -> (NonTerminal, usize) {
        let rule = self.table.rule(production_id);
        (rule.head, rule.body.len())
    }

    fn goto_state(&self, lhs: &NonTerminal, current_state: u32) -> u32 {
        match self.table.goto(current_state, *lhs) {
            Cell::Goto(next_state) => next_state,
            cell => panic!(
                "no GOTO entry for {} in state {}: {:?}",
                lhs, current_state, cell
            ),
        }
    }

    fn look_ahead_set(&self, state: u32) -> std::collections::BTreeSet<Terminal> {
        self.table.look_ahead_set(state)
    }

    fn shift_attribute(&self, token: &lexan::Token<Terminal>) -> Ast {
        Ast::leaf(token.clone())
    }

    fn reduce_attribute(&self, production_id: u32, rhs: Vec<Ast>) -> Ast {
        let (head, _) = self.production_data(production_id);
        Ast::node(head, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ParseTable;

    #[test]
    fn parses_a_minimal_declaration() {
        let table = ParseTable::build().unwrap();
        let mut parser = CParser::new(&table);
        let ast = parser
            .parse_text("int x;".to_string(), "test".to_string())
            .expect("well-formed declaration must parse");
        assert_eq!(ast.kind, crate::symbol::Symbol::NonTerminal(NonTerminal::TranslationUnit));
        let leaf_lexemes: Vec<&str> = ast
            .leaves()
            .iter()
            .map(|leaf| leaf.token.as_ref().unwrap().lexeme().as_str())
            .collect();
        assert_eq!(leaf_lexemes, vec!["int", "x", ";"]);
    }

    #[test]
    fn rejects_a_missing_declarator() {
        let table = ParseTable::build().unwrap();
        let mut parser = CParser::new(&table);
        let result = parser.parse_text("int ;".to_string(), "test".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn parses_a_simple_if_else() {
        let table = ParseTable::build().unwrap();
        let mut parser = CParser::new(&table);
        let text = "int f() { if (a) b; else c; }".to_string();
        let ast = parser
            .parse_text(text, "test".to_string())
            .expect("well-formed function definition must parse");
        assert!(!ast.leaves().is_empty());
    }

    #[test]
    fn parses_a_struct_declaration() {
        let table = ParseTable::build().unwrap();
        let mut parser = CParser::new(&table);
        let text = "struct S { int a; } v;".to_string();
        parser
            .parse_text(text, "test".to_string())
            .expect("well-formed struct declaration must parse");
    }
}
