//! A CLR(1) parser generator and table-driven parser for K&R C (2nd ed.)
//! declarations, statements and expressions (spec.md section 1,
//! "Overview"). The table is built once, behind a `lazy_static!`, the way
//! `alap_gen`'s generated parsers held their tables; callers drive it
//! through [`parse`].

mod ast;
mod error;
mod first;
mod grammar;
mod item;
mod lexer;
mod parser;
mod state;
mod symbol;
mod table;

pub use ast::Ast;
pub use error::{GrammarError, ParseError};
pub use grammar::{Grammar, Rule};
pub use symbol::{NonTerminal, Symbol, Terminal};
pub use table::{Cell, ParseTable};

use lalr1::Parser;
use lazy_static::lazy_static;
use lexer::LEXICAL_ANALYZER;
use parser::CParser;

lazy_static! {
    /// The K&R C parse table, built once for the life of the process. A
    /// conflict here is a defect in `grammar::rules`, not a condition any
    /// caller can recover from, so construction panics rather than
    /// threading a `Result` through every call site (spec.md I2).
    static ref PARSE_TABLE: ParseTable =
        ParseTable::build().expect("the K&R C grammar table must be conflict-free");
}

/// Parses `text` (a full translation unit) into an [`Ast`]. `label`
/// identifies the source for error messages (a file name, or anything
/// else meaningful to the caller).
pub fn parse(text: String, label: String) -> Result<Ast, ParseError> {
    let mut parser = CParser::new(&PARSE_TABLE);
    parser.parse_text(text, label)
}

/// Tokenizes `text` without parsing it, for the CLI's `--tokens` dump mode.
/// Stops at the first lexical error (if any), returning every token
/// classified up to that point alongside the error.
pub fn tokenize(text: String, label: String) -> (Vec<lexan::Token<Terminal>>, Option<lexan::TokenError<Terminal>>) {
    let mut stream = LEXICAL_ANALYZER.token_stream(text, label);
    let mut tokens = Vec::new();
    loop {
        match stream.front() {
            Ok(token) => {
                let is_eof = *token.tag() == Terminal::Eof;
                tokens.push(token);
                if is_eof {
                    return (tokens, None);
                }
                stream.advance();
            }
            Err(error) => return (tokens, Some(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_table_is_built_lazily_and_reused() {
        assert!(PARSE_TABLE.num_states() > 0);
    }

    #[test]
    fn parse_reports_a_syntax_error_with_the_expected_terminals() {
        let err = parse("int ;".to_string(), "test".to_string()).unwrap_err();
        match err {
            ParseError::SyntaxError(token, expected) => {
                assert_eq!(*token.tag(), Terminal::Semicolon);
                assert!(expected.contains(&Terminal::Identifier));
                assert!(expected.contains(&Terminal::Star));
            }
            ParseError::LexicalError(_, _) => panic!("expected a syntax error, not a lexical one"),
        }
    }

    #[test]
    fn tokenize_stops_cleanly_at_eof() {
        let (tokens, error) = tokenize("int x;".to_string(), "test".to_string());
        assert!(error.is_none());
        let tags: Vec<Terminal> = tokens.iter().map(|t| *t.tag()).collect();
        assert_eq!(
            tags,
            vec![
                Terminal::KwInt,
                Terminal::Identifier,
                Terminal::Semicolon,
                Terminal::Eof
            ]
        );
    }

    #[test]
    fn parse_accepts_an_assignment_expression_statement() {
        let ast = parse("int f() { a = b + c; }".to_string(), "test".to_string()).unwrap();
        let lexemes: Vec<&str> = ast
            .leaves()
            .iter()
            .map(|leaf| leaf.token.as_ref().unwrap().lexeme().as_str())
            .collect();
        assert_eq!(
            lexemes,
            vec!["int", "f", "(", ")", "{", "a", "=", "b", "+", "c", ";", "}"]
        );
    }
}
