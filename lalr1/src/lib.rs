// Copyright 2022 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

pub use std::{
    collections::BTreeSet,
    convert::From,
    default::Default,
    fmt::{self, Debug, Display},
    io::Write,
};

use lexan::TokenStream;

/// A parse-time error: either the scanner could not classify the text at
/// the current position, or it did but the table has no action for the
/// resulting token in the current state.
#[derive(Debug, Clone)]
pub enum Error<T: Ord + Copy + Debug + Display + Eq> {
    LexicalError(lexan::TokenError<T>, BTreeSet<T>),
    SyntaxError(lexan::Token<T>, BTreeSet<T>),
}

fn format_set<T: Ord + Display>(set: &BTreeSet<T>) -> String {
    let mut string = String::new();
    let last = set.len().saturating_sub(1);
    for (index, item) in set.iter().enumerate() {
        if index == 0 {
            string += &item.to_string();
        } else {
            if index == last {
                string += " or ";
            } else {
                string += ", ";
            };
            string += &item.to_string()
        }
    }
    string
}

impl<T: Ord + Copy + Debug + Display + Eq> Display for Error<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::LexicalError(lex_err, expected) => write!(
                f,
                "lexical error: {}: expected: {}.",
                lex_err,
                format_set(expected)
            ),
            Error::SyntaxError(found, expected) => write!(
                f,
                "syntax error: expected: {} found: {} at: {}.",
                format_set(expected),
                found.tag(),
                found.location()
            ),
        }
    }
}

pub trait ReportError<T: Ord + Copy + Debug + Display + Eq> {
    fn report_error(&mut self, error: &Error<T>) {
        let message = error.to_string();
        std::io::stderr()
            .write_all(message.as_bytes())
            .expect("nowhere to go here");
    }
}

/// A grammar symbol as it appears on the parse stack: either a terminal
/// (carrying the scanner's token tag) or a non-terminal produced by a
/// reduction. `Start` marks the bottom-of-stack sentinel below state 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Symbol<T, N> {
    Terminal(T),
    NonTerminal(N),
    Start,
}

/// The shift/reduce driver's stack: entries alternate a `Symbol` with the
/// state id reached by shifting/goto-ing on it, matching the spec's I3
/// ("the parse stack alternates AST-node and state-id entries").
#[derive(Debug)]
pub struct ParseStack<T, N, A>
where
    T: Copy + Ord + Debug + Display,
{
    states: Vec<(Symbol<T, N>, u32)>,
    attributes: Vec<A>,
}

impl<T, N, A> ParseStack<T, N, A>
where
    T: Copy + Ord + Debug + Display,
{
    fn new() -> Self {
        Self {
            states: vec![(Symbol::Start, 0)],
            attributes: vec![],
        }
    }

    fn current_state(&self) -> u32 {
        self.states.last().unwrap().1
    }

    fn pop_n(&mut self, n: usize) -> Vec<A> {
        let len = self.states.len();
        self.states.truncate(len - n);
        let len = self.attributes.len();
        self.attributes.split_off(len - n)
    }

    fn push_terminal(&mut self, token: lexan::Token<T>, attribute: A, new_state: u32) {
        self.states
            .push((Symbol::Terminal(*token.tag()), new_state));
        self.attributes.push(attribute);
    }

    fn push_non_terminal(&mut self, non_terminal: N, attribute: A, new_state: u32) {
        self.attributes.push(attribute);
        self.states
            .push((Symbol::NonTerminal(non_terminal), new_state));
    }

    /// The single value left above the bottom-of-stack marker once parsing
    /// accepts (spec P2, "stack balance at accept").
    fn into_accepted(mut self) -> A {
        debug_assert_eq!(self.attributes.len(), 1);
        self.attributes.pop().unwrap()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Action {
    Shift(u32),
    Reduce(u32),
    Accept,
    Error,
}

/// Drives a table-based shift/reduce parse. Unlike a codegen'd parser whose
/// table is baked into match arms, implementors here hold a `ParseTable`
/// value (built once, at startup) and answer these queries against it.
///
/// There is no error-recovery support: spec.md's error-handling design
/// calls only for reporting the first rejecting token, not resynchronizing
/// and continuing.
pub trait Parser<T, N, A>
where
    T: Ord + Copy + Debug + Display,
    N: Ord + Display + Debug,
    Self: ReportError<T>,
{
    fn lexical_analyzer(&self) -> &lexan::LexicalAnalyzer<T>;
    fn next_action(&self, state: u32, token: &lexan::Token<T>) -> Action;
    fn production_data(&self, production_id: u32) -> (N, usize);
    fn goto_state(&self, lhs: &N, current_state: u32) -> u32;
    fn look_ahead_set(&self, state: u32) -> BTreeSet<T>;

    /// Builds the attribute for a shifted terminal from its token.
    fn shift_attribute(&self, token: &lexan::Token<T>) -> A;
    /// Builds the attribute for a reduction from its (in source order)
    /// children's attributes.
    fn reduce_attribute(&self, production_id: u32, rhs: Vec<A>) -> A;

    fn parse_text(&mut self, text: String, label: String) -> Result<A, Error<T>> {
        let mut tokens = self.lexical_analyzer().token_stream(text, label);
        let mut parse_stack = ParseStack::<T, N, A>::new();

        loop {
            match tokens.front() {
                Err(err) => {
                    let expected_tokens = self.look_ahead_set(parse_stack.current_state());
                    let error = Error::LexicalError(err, expected_tokens);
                    self.report_error(&error);
                    return Err(error);
                }
                Ok(token) => match self.next_action(parse_stack.current_state(), &token) {
                    Action::Accept => return Ok(parse_stack.into_accepted()),
                    Action::Shift(next_state) => {
                        let attribute = self.shift_attribute(&token);
                        parse_stack.push_terminal(token, attribute, next_state);
                        tokens.advance();
                    }
                    Action::Reduce(production_id) => {
                        let (lhs, rhs_len) = self.production_data(production_id);
                        let rhs = parse_stack.pop_n(rhs_len);
                        let next_state = self.goto_state(&lhs, parse_stack.current_state());
                        let attribute = self.reduce_attribute(production_id, rhs);
                        parse_stack.push_non_terminal(lhs, attribute, next_state);
                    }
                    Action::Error => {
                        let expected_tokens = self.look_ahead_set(parse_stack.current_state());
                        let error = Error::SyntaxError(token.clone(), expected_tokens);
                        self.report_error(&error);
                        return Err(error);
                    }
                },
            };
        }
    }
}
