//! Error types for the two failure kinds spec.md section 7 distinguishes:
//! a grammar conflict, fatal at table-build time, and a parse error,
//! returned at runtime from a specific input. Plain `Display`-implementing
//! enums, matching every error type in the teacher workspace (`lalr1::Error`,
//! `lexan::Error`) rather than reaching for `thiserror`/`anyhow`.

use std::fmt;

use crate::symbol::Terminal;

/// A REDUCE/REDUCE collision discovered while projecting the parse table
/// (spec.md 4.E). Not recoverable: a grammar that produces one is a
/// programming error in the grammar table, not a condition callers can act
/// on (spec.md I2). SHIFT/REDUCE collisions are not an error kind here:
/// they are resolved in favour of SHIFT while building the table (spec.md
/// 8 scenario 4's dangling-else), the universal convention every LR tool
/// applies for this exact ambiguity.
#[derive(Debug, Clone)]
pub struct GrammarError {
    pub state: u32,
    pub symbol: Terminal,
    pub first_rule: u32,
    pub second_rule: u32,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "reduce/reduce conflict in state {} on {}: rule {} vs rule {}",
            self.state, self.symbol, self.first_rule, self.second_rule
        )
    }
}

impl std::error::Error for GrammarError {}

/// Alias for the runtime parse error the shift/reduce driver returns;
/// `lalr1::Error` already carries exactly what spec.md section 7's "parse
/// error" kind calls for (offending token plus the valid-next-terminal
/// set).
pub type ParseError = lalr1::Error<Terminal>;
