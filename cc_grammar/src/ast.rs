//! The AST node the shift/reduce driver builds (spec.md 3, "AST node").
//! Leaves carry their originating token; internal nodes carry their
//! children in source order, matching each reduced rule's body (spec.md
//! P3, "Reduction shape").

use crate::symbol::{NonTerminal, Symbol, Terminal};

#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    pub kind: Symbol,
    pub children: Vec<Ast>,
    pub token: Option<lexan::Token<Terminal>>,
}

impl Ast {
    pub fn leaf(token: lexan::Token<Terminal>) -> Self {
        Self {
            kind: Symbol::Terminal(*token.tag()),
            children: Vec::new(),
            token: Some(token),
        }
    }

    pub fn node(kind: NonTerminal, children: Vec<Ast>) -> Self {
        Self {
            kind: Symbol::NonTerminal(kind),
            children,
            token: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.token.is_some()
    }

    /// An s-expression dump in source order, e.g.
    /// `(declaration (declaration-specifiers INT) SEMI)`.
    pub fn to_sexpr(&self) -> String {
        if let Some(token) = &self.token {
            if token.lexeme().is_empty() {
                self.kind.to_string()
            } else {
                format!("{}:{}", self.kind, token.lexeme())
            }
        } else {
            let mut out = format!("({}", self.kind);
            for child in &self.children {
                out.push(' ');
                out.push_str(&child.to_sexpr());
            }
            out.push(')');
            out
        }
    }

    /// Every token-carrying leaf, in source (left-to-right) order (spec.md
    /// P5, "Coverage").
    pub fn leaves(&self) -> Vec<&Ast> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Ast>) {
        if self.is_leaf() {
            out.push(self);
        } else {
            for child in &self.children {
                child.collect_leaves(out);
            }
        }
    }
}
