mod analyzer;
mod error;
mod lexicon;
mod matcher;

pub use analyzer::{Location, Token, TokenStream};
pub use error::LexanError as Error;
pub use lexicon::Lexicon;

/// Convenience alias mirroring `analyzer::Error<T>`, the per-token error
/// returned inline in a `TokenStream`'s `Result`s (distinct from `Error`,
/// which is returned by `Lexicon::new` when the lexeme table itself is
/// malformed).
pub type TokenError<T> = analyzer::Error<T>;

/// A lexical analyzer: an immutable, sharable lexeme table plus the
/// constructor for token streams over it. Kept separate from `Lexicon` so
/// callers build the table once (typically behind a `lazy_static!`) and
/// hand out `TokenStream`s cheaply via `Arc::clone`.
pub struct LexicalAnalyzer<T: std::fmt::Display + Copy + Eq + Ord + std::fmt::Debug> {
    lexicon: std::sync::Arc<Lexicon<T>>,
}

impl<T: std::fmt::Display + Copy + Eq + Ord + std::fmt::Debug> LexicalAnalyzer<T> {
    pub fn new<'a>(
        literal_lexemes: &[(T, &'a str)],
        regex_lexemes: &[(T, &'a str)],
        skip_regex_strs: &[&'a str],
        end_marker: T,
    ) -> Result<Self, Error<'a, T>> {
        let lexicon = Lexicon::new(literal_lexemes, regex_lexemes, skip_regex_strs, end_marker)?;
        Ok(Self {
            lexicon: std::sync::Arc::new(lexicon),
        })
    }

    pub fn token_stream(&self, text: String, label: String) -> TokenStream<T> {
        TokenStream::new(&self.lexicon, text, label)
    }
}
