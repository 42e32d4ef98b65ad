use std::fmt::Debug;

use crate::error::LexanError;
use crate::matcher::{LiteralMatcher, RegexMatcher, SkipMatcher};

/// Combines a literal table, a regular expression table and a set of skip
/// rules into the single lookup surface a `TokenStream` drives.
#[derive(Debug)]
pub struct Lexicon<H: Copy + Ord + Debug> {
    literal_matcher: LiteralMatcher<H>,
    regex_matcher: RegexMatcher<H>,
    skip_matcher: SkipMatcher,
    end_marker: H,
}

impl<H: Copy + Ord + Debug> Lexicon<H> {
    pub fn new<'a>(
        literal_lexemes: &[(H, &'a str)],
        regex_lexemes: &[(H, &'a str)],
        skip_regex_strs: &[&'a str],
        end_marker: H,
    ) -> Result<Self, LexanError<'a, H>> {
        let literal_matcher = LiteralMatcher::new(literal_lexemes)?;
        let regex_matcher = RegexMatcher::new(regex_lexemes)?;
        let skip_matcher = SkipMatcher::new(skip_regex_strs)?;
        Ok(Self {
            literal_matcher,
            regex_matcher,
            skip_matcher,
            end_marker,
        })
    }

    pub fn skippable_count(&self, text: &str) -> usize {
        self.skip_matcher.skippable_count(text)
    }

    pub fn longest_literal_match(&self, text: &str) -> Option<(H, usize)> {
        self.literal_matcher.longest_match(text)
    }

    pub fn longest_regex_matches(&self, text: &str) -> (Vec<H>, usize) {
        self.regex_matcher.longest_matches(text)
    }

    /// Distance (in bytes) to the next byte that could start a valid token,
    /// so an unexpected character can be skipped without losing the rest of
    /// the line. Conservatively skips a single byte at a time.
    pub fn distance_to_next_valid_byte(&self, text: &str) -> usize {
        let mut count = text.chars().next().map_or(0, char::len_utf8);
        if count == 0 {
            return 0;
        }
        loop {
            let rest = &text[count..];
            if rest.is_empty()
                || self.literal_matcher.longest_match(rest).is_some()
                || self.regex_matcher.matches(rest)
                || self.skip_matcher.skippable_count(rest) > 0
            {
                break;
            }
            count += rest.chars().next().map_or(1, char::len_utf8);
        }
        count
    }

    pub fn end_marker(&self) -> H {
        self.end_marker
    }
}
