use std::convert::From;
use std::fmt;

#[derive(Debug)]
pub enum LexanError<'a, H> {
    AmbiguousMatch(&'a str, Vec<H>),
    DuplicateHandle(H),
    DuplicatePattern(&'a str),
    EmptyPattern(H),
    RegexError(regex::Error),
    UnanchoredRegex(&'a str),
}

impl<'a, H> From<regex::Error> for LexanError<'a, H> {
    fn from(error: regex::Error) -> Self {
        LexanError::RegexError(error)
    }
}

impl<'a, H: fmt::Debug> fmt::Display for LexanError<'a, H> {
    fn fmt(&self, dest: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LexanError::AmbiguousMatch(text, handles) => {
                write!(dest, "ambiguous match {:?} for \"{}\"", handles, text)
            }
            LexanError::DuplicateHandle(handle) => write!(dest, "duplicate handle {:?}", handle),
            LexanError::DuplicatePattern(pattern) => {
                write!(dest, "duplicate pattern \"{}\"", pattern)
            }
            LexanError::EmptyPattern(handle) => write!(dest, "empty pattern for {:?}", handle),
            LexanError::RegexError(error) => write!(dest, "regex error: {}", error),
            LexanError::UnanchoredRegex(pattern) => {
                write!(dest, "pattern \"{}\" is not anchored with \\A", pattern)
            }
        }
    }
}
