//! The concrete C lexicon (spec.md section 6, "Scanner interface"):
//! keywords and punctuators as a literal table, identifiers/integer/string/
//! character constants as a regex table, whitespace and `/* ... */`
//! comments as skip rules. This is the scanner the core consumes as an
//! opaque token iterator (spec.md section 1 scopes the scanner out of the
//! core; this module supplies a concrete one so the workspace runs end to
//! end, grounded on `examples/original_source/src/scanner.c`'s reserved
//! word table and multi-character punctuator handling).

use lazy_static::lazy_static;

use crate::symbol::Terminal::{self, *};

const KEYWORDS: &[(Terminal, &str)] = &[
    (KwVoid, "void"),
    (KwChar, "char"),
    (KwShort, "short"),
    (KwInt, "int"),
    (KwLong, "long"),
    (KwFloat, "float"),
    (KwDouble, "double"),
    (KwSigned, "signed"),
    (KwUnsigned, "unsigned"),
    (KwAuto, "auto"),
    (KwRegister, "register"),
    (KwStatic, "static"),
    (KwExtern, "extern"),
    (KwTypedef, "typedef"),
    (KwConst, "const"),
    (KwVolatile, "volatile"),
    (KwStruct, "struct"),
    (KwUnion, "union"),
    (KwEnum, "enum"),
    (KwIf, "if"),
    (KwElse, "else"),
    (KwSwitch, "switch"),
    (KwCase, "case"),
    (KwDefault, "default"),
    (KwFor, "for"),
    (KwDo, "do"),
    (KwWhile, "while"),
    (KwGoto, "goto"),
    (KwContinue, "continue"),
    (KwBreak, "break"),
    (KwReturn, "return"),
];

/// Punctuators and operators. Order is irrelevant: `lexan`'s literal
/// matcher always prefers the longest match (e.g. `>>=` over `>>` over
/// `>`), so `...` and `.`, `>>=`/`>>`/`>=`/`>` etc. never need hand-written
/// lookahead the way `scanner.c` has it.
const PUNCTUATORS: &[(Terminal, &str)] = &[
    (LParen, "("),
    (RParen, ")"),
    (LBracket, "["),
    (RBracket, "]"),
    (LBrace, "{"),
    (RBrace, "}"),
    (Semicolon, ";"),
    (Comma, ","),
    (Colon, ":"),
    (Question, "?"),
    (Ellipsis, "..."),
    (Dot, "."),
    (PlusPlus, "++"),
    (PlusEq, "+="),
    (Plus, "+"),
    (MinusMinus, "--"),
    (MinusEq, "-="),
    (Arrow, "->"),
    (Minus, "-"),
    (StarEq, "*="),
    (Star, "*"),
    (SlashEq, "/="),
    (Slash, "/"),
    (PercentEq, "%="),
    (Percent, "%"),
    (AmpAmp, "&&"),
    (AmpEq, "&="),
    (Amp, "&"),
    (PipePipe, "||"),
    (PipeEq, "|="),
    (Pipe, "|"),
    (CaretEq, "^="),
    (Caret, "^"),
    (Tilde, "~"),
    (EqEq, "=="),
    (Equal, "="),
    (NotEq, "!="),
    (Bang, "!"),
    (LtEq, "<="),
    (ShiftLeftEq, "<<="),
    (ShiftLeft, "<<"),
    (Lt, "<"),
    (GtEq, ">="),
    (ShiftRightEq, ">>="),
    (ShiftRight, ">>"),
    (Gt, ">"),
];

const REGEXES: &[(Terminal, &str)] = &[
    (Identifier, r"\A[A-Za-z_][A-Za-z0-9_]*"),
    (IntegerConstant, r"\A[0-9]+"),
    (StringConstant, r#"\A"[^"]*""#),
    (CharacterConstant, r"\A'([^'\\]|\\.)'"),
];

const SKIP_RULES: &[&str] = &[r"\A[ \t\n\r]+", r"\A/\*([^*]|\*[^/])*\*/"];

lazy_static! {
    static ref LITERALS: Vec<(Terminal, &'static str)> =
        KEYWORDS.iter().chain(PUNCTUATORS.iter()).copied().collect();
    pub static ref LEXICAL_ANALYZER: lexan::LexicalAnalyzer<Terminal> =
        lexan::LexicalAnalyzer::new(&LITERALS, REGEXES, SKIP_RULES, Eof)
            .expect("the C lexicon's literal/regex tables are well-formed");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<Terminal> {
        let mut stream = LEXICAL_ANALYZER.token_stream(text.to_string(), "test".to_string());
        let mut out = Vec::new();
        loop {
            let token = stream.front().expect("no lexical errors in this input");
            let tag = *token.tag();
            out.push(tag);
            if tag == Eof {
                break;
            }
            stream.advance();
        }
        out
    }

    #[test]
    fn keywords_beat_identifier_regex() {
        assert_eq!(tags("int"), vec![KwInt, Eof]);
    }

    #[test]
    fn longest_match_wins_for_compound_operators() {
        assert_eq!(tags(">>="), vec![ShiftRightEq, Eof]);
        assert_eq!(tags(">>"), vec![ShiftRight, Eof]);
        assert_eq!(tags(">="), vec![GtEq, Eof]);
        assert_eq!(tags(">"), vec![Gt, Eof]);
        assert_eq!(tags("..."), vec![Ellipsis, Eof]);
        assert_eq!(tags("."), vec![Dot, Eof]);
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        assert_eq!(tags("  int /* comment */ x ;"), vec![KwInt, Identifier, Semicolon, Eof]);
    }

    #[test]
    fn string_and_integer_literals() {
        assert_eq!(tags(r#""hi" 42"#), vec![StringConstant, IntegerConstant, Eof]);
    }

    #[test]
    fn simple_declaration_tokenizes_in_order() {
        assert_eq!(
            tags("int x;"),
            vec![KwInt, Identifier, Semicolon, Eof]
        );
    }
}
