//! The terminal and non-terminal universe of the K&R C grammar (spec.md
//! section 3, "Symbol"). `Terminal` covers every token kind the scanner can
//! produce; `NonTerminal` covers every production head. `Symbol` is the
//! tagged union of the two, partitioned by the `Invalid` sentinel so that
//! `symbol.column() < NUM_TERMINALS` identifies a terminal and anything
//! past `NUM_TERMINALS` identifies a non-terminal; `NUM_TERMINALS` itself
//! is never a legitimate column for a shift (no rule body contains
//! `Invalid`) and doubles as the end-of-input ("$") lookahead column.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(usize)]
pub enum Terminal {
    // Keywords
    KwVoid,
    KwChar,
    KwShort,
    KwInt,
    KwLong,
    KwFloat,
    KwDouble,
    KwSigned,
    KwUnsigned,
    KwAuto,
    KwRegister,
    KwStatic,
    KwExtern,
    KwTypedef,
    KwConst,
    KwVolatile,
    KwStruct,
    KwUnion,
    KwEnum,
    KwIf,
    KwElse,
    KwSwitch,
    KwCase,
    KwDefault,
    KwFor,
    KwDo,
    KwWhile,
    KwGoto,
    KwContinue,
    KwBreak,
    KwReturn,
    // Punctuators
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Colon,
    Question,
    Dot,
    Ellipsis,
    // Operators (longest-match order does not matter; the literal matcher
    // always prefers the longest match regardless of table order)
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Bang,
    Equal,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    ShiftLeft,
    ShiftRight,
    AmpAmp,
    PipePipe,
    PlusPlus,
    MinusMinus,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    ShiftLeftEq,
    ShiftRightEq,
    AmpEq,
    PipeEq,
    CaretEq,
    Arrow,
    // Literal-bearing terminals
    Identifier,
    IntegerConstant,
    CharacterConstant,
    StringConstant,
    /// The end-of-input sentinel the scanner emits once the text is
    /// exhausted (spec.md section 6, "terminated by an end-of-input
    /// token"). Placed last so its discriminant equals `NUM_TERMINALS`,
    /// i.e. `Eof.column() == INVALID_COLUMN`: the same "$" column spec.md
    /// 4.E describes, reached here via the ordinary `Symbol::column`
    /// machinery instead of a separate sentinel value.
    Eof,
}

/// Excludes `Eof`: this is the count of terminals the scanner can produce
/// from real source text, and the table's "$" column sits one past it.
pub const NUM_TERMINALS: usize = Terminal::StringConstant as usize + 1;

impl Terminal {
    pub const ALL: &'static [Terminal] = &[
        Terminal::KwVoid,
        Terminal::KwChar,
        Terminal::KwShort,
        Terminal::KwInt,
        Terminal::KwLong,
        Terminal::KwFloat,
        Terminal::KwDouble,
        Terminal::KwSigned,
        Terminal::KwUnsigned,
        Terminal::KwAuto,
        Terminal::KwRegister,
        Terminal::KwStatic,
        Terminal::KwExtern,
        Terminal::KwTypedef,
        Terminal::KwConst,
        Terminal::KwVolatile,
        Terminal::KwStruct,
        Terminal::KwUnion,
        Terminal::KwEnum,
        Terminal::KwIf,
        Terminal::KwElse,
        Terminal::KwSwitch,
        Terminal::KwCase,
        Terminal::KwDefault,
        Terminal::KwFor,
        Terminal::KwDo,
        Terminal::KwWhile,
        Terminal::KwGoto,
        Terminal::KwContinue,
        Terminal::KwBreak,
        Terminal::KwReturn,
        Terminal::LParen,
        Terminal::RParen,
        Terminal::LBracket,
        Terminal::RBracket,
        Terminal::LBrace,
        Terminal::RBrace,
        Terminal::Semicolon,
        Terminal::Comma,
        Terminal::Colon,
        Terminal::Question,
        Terminal::Dot,
        Terminal::Ellipsis,
        Terminal::Plus,
        Terminal::Minus,
        Terminal::Star,
        Terminal::Slash,
        Terminal::Percent,
        Terminal::Amp,
        Terminal::Pipe,
        Terminal::Caret,
        Terminal::Tilde,
        Terminal::Bang,
        Terminal::Equal,
        Terminal::EqEq,
        Terminal::NotEq,
        Terminal::Lt,
        Terminal::Gt,
        Terminal::LtEq,
        Terminal::GtEq,
        Terminal::ShiftLeft,
        Terminal::ShiftRight,
        Terminal::AmpAmp,
        Terminal::PipePipe,
        Terminal::PlusPlus,
        Terminal::MinusMinus,
        Terminal::PlusEq,
        Terminal::MinusEq,
        Terminal::StarEq,
        Terminal::SlashEq,
        Terminal::PercentEq,
        Terminal::ShiftLeftEq,
        Terminal::ShiftRightEq,
        Terminal::AmpEq,
        Terminal::PipeEq,
        Terminal::CaretEq,
        Terminal::Arrow,
        Terminal::Identifier,
        Terminal::IntegerConstant,
        Terminal::CharacterConstant,
        Terminal::StringConstant,
    ];

    pub fn column(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        use Terminal::*;
        match self {
            KwVoid => "void",
            KwChar => "char",
            KwShort => "short",
            KwInt => "int",
            KwLong => "long",
            KwFloat => "float",
            KwDouble => "double",
            KwSigned => "signed",
            KwUnsigned => "unsigned",
            KwAuto => "auto",
            KwRegister => "register",
            KwStatic => "static",
            KwExtern => "extern",
            KwTypedef => "typedef",
            KwConst => "const",
            KwVolatile => "volatile",
            KwStruct => "struct",
            KwUnion => "union",
            KwEnum => "enum",
            KwIf => "if",
            KwElse => "else",
            KwSwitch => "switch",
            KwCase => "case",
            KwDefault => "default",
            KwFor => "for",
            KwDo => "do",
            KwWhile => "while",
            KwGoto => "goto",
            KwContinue => "continue",
            KwBreak => "break",
            KwReturn => "return",
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            LBrace => "{",
            RBrace => "}",
            Semicolon => ";",
            Comma => ",",
            Colon => ":",
            Question => "?",
            Dot => ".",
            Ellipsis => "...",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",
            Amp => "&",
            Pipe => "|",
            Caret => "^",
            Tilde => "~",
            Bang => "!",
            Equal => "=",
            EqEq => "==",
            NotEq => "!=",
            Lt => "<",
            Gt => ">",
            LtEq => "<=",
            GtEq => ">=",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            AmpAmp => "&&",
            PipePipe => "||",
            PlusPlus => "++",
            MinusMinus => "--",
            PlusEq => "+=",
            MinusEq => "-=",
            StarEq => "*=",
            SlashEq => "/=",
            PercentEq => "%=",
            ShiftLeftEq => "<<=",
            ShiftRightEq => ">>=",
            AmpEq => "&=",
            PipeEq => "|=",
            CaretEq => "^=",
            Arrow => "->",
            Identifier => "IDENTIFIER",
            IntegerConstant => "INTEGER_CONSTANT",
            CharacterConstant => "CHARACTER_CONSTANT",
            StringConstant => "STRING_CONSTANT",
            Eof => "$",
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(usize)]
pub enum NonTerminal {
    TranslationUnit,
    ExternalDeclaration,
    FunctionDefinition,
    Declaration,
    DeclarationList,
    DeclarationSpecifiers,
    StorageClassSpecifier,
    TypeSpecifier,
    TypeQualifier,
    StructOrUnionSpecifier,
    StructOrUnion,
    StructDeclarationList,
    InitDeclaratorList,
    InitDeclarator,
    StructDeclaration,
    SpecifierQualifierList,
    StructDeclaratorList,
    StructDeclarator,
    EnumSpecifier,
    EnumeratorList,
    Enumerator,
    Declarator,
    DirectDeclarator,
    Pointer,
    TypeQualifierList,
    ParameterTypeList,
    ParameterList,
    ParameterDeclaration,
    IdentifierList,
    Initializer,
    InitializerList,
    TypeName,
    AbstractDeclarator,
    DirectAbstractDeclarator,
    Statement,
    LabeledStatement,
    ExpressionStatement,
    CompoundStatement,
    StatementList,
    SelectionStatement,
    IterationStatement,
    JumpStatement,
    Expression,
    AssignmentExpression,
    ConstantExpression,
    ConditionalExpression,
    LogicalOrExpression,
    LogicalAndExpression,
    InclusiveOrExpression,
    ExclusiveOrExpression,
    AndExpression,
    EqualityExpression,
    RelationalExpression,
    ShiftExpression,
    AdditiveExpression,
    MultiplicativeExpression,
    CastExpression,
    UnaryExpression,
    PostfixExpression,
    PrimaryExpression,
    Constant,
    /// The augmenting start symbol (spec.md 3, "state 0 ... containing the
    /// closure of `{(S' -> . S, {$})}`"). Rule 0's head; never appears in
    /// any other rule's body, so it gets a table column like any other
    /// non-terminal but that column is never consulted by `goto_state`.
    AAStart,
}

pub const NUM_NON_TERMINALS: usize = NonTerminal::AAStart as usize + 1;

impl NonTerminal {
    pub fn name(self) -> &'static str {
        use NonTerminal::*;
        match self {
            TranslationUnit => "translation-unit",
            ExternalDeclaration => "external-declaration",
            FunctionDefinition => "function-definition",
            Declaration => "declaration",
            DeclarationList => "declaration-list",
            DeclarationSpecifiers => "declaration-specifiers",
            StorageClassSpecifier => "storage-class-specifier",
            TypeSpecifier => "type-specifier",
            TypeQualifier => "type-qualifier",
            StructOrUnionSpecifier => "struct-or-union-specifier",
            StructOrUnion => "struct-or-union",
            StructDeclarationList => "struct-declaration-list",
            InitDeclaratorList => "init-declarator-list",
            InitDeclarator => "init-declarator",
            StructDeclaration => "struct-declaration",
            SpecifierQualifierList => "specifier-qualifier-list",
            StructDeclaratorList => "struct-declarator-list",
            StructDeclarator => "struct-declarator",
            EnumSpecifier => "enum-specifier",
            EnumeratorList => "enumerator-list",
            Enumerator => "enumerator",
            Declarator => "declarator",
            DirectDeclarator => "direct-declarator",
            Pointer => "pointer",
            TypeQualifierList => "type-qualifier-list",
            ParameterTypeList => "parameter-type-list",
            ParameterList => "parameter-list",
            ParameterDeclaration => "parameter-declaration",
            IdentifierList => "identifier-list",
            Initializer => "initializer",
            InitializerList => "initializer-list",
            TypeName => "type-name",
            AbstractDeclarator => "abstract-declarator",
            DirectAbstractDeclarator => "direct-abstract-declarator",
            Statement => "statement",
            LabeledStatement => "labeled-statement",
            ExpressionStatement => "expression-statement",
            CompoundStatement => "compound-statement",
            StatementList => "statement-list",
            SelectionStatement => "selection-statement",
            IterationStatement => "iteration-statement",
            JumpStatement => "jump-statement",
            Expression => "expression",
            AssignmentExpression => "assignment-expression",
            ConstantExpression => "constant-expression",
            ConditionalExpression => "conditional-expression",
            LogicalOrExpression => "logical-or-expression",
            LogicalAndExpression => "logical-and-expression",
            InclusiveOrExpression => "inclusive-or-expression",
            ExclusiveOrExpression => "exclusive-or-expression",
            AndExpression => "and-expression",
            EqualityExpression => "equality-expression",
            RelationalExpression => "relational-expression",
            ShiftExpression => "shift-expression",
            AdditiveExpression => "additive-expression",
            MultiplicativeExpression => "multiplicative-expression",
            CastExpression => "cast-expression",
            UnaryExpression => "unary-expression",
            PostfixExpression => "postfix-expression",
            PrimaryExpression => "primary-expression",
            Constant => "constant",
            AAStart => "AAStart",
        }
    }

    /// Column in the dense parse table: non-terminal columns follow all
    /// terminal columns plus the `Invalid`/"$" sentinel column.
    pub fn column(self) -> usize {
        NUM_TERMINALS + 1 + self as usize
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The `Invalid` sentinel's column: one past the last terminal. It is the
/// end-of-input ("$") lookahead column and is never a legitimate shift
/// column (spec.md 4.E).
pub const INVALID_COLUMN: usize = NUM_TERMINALS;

pub const NUM_COLUMNS: usize = NUM_TERMINALS + 1 + NUM_NON_TERMINALS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl Symbol {
    pub fn column(self) -> usize {
        match self {
            Symbol::Terminal(t) => t.column(),
            Symbol::NonTerminal(n) => n.column(),
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn as_terminal(self) -> Option<Terminal> {
        match self {
            Symbol::Terminal(t) => Some(t),
            Symbol::NonTerminal(_) => None,
        }
    }

    pub fn as_non_terminal(self) -> Option<NonTerminal> {
        match self {
            Symbol::NonTerminal(n) => Some(n),
            Symbol::Terminal(_) => None,
        }
    }
}

impl From<Terminal> for Symbol {
    fn from(t: Terminal) -> Self {
        Symbol::Terminal(t)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(n: NonTerminal) -> Self {
        Symbol::NonTerminal(n)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Terminal(t) => write!(f, "{}", t),
            Symbol::NonTerminal(n) => write!(f, "{}", n),
        }
    }
}
