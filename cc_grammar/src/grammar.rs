//! The K&R C grammar (spec.md section 4.A), transcribed production-by-
//! production from `dgkimura/scc`'s parser table, in the same order (rule
//! identity is positional). Five transcription bugs documented in
//! spec.md section 9 are corrected here, plus one further deviation
//! (`declaration` loses its bare `declaration-specifiers ';'` alternative)
//! forced by spec.md 8's scenario 6; see DESIGN.md for the grounding of
//! each. `type-specifier -> typedef-name` is omitted: typedef-name
//! disambiguation is an explicit non-goal and the scanner this workspace
//! ships never produces that token, so the alternative would be permanent
//! dead weight in the table.

use crate::symbol::{NonTerminal, Symbol, Terminal};

#[derive(Debug, Clone)]
pub struct Rule {
    pub head: NonTerminal,
    pub body: Vec<Symbol>,
}

/// Largest rule body length in the table (spec.md 3, "MAX_RHS ~= 9 suffices
/// for the C grammar"); checked once in `Grammar::new` rather than baked
/// into a fixed-size array the way the source stored rule bodies (spec.md
/// section 9's re-architecture guidance).
pub const MAX_RHS: usize = 9;

fn t(terminal: Terminal) -> Symbol {
    Symbol::Terminal(terminal)
}

fn n(non_terminal: NonTerminal) -> Symbol {
    Symbol::NonTerminal(non_terminal)
}

fn r(head: NonTerminal, body: Vec<Symbol>) -> Rule {
    Rule { head, body }
}

/// Grammar rules in stable, positional order. `rules()[i]` is rule `i`;
/// state construction, reduction, and error messages all refer to rules by
/// this index.
pub fn rules() -> Vec<Rule> {
    use NonTerminal::*;
    use Terminal::*;

    vec![
        // translation-unit:
        r(TranslationUnit, vec![n(ExternalDeclaration)]),
        r(TranslationUnit, vec![n(TranslationUnit), n(ExternalDeclaration)]),
        // external-declaration:
        r(ExternalDeclaration, vec![n(FunctionDefinition)]),
        r(ExternalDeclaration, vec![n(Declaration)]),
        // function-definition:
        r(FunctionDefinition, vec![n(Declarator), n(CompoundStatement)]),
        r(
            FunctionDefinition,
            vec![n(DeclarationSpecifiers), n(Declarator), n(CompoundStatement)],
        ),
        r(
            FunctionDefinition,
            vec![n(Declarator), n(DeclarationList), n(CompoundStatement)],
        ),
        r(
            FunctionDefinition,
            vec![
                n(DeclarationSpecifiers),
                n(Declarator),
                n(DeclarationList),
                n(CompoundStatement),
            ],
        ),
        // declaration: every declaration must declare something (corrected:
        // the source also allowed a bare `declaration-specifiers ';'`, e.g.
        // K&R's "struct S { ... };"; dropped so that `int ;` is a parse
        // error rather than a legal no-op declaration, per spec.md 8's
        // explicit scenario 6 — see DESIGN.md.)
        r(
            Declaration,
            vec![n(DeclarationSpecifiers), n(InitDeclaratorList), t(Semicolon)],
        ),
        // declaration-list:
        r(DeclarationList, vec![n(Declaration)]),
        r(DeclarationList, vec![n(DeclarationList), n(Declaration)]),
        // declaration-specifiers:
        r(DeclarationSpecifiers, vec![n(StorageClassSpecifier)]),
        r(
            DeclarationSpecifiers,
            vec![n(StorageClassSpecifier), n(DeclarationSpecifiers)],
        ),
        r(DeclarationSpecifiers, vec![n(TypeSpecifier)]),
        r(DeclarationSpecifiers, vec![n(TypeSpecifier), n(DeclarationSpecifiers)]),
        r(DeclarationSpecifiers, vec![n(TypeQualifier)]),
        r(DeclarationSpecifiers, vec![n(TypeQualifier), n(DeclarationSpecifiers)]),
        // storage-class-specifier:
        r(StorageClassSpecifier, vec![t(KwAuto)]),
        r(StorageClassSpecifier, vec![t(KwRegister)]),
        r(StorageClassSpecifier, vec![t(KwStatic)]),
        r(StorageClassSpecifier, vec![t(KwExtern)]),
        r(StorageClassSpecifier, vec![t(KwTypedef)]),
        // type-specifier:
        r(TypeSpecifier, vec![t(KwVoid)]),
        r(TypeSpecifier, vec![t(KwChar)]),
        r(TypeSpecifier, vec![t(KwShort)]),
        r(TypeSpecifier, vec![t(KwInt)]),
        r(TypeSpecifier, vec![t(KwLong)]),
        r(TypeSpecifier, vec![t(KwFloat)]),
        r(TypeSpecifier, vec![t(KwDouble)]),
        r(TypeSpecifier, vec![t(KwSigned)]),
        r(TypeSpecifier, vec![t(KwUnsigned)]),
        r(TypeSpecifier, vec![n(StructOrUnionSpecifier)]),
        r(TypeSpecifier, vec![n(EnumSpecifier)]),
        // type-qualifier:
        r(TypeQualifier, vec![t(KwConst)]),
        r(TypeQualifier, vec![t(KwVolatile)]),
        // struct-or-union-specifier:
        r(
            StructOrUnionSpecifier,
            vec![n(StructOrUnion), t(LBrace), n(StructDeclarationList), t(RBrace)],
        ),
        r(
            StructOrUnionSpecifier,
            vec![
                n(StructOrUnion),
                t(Identifier),
                t(LBrace),
                n(StructDeclarationList),
                t(RBrace),
            ],
        ),
        r(StructOrUnionSpecifier, vec![n(StructOrUnion), t(Identifier)]),
        // struct-or-union:
        r(StructOrUnion, vec![t(KwStruct)]),
        r(StructOrUnion, vec![t(KwUnion)]),
        // struct-declaration-list:
        r(StructDeclarationList, vec![n(StructDeclaration)]),
        r(StructDeclarationList, vec![n(StructDeclarationList), n(StructDeclaration)]),
        // init-declarator-list:
        r(InitDeclaratorList, vec![n(InitDeclarator)]),
        r(
            InitDeclaratorList,
            vec![n(InitDeclaratorList), t(Comma), n(InitDeclarator)],
        ),
        // init-declarator:
        r(InitDeclarator, vec![n(Declarator)]),
        r(InitDeclarator, vec![n(Declarator), t(Equal), n(Initializer)]),
        // struct-declaration: specifier-qualifier-list struct-declarator-list ';'
        // (corrected: the source referenced struct-declaration-list here,
        // which is the list of whole struct-declarations, not of the
        // declarators within one; K&R's struct-declarator-list is the
        // intended body symbol.)
        r(
            StructDeclaration,
            vec![n(SpecifierQualifierList), n(StructDeclaratorList), t(Semicolon)],
        ),
        // specifier-qualifier-list:
        r(SpecifierQualifierList, vec![n(TypeSpecifier)]),
        r(SpecifierQualifierList, vec![n(TypeSpecifier), n(SpecifierQualifierList)]),
        r(SpecifierQualifierList, vec![n(TypeQualifier)]),
        r(SpecifierQualifierList, vec![n(TypeQualifier), n(SpecifierQualifierList)]),
        // struct-declarator-list: (corrected: the source mislabeled this
        // group's head as struct-declaration-list, colliding with the
        // group above; K&R distinguishes the two nonterminals.)
        r(StructDeclaratorList, vec![n(StructDeclarator)]),
        r(
            StructDeclaratorList,
            vec![n(StructDeclaratorList), t(Comma), n(StructDeclarator)],
        ),
        // struct-declarator:
        r(StructDeclarator, vec![n(Declarator)]),
        r(StructDeclarator, vec![t(Colon), n(ConstantExpression)]),
        r(
            StructDeclarator,
            vec![n(Declarator), t(Colon), n(ConstantExpression)],
        ),
        // enum-specifier: (corrected: the source closed both brace forms on
        // AST_RBRACKET; K&R closes a brace-delimited list with '}'.)
        r(EnumSpecifier, vec![t(KwEnum), t(Identifier)]),
        r(
            EnumSpecifier,
            vec![t(KwEnum), t(LBrace), n(EnumeratorList), t(RBrace)],
        ),
        r(
            EnumSpecifier,
            vec![t(KwEnum), t(Identifier), t(LBrace), n(EnumeratorList), t(RBrace)],
        ),
        // enumerator-list:
        r(EnumeratorList, vec![n(Enumerator)]),
        r(EnumeratorList, vec![n(EnumeratorList), t(Comma), n(Enumerator)]),
        // enumerator:
        r(Enumerator, vec![t(Identifier)]),
        r(Enumerator, vec![t(Identifier), t(Equal), n(ConstantExpression)]),
        // declarator:
        r(Declarator, vec![n(DirectDeclarator)]),
        r(Declarator, vec![n(Pointer), n(DirectDeclarator)]),
        // direct-declarator:
        r(DirectDeclarator, vec![t(Identifier)]),
        r(DirectDeclarator, vec![t(LParen), n(Declarator), t(RParen)]),
        r(DirectDeclarator, vec![n(DirectDeclarator), t(LBracket), t(RBracket)]),
        r(
            DirectDeclarator,
            vec![n(DirectDeclarator), t(LBracket), n(ConstantExpression), t(RBracket)],
        ),
        r(DirectDeclarator, vec![n(DirectDeclarator), t(LParen), t(RParen)]),
        r(
            DirectDeclarator,
            vec![n(DirectDeclarator), t(LParen), n(ParameterTypeList), t(RParen)],
        ),
        r(
            DirectDeclarator,
            vec![n(DirectDeclarator), t(LParen), n(IdentifierList), t(RParen)],
        ),
        // pointer:
        r(Pointer, vec![t(Star)]),
        r(Pointer, vec![t(Star), n(TypeQualifierList)]),
        r(Pointer, vec![t(Star), n(Pointer)]),
        r(Pointer, vec![t(Star), n(TypeQualifierList), n(Pointer)]),
        // type-qualifier-list:
        r(TypeQualifierList, vec![n(TypeQualifier)]),
        r(TypeQualifierList, vec![n(TypeQualifierList), n(TypeQualifier)]),
        // parameter-type-list:
        r(ParameterTypeList, vec![n(ParameterList)]),
        r(ParameterTypeList, vec![n(ParameterList), t(Comma), t(Ellipsis)]),
        // parameter-list:
        r(ParameterList, vec![n(ParameterDeclaration)]),
        r(ParameterList, vec![n(ParameterList), t(Comma), n(ParameterDeclaration)]),
        // parameter-declaration:
        r(ParameterDeclaration, vec![n(DeclarationSpecifiers), n(Declarator)]),
        r(
            ParameterDeclaration,
            vec![n(DeclarationSpecifiers), n(AbstractDeclarator)],
        ),
        r(ParameterDeclaration, vec![n(DeclarationSpecifiers)]),
        // identifier-list:
        r(IdentifierList, vec![t(Identifier)]),
        r(IdentifierList, vec![n(IdentifierList), t(Comma), t(Identifier)]),
        // initializer:
        r(Initializer, vec![n(AssignmentExpression)]),
        r(Initializer, vec![t(LBrace), n(InitializerList), t(RBrace)]),
        r(Initializer, vec![t(LBrace), n(InitializerList), t(Comma), t(RBrace)]),
        // initializer-list:
        r(InitializerList, vec![n(Initializer)]),
        r(InitializerList, vec![n(InitializerList), t(Comma), n(Initializer)]),
        // type-name: specifier-qualifier-list [abstract-declarator]
        // (corrected: the source labeled the two-symbol alternative's head
        // as abstract-declarator, colliding with the next group below; K&R
        // has both arities of type-name under the one nonterminal.)
        r(TypeName, vec![n(SpecifierQualifierList)]),
        r(TypeName, vec![n(SpecifierQualifierList), n(AbstractDeclarator)]),
        // abstract-declarator:
        r(AbstractDeclarator, vec![n(Pointer)]),
        r(AbstractDeclarator, vec![n(DirectAbstractDeclarator)]),
        r(AbstractDeclarator, vec![n(Pointer), n(DirectAbstractDeclarator)]),
        // direct-abstract-declarator:
        r(
            DirectAbstractDeclarator,
            vec![t(LParen), n(AbstractDeclarator), t(RParen)],
        ),
        r(DirectAbstractDeclarator, vec![t(LBracket), t(RBracket)]),
        r(
            DirectAbstractDeclarator,
            vec![n(DirectAbstractDeclarator), t(LBracket), t(RBracket)],
        ),
        r(
            DirectAbstractDeclarator,
            vec![t(LBracket), n(ConstantExpression), t(RBracket)],
        ),
        r(
            DirectAbstractDeclarator,
            vec![
                n(DirectAbstractDeclarator),
                t(LBracket),
                n(ConstantExpression),
                t(RBracket),
            ],
        ),
        r(DirectAbstractDeclarator, vec![t(LParen), t(RParen)]),
        r(
            DirectAbstractDeclarator,
            vec![n(DirectAbstractDeclarator), t(LParen), t(RParen)],
        ),
        r(
            DirectAbstractDeclarator,
            vec![t(LParen), n(ParameterTypeList), t(RParen)],
        ),
        r(
            DirectAbstractDeclarator,
            vec![
                n(DirectAbstractDeclarator),
                t(LParen),
                n(ParameterTypeList),
                t(RParen),
            ],
        ),
        // statement:
        r(Statement, vec![n(LabeledStatement)]),
        r(Statement, vec![n(ExpressionStatement)]),
        r(Statement, vec![n(CompoundStatement)]),
        r(Statement, vec![n(SelectionStatement)]),
        r(Statement, vec![n(IterationStatement)]),
        r(Statement, vec![n(JumpStatement)]),
        // labeled-statement:
        r(LabeledStatement, vec![t(Identifier), t(Colon), n(Statement)]),
        r(
            LabeledStatement,
            vec![t(KwCase), n(ConstantExpression), t(Colon), n(Statement)],
        ),
        r(LabeledStatement, vec![t(KwDefault), t(Colon), n(Statement)]),
        // expression-statement:
        r(ExpressionStatement, vec![t(Semicolon)]),
        r(ExpressionStatement, vec![n(Expression), t(Semicolon)]),
        // compound-statement:
        r(CompoundStatement, vec![t(LBrace), t(RBrace)]),
        r(CompoundStatement, vec![t(LBrace), n(DeclarationList), t(RBrace)]),
        r(CompoundStatement, vec![t(LBrace), n(StatementList), t(RBrace)]),
        r(
            CompoundStatement,
            vec![t(LBrace), n(DeclarationList), n(StatementList), t(RBrace)],
        ),
        // statement-list:
        r(StatementList, vec![n(StatementList), n(Statement)]),
        r(StatementList, vec![n(Statement)]),
        // selection-statement:
        r(
            SelectionStatement,
            vec![t(KwIf), t(LParen), n(Expression), t(RParen), n(Statement)],
        ),
        r(
            SelectionStatement,
            vec![
                t(KwIf),
                t(LParen),
                n(Expression),
                t(RParen),
                n(Statement),
                t(KwElse),
                n(Statement),
            ],
        ),
        r(
            SelectionStatement,
            vec![t(KwSwitch), t(LParen), n(Expression), t(RParen), n(Statement)],
        ),
        // iteration-statement:
        r(
            IterationStatement,
            vec![t(KwWhile), t(LParen), n(Expression), t(RParen), n(Statement)],
        ),
        r(
            IterationStatement,
            vec![
                t(KwDo),
                n(Statement),
                t(KwWhile),
                t(LParen),
                n(Expression),
                t(RParen),
                t(Semicolon),
            ],
        ),
        r(
            IterationStatement,
            vec![t(KwFor), t(LParen), t(Semicolon), t(Semicolon), t(RParen), n(Statement)],
        ),
        r(
            IterationStatement,
            vec![
                t(KwFor),
                t(LParen),
                n(Expression),
                t(Semicolon),
                t(Semicolon),
                t(RParen),
                n(Statement),
            ],
        ),
        r(
            IterationStatement,
            vec![
                t(KwFor),
                t(LParen),
                t(Semicolon),
                n(Expression),
                t(Semicolon),
                t(RParen),
                n(Statement),
            ],
        ),
        r(
            IterationStatement,
            vec![
                t(KwFor),
                t(LParen),
                t(Semicolon),
                t(Semicolon),
                n(Expression),
                t(RParen),
                n(Statement),
            ],
        ),
        r(
            IterationStatement,
            vec![
                t(KwFor),
                t(LParen),
                n(Expression),
                t(Semicolon),
                n(Expression),
                t(Semicolon),
                t(RParen),
                n(Statement),
            ],
        ),
        r(
            IterationStatement,
            vec![
                t(KwFor),
                t(LParen),
                n(Expression),
                t(Semicolon),
                t(Semicolon),
                n(Expression),
                t(RParen),
                n(Statement),
            ],
        ),
        r(
            IterationStatement,
            vec![
                t(KwFor),
                t(LParen),
                t(Semicolon),
                n(Expression),
                t(Semicolon),
                n(Expression),
                t(RParen),
                n(Statement),
            ],
        ),
        r(
            IterationStatement,
            vec![
                t(KwFor),
                t(LParen),
                n(Expression),
                t(Semicolon),
                n(Expression),
                t(Semicolon),
                n(Expression),
                t(RParen),
                n(Statement),
            ],
        ),
        // jump-statement:
        r(JumpStatement, vec![t(KwGoto), t(Identifier), t(Semicolon)]),
        r(JumpStatement, vec![t(KwContinue), t(Semicolon)]),
        r(JumpStatement, vec![t(KwBreak), t(Semicolon)]),
        r(JumpStatement, vec![t(KwReturn), t(Semicolon)]),
        r(JumpStatement, vec![t(KwReturn), n(Expression), t(Semicolon)]),
        // expression:
        r(Expression, vec![n(Expression), t(Comma), n(AssignmentExpression)]),
        r(Expression, vec![n(AssignmentExpression)]),
        // assignment-expression: full K&R compound-assignment set
        // (corrected: the source implemented only six of eleven operators)
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(Equal), n(AssignmentExpression)],
        ),
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(StarEq), n(AssignmentExpression)],
        ),
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(SlashEq), n(AssignmentExpression)],
        ),
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(PercentEq), n(AssignmentExpression)],
        ),
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(PlusEq), n(AssignmentExpression)],
        ),
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(MinusEq), n(AssignmentExpression)],
        ),
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(ShiftLeftEq), n(AssignmentExpression)],
        ),
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(ShiftRightEq), n(AssignmentExpression)],
        ),
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(AmpEq), n(AssignmentExpression)],
        ),
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(CaretEq), n(AssignmentExpression)],
        ),
        r(
            AssignmentExpression,
            vec![n(UnaryExpression), t(PipeEq), n(AssignmentExpression)],
        ),
        r(AssignmentExpression, vec![n(ConditionalExpression)]),
        // constant-expression:
        r(ConstantExpression, vec![n(ConditionalExpression)]),
        // conditional-expression:
        r(
            ConditionalExpression,
            vec![
                n(LogicalOrExpression),
                t(Question),
                n(Expression),
                t(Colon),
                n(ConditionalExpression),
            ],
        ),
        r(ConditionalExpression, vec![n(LogicalOrExpression)]),
        // logical-or-expression:
        r(
            LogicalOrExpression,
            vec![n(LogicalOrExpression), t(PipePipe), n(LogicalAndExpression)],
        ),
        r(LogicalOrExpression, vec![n(LogicalAndExpression)]),
        // logical-and-expression:
        r(
            LogicalAndExpression,
            vec![n(LogicalAndExpression), t(AmpAmp), n(InclusiveOrExpression)],
        ),
        r(LogicalAndExpression, vec![n(InclusiveOrExpression)]),
        // inclusive-or-expression:
        r(
            InclusiveOrExpression,
            vec![n(InclusiveOrExpression), t(Pipe), n(ExclusiveOrExpression)],
        ),
        r(InclusiveOrExpression, vec![n(ExclusiveOrExpression)]),
        // exclusive-or-expression:
        r(
            ExclusiveOrExpression,
            vec![n(ExclusiveOrExpression), t(Caret), n(AndExpression)],
        ),
        r(ExclusiveOrExpression, vec![n(AndExpression)]),
        // and-expression:
        r(AndExpression, vec![n(AndExpression), t(Amp), n(EqualityExpression)]),
        r(AndExpression, vec![n(EqualityExpression)]),
        // equality-expression:
        r(
            EqualityExpression,
            vec![n(EqualityExpression), t(EqEq), n(RelationalExpression)],
        ),
        r(
            EqualityExpression,
            vec![n(EqualityExpression), t(NotEq), n(RelationalExpression)],
        ),
        r(EqualityExpression, vec![n(RelationalExpression)]),
        // relational-expression:
        r(
            RelationalExpression,
            vec![n(RelationalExpression), t(Lt), n(ShiftExpression)],
        ),
        r(
            RelationalExpression,
            vec![n(RelationalExpression), t(Gt), n(ShiftExpression)],
        ),
        r(
            RelationalExpression,
            vec![n(RelationalExpression), t(LtEq), n(ShiftExpression)],
        ),
        r(
            RelationalExpression,
            vec![n(RelationalExpression), t(GtEq), n(ShiftExpression)],
        ),
        r(RelationalExpression, vec![n(ShiftExpression)]),
        // shift-expression:
        r(
            ShiftExpression,
            vec![n(ShiftExpression), t(ShiftLeft), n(AdditiveExpression)],
        ),
        r(
            ShiftExpression,
            vec![n(ShiftExpression), t(ShiftRight), n(AdditiveExpression)],
        ),
        r(ShiftExpression, vec![n(AdditiveExpression)]),
        // additive-expression:
        r(
            AdditiveExpression,
            vec![n(AdditiveExpression), t(Plus), n(MultiplicativeExpression)],
        ),
        r(
            AdditiveExpression,
            vec![n(AdditiveExpression), t(Minus), n(MultiplicativeExpression)],
        ),
        r(AdditiveExpression, vec![n(MultiplicativeExpression)]),
        // multiplicative-expression:
        r(
            MultiplicativeExpression,
            vec![n(MultiplicativeExpression), t(Star), n(CastExpression)],
        ),
        r(
            MultiplicativeExpression,
            vec![n(MultiplicativeExpression), t(Slash), n(CastExpression)],
        ),
        r(
            MultiplicativeExpression,
            vec![n(MultiplicativeExpression), t(Percent), n(CastExpression)],
        ),
        r(MultiplicativeExpression, vec![n(CastExpression)]),
        // cast-expression: (corrected: the source lacked the parenthesized
        // type-name alternative entirely)
        r(CastExpression, vec![n(UnaryExpression)]),
        r(
            CastExpression,
            vec![t(LParen), n(TypeName), t(RParen), n(CastExpression)],
        ),
        // unary-expression:
        r(UnaryExpression, vec![t(PlusPlus), n(UnaryExpression)]),
        r(UnaryExpression, vec![t(MinusMinus), n(UnaryExpression)]),
        r(UnaryExpression, vec![t(Amp), n(CastExpression)]),
        r(UnaryExpression, vec![t(Star), n(CastExpression)]),
        r(UnaryExpression, vec![t(Plus), n(CastExpression)]),
        r(UnaryExpression, vec![t(Minus), n(CastExpression)]),
        // (supplemented: K&R's unary-operator also covers '~' and '!',
        // both absent from the source grammar; see DESIGN.md)
        r(UnaryExpression, vec![t(Tilde), n(CastExpression)]),
        r(UnaryExpression, vec![t(Bang), n(CastExpression)]),
        r(UnaryExpression, vec![n(PostfixExpression)]),
        // postfix-expression:
        r(PostfixExpression, vec![n(PostfixExpression), t(Arrow), t(Identifier)]),
        r(PostfixExpression, vec![n(PostfixExpression), t(PlusPlus)]),
        r(PostfixExpression, vec![n(PostfixExpression), t(MinusMinus)]),
        r(PostfixExpression, vec![n(PrimaryExpression)]),
        // primary-expression:
        r(PrimaryExpression, vec![t(Identifier)]),
        r(PrimaryExpression, vec![n(Constant)]),
        // constant:
        r(Constant, vec![t(IntegerConstant)]),
        r(Constant, vec![t(CharacterConstant)]),
    ]
}

/// The full rule table with the augmenting rule 0 (`AAStart ->
/// translation-unit`) prepended, plus the queries spec.md 4.A names
/// (`rules`, `is_terminal`, `symbol_count`). Built once and held immutable
/// for the lifetime of the process (spec.md section 5).
#[derive(Debug)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    pub fn new() -> Self {
        let mut rules = vec![r(NonTerminal::AAStart, vec![n(NonTerminal::TranslationUnit)])];
        rules.extend(self::rules());
        for rule in &rules {
            assert!(
                !rule.body.is_empty() && rule.body.len() <= MAX_RHS,
                "rule body length out of range: {:?}",
                rule
            );
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_terminal(&self, symbol: Symbol) -> bool {
        symbol.is_terminal()
    }

    pub fn symbol_count(&self) -> usize {
        crate::symbol::NUM_COLUMNS
    }

    pub fn start_rule_id() -> usize {
        0
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}
