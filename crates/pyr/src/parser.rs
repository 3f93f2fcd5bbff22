//! Token stream → AST (`SPEC_FULL.md` §4.2). Recursive-descent, flat precedence.

use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef, Stmt},
    error::ScriptError,
    token::{Token, TokenKind},
};

/// Operators that share the `bool_expr` precedence tier: every binary operator except
/// the multiplicative ones, all left-associative with no further tiering. This is the
/// flat-precedence contract `SPEC_FULL.md` §4.2 and §9 call out explicitly — do not
/// split it into a conventional table.
const BOOL_EXPR_OPS: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Average,
    TokenKind::Eq,
    TokenKind::Neq,
    TokenKind::Lt,
    TokenKind::Lte,
    TokenKind::Gt,
    TokenKind::Gte,
    TokenKind::Approx,
    TokenKind::And,
    TokenKind::Or,
];

/// Multiplicative-tier operators, also left-associative (`^` included, per the source).
const TERM_OPS: &[TokenKind] =
    &[TokenKind::Mul, TokenKind::Exp, TokenKind::Div, TokenKind::FDiv, TokenKind::Mod];

const BUILTIN_KINDS: &[TokenKind] = &[
    TokenKind::Return,
    TokenKind::Exec,
    TokenKind::Input,
    TokenKind::Len,
    TokenKind::Type,
    TokenKind::StrCon,
    TokenKind::IntCon,
    TokenKind::FloatCon,
    TokenKind::BoolCon,
    TokenKind::Abs,
    TokenKind::Pow,
];

pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
        token
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current().kind)
    }

    fn expect(&mut self, kind: TokenKind, expected_desc: &str) -> Result<Token, ScriptError> {
        if self.current().kind != kind {
            return Err(ScriptError::syntax(format!("Expected '{expected_desc}', found '{}'", self.current())));
        }
        Ok(self.advance())
    }

    /// `program := statement* EOF`.
    pub fn parse(mut self) -> Result<Vec<Stmt>, ScriptError> {
        let statements = self.statements()?;
        if !self.at(TokenKind::Eof) {
            return Err(ScriptError::syntax(format!("Unexpected token '{}'", self.current())));
        }
        Ok(statements)
    }

    fn statements(&mut self) -> Result<Vec<Stmt>, ScriptError> {
        let mut statements = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            statements.push(self.expr()?);
        }
        Ok(statements)
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ScriptError> {
        self.expect(TokenKind::LBrace, "{")?;
        let body = self.statements()?;
        self.expect(TokenKind::RBrace, "}")?;
        Ok(body)
    }

    /// `expr := if_form | while_form | for_form | func_def | var_form | over_form
    ///        | const_form | bool_expr`.
    fn expr(&mut self) -> Result<Expr, ScriptError> {
        match self.current().kind {
            TokenKind::If => self.if_expr(),
            TokenKind::While => self.while_expr(),
            TokenKind::For => self.for_expr(),
            TokenKind::Func => self.function_def(),
            TokenKind::Var => self.var_assign(false),
            TokenKind::Over => self.var_assign(true),
            TokenKind::Const => self.const_assign(),
            TokenKind::Import | TokenKind::From => {
                Err(ScriptError::syntax(format!("'{}' is reserved and not supported", self.current())))
            }
            _ => self.bin_op(Self::term, BOOL_EXPR_OPS),
        }
    }

    fn if_expr(&mut self) -> Result<Expr, ScriptError> {
        self.advance();
        let condition = Box::new(self.expr()?);
        let body = self.block()?;

        let mut elifs = Vec::new();
        while self.at(TokenKind::Elif) {
            self.advance();
            let elif_condition = self.expr()?;
            let elif_body = self.block()?;
            elifs.push((elif_condition, elif_body));
        }

        let else_body = if self.at(TokenKind::Else) {
            self.advance();
            Some(self.block()?)
        } else {
            None
        };

        Ok(Expr::If { condition, body, elifs, else_body })
    }

    fn while_expr(&mut self) -> Result<Expr, ScriptError> {
        self.advance();
        let condition = Box::new(self.expr()?);
        let body = self.block()?;
        Ok(Expr::While { condition, body })
    }

    fn for_expr(&mut self) -> Result<Expr, ScriptError> {
        self.advance();
        self.expect(TokenKind::Var, "var")?;
        let var_name = self.expect(TokenKind::Identifier, "variable name")?;
        self.expect(TokenKind::Assign, "=")?;
        let init = Box::new(self.expr()?);

        self.expect(TokenKind::As, "as")?;
        let condition = Box::new(self.expr()?);

        self.expect(TokenKind::Do, "do")?;
        let update = Box::new(self.expr()?);

        let body = self.block()?;

        Ok(Expr::For { var_name, init, condition, update, body })
    }

    fn function_def(&mut self) -> Result<Expr, ScriptError> {
        self.advance();
        let name_token = self.expect(TokenKind::Identifier, "function name")?;
        let name = name_token.name().unwrap_or_default().to_owned();

        self.expect(TokenKind::LParen, "(")?;
        let mut params = Vec::new();
        if !self.at(TokenKind::RParen) {
            params.push(self.expect(TokenKind::Identifier, "parameter")?);
            while self.at(TokenKind::Comma) {
                self.advance();
                params.push(self.expect(TokenKind::Identifier, "parameter")?);
            }
        }
        self.expect(TokenKind::RParen, ")")?;

        let body = self.block()?;

        Ok(Expr::FunctionDef(Rc::new(FunctionDef { name, params, body })))
    }

    fn var_assign(&mut self, is_over: bool) -> Result<Expr, ScriptError> {
        self.advance();
        let name = self.expect(TokenKind::Identifier, "variable name")?;
        self.expect(TokenKind::Assign, "=")?;
        let value = Box::new(self.expr()?);
        Ok(Expr::VarAssign { name, value, is_over })
    }

    fn const_assign(&mut self) -> Result<Expr, ScriptError> {
        self.advance();
        let name = self.expect(TokenKind::Identifier, "constant name")?;
        self.expect(TokenKind::Assign, "=")?;
        let value = Box::new(self.expr()?);
        Ok(Expr::ConstAssign { name, value })
    }

    /// `term := factor ( (MUL|EXP|DIV|FDIV|MOD) factor )*`.
    fn term(&mut self) -> Result<Expr, ScriptError> {
        self.bin_op(Self::factor, TERM_OPS)
    }

    fn bin_op(
        &mut self,
        mut operand: impl FnMut(&mut Self) -> Result<Expr, ScriptError>,
        ops: &[TokenKind],
    ) -> Result<Expr, ScriptError> {
        let mut left = operand(self)?;
        while self.at_any(ops) {
            let op = self.advance();
            let right = operand(self)?;
            left = Expr::BinOp { left: Box::new(left), op, right: Box::new(right) };
        }
        Ok(left)
    }

    /// `factor := (PLUS|MINUS|NOT) factor | literal | list_literal | builtin_call
    ///          | IDENT (call | index | INCR | DECR | ε) | (INCR|DECR) IDENT
    ///          | '(' expr ')'`.
    fn factor(&mut self) -> Result<Expr, ScriptError> {
        let token = self.current().clone();

        if matches!(token.kind, TokenKind::Plus | TokenKind::Minus | TokenKind::Not) {
            self.advance();
            let operand = Box::new(self.factor()?);
            return Ok(Expr::UnaryOp { op: token, operand });
        }

        if matches!(
            token.kind,
            TokenKind::Int | TokenKind::Float | TokenKind::Bool | TokenKind::String | TokenKind::Null
        ) {
            self.advance();
            return Ok(Expr::Literal(token));
        }

        if token.kind == TokenKind::LSquare {
            return self.list_expr();
        }

        if BUILTIN_KINDS.contains(&token.kind) {
            self.advance();
            self.expect(TokenKind::LParen, "(")?;
            let args = self.parse_args()?;
            self.expect(TokenKind::RParen, ")")?;
            return Ok(Expr::FunctionCall { callee: token, args });
        }

        if token.kind == TokenKind::Identifier {
            self.advance();

            if self.at(TokenKind::LParen) {
                self.advance();
                let args = self.parse_args()?;
                self.expect(TokenKind::RParen, ")")?;
                return Ok(Expr::FunctionCall { callee: token, args });
            }

            if self.at(TokenKind::LSquare) {
                self.advance();
                let index = Box::new(self.expr()?);
                self.expect(TokenKind::RSquare, "]")?;
                return Ok(Expr::ListAccess { target: Box::new(Expr::VarAccess(token)), index });
            }

            if self.at(TokenKind::Incr) {
                self.advance();
                return Ok(Expr::Incr { name: token, is_prefix: false });
            }

            if self.at(TokenKind::Decr) {
                self.advance();
                return Ok(Expr::Decr { name: token, is_prefix: false });
            }

            return Ok(Expr::VarAccess(token));
        }

        if token.kind == TokenKind::Incr {
            self.advance();
            if self.at(TokenKind::Identifier) {
                // The identifier is deliberately NOT consumed here — a faithful carry-over
                // from the reference parser's prefix-increment branch (SPEC_FULL §4.2,
                // §9 quirk (g)). The next statement re-parses this same identifier token.
                let name = self.current().clone();
                return Ok(Expr::Incr { name, is_prefix: true });
            }
        }

        if token.kind == TokenKind::Decr {
            self.advance();
            if self.at(TokenKind::Identifier) {
                let name = self.current().clone();
                return Ok(Expr::Decr { name, is_prefix: true });
            }
        }

        if token.kind == TokenKind::LParen {
            self.advance();
            let expr = self.expr()?;
            self.expect(TokenKind::RParen, ")")?;
            return Ok(expr);
        }

        Err(ScriptError::syntax(format!("Unexpected token '{}'", token.kind)))
    }

    fn list_expr(&mut self) -> Result<Expr, ScriptError> {
        self.advance();
        let mut elements = Vec::new();

        if self.at(TokenKind::RSquare) {
            self.advance();
            return Ok(Expr::List(elements));
        }

        elements.push(self.expr()?);
        while self.at(TokenKind::Comma) {
            self.advance();
            elements.push(self.expr()?);
        }
        self.expect(TokenKind::RSquare, "]")?;

        Ok(Expr::List(elements))
    }

    fn parse_args(&mut self) -> Result<Vec<Expr>, ScriptError> {
        let mut args = Vec::new();
        if !self.at(TokenKind::RParen) {
            args.push(self.expr()?);
            while self.at(TokenKind::Comma) {
                self.advance();
                args.push(self.expr()?);
            }
        }
        Ok(args)
    }
}
