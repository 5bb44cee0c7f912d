//! Statement parser.
//!
//! The parser keeps a symbol table of declared variables and parameters and
//! turns each input line into a declaration, an expression statement, or a
//! constraint statement. Looking a symbol up always clones the declared leaf,
//! so every statement owns a strict tree with no sharing between statements.

mod lexer;

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::atoms::{self, AtomArg, AtomKind};
use crate::dcp::Sign;
use crate::error::{DcpError, Result};
use crate::expr::{Constraint, ConstraintKind, Expression};
use lexer::Token;

/// A parsed statement: a bare expression or a constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(Expression),
    Constraint(Constraint),
}

impl Statement {
    /// Full textual rendering.
    pub fn name(&self) -> String {
        match self {
            Statement::Expression(e) => e.name().to_string(),
            Statement::Constraint(c) => c.name(),
        }
    }

    /// Whether the whole statement satisfies the discipline.
    pub fn is_dcp(&self) -> bool {
        match self {
            Statement::Expression(e) => e.is_dcp(),
            Statement::Constraint(c) => c.is_dcp(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Expression(e) => write!(f, "{}", e),
            Statement::Constraint(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Clone, Copy)]
enum DeclKind {
    Variable,
    Parameter,
}

/// Parses convex optimization statements.
///
/// Permitted lines:
///   variable [SIGN] x y z ...
///   parameter [SIGN] a b c ...
///   any expression or constraint over declared names
///   # comments
#[derive(Debug, Default)]
pub struct Parser {
    symbols: HashMap<String, Expression>,
    statements: Vec<Statement>,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    /// Dump all declarations and parsed statements.
    pub fn clear(&mut self) {
        self.symbols.clear();
        self.statements.clear();
    }

    /// Statements parsed so far, in input order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The declared leaf for a name, if any.
    pub fn symbol(&self, name: &str) -> Option<&Expression> {
        self.symbols.get(name)
    }

    /// Parse one line. Declarations and blank/comment lines yield `None`;
    /// expression and constraint lines yield the statement just recorded.
    pub fn parse(&mut self, line: &str) -> Result<Option<&Statement>> {
        let tokens = lexer::tokenize(line)?;
        if tokens.is_empty() {
            return Ok(None);
        }
        if let Token::Ident(first) = &tokens[0] {
            match first.as_str() {
                "variable" => {
                    self.declare(DeclKind::Variable, &tokens[1..])?;
                    return Ok(None);
                }
                "parameter" => {
                    self.declare(DeclKind::Parameter, &tokens[1..])?;
                    return Ok(None);
                }
                _ => {}
            }
        }
        let statement = self.parse_statement(&tokens)?;
        debug!(statement = %statement, dcp = statement.is_dcp(), "parsed statement");
        self.statements.push(statement);
        Ok(self.statements.last())
    }

    /// Record declared names, with an optional leading sign token.
    fn declare(&mut self, kind: DeclKind, tokens: &[Token]) -> Result<()> {
        let mut names = Vec::with_capacity(tokens.len());
        for token in tokens {
            match token {
                Token::Ident(name) => names.push(name.as_str()),
                other => return Err(DcpError::UnexpectedToken(other.describe())),
            }
        }
        let mut sign = Sign::Unknown;
        let mut start = 0;
        if let Some(first) = names.first() {
            if let Some(parsed) = Sign::parse(first) {
                sign = parsed;
                start = 1;
            }
        }
        for name in &names[start..] {
            if AtomKind::is_atom_name(name) {
                return Err(DcpError::ReservedName(name.to_string()));
            }
            let leaf = match kind {
                DeclKind::Variable => Expression::variable(*name, sign),
                DeclKind::Parameter => Expression::parameter(*name, sign),
            };
            match kind {
                DeclKind::Variable => debug!(name, sign = sign.name(), "declared variable"),
                DeclKind::Parameter => debug!(name, sign = sign.name(), "declared parameter"),
            }
            self.symbols.insert(name.to_string(), leaf);
        }
        Ok(())
    }

    fn parse_statement(&self, tokens: &[Token]) -> Result<Statement> {
        let mut cur = Cursor::new(tokens);
        let lhs = self.parse_expr(&mut cur)?;
        let statement = match cur.peek() {
            Some(Token::Eq) | Some(Token::Le) | Some(Token::Ge) => {
                let kind = match cur.advance() {
                    Some(Token::Eq) => ConstraintKind::Eq,
                    Some(Token::Le) => ConstraintKind::Leq,
                    _ => ConstraintKind::Geq,
                };
                let rhs = self.parse_expr(&mut cur)?;
                if matches!(
                    cur.peek(),
                    Some(Token::Eq) | Some(Token::Le) | Some(Token::Ge)
                ) {
                    return Err(DcpError::ChainedConstraint);
                }
                Statement::Constraint(Constraint::new(kind, lhs, rhs))
            }
            _ => Statement::Expression(lhs),
        };
        match cur.peek() {
            None => Ok(statement),
            Some(token) => Err(DcpError::UnexpectedToken(token.describe())),
        }
    }

    fn parse_expr(&self, cur: &mut Cursor<'_>) -> Result<Expression> {
        let mut exp = self.parse_term(cur)?;
        loop {
            match cur.peek() {
                Some(Token::Plus) => {
                    cur.advance();
                    exp = exp.add(self.parse_term(cur)?);
                }
                Some(Token::Minus) => {
                    cur.advance();
                    exp = exp.sub(self.parse_term(cur)?);
                }
                _ => break,
            }
        }
        Ok(exp)
    }

    fn parse_term(&self, cur: &mut Cursor<'_>) -> Result<Expression> {
        let mut exp = self.parse_unary(cur)?;
        loop {
            match cur.peek() {
                Some(Token::Star) => {
                    cur.advance();
                    exp = exp.mul(self.parse_unary(cur)?);
                }
                Some(Token::Slash) => {
                    cur.advance();
                    exp = exp.div(self.parse_unary(cur)?)?;
                }
                _ => break,
            }
        }
        Ok(exp)
    }

    fn parse_unary(&self, cur: &mut Cursor<'_>) -> Result<Expression> {
        match cur.peek() {
            Some(Token::Plus) => {
                cur.advance();
                self.parse_unary(cur)
            }
            Some(Token::Minus) => {
                cur.advance();
                // A negated literal is a single signed constant.
                if let Some(Token::Number(value, text)) = cur.peek().cloned() {
                    cur.advance();
                    Ok(Expression::constant_named(-value, format!("-{}", text)))
                } else {
                    Ok(self.parse_unary(cur)?.neg())
                }
            }
            _ => self.parse_primary(cur),
        }
    }

    fn parse_primary(&self, cur: &mut Cursor<'_>) -> Result<Expression> {
        match cur.advance() {
            Some(Token::Number(value, text)) => Ok(Expression::constant_named(value, text)),
            Some(Token::LParen) => {
                let mut exp = self.parse_expr(cur)?;
                match cur.advance() {
                    Some(Token::RParen) => {
                        exp.add_parens();
                        Ok(exp)
                    }
                    Some(token) => Err(DcpError::UnexpectedToken(token.describe())),
                    None => Err(DcpError::UnexpectedEnd),
                }
            }
            Some(Token::Ident(name)) => {
                if cur.peek() == Some(&Token::LParen) {
                    let kind = AtomKind::from_name(&name)
                        .ok_or_else(|| DcpError::UnknownFunction(name.clone()))?;
                    cur.advance();
                    let args = self.parse_args(cur)?;
                    atoms::apply(kind, &name, args)
                } else {
                    // Copy-on-insert: each use of a declared name gets an
                    // independent leaf.
                    match self.symbols.get(&name) {
                        Some(leaf) => Ok(leaf.clone()),
                        None => Err(DcpError::UnknownIdentifier(name)),
                    }
                }
            }
            Some(token) => Err(DcpError::UnexpectedToken(token.describe())),
            None => Err(DcpError::UnexpectedEnd),
        }
    }

    /// Arguments of an atom call, after the opening parenthesis.
    fn parse_args(&self, cur: &mut Cursor<'_>) -> Result<Vec<AtomArg>> {
        let mut args = Vec::new();
        if cur.peek() == Some(&Token::RParen) {
            cur.advance();
            return Ok(args);
        }
        loop {
            args.push(self.parse_arg(cur)?);
            match cur.advance() {
                Some(Token::Comma) => {}
                Some(Token::RParen) => break,
                Some(token) => return Err(DcpError::UnexpectedToken(token.describe())),
                None => return Err(DcpError::UnexpectedEnd),
            }
        }
        Ok(args)
    }

    /// One atom argument. A lone (possibly negated) numeric literal or a
    /// lone undeclared `Inf` is a parameter; anything else is an expression.
    fn parse_arg(&self, cur: &mut Cursor<'_>) -> Result<AtomArg> {
        let ends_arg = |token: Option<&Token>| {
            matches!(token, Some(Token::Comma) | Some(Token::RParen))
        };
        match cur.peek() {
            Some(Token::Number(value, text)) if ends_arg(cur.peek_at(1)) => {
                let arg = AtomArg::number(*value, text.clone());
                cur.advance();
                Ok(arg)
            }
            Some(Token::Minus) => {
                if let Some(Token::Number(value, text)) = cur.peek_at(1) {
                    if ends_arg(cur.peek_at(2)) {
                        let arg = AtomArg::number(-*value, format!("-{}", text));
                        cur.advance();
                        cur.advance();
                        return Ok(arg);
                    }
                }
                Ok(AtomArg::Expr(self.parse_expr(cur)?))
            }
            Some(Token::Ident(name))
                if name == "Inf" && ends_arg(cur.peek_at(1)) && !self.symbols.contains_key("Inf") =>
            {
                cur.advance();
                Ok(AtomArg::Inf)
            }
            _ => Ok(AtomArg::Expr(self.parse_expr(cur)?)),
        }
    }
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Cursor<'a> {
        Cursor { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}
