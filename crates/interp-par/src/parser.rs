//! Recursive-descent parser (§4.4).
//!
//! The parser pulls tokens on demand from an [`interp_lex::Lexer`] — there
//! is no pre-tokenized buffer — and keeps exactly one token of lookahead.
//! `Expr` has a single flat, left-associative precedence level: every
//! infix operator binds equally, so `a + b * c` parses as `(a + b) * c`,
//! matching §4.4's grammar literally rather than introducing the usual
//! precedence tiers.

use interp_lex::{Lexer, Token, TokenKind};
use interp_util::{Span, MAX_IDENT_LEN};

use crate::ast::{BinOp, Expr, ExprKind, Stmt, StmtKind, UnOp};
use crate::error::ParseError;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Token,
}

impl<'a> Parser<'a> {
    /// Builds a parser over `source`, pulling the first lookahead token
    /// immediately so `peek`/`at_eof` are valid right away.
    pub fn new(source: &'a [u8]) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let peeked = lexer.next_token()?;
        Ok(Self { lexer, peeked })
    }

    pub fn at_eof(&self) -> bool {
        self.peeked.kind == TokenKind::Eof
    }

    /// Parses and returns the next top-level statement, or `None` at
    /// end of input. The driver calls this once per loop iteration so
    /// parsing and execution interleave at statement granularity (§4.6).
    pub fn next_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        if self.at_eof() {
            return Ok(None);
        }
        self.parse_statement().map(Some)
    }

    fn peek(&self) -> &TokenKind {
        &self.peeked.kind
    }

    fn span(&self) -> Span {
        self.peeked.span
    }

    fn bump(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token().map_err(ParseError::from)?;
        Ok(std::mem::replace(&mut self.peeked, next))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        if *self.peek() == kind {
            Ok(self.bump()?.span)
        } else {
            Err(ParseError::Syntax { span: self.span() })
        }
    }

    fn syntax_error(&self) -> ParseError {
        ParseError::Syntax { span: self.span() }
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let span = self.span();
        match self.peek().clone() {
            TokenKind::LBrace => {
                self.bump()?;
                let mut stmts = Vec::new();
                while *self.peek() != TokenKind::RBrace {
                    if self.at_eof() {
                        return Err(self.syntax_error());
                    }
                    stmts.push(self.parse_statement()?);
                }
                self.expect(TokenKind::RBrace)?;
                Ok(Stmt { kind: StmtKind::Compound(stmts), span })
            }
            TokenKind::Print => {
                self.bump()?;
                let expr = self.parse_expr()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt { kind: StmtKind::Print(expr), span })
            }
            TokenKind::If => {
                self.bump()?;
                self.expect(TokenKind::LParen)?;
                let cond = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                let body = self.parse_statement()?;
                Ok(Stmt { kind: StmtKind::If(cond, Box::new(body)), span })
            }
            TokenKind::While => {
                self.bump()?;
                self.expect(TokenKind::LParen)?;
                let cond = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                let body = self.parse_statement()?;
                Ok(Stmt { kind: StmtKind::While(cond, Box::new(body)), span })
            }
            TokenKind::Push => {
                self.bump()?;
                let seq = self.parse_expr()?;
                self.expect(TokenKind::Comma)?;
                let value = self.parse_expr()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt { kind: StmtKind::Push(seq, value), span })
            }
            TokenKind::Ident(name) => {
                self.bump()?;
                if name.len() > MAX_IDENT_LEN {
                    return Err(ParseError::Syntax { span });
                }
                match self.peek().clone() {
                    TokenKind::LBracket => {
                        self.bump()?;
                        let index = self.parse_expr()?;
                        self.expect(TokenKind::RBracket)?;
                        self.expect(TokenKind::Assign)?;
                        let rhs = self.parse_expr()?;
                        self.expect(TokenKind::Semicolon)?;
                        Ok(Stmt {
                            kind: StmtKind::Assign { name, index: Some(index), rhs },
                            span,
                        })
                    }
                    TokenKind::Assign => {
                        self.bump()?;
                        let rhs = self.parse_expr()?;
                        self.expect(TokenKind::Semicolon)?;
                        Ok(Stmt {
                            kind: StmtKind::Assign { name, index: None, rhs },
                            span,
                        })
                    }
                    _ => Err(self.syntax_error()),
                }
            }
            _ => Err(self.syntax_error()),
        }
    }

    /// `Term ( InfixOp Term )*`, flat and left-associative: each iteration
    /// folds the running result and the next term into a new left-hand
    /// side, so there is no precedence climbing to do.
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;
        loop {
            let op_span = self.span();
            let op = match self.peek() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                TokenKind::Less => BinOp::Less,
                TokenKind::EqEq => BinOp::Equals,
                TokenKind::AndAnd => BinOp::And,
                TokenKind::OrOr => BinOp::Or,
                TokenKind::LBracket => {
                    self.bump()?;
                    let index = self.parse_expr()?;
                    self.expect(TokenKind::RBracket)?;
                    left = Expr {
                        kind: ExprKind::Binary(BinOp::Index, Box::new(left), Box::new(index)),
                        span: op_span,
                    };
                    continue;
                }
                TokenKind::Semicolon
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::Comma => break,
                _ => return Err(self.syntax_error()),
            };
            self.bump()?;
            let right = self.parse_term()?;
            left = Expr {
                kind: ExprKind::Binary(op, Box::new(left), Box::new(right)),
                span: op_span,
            };
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let span = self.span();
        match self.peek().clone() {
            TokenKind::LParen => {
                self.bump()?;
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Int(n) => {
                self.bump()?;
                Ok(Expr { kind: ExprKind::LitInt(n), span })
            }
            TokenKind::CharLit(b) => {
                self.bump()?;
                Ok(Expr { kind: ExprKind::LitInt(b as i64), span })
            }
            TokenKind::StringLit(bytes) => {
                self.bump()?;
                let elems = bytes
                    .into_iter()
                    .map(|b| Expr { kind: ExprKind::LitInt(b as i64), span })
                    .collect();
                Ok(Expr { kind: ExprKind::SeqInit(elems), span })
            }
            TokenKind::LBracket => {
                self.bump()?;
                let mut elems = Vec::new();
                if *self.peek() != TokenKind::RBracket {
                    elems.push(self.parse_expr()?);
                    while *self.peek() == TokenKind::Comma {
                        self.bump()?;
                        elems.push(self.parse_expr()?);
                    }
                }
                self.expect(TokenKind::RBracket)?;
                Ok(Expr { kind: ExprKind::SeqInit(elems), span })
            }
            TokenKind::Len => {
                self.bump()?;
                let operand = self.parse_expr()?;
                Ok(Expr { kind: ExprKind::Unary(UnOp::Len, Box::new(operand)), span })
            }
            TokenKind::Ident(name) => {
                self.bump()?;
                if name.len() > MAX_IDENT_LEN {
                    return Err(ParseError::Syntax { span });
                }
                Ok(Expr { kind: ExprKind::Var(name), span })
            }
            _ => Err(self.syntax_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(src: &str) -> Stmt {
        Parser::new(src.as_bytes())
            .unwrap()
            .next_statement()
            .unwrap()
            .unwrap()
    }

    fn parse_all(src: &str) -> Vec<Stmt> {
        let mut parser = Parser::new(src.as_bytes()).unwrap();
        let mut out = Vec::new();
        while let Some(stmt) = parser.next_statement().unwrap() {
            out.push(stmt);
        }
        out
    }

    #[test]
    fn assignment_to_plain_variable() {
        let stmt = parse_one("x = 1;");
        match stmt.kind {
            StmtKind::Assign { name, index: None, rhs } => {
                assert_eq!(name, "x");
                assert_eq!(rhs.kind, ExprKind::LitInt(1));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn assignment_to_indexed_variable() {
        let stmt = parse_one("a[0] = 1;");
        match stmt.kind {
            StmtKind::Assign { name, index: Some(idx), .. } => {
                assert_eq!(name, "a");
                assert_eq!(idx.kind, ExprKind::LitInt(0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn infix_chain_is_flat_and_left_associative() {
        let stmt = parse_one("x = 1 + 2 * 3;");
        let StmtKind::Assign { rhs, .. } = stmt.kind else { panic!() };
        let ExprKind::Binary(BinOp::Mul, lhs, rhs) = rhs.kind else { panic!() };
        assert_eq!(rhs.kind, ExprKind::LitInt(3));
        let ExprKind::Binary(BinOp::Add, one, two) = lhs.kind else { panic!() };
        assert_eq!(one.kind, ExprKind::LitInt(1));
        assert_eq!(two.kind, ExprKind::LitInt(2));
    }

    #[test]
    fn index_operator_chains_with_infix() {
        let stmt = parse_one("x = a[0] + 1;");
        let StmtKind::Assign { rhs, .. } = stmt.kind else { panic!() };
        let ExprKind::Binary(BinOp::Add, lhs, _) = rhs.kind else { panic!() };
        let ExprKind::Binary(BinOp::Index, base, idx) = lhs.kind else { panic!() };
        assert_eq!(base.kind, ExprKind::Var("a".into()));
        assert_eq!(idx.kind, ExprKind::LitInt(0));
    }

    #[test]
    fn sequence_literal_parses_elements() {
        let stmt = parse_one("x = [1, 2, 3];");
        let StmtKind::Assign { rhs, .. } = stmt.kind else { panic!() };
        let ExprKind::SeqInit(elems) = rhs.kind else { panic!() };
        assert_eq!(elems.len(), 3);
    }

    #[test]
    fn empty_sequence_literal() {
        let stmt = parse_one("x = [];");
        let StmtKind::Assign { rhs, .. } = stmt.kind else { panic!() };
        assert_eq!(rhs.kind, ExprKind::SeqInit(vec![]));
    }

    #[test]
    fn string_literal_lowers_to_seq_init_of_byte_values() {
        let stmt = parse_one(r#"x = "ab";"#);
        let StmtKind::Assign { rhs, .. } = stmt.kind else { panic!() };
        let ExprKind::SeqInit(elems) = rhs.kind else { panic!() };
        assert_eq!(
            elems.iter().map(|e| e.kind.clone()).collect::<Vec<_>>(),
            vec![ExprKind::LitInt(b'a' as i64), ExprKind::LitInt(b'b' as i64)]
        );
    }

    #[test]
    fn char_literal_lowers_to_a_single_lit_int() {
        let stmt = parse_one("x = 'a';");
        let StmtKind::Assign { rhs, .. } = stmt.kind else { panic!() };
        assert_eq!(rhs.kind, ExprKind::LitInt(b'a' as i64));
    }

    #[test]
    fn len_takes_a_full_expression_as_its_operand() {
        let stmt = parse_one("x = len a + b;");
        let StmtKind::Assign { rhs, .. } = stmt.kind else { panic!() };
        let ExprKind::Unary(UnOp::Len, inner) = rhs.kind else { panic!() };
        assert!(matches!(inner.kind, ExprKind::Binary(BinOp::Add, _, _)));
    }

    #[test]
    fn nested_compound_and_control_flow() {
        let stmts = parse_all("if (x < 1) { print x; while (x < 10) { x = x + 1; } }");
        assert_eq!(stmts.len(), 1);
        let StmtKind::If(cond, body) = &stmts[0].kind else { panic!() };
        assert!(matches!(cond.kind, ExprKind::Binary(BinOp::Less, _, _)));
        assert!(matches!(body.kind, StmtKind::Compound(_)));
    }

    #[test]
    fn push_statement() {
        let stmt = parse_one("push a, 1;");
        assert!(matches!(stmt.kind, StmtKind::Push(_, _)));
    }

    #[test]
    fn missing_semicolon_is_a_syntax_error() {
        let mut parser = Parser::new(b"x = 1").unwrap();
        assert!(parser.next_statement().is_err());
    }

    #[test]
    fn identifier_over_max_length_is_a_syntax_error() {
        let src = format!("{} = 1;", "a".repeat(MAX_IDENT_LEN + 1));
        let mut parser = Parser::new(src.as_bytes()).unwrap();
        assert!(parser.next_statement().is_err());
    }

    #[test]
    fn parser_surfaces_lexical_errors_unchanged() {
        // `Parser::new` only pulls the first token ("x"); the unterminated
        // string is only reached once the statement parse asks for more.
        let src = "x = \"unterminated;";
        let mut parser = Parser::new(src.as_bytes()).unwrap();
        let err = parser.next_statement().unwrap_err();
        assert!(matches!(err, ParseError::Lex(_)));
    }

    #[test]
    fn unterminated_string_at_the_very_first_token_is_caught_by_new() {
        let err = Parser::new(b"\"unterminated").unwrap_err();
        assert!(matches!(err, ParseError::Lex(_)));
    }
}
