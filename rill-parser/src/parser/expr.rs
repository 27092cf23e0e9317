use super::*;

impl<'a> Parser<'a> {
    /* Expressions */

    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_bp`] with `min_bp = 0`.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_expr_bp(0)
    }

    /// Parses an expression with the specified `min_bp`.
    ///
    /// Infix operators are folded by binding power; assignment is the one
    /// right-associative entry in the table, and its left side must have
    /// reduced to a plain variable reference.
    fn parse_expr_bp(&mut self, min_bp: u8) -> ParseResult<Expr> {
        let mut lhs = self.parse_unary()?;

        loop {
            let (l_bp, r_bp) = match self.current.kind.binop_bp() {
                Some(bp) => bp,
                None => break, // not a valid binop, stop parsing
            };
            if l_bp < min_bp {
                break; // less than the min_bp, stop parsing
            }

            // self.current is a valid binop
            let op = self.current.clone();
            self.advance();

            let rhs = self.parse_expr_bp(r_bp)?;

            lhs = if op.kind == TokenKind::Equal {
                match lhs {
                    Expr::Variable(ident) => Expr::Assign {
                        ident,
                        value: Box::new(rhs),
                    },
                    _ => return Err(self.error_at(&op, "Invalid assignment target")),
                }
            } else {
                Expr::Binary {
                    lhs: Box::new(lhs),
                    op,
                    rhs: Box::new(rhs),
                }
            };
        }

        Ok(lhs)
    }

    /// Parses a prefix `-`/`!` chain, which binds tighter than any infix
    /// operator.
    fn parse_unary(&mut self) -> ParseResult<Expr> {
        if self.check(TokenKind::Minus) || self.check(TokenKind::Bang) {
            let op = self.current.clone();
            self.advance();
            let arg = self.parse_unary()?;
            return Ok(Expr::Unary {
                op,
                arg: Box::new(arg),
            });
        }
        self.parse_call()
    }

    /// Parses a primary expression followed by any number of call argument
    /// lists; calls bind tightest of all.
    fn parse_call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;
        while self.eat(TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut args = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;
        Ok(Expr::Call {
            callee: Box::new(callee),
            args,
        })
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        if self.eat(TokenKind::Number) {
            // Number tokens always carry their literal value.
            return Ok(Expr::NumberLit(self.previous.number_value().unwrap_or_default()));
        }
        if self.eat(TokenKind::Str) {
            let value = self.previous.string_value().unwrap_or_default().to_string();
            return Ok(Expr::StringLit(value));
        }
        if self.eat(TokenKind::True) {
            return Ok(Expr::BoolLit(true));
        }
        if self.eat(TokenKind::False) {
            return Ok(Expr::BoolLit(false));
        }
        if self.eat(TokenKind::Identifier) {
            return Ok(Expr::Variable(self.previous.clone()));
        }
        if self.eat(TokenKind::LeftParen) {
            let inner = self.parse_expr()?;
            self.consume(
                TokenKind::RightParen,
                "Expected closing ')' at end of expression.",
            )?;
            return Ok(Expr::Group(Box::new(inner)));
        }

        Err(self.error_at_current("Expected expression."))
    }
}
