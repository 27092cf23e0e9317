use super::*;

impl<'a> Parser<'a> {
    /// Parses a declaration (a `var` declaration or any other statement).
    pub(crate) fn parse_declaration(&mut self) -> ParseResult<Stmt> {
        if self.eat(TokenKind::Var) {
            return self.parse_var_declaration();
        }
        self.parse_stmt()
    }

    /// Parses a statement, dispatching on the leading keyword.
    fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        if self.eat(TokenKind::Print) {
            return self.parse_print_stmt();
        }
        if self.eat(TokenKind::LeftBrace) {
            return Ok(Stmt::Block(self.parse_block_body()?));
        }
        if self.eat(TokenKind::If) {
            return self.parse_if_stmt();
        }
        if self.eat(TokenKind::While) {
            return self.parse_while_stmt();
        }
        if self.eat(TokenKind::For) {
            return self.parse_for_stmt();
        }
        if self.eat(TokenKind::Fn) {
            return self.parse_fn_declaration();
        }
        if self.eat(TokenKind::Return) {
            return self.parse_return_stmt();
        }

        // expression statement
        let expr = self.parse_expr()?;
        self.consume_statement_semicolon()?;
        Ok(Stmt::ExprStmt(expr))
    }

    fn parse_var_declaration(&mut self) -> ParseResult<Stmt> {
        let ident = self.consume(TokenKind::Identifier, "Expect variable name.")?;
        let initializer = if self.eat(TokenKind::Equal) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.consume_statement_semicolon()?;
        Ok(Stmt::VarDeclaration { ident, initializer })
    }

    fn parse_print_stmt(&mut self) -> ParseResult<Stmt> {
        let expr = self.parse_expr()?;
        self.consume_statement_semicolon()?;
        Ok(Stmt::PrintStmt(expr))
    }

    /// Parses the statements of a block; the opening `{` was already
    /// consumed.
    fn parse_block_body(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut body = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.check(TokenKind::Eof) {
            body.push(self.parse_declaration()?);
        }
        self.consume(TokenKind::RightBrace, "Expected '}' at end of block.")?;
        Ok(body)
    }

    fn parse_if_stmt(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.parse_expr()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.parse_stmt()?);
        let else_branch = if self.eat(TokenKind::Else) {
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while_stmt(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.parse_expr()?;
        self.consume(TokenKind::RightParen, "Expect ')' after while condition.")?;
        let body = Box::new(self.parse_stmt()?);

        Ok(Stmt::While { condition, body })
    }

    /// `for` has no node of its own; it desugars into the equivalent
    /// initializer/`while`/increment shape.
    fn parse_for_stmt(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.eat(TokenKind::Semicolon) {
            None
        } else if self.eat(TokenKind::Var) {
            Some(self.parse_var_declaration()?)
        } else {
            let expr = self.parse_expr()?;
            self.consume_statement_semicolon()?;
            Some(Stmt::ExprStmt(expr))
        };

        let condition = if self.check(TokenKind::Semicolon) {
            Expr::BoolLit(true)
        } else {
            self.parse_expr()?
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let body = self.parse_stmt()?;

        // The increment runs after every iteration of the original body.
        let body = match increment {
            Some(increment) => Stmt::Block(vec![body, Stmt::ExprStmt(increment)]),
            None => body,
        };
        let while_loop = Stmt::While {
            condition,
            body: Box::new(body),
        };

        // The initializer gets its own scope around the loop.
        Ok(match initializer {
            Some(initializer) => Stmt::Block(vec![initializer, while_loop]),
            None => while_loop,
        })
    }

    fn parse_fn_declaration(&mut self) -> ParseResult<Stmt> {
        let ident = self.consume(TokenKind::Identifier, "Expect function name.")?;

        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                params.push(self.consume(TokenKind::Identifier, "Expect parameter name.")?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;

        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;
        let body = self.parse_block_body()?;

        Ok(Stmt::FnDeclaration(Rc::new(FnDecl {
            ident,
            params,
            body,
        })))
    }

    fn parse_return_stmt(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous.clone();
        let expr = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.consume_statement_semicolon()?;
        Ok(Stmt::Return { keyword, expr })
    }
}
