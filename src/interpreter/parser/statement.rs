use crate::{
    ast::{Block, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a binding declaration (`let x = ...`),
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// Dispatch is on the current token; anything that is not `let` or
    /// `return` is parsed as an expression statement. A trailing semicolon is
    /// consumed when present but never required.
    ///
    /// # Returns
    /// The parsed [`Statement`], or `None` when a sub-parser recorded an
    /// error that prevented one from being built.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current() {
            Token::Let => self.parse_let_statement(),
            Token::Return => Some(self.parse_return_statement()),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>`.
    ///
    /// A failed value expression still yields a statement with an absent
    /// value; the recorded parse error is what makes the program unusable.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let name = self.expect_ident()?;

        if !self.expect_peek(&Token::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest);
        if self.peek() == &Token::Semicolon {
            self.advance();
        }

        Some(Statement::Let { name, value })
    }

    /// Parses `return <expression>`.
    fn parse_return_statement(&mut self) -> Statement {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest);
        if self.peek() == &Token::Semicolon {
            self.advance();
        }

        Statement::Return(value)
    }

    /// Parses a bare expression in statement position.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek() == &Token::Semicolon {
            self.advance();
        }

        Some(Statement::Expression(expr))
    }

    /// Parses a `{ ... }` block.
    ///
    /// The current token must be the opening brace. Statements are collected
    /// until the closing brace or the end of input; the cursor is left on
    /// whichever of the two ended the block.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> Block {
        self.advance();

        let mut statements = Vec::new();
        while self.current() != &Token::RBrace && self.current() != &Token::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        Block { statements }
    }
}
