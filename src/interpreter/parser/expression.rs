use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser {
    /// Parses the expression form that begins at the current token.
    ///
    /// This is the prefix half of the Pratt dispatch: literals, identifiers,
    /// unary operators, grouped expressions, conditionals, function literals,
    /// and the array and hash literal brackets. Tokens with no prefix form
    /// record [`ParseError::NoPrefixParse`].
    ///
    /// # Returns
    /// The parsed expression with the cursor on its last token, or `None`
    /// after recording an error.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> Option<Expr> {
        let token = self.current().clone();

        match token {
            Token::Ident(name) => Some(Expr::Variable(name)),
            Token::Int(literal) => self.parse_integer_literal(literal),
            Token::Str(value) => Some(Expr::Literal(LiteralValue::Str(value))),
            Token::True => Some(Expr::Literal(LiteralValue::Bool(true))),
            Token::False => Some(Expr::Literal(LiteralValue::Bool(false))),
            Token::Bang => self.parse_unary(UnaryOperator::Not),
            Token::Minus => self.parse_unary(UnaryOperator::Negate),
            Token::LParen => self.parse_grouped(),
            Token::If => self.parse_if(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => {
                let elements = self.parse_expression_list(&Token::RBracket)?;
                Some(Expr::ArrayLiteral { elements })
            },
            Token::LBrace => self.parse_hash_literal(),
            other => {
                self.errors
                    .push(ParseError::NoPrefixParse { token: other.to_string() });
                None
            },
        }
    }

    /// Extends `left` with the infix form of the current token.
    ///
    /// This is the infix half of the Pratt dispatch: the binary operators,
    /// `(` as a call, and `[` as an index. The expression loop only advances
    /// onto tokens the precedence table knows, so the operator arm is
    /// exhaustive.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current().clone();

        match token {
            Token::LParen => {
                let arguments = self.parse_expression_list(&Token::RParen)?;
                Some(Expr::FunctionCall { function: Box::new(left),
                                          arguments })
            },
            Token::LBracket => {
                self.advance();
                let index = self.parse_expression(Precedence::Lowest)?;
                if !self.expect_peek(&Token::RBracket) {
                    return None;
                }
                Some(Expr::Index { left:  Box::new(left),
                                   index: Box::new(index), })
            },
            operator => {
                let op = match operator {
                    Token::Plus => BinaryOperator::Add,
                    Token::Minus => BinaryOperator::Sub,
                    Token::Star => BinaryOperator::Mul,
                    Token::Slash => BinaryOperator::Div,
                    Token::Lt => BinaryOperator::Less,
                    Token::Gt => BinaryOperator::Greater,
                    Token::Eq => BinaryOperator::Equal,
                    Token::NotEq => BinaryOperator::NotEqual,
                    _ => unreachable!("precedence table only admits operator tokens"),
                };

                // Parsing the right arm at the operator's own precedence makes
                // operators of equal precedence left-associative.
                let precedence = Precedence::of(self.current());
                self.advance();
                let right = self.parse_expression(precedence)?;

                Some(Expr::BinaryOp { left: Box::new(left),
                                      op,
                                      right: Box::new(right), })
            },
        }
    }

    /// Converts an integer literal's digits into a value.
    ///
    /// Records [`ParseError::InvalidIntegerLiteral`] when the digits do not
    /// fit the 32-bit signed range.
    fn parse_integer_literal(&mut self, literal: String) -> Option<Expr> {
        match literal.parse::<i32>() {
            Ok(value) => Some(Expr::Literal(LiteralValue::Integer(value))),
            Err(_) => {
                self.errors
                    .push(ParseError::InvalidIntegerLiteral { literal });
                None
            },
        }
    }

    /// Parses a unary operand at [`Precedence::Prefix`], so `!-a` nests as
    /// `(!(-a))`.
    fn parse_unary(&mut self, op: UnaryOperator) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::UnaryOp { op,
                             expr: Box::new(expr) })
    }

    /// Parses a parenthesized expression. The inner expression is returned
    /// as-is; grouping leaves no wrapper node.
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        Some(expr)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek() == &Token::Else {
            self.advance();
            if !self.expect_peek(&Token::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::IfExpr { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Parses `fn(<parameters>) { ... }`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        let parameters = self.parse_parameters()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expr::FunctionLiteral { parameters, body })
    }

    /// Parses a comma-separated, possibly empty parameter name list up to the
    /// closing parenthesis.
    fn parse_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek() == &Token::RParen {
            self.advance();
            return Some(parameters);
        }

        parameters.push(self.expect_ident()?);
        while self.peek() == &Token::Comma {
            self.advance();
            parameters.push(self.expect_ident()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        Some(parameters)
    }

    /// Parses a comma-separated list of expressions until a closing token.
    ///
    /// Shared by array literals and call argument lists. An immediately
    /// encountered closing token produces an empty list.
    ///
    /// # Parameters
    /// - `closing`: The token that terminates the list (`]` or `)`).
    fn parse_expression_list(&mut self, closing: &Token) -> Option<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek() == closing {
            self.advance();
            return Some(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek() == &Token::Comma {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(closing) {
            return None;
        }
        Some(items)
    }

    /// Parses `{ <key> : <value>, ... }`. Key order is preserved in the node;
    /// evaluation is free to rehash it.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while self.peek() != &Token::RBrace {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if self.peek() != &Token::RBrace && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }
        Some(Expr::HashLiteral { pairs })
    }
}
