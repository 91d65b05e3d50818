//! Tokenizer and recursive descent parser for evaluator syntax

use crate::core::{CalcError, CalcResult, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator (or unary sign, decided by the parser)
    Operator(Operation),
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() || ch == '.' {
            return self.read_number().map(Some);
        }

        let op = Operation::from_eval_symbol(ch)
            .ok_or_else(|| CalcError::parse(format!("Unexpected character: '{ch}'")))?;
        self.advance();
        Ok(Some(Token::Operator(op)))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let num_str = &self.input[start..self.pos];
        // A second '.' directly after a literal is never a valid continuation
        if self.current_char() == Some('.') {
            return Err(CalcError::parse(format!(
                "Invalid number: '{num_str}.'"
            )));
        }

        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::parse(format!("Invalid number: '{num_str}'")))?;

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('+' | '-') unary | NUMBER
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input.trim()).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::parse(format!(
                "Unexpected token {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it is one of the given operators
    fn eat_operator(&mut self, accepted: &[Operation]) -> Option<Operation> {
        match self.current() {
            Some(Token::Operator(op)) if accepted.contains(op) => {
                let op = *op;
                self.pos += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.eat_operator(&[Operation::Add, Operation::Subtract]) {
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.eat_operator(&[Operation::Multiply, Operation::Divide]) {
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        match self.eat_operator(&[Operation::Add, Operation::Subtract]) {
            Some(Operation::Subtract) => return Ok(AstNode::negate(self.parse_unary()?)),
            Some(_) => return self.parse_unary(),
            None => {}
        }

        match self.advance() {
            Some(Token::Number(n)) => Ok(AstNode::number(*n)),
            Some(token) => Err(CalcError::parse(format!("Unexpected token: {token:?}"))),
            None => Err(CalcError::parse("Unexpected end of expression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Tokenizer tests =====

    #[test]
    fn test_tokenize_decimal_number() {
        let tokens = Tokenizer::new("3.14").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(3.14)]);
    }

    #[test]
    fn test_tokenize_operators() {
        let tokens = Tokenizer::new("+ - * /").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Operator(Operation::Add),
                Token::Operator(Operation::Subtract),
                Token::Operator(Operation::Multiply),
                Token::Operator(Operation::Divide),
            ]
        );
    }

    #[test]
    fn test_tokenize_no_spaces() {
        let tokens = Tokenizer::new("12+3*4").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(12.0),
                Token::Operator(Operation::Add),
                Token::Number(3.0),
                Token::Operator(Operation::Multiply),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_leading_and_trailing_dot() {
        let tokens = Tokenizer::new(".5+5.").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(0.5),
                Token::Operator(Operation::Add),
                Token::Number(5.0)
            ]
        );
    }

    #[test]
    fn test_tokenize_leading_zeros_are_decimal() {
        let tokens = Tokenizer::new("010").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(10.0)]);
    }

    #[test]
    fn test_tokenize_display_symbols_rejected() {
        assert!(matches!(
            Tokenizer::new("2×3").tokenize(),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_tokenize_words_rejected() {
        assert!(Tokenizer::new("NaN").tokenize().is_err());
        assert!(Tokenizer::new("Error5").tokenize().is_err());
    }

    #[test]
    fn test_tokenize_lone_dot_rejected() {
        assert!(Tokenizer::new(".").tokenize().is_err());
    }

    #[test]
    fn test_tokenize_double_dot_rejected() {
        assert!(Tokenizer::new("1.5.").tokenize().is_err());
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(Tokenizer::new("   ").tokenize().unwrap().is_empty());
    }

    // ===== Parser tests =====

    #[test]
    fn test_parse_single_number() {
        assert_eq!(Parser::parse_str("42").unwrap(), AstNode::Number(42.0));
    }

    #[test]
    fn test_parse_precedence_mul_over_add() {
        let ast = Parser::parse_str("2+3*4").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::number(2.0),
                Operation::Add,
                AstNode::binary(AstNode::number(3.0), Operation::Multiply, AstNode::number(4.0)),
            )
        );
    }

    #[test]
    fn test_parse_left_associative() {
        // 8 / 4 / 2 = (8 / 4) / 2
        let ast = Parser::parse_str("8/4/2").unwrap();
        match ast {
            AstNode::BinaryOp {
                left,
                op: Operation::Divide,
                right,
            } => {
                assert_eq!(*right, AstNode::Number(2.0));
                assert!(matches!(
                    *left,
                    AstNode::BinaryOp {
                        op: Operation::Divide,
                        ..
                    }
                ));
            }
            _ => panic!("Expected Divide at top level"),
        }
    }

    #[test]
    fn test_parse_unary_minus() {
        assert_eq!(
            Parser::parse_str("-5").unwrap(),
            AstNode::negate(AstNode::number(5.0))
        );
    }

    #[test]
    fn test_parse_unary_minus_after_operator() {
        let ast = Parser::parse_str("3*-2").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::number(3.0),
                Operation::Multiply,
                AstNode::negate(AstNode::number(2.0)),
            )
        );
    }

    #[test]
    fn test_parse_unary_plus() {
        assert_eq!(Parser::parse_str("+5").unwrap(), AstNode::number(5.0));
    }

    #[test]
    fn test_parse_empty_expression() {
        assert_eq!(Parser::parse_str(""), Err(CalcError::EmptyExpression));
        assert_eq!(Parser::parse_str("  "), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_parse_missing_operand() {
        assert!(matches!(
            Parser::parse_str("5*"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_consecutive_operators() {
        assert!(matches!(
            Parser::parse_str("2+*3"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_lone_minus() {
        assert!(matches!(
            Parser::parse_str("-"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_parser_parse_empty_tokens() {
        let mut parser = Parser::new(vec![]);
        assert_eq!(parser.parse(), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_parser_rejects_trailing_number() {
        let mut parser = Parser::new(vec![Token::Number(1.0), Token::Number(2.0)]);
        assert!(matches!(parser.parse(), Err(CalcError::ParseError(_))));
    }
}
