use crate::errors::errors::{ErrorReporter, LexError};
use crate::MK_TOKEN;

use super::tokens::{Literal, Token, TokenType, KEYWORDS};

pub struct Scanner<'r> {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    reporter: &'r mut dyn ErrorReporter,
}

impl<'r> Scanner<'r> {
    pub fn new(source: String, reporter: &'r mut dyn ErrorReporter) -> Scanner<'r> {
        Scanner {
            source: source.chars().collect(),
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),
            ':' => self.add_token(TokenType::Colon),
            '-' => {
                if self.match_char('>') {
                    self.add_token(TokenType::Arrow);
                } else {
                    self.add_token(TokenType::Minus);
                }
            }
            '!' => {
                if self.match_char('=') {
                    self.add_token(TokenType::NotEqual);
                } else {
                    self.add_token(TokenType::Not);
                }
            }
            '|' => {
                if self.match_char('|') {
                    self.add_token(TokenType::Or);
                } else {
                    self.report(LexError::UnexpectedCharacter { character: c });
                    self.add_token(TokenType::Other);
                }
            }
            '&' => {
                if self.match_char('&') {
                    self.add_token(TokenType::And);
                } else {
                    self.report(LexError::UnexpectedCharacter { character: c });
                    self.add_token(TokenType::Other);
                }
            }
            '=' => {
                if self.match_char('=') {
                    self.add_token(TokenType::Equal);
                } else {
                    self.add_token(TokenType::Assign);
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.add_token(TokenType::LessEqual);
                } else {
                    self.add_token(TokenType::Less);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_token(TokenType::GreaterEqual);
                } else {
                    self.add_token(TokenType::Greater);
                }
            }
            '/' => {
                if self.match_char('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenType::Slash);
                }
            }
            '#' => self.line_comment(),
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.name(),
            _ => {
                self.report(LexError::UnexpectedCharacter { character: c });
                self.add_token(TokenType::Other);
            }
        }
    }

    // Stops short of the terminating newline so the dispatch loop still
    // sees it and bumps the line counter.
    fn line_comment(&mut self) {
        while self.peek() != Some('\n') && !self.is_at_end() {
            self.advance();
        }
    }

    fn block_comment(&mut self) {
        while !(self.peek() == Some('*') && self.peek_next() == Some('/')) {
            if self.is_at_end() {
                self.report(LexError::UnterminatedComment);
                return;
            }

            if self.peek() == Some('\n') {
                self.line += 1;
            }

            self.advance();
        }

        self.advance();
        self.advance();
    }

    fn string(&mut self) {
        // The token reports the line its opening quote sits on.
        let line = self.line;

        while self.peek() != Some('"') && !self.is_at_end() {
            if self.peek() == Some('\n') {
                self.line += 1;
            }

            self.advance();
        }

        if self.is_at_end() {
            self.report(LexError::UnterminatedString);
            return;
        }

        self.advance();

        let value: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        let lexeme: String = self.source[self.start..self.current].iter().collect();

        self.tokens.push(MK_TOKEN!(
            TokenType::String,
            lexeme,
            Some(Literal::String(value)),
            line
        ));
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Only commit to a fractional part when a digit follows the dot.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();

            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let value: f64 = lexeme.parse().unwrap();

        self.tokens.push(MK_TOKEN!(
            TokenType::Number,
            lexeme,
            Some(Literal::Number(value)),
            self.line
        ));
    }

    fn name(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let kind = KEYWORDS.get(text.as_str()).copied().unwrap_or(TokenType::Name);
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenType) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(MK_TOKEN!(kind, lexeme, None, self.line));
    }

    fn report(&mut self, error: LexError) {
        self.reporter.report(self.line, &error);
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        self.current += 1;
        true
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

pub fn tokenize(source: String, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}
