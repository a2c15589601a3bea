use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashMap<&'static str, TokenType> = {
        let mut map = HashMap::new();
        map.insert("func", TokenType::Func);
        map.insert("if", TokenType::If);
        map.insert("else", TokenType::Else);
        map.insert("while", TokenType::While);
        map.insert("return", TokenType::Return);
        map.insert("break", TokenType::Break);
        map.insert("continue", TokenType::Continue);
        map.insert("seq", TokenType::Seq);
        map.insert("par", TokenType::Par);
        map.insert("c_channel", TokenType::CChannel);
        map.insert("s_channel", TokenType::SChannel);
        map.insert("for", TokenType::For);
        map.insert("number", TokenType::NumberType);
        map.insert("bool", TokenType::BoolType);
        map.insert("string", TokenType::StringType);
        map.insert("void", TokenType::VoidType);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    // Single-char tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    Less,
    Not,
    Greater,
    Assign,
    Colon,

    // Literals.
    Name,
    Number,
    String,

    // Comments. Consumed by the scanner, never emitted.
    LineComment,
    BlockComment,

    // Two-char tokens. Newline is folded into the line counter, never emitted.
    Arrow,
    Or,
    And,
    Equal,
    NotEqual,
    LessEqual,
    GreaterEqual,
    Newline,

    // Keywords.
    Func,
    If,
    Else,
    While,
    Return,
    Break,
    Continue,
    Seq,
    Par,
    CChannel,
    SChannel,
    For,

    // Whitespace. Skipped, never tokenized.
    Whitespace,

    // Type names.
    NumberType,
    BoolType,
    StringType,
    VoidType,

    // Catch-all for unrecognized input.
    Other,
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(value) => write!(f, "{}", value),
            Literal::String(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenType,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {}", self.kind, self.lexeme),
        }
    }
}
