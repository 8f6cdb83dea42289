use serde::{Deserialize, Serialize};

use crate::frontend::literal::Literal;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TokenType {
    Minus,
    Plus,
    Slash,
    Star,
    Modulo,

    Bang,
    BangEqual,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    And,
    Or,
}

impl TokenType {
    /// Source spelling of the operator.
    pub fn lexeme(self) -> &'static str {
        match self {
            TokenType::Minus => "-",
            TokenType::Plus => "+",
            TokenType::Slash => "/",
            TokenType::Star => "*",
            TokenType::Modulo => "%",
            TokenType::Bang => "!",
            TokenType::BangEqual => "!=",
            TokenType::EqualEqual => "==",
            TokenType::Greater => ">",
            TokenType::GreaterEqual => ">=",
            TokenType::Less => "<",
            TokenType::LessEqual => "<=",
            TokenType::And => "and",
            TokenType::Or => "or",
        }
    }
}

/// An operator token as the scanner produced it. Printing reads only
/// `lexeme`; `literal` and `line` are carried for the front-end's own
/// diagnostics and survive a JSON round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenType,
    pub lexeme: String,
    #[serde(default)]
    pub literal: Option<Literal>,
    /// Source line, 0 when unknown.
    #[serde(default)]
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenType, lexeme: String, literal: Option<Literal>, line: usize) -> Self {
        Token {
            kind,
            lexeme,
            literal,
            line,
        }
    }

    pub fn symbol(kind: TokenType, line: usize) -> Self {
        Token::new(kind, kind.lexeme().into(), None, line)
    }
}
