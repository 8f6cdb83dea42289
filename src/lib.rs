//! Reverse polish notation printer for neu expression trees.

pub mod ast;
pub mod error;
pub mod frontend;

pub use ast::expr::Expr;
pub use ast::rpn::{render, RpnPrinter};
pub use error::LoadError;
pub use frontend::literal::Literal;
pub use frontend::token::{Token, TokenType};
