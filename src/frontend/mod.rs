pub mod literal;
pub mod token;
