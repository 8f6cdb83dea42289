pub mod expr;
pub mod load;
pub mod rpn;
