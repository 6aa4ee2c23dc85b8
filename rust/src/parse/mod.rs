pub mod expr;
pub mod parser;
pub mod toplevel;
