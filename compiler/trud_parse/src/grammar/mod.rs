//! Grammar modules, one per syntactic category.
//!
//! Each adds methods to `Parser`.

mod expr;
mod match_expr;
mod operators;
mod stmt;
