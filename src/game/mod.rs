pub mod board;
pub mod cell;
pub mod error;
pub mod evaluator;
