//! Arithmetic problem generation
//!
//! Validates operand ranges, samples question/answer pairs and computes the
//! widest expression a configuration can produce.

mod bounds;
mod generator;
mod operator;

pub use bounds::{OperandBounds, parse_leading_int};
pub use generator::{Configuration, Problem, ProblemGenerator, RangeMode, digit_len};
pub use operator::{EQUALS, Operator, ParseOperatorError};
