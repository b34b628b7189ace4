//! Arithmetic operators and their display symbols

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Equals sign shared by every expression
pub const EQUALS: char = '=';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator `{0}` (expected one of + - x / add sub mul div)")]
pub struct ParseOperatorError(pub String);

impl Operator {
    /// All operators in selector order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '\u{00d7}',
            Operator::Divide => '\u{00f7}',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "Addition",
            Operator::Subtract => "Subtraction",
            Operator::Multiply => "Multiplication",
            Operator::Divide => "Division",
        }
    }

    /// Next operator in selector order, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&op| op == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous operator in selector order, wrapping around
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|&op| op == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Map a single typed key to an operator
    pub fn from_key(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | 'x' | 'X' | '\u{00d7}' => Some(Operator::Multiply),
            '/' | ':' | '\u{00f7}' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operator::from_key(ch) {
                return Ok(op);
            }
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "add" | "plus" => Ok(Operator::Add),
            "sub" | "minus" => Ok(Operator::Subtract),
            "mul" | "times" => Ok(Operator::Multiply),
            "div" | "divide" => Ok(Operator::Divide),
            _ => Err(ParseOperatorError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, "+-\u{00d7}\u{00f7}");
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Operator::Divide.next(), Operator::Add);
        assert_eq!(Operator::Add.previous(), Operator::Divide);
        assert_eq!(Operator::Subtract.next().previous(), Operator::Subtract);
    }

    #[test]
    fn test_parse() {
        assert_eq!("x".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("\u{00f7}".parse::<Operator>(), Ok(Operator::Divide));
        assert_eq!(" Sub ".parse::<Operator>(), Ok(Operator::Subtract));
        assert!("%".parse::<Operator>().is_err());
    }
}
