//! Random arithmetic problem generation

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ArithmeticError, ArithmeticResult};

pub const MIN_DIFFICULTY: u32 = 1;
/// Keeps the largest product (10^6 - 1)^2 comfortably inside `i64`
pub const MAX_DIFFICULTY: u32 = 6;

/// Supported quiz operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Multiplication,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Addition, Operation::Multiplication];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Multiplication => "multiplication",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Multiplication => '*',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "addition" | "add" | "+" => Ok(Operation::Addition),
            "multiplication" | "multiply" | "*" => Ok(Operation::Multiplication),
            other => Err(ArithmeticError::UnknownOperation(other.to_string())),
        }
    }
}

/// Number of digits per operand, validated to `MIN_DIFFICULTY..=MAX_DIFFICULTY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty(u32);

impl Difficulty {
    pub fn new(value: i64) -> ArithmeticResult<Self> {
        if value < i64::from(MIN_DIFFICULTY) || value > i64::from(MAX_DIFFICULTY) {
            return Err(ArithmeticError::DifficultyOutOfRange {
                value,
                min: MIN_DIFFICULTY,
                max: MAX_DIFFICULTY,
            });
        }
        Ok(Self(value as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Smallest operand with exactly `d` digits
    fn lower(&self) -> i64 {
        10_i64.pow(self.0 - 1)
    }

    /// Largest operand with `d` digits
    fn upper(&self) -> i64 {
        10_i64.pow(self.0) - 1
    }
}

/// A generated question with its expected answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub left: i64,
    pub right: i64,
    pub operation: Operation,
    pub answer: i64,
}

impl Problem {
    pub fn new(left: i64, right: i64, operation: Operation) -> Self {
        let answer = match operation {
            Operation::Addition => left + right,
            Operation::Multiplication => left * right,
        };
        Self {
            left,
            right,
            operation,
            answer,
        }
    }

    /// Question text as shown to the user, e.g. `"12 + 34"`
    pub fn question(&self) -> String {
        format!("{} {} {}", self.left, self.operation.symbol(), self.right)
    }

    pub fn is_correct(&self, answer: i64) -> bool {
        self.answer == answer
    }
}

/// Addition draws both operands with exactly `d` digits; multiplication
/// draws them from `1..10^d`.
pub fn generate_problem<R: Rng + ?Sized>(
    difficulty: Difficulty,
    operation: Operation,
    rng: &mut R,
) -> Problem {
    let (low, high) = match operation {
        Operation::Addition => (difficulty.lower(), difficulty.upper()),
        Operation::Multiplication => (1, difficulty.upper()),
    };
    let left = rng.gen_range(low..=high);
    let right = rng.gen_range(low..=high);
    Problem::new(left, right, operation)
}
