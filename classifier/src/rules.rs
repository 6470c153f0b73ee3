//! Classification rules.
//!
//! Two rule sets are available: plain FizzBuzz, and FizzBuzz with Fibonacci
//! detection layered on top. The Fibonacci check always runs first, so a
//! number such as 3 or 5 is reported as `Fibonacci` rather than `Fizz` or
//! `Buzz`.

use crate::classification::Classification;
use crate::errors::{ClassifierError, Result};
use crate::fibonacci::is_fibonacci;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which rule set to apply.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Divisibility rules only
    FizzBuzz,
    /// Fibonacci membership first, then divisibility rules
    #[default]
    FizzBuzzFibonacci,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FizzBuzz => "fizz_buzz",
            Self::FizzBuzzFibonacci => "fizz_buzz_fibonacci",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode `{0}` (expected `fizz_buzz` or `fizz_buzz_fibonacci`)")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fizz_buzz" | "fizzbuzz" => Ok(Self::FizzBuzz),
            "fizz_buzz_fibonacci" | "fizzbuzzfibonacci" => Ok(Self::FizzBuzzFibonacci),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Classify `n` with Fibonacci detection.
///
/// ```
/// use fizzfib_classifier::{Classification, classify};
///
/// assert_eq!(classify(3), Classification::Fibonacci);
/// assert_eq!(classify(9), Classification::Fizz);
/// assert_eq!(classify(15), Classification::FizzBuzz);
/// assert_eq!(classify(7), Classification::Number(7));
/// ```
pub fn classify(n: u64) -> Classification {
    if is_fibonacci(n) {
        Classification::Fibonacci
    } else {
        fizz_buzz(n)
    }
}

/// Classify `n` by divisibility alone. Never returns `Fibonacci`.
pub fn fizz_buzz(n: u64) -> Classification {
    if n % 15 == 0 {
        Classification::FizzBuzz
    } else if n % 3 == 0 {
        Classification::Fizz
    } else if n % 5 == 0 {
        Classification::Buzz
    } else {
        Classification::Number(n)
    }
}

/// Classify `n` with the given rule set.
pub fn classify_with(mode: Mode, n: u64) -> Classification {
    match mode {
        Mode::FizzBuzz => fizz_buzz(n),
        Mode::FizzBuzzFibonacci => classify(n),
    }
}

/// Classify a signed value. Negative input is rejected.
pub fn classify_signed(n: i64) -> Result<Classification> {
    u64::try_from(n)
        .map(classify)
        .map_err(|_| ClassifierError::NegativeInput(n))
}
