//! Classification result type.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Outcome of classifying a single number.
///
/// Variants are listed in priority order: a Fibonacci number is reported as
/// `Fibonacci` even when it is also divisible by 3 or 5.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Classification {
    /// Member of the Fibonacci sequence
    Fibonacci,
    /// Divisible by 15
    FizzBuzz,
    /// Divisible by 3 but not by 15
    Fizz,
    /// Divisible by 5 but not by 3
    Buzz,
    /// No rule applies; rendered as the decimal number itself
    Number(u64),
}

impl Classification {
    /// Text printed for this classification.
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            Self::Fibonacci => Cow::Borrowed("Fibonacci"),
            Self::FizzBuzz => Cow::Borrowed("FizzBuzz"),
            Self::Fizz => Cow::Borrowed("Fizz"),
            Self::Buzz => Cow::Borrowed("Buzz"),
            Self::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Fieldless tag for this classification.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Fibonacci => Kind::Fibonacci,
            Self::FizzBuzz => Kind::FizzBuzz,
            Self::Fizz => Kind::Fizz,
            Self::Buzz => Kind::Buzz,
            Self::Number(_) => Kind::Number,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            other => f.write_str(&other.label()),
        }
    }
}

/// Classification variant without the carried number.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Fibonacci,
    FizzBuzz,
    Fizz,
    Buzz,
    Number,
}

impl Kind {
    /// All kinds in priority order.
    pub const ALL: [Kind; 5] = [
        Kind::Fibonacci,
        Kind::FizzBuzz,
        Kind::Fizz,
        Kind::Buzz,
        Kind::Number,
    ];

    /// Machine-readable name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::FizzBuzz => "fizz_buzz",
            Self::Fizz => "fizz",
            Self::Buzz => "buzz",
            Self::Number => "number",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
