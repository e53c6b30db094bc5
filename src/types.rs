// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Identifier of a task in the precedence graph.
pub type TaskId = i64;

/// Direction in which precedence edges point relative to the tree root(s).
///
/// - `In`: edges point toward the root (the root is the last task to run).
/// - `Out`: edges point away from the root (the root is the first task to run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    In,
    Out,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::In => f.write_str("in"),
            Orientation::Out => f.write_str("out"),
        }
    }
}

/// Separator between the two task ids of an edge-list line.
///
/// `Whitespace` splits on any run of spaces or tabs; `Char` splits on one
/// exact character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Delimiter {
    Char(char),
    Whitespace,
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Char(',')
    }
}

impl Delimiter {
    /// Split one line into trimmed tokens.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Whitespace => line.split_whitespace().collect(),
            Delimiter::Char(c) => line.split(*c).map(str::trim).collect(),
        }
    }

    /// Characters that would make an id ambiguous are not allowed.
    pub fn is_valid(&self) -> bool {
        match self {
            Delimiter::Whitespace => true,
            Delimiter::Char(c) => !(c.is_ascii_digit() || *c == '-' || *c == '+'),
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            " " => return Ok(Delimiter::Whitespace),
            "\t" => return Ok(Delimiter::Char('\t')),
            _ => {}
        }

        match s.trim().to_lowercase().as_str() {
            "whitespace" | "space" => Ok(Delimiter::Whitespace),
            "tab" => Ok(Delimiter::Char('\t')),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Delimiter::Char(c)),
                    _ => Err(format!(
                        "invalid delimiter: {s:?} (expected a single character, \"tab\" or \"whitespace\")"
                    )),
                }
            }
        }
    }
}

impl TryFrom<String> for Delimiter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Whitespace => f.write_str("whitespace"),
            Delimiter::Char('\t') => f.write_str("tab"),
            Delimiter::Char(c) => write!(f, "{c:?}"),
        }
    }
}
