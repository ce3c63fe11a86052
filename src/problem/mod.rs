//! @acp:module "Problems"
//! @acp:summary "Operation modes, problem values and the rejection-sampling generator"
//! @acp:domain generation
//! @acp:layer model
//!
//! A problem is an immutable line of text such as `"7 + 5 = "` or
//! `"X - 3 = 4"`. Problems are produced by [`ProblemGenerator`] in batches
//! ([`ProblemSet`]) and never change after that.

pub mod generator;
pub mod range;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::error::MathGenError;

pub use generator::{generate, ProblemGenerator, DEFAULT_MAX_ATTEMPTS};
pub use range::Range;

/// Placeholder printed for the algebra unknown
pub const UNKNOWN: &str = "X";

/// Kind of problems on a worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationMode {
    AddSub,
    MulDiv,
    Algebra,
}

impl OperationMode {
    /// All modes in prompt order
    pub fn all() -> &'static [OperationMode] {
        &[
            OperationMode::AddSub,
            OperationMode::MulDiv,
            OperationMode::Algebra,
        ]
    }

    /// Value typed at the operation prompt
    pub fn choice(&self) -> &'static str {
        match self {
            OperationMode::AddSub => "1",
            OperationMode::MulDiv => "2",
            OperationMode::Algebra => "3",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            OperationMode::AddSub => "Addition/Subtraction",
            OperationMode::MulDiv => "Multiplication/Division",
            OperationMode::Algebra => "Algebra",
        }
    }

    /// Problems generated per run for this mode
    pub fn problem_count(&self) -> usize {
        match self {
            OperationMode::AddSub | OperationMode::MulDiv => 800,
            OperationMode::Algebra => 400,
        }
    }

    /// Output file stem, without extension
    pub fn file_stem(&self) -> &'static str {
        match self {
            OperationMode::AddSub | OperationMode::MulDiv => "MathSums",
            OperationMode::Algebra => "MathProblems",
        }
    }
}

impl FromStr for OperationMode {
    type Err = MathGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "add-sub" | "addsub" => Ok(OperationMode::AddSub),
            "2" | "mul-div" | "muldiv" => Ok(OperationMode::MulDiv),
            "3" | "algebra" => Ok(OperationMode::Algebra),
            _ => Err(MathGenError::InvalidMode(s.trim().to_string())),
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One practice item, already formatted for printing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Problem(String);

impl Problem {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, fixed-length batch of problems from one generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemSet {
    mode: OperationMode,
    range: Range,
    problems: Vec<Problem>,
}

impl ProblemSet {
    pub(crate) fn new(mode: OperationMode, range: Range, problems: Vec<Problem>) -> Self {
        Self {
            mode,
            range,
            problems,
        }
    }

    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.problems.iter()
    }

    pub fn as_slice(&self) -> &[Problem] {
        &self.problems
    }
}

impl<'a> IntoIterator for &'a ProblemSet {
    type Item = &'a Problem;
    type IntoIter = std::slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.problems.iter()
    }
}

/// Generation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No acceptable sample within the attempt cap
    #[error(
        "No {mode} problem fits the range {range} after {attempts} attempts; try a wider range"
    )]
    Unsatisfiable {
        mode: OperationMode,
        range: Range,
        attempts: u64,
    },
}
