//! Core data model types for memspan.
//!
//! These are the fundamental types the entire memspan system uses to
//! represent quiz problems, answers, and participant identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Total number of problems in a quiz.
pub const PROBLEM_COUNT: usize = 10;
/// Judgment problems per quiz (odd ordinals).
pub const JUDGMENT_COUNT: usize = 5;
/// Word prompts per quiz (even ordinals).
pub const WORD_COUNT: usize = 5;
/// Statements sampled from the true pool.
pub const TRUE_PICKS: usize = 3;
/// Statements sampled from the false pool.
pub const FALSE_PICKS: usize = 2;

/// Placeholder for absent identity fields in exported rows.
pub const NOT_PROVIDED: &str = "not provided";

/// The two-valued answer to a judgment problem.
///
/// Rendered as the `O` / `X` marks the training sheet uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    True,
    False,
}

impl Choice {
    /// The choice matching a stored truth value.
    pub fn from_truth(truth: bool) -> Self {
        if truth {
            Choice::True
        } else {
            Choice::False
        }
    }

    pub fn as_bool(self) -> bool {
        matches!(self, Choice::True)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::True => write!(f, "O"),
            Choice::False => write!(f, "X"),
        }
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "o" | "t" | "true" => Ok(Choice::True),
            "x" | "f" | "false" => Ok(Choice::False),
            other => Err(format!("unknown choice: {other}")),
        }
    }
}

/// A single quiz item.
///
/// Odd ordinals are judgment problems, even ordinals are word prompts.
/// Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Problem {
    /// A statement to judge true or false.
    Judgment {
        ordinal: u8,
        statement: String,
        truth: bool,
    },
    /// A word to memorize for the recall phase. No choice required.
    WordPrompt { ordinal: u8, word: String },
}

impl Problem {
    /// Position of this problem in the quiz, 1 through 10.
    pub fn ordinal(&self) -> u8 {
        match self {
            Problem::Judgment { ordinal, .. } => *ordinal,
            Problem::WordPrompt { ordinal, .. } => *ordinal,
        }
    }

    pub fn is_judgment(&self) -> bool {
        matches!(self, Problem::Judgment { .. })
    }
}

/// An ordered sequence of exactly ten problems.
///
/// Invariants are upheld by the generator: five judgments (three
/// true-sourced, two false-sourced) at odd ordinals, five distinct words
/// at even ordinals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    problems: Vec<Problem>,
}

impl Quiz {
    pub(crate) fn new(problems: Vec<Problem>) -> Self {
        debug_assert_eq!(problems.len(), PROBLEM_COUNT);
        Self { problems }
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// The problem at a zero-based position.
    pub fn problem(&self, position: usize) -> Option<&Problem> {
        self.problems.get(position)
    }

    /// The presented words in gold (presentation/recall) order.
    pub fn words(&self) -> Vec<String> {
        self.problems
            .iter()
            .filter_map(|p| match p {
                Problem::WordPrompt { word, .. } => Some(word.clone()),
                Problem::Judgment { .. } => None,
            })
            .collect()
    }
}

/// Annotative participant identity attached to exported reports.
///
/// Never affects scoring or generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl Identity {
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_PROVIDED)
    }

    pub fn class_or_default(&self) -> &str {
        self.class.as_deref().unwrap_or(NOT_PROVIDED)
    }

    pub fn id_or_default(&self) -> &str {
        self.id.as_deref().unwrap_or(NOT_PROVIDED)
    }
}
