//! Core data model types for pincert.
//!
//! These are the inputs the evaluator works on: the modules a course
//! requires, the modules a learner has completed, and a correct/total pair
//! for quiz scoring.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CertifyError;

/// The ordered, duplicate-free list of modules a course requires.
///
/// Built once per course and never mutated afterwards; several sets can
/// coexist in one process, one per course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RequiredModuleSet {
    modules: Vec<String>,
}

impl RequiredModuleSet {
    /// Build a set from module ids, rejecting duplicates.
    ///
    /// An empty list is accepted: every completion record satisfies it.
    pub fn new<I, S>(modules: I) -> Result<Self, CertifyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let modules: Vec<String> = modules.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(modules.len());
        for id in &modules {
            if !seen.insert(id.as_str()) {
                return Err(CertifyError::DuplicateModule(id.clone()));
            }
        }
        Ok(Self { modules })
    }

    /// Module ids in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.modules.iter().any(|m| m == id)
    }
}

impl TryFrom<Vec<String>> for RequiredModuleSet {
    type Error = CertifyError;

    fn try_from(modules: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(modules)
    }
}

impl From<RequiredModuleSet> for Vec<String> {
    fn from(set: RequiredModuleSet) -> Self {
        set.modules
    }
}

/// The modules one learner has finished. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionRecord {
    completed: BTreeSet<String>,
}

impl CompletionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a module as completed. Returns `false` if it already was.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.completed.insert(id.into())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CompletionRecord {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            completed: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A quiz result as a correct/total pair.
///
/// Serialized in its textual `correct/total` form, e.g. `score = "3/5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScoreInput {
    pub correct: u32,
    pub total: u32,
}

impl ScoreInput {
    pub fn new(correct: u32, total: u32) -> Self {
        Self { correct, total }
    }
}

impl fmt::Display for ScoreInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

impl FromStr for ScoreInput {
    type Err = CertifyError;

    /// Parse the `correct/total` form, e.g. `"4/5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (correct, total) = s.split_once('/').ok_or_else(|| {
            CertifyError::InvalidInput(format!("expected correct/total, got '{s}'"))
        })?;
        let parse = |part: &str, what: &str| {
            let part = part.trim();
            part.parse::<u32>().map_err(|_| {
                CertifyError::InvalidInput(format!("{what} count '{part}' is not a number"))
            })
        };
        Ok(Self {
            correct: parse(correct, "correct")?,
            total: parse(total, "total")?,
        })
    }
}

impl TryFrom<String> for ScoreInput {
    type Error = CertifyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ScoreInput> for String {
    fn from(score: ScoreInput) -> Self {
        score.to_string()
    }
}

/// A course: the modules it requires and an optional pass threshold
/// overriding the configured default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for this course.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Modules a learner must complete to be certified.
    #[serde(default)]
    pub modules: RequiredModuleSet,
    /// Minimum quiz percentage for a PASS verdict.
    #[serde(default)]
    pub pass_threshold: Option<u32>,
}

/// One learner's submission against a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub learner: String,
    /// Id of the course this submission targets.
    pub course: String,
    #[serde(default)]
    pub completed: CompletionRecord,
    /// Quiz result, if the learner has taken the quiz.
    #[serde(default)]
    pub score: Option<ScoreInput>,
}
