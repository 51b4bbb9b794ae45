//! Assessment of one submission: certification, progress, quiz score and
//! the resulting PASS/FAIL verdict.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CertifyError;
use crate::evaluator::CertificationEvaluator;
use crate::model::Submission;

/// Column names of an assessment row, matching [`Assessment::row`].
pub const ASSESSMENT_HEADERS: [&str; 7] = [
    "Timestamp",
    "Learner",
    "Course",
    "Score",
    "Progress",
    "Certified",
    "Status",
];

/// Minimum quiz percentage required for a PASS verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PassThreshold(u32);

impl PassThreshold {
    pub const DEFAULT: PassThreshold = PassThreshold(80);

    pub fn new(percent: u32) -> Result<Self, CertifyError> {
        if percent > 100 {
            return Err(CertifyError::InvalidThreshold(percent));
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> u32 {
        self.0
    }

    pub fn is_met(self, score: u32) -> bool {
        score >= self.0
    }
}

impl Default for PassThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for PassThreshold {
    type Error = CertifyError;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<PassThreshold> for u32 {
    fn from(threshold: PassThreshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for PassThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Final status of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// PASS requires every module; when a quiz score is present it must
    /// also meet the threshold.
    pub fn decide(certified: bool, score: Option<u32>, threshold: PassThreshold) -> Self {
        let score_ok = score.is_none_or(|s| threshold.is_met(s));
        if certified && score_ok {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// The outcome of evaluating one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique assessment identifier.
    pub id: Uuid,
    /// When the assessment was made.
    pub created_at: DateTime<Utc>,
    pub learner: String,
    pub course_id: String,
    /// Whether every required module is completed.
    pub certified: bool,
    /// Percentage of required modules completed.
    pub progress: u32,
    /// Required modules still outstanding.
    #[serde(default)]
    pub missing: Vec<String>,
    /// Quiz percentage, if the submission carried a quiz result.
    #[serde(default)]
    pub score: Option<u32>,
    pub threshold: PassThreshold,
    pub verdict: Verdict,
}

impl Assessment {
    /// Evaluate a submission against a course evaluator and pass threshold.
    pub fn evaluate(
        evaluator: &CertificationEvaluator,
        submission: &Submission,
        threshold: PassThreshold,
    ) -> Self {
        let certified = evaluator.is_certified(&submission.completed);
        let progress = evaluator.progress(&submission.completed);
        let missing = evaluator.missing(&submission.completed);
        let score = submission.score.map(|input| evaluator.score(input));
        let verdict = Verdict::decide(certified, score, threshold);

        tracing::debug!(
            learner = %submission.learner,
            course = %submission.course,
            certified,
            progress,
            ?score,
            %verdict,
            "assessed submission"
        );

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            learner: submission.learner.clone(),
            course_id: submission.course.clone(),
            certified,
            progress,
            missing,
            score,
            threshold,
            verdict,
        }
    }

    /// Cells of this assessment in [`ASSESSMENT_HEADERS`] order.
    pub fn row(&self) -> [String; 7] {
        [
            self.created_at.to_rfc3339(),
            self.learner.clone(),
            self.course_id.clone(),
            self.score
                .map(|s| format!("{s}%"))
                .unwrap_or_else(|| "-".to_string()),
            format!("{}%", self.progress),
            if self.certified { "yes" } else { "no" }.to_string(),
            self.verdict.to_string(),
        ]
    }
}
