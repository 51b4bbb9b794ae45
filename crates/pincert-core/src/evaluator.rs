//! Certification checks and percentage scoring.
//!
//! Everything here is a pure function of its arguments. The
//! [`CertificationEvaluator`] wrapper only binds a [`RequiredModuleSet`] and
//! a [`Rounding`] rule so callers can hold one evaluator per course.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CertifyError;
use crate::model::{CompletionRecord, RequiredModuleSet, ScoreInput};

/// How a fractional percentage is turned into an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// 12.5 -> 13, 0.5 -> 1.
    #[default]
    HalfAwayFromZero,
    /// 12.5 -> 12, 13.5 -> 14.
    HalfToEven,
}

/// Rounding rule used by [`compute_score`].
pub const SCORE_ROUNDING: Rounding = Rounding::HalfAwayFromZero;

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounding::HalfAwayFromZero => write!(f, "half-away-from-zero"),
            Rounding::HalfToEven => write!(f, "half-to-even"),
        }
    }
}

impl FromStr for Rounding {
    type Err = CertifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "half-away-from-zero" | "half-up" => Ok(Rounding::HalfAwayFromZero),
            "half-to-even" | "bankers" => Ok(Rounding::HalfToEven),
            other => Err(CertifyError::InvalidInput(format!(
                "unknown rounding mode: {other}"
            ))),
        }
    }
}

/// Returns `true` iff every module in `required` appears in `completed`.
///
/// Extra completed modules are ignored. An empty `required` set is
/// satisfied by any record, including an empty one.
pub fn is_certified(required: &RequiredModuleSet, completed: &CompletionRecord) -> bool {
    required.iter().all(|id| completed.contains(id))
}

/// Percentage of `correct` out of `total`, rounded with [`SCORE_ROUNDING`].
///
/// A `total` of zero scores 0. `correct > total` is not clamped and yields
/// values above 100.
pub fn compute_score(correct: u32, total: u32) -> u32 {
    compute_score_with(correct, total, SCORE_ROUNDING)
}

/// Like [`compute_score`], but reports a zero `total` as
/// [`CertifyError::InvalidDivisor`].
pub fn try_compute_score(correct: u32, total: u32) -> Result<u32, CertifyError> {
    if total == 0 {
        return Err(CertifyError::InvalidDivisor);
    }
    Ok(compute_score(correct, total))
}

/// Percentage of `correct` out of `total` under an explicit rounding rule.
///
/// Computed in integer arithmetic, so ties are detected exactly. Results
/// that do not fit a `u32` saturate.
pub fn compute_score_with(correct: u32, total: u32, rounding: Rounding) -> u32 {
    if total == 0 {
        return 0;
    }

    let scaled = u64::from(correct) * 100;
    let total = u64::from(total);
    let quotient = scaled / total;
    // Compare twice the remainder with the divisor to locate the half.
    let twice_remainder = (scaled % total) * 2;

    let rounded = match rounding {
        Rounding::HalfAwayFromZero if twice_remainder >= total => quotient + 1,
        Rounding::HalfToEven if twice_remainder > total => quotient + 1,
        Rounding::HalfToEven if twice_remainder == total && quotient % 2 == 1 => quotient + 1,
        _ => quotient,
    };

    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Share of the required modules present in `completed`, as a percentage
/// rounded with [`SCORE_ROUNDING`].
///
/// Modules outside the required set do not count. An empty required set
/// reports 0.
pub fn module_progress(required: &RequiredModuleSet, completed: &CompletionRecord) -> u32 {
    module_progress_with(required, completed, SCORE_ROUNDING)
}

/// Like [`module_progress`], under an explicit rounding rule.
pub fn module_progress_with(
    required: &RequiredModuleSet,
    completed: &CompletionRecord,
    rounding: Rounding,
) -> u32 {
    let done = required.iter().filter(|id| completed.contains(id)).count();
    compute_score_with(done as u32, required.len() as u32, rounding)
}

/// Required modules not yet in `completed`, in required-set order.
pub fn missing_modules<'a>(
    required: &'a RequiredModuleSet,
    completed: &CompletionRecord,
) -> Vec<&'a str> {
    required.iter().filter(|id| !completed.contains(id)).collect()
}

/// Evaluator bound to one course's required modules.
#[derive(Debug, Clone)]
pub struct CertificationEvaluator {
    required: RequiredModuleSet,
    rounding: Rounding,
}

impl CertificationEvaluator {
    pub fn new(required: RequiredModuleSet) -> Self {
        Self {
            required,
            rounding: SCORE_ROUNDING,
        }
    }

    /// Override the rounding rule used by [`score`](Self::score) and
    /// [`progress`](Self::progress).
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn required(&self) -> &RequiredModuleSet {
        &self.required
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn is_certified(&self, completed: &CompletionRecord) -> bool {
        is_certified(&self.required, completed)
    }

    pub fn progress(&self, completed: &CompletionRecord) -> u32 {
        module_progress_with(&self.required, completed, self.rounding)
    }

    pub fn missing(&self, completed: &CompletionRecord) -> Vec<String> {
        missing_modules(&self.required, completed)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn score(&self, input: ScoreInput) -> u32 {
        compute_score_with(input.correct, input.total, self.rounding)
    }
}
