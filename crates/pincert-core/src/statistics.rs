//! Aggregate statistics across a cohort of assessments.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::evaluator::compute_score;

/// Summary of many learners' assessments for one course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortStats {
    /// Number of assessments summarised.
    pub learners: usize,
    /// Learners with every required module completed.
    pub certified: usize,
    /// Learners with a PASS verdict.
    pub passed: usize,
    /// Share of learners who passed, as a percentage.
    pub pass_rate: u32,
    /// Mean quiz percentage over learners who have a score.
    pub average_score: Option<u32>,
    /// Mean module progress percentage.
    pub average_progress: u32,
    /// Modules and how many learners are missing each, most missed first.
    pub most_missed: Vec<MissedModule>,
}

/// A module together with the number of learners who have not completed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedModule {
    pub module_id: String,
    pub learners: usize,
}

impl CohortStats {
    /// Compute cohort statistics. An empty slice yields all-zero stats.
    pub fn from_assessments(assessments: &[Assessment]) -> Self {
        let learners = assessments.len();
        let certified = assessments.iter().filter(|a| a.certified).count();
        let passed = assessments.iter().filter(|a| a.verdict.is_pass()).count();

        let scores: Vec<u64> = assessments
            .iter()
            .filter_map(|a| a.score.map(u64::from))
            .collect();
        let average_score = if scores.is_empty() {
            None
        } else {
            Some(mean_percent(scores.iter().sum(), scores.len()))
        };

        let progress_total: u64 = assessments.iter().map(|a| u64::from(a.progress)).sum();
        let average_progress = if learners == 0 {
            0
        } else {
            mean_percent(progress_total, learners)
        };

        let mut missed: HashMap<&str, usize> = HashMap::new();
        for a in assessments {
            for id in &a.missing {
                *missed.entry(id.as_str()).or_default() += 1;
            }
        }
        let mut most_missed: Vec<MissedModule> = missed
            .into_iter()
            .map(|(id, count)| MissedModule {
                module_id: id.to_string(),
                learners: count,
            })
            .collect();
        most_missed.sort_by(|a, b| {
            b.learners
                .cmp(&a.learners)
                .then_with(|| a.module_id.cmp(&b.module_id))
        });

        Self {
            learners,
            certified,
            passed,
            pass_rate: compute_score(passed as u32, learners as u32),
            average_score,
            average_progress,
            most_missed,
        }
    }
}

/// Mean of percentages, rounded with the same rule as individual scores.
///
/// Each value is already a percentage, so the mean is `sum / (count * 100)`
/// expressed as a percentage.
fn mean_percent(sum: u64, count: usize) -> u32 {
    let sum = u32::try_from(sum).unwrap_or(u32::MAX);
    let denominator = u32::try_from(count.saturating_mul(100)).unwrap_or(u32::MAX);
    compute_score(sum, denominator)
}
