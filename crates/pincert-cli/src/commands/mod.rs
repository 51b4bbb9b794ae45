//! Subcommand implementations.

pub mod evaluate;
pub mod init;
pub mod score;
pub mod summary;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use pincert_core::assessment::{Assessment, PassThreshold};
use pincert_core::config::load_config_from;
use pincert_core::evaluator::CertificationEvaluator;
use pincert_core::model::{Course, Submission};
use pincert_core::parser;

/// How `evaluate` and `summary` print their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

/// A course ready for assessment: its evaluator and effective threshold.
pub struct CourseContext {
    pub course: Course,
    pub evaluator: CertificationEvaluator,
    pub threshold: PassThreshold,
}

impl CourseContext {
    /// Load a course and resolve its threshold.
    ///
    /// Threshold precedence: command-line flag, then the course file, then
    /// the config (which already folds in `PINCERT_PASS_THRESHOLD`).
    pub fn load(
        course_path: &Path,
        threshold_flag: Option<u32>,
        config_path: Option<PathBuf>,
    ) -> Result<Self> {
        let config = load_config_from(config_path.as_deref())?;
        let course = parser::parse_course(course_path)?;

        let threshold = match threshold_flag.or(course.pass_threshold) {
            Some(percent) => PassThreshold::new(percent)
                .with_context(|| format!("invalid threshold for course '{}'", course.id))?,
            None => config.pass_threshold,
        };

        let evaluator =
            CertificationEvaluator::new(course.modules.clone()).with_rounding(config.rounding);

        tracing::debug!(
            course = %course.id,
            modules = course.modules.len(),
            %threshold,
            rounding = %config.rounding,
            "loaded course"
        );

        Ok(Self {
            course,
            evaluator,
            threshold,
        })
    }

    /// Assess the submissions that target this course. Submissions for other
    /// courses are skipped with a warning.
    pub fn assess_all(&self, submissions: &[Submission]) -> Vec<Assessment> {
        submissions
            .iter()
            .filter(|s| {
                let matches = s.course == self.course.id;
                if !matches {
                    tracing::warn!(
                        "skipping submission from '{}': targets course '{}', not '{}'",
                        s.learner,
                        s.course,
                        self.course.id
                    );
                }
                matches
            })
            .map(|s| Assessment::evaluate(&self.evaluator, s, self.threshold))
            .collect()
    }
}

/// Load one submission file, or every submission under a directory.
pub fn load_submissions(path: &Path) -> Result<Vec<Submission>> {
    if path.is_dir() {
        parser::load_submission_directory(path)
    } else {
        Ok(vec![parser::parse_submission(path)?])
    }
}
