//! TOML course and submission parser.
//!
//! Loads course definitions and learner submissions from TOML files and
//! directories, and validates courses.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Course, Submission};

/// Course files hold a single `[course]` table.
#[derive(Debug, Deserialize)]
struct CourseFile {
    course: Course,
}

/// Parse a single TOML file into a `Course`.
pub fn parse_course(path: &Path) -> Result<Course> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read course file: {}", path.display()))?;

    parse_course_str(&content, path)
}

/// Parse a TOML string into a `Course` (useful for testing).
pub fn parse_course_str(content: &str, source_path: &Path) -> Result<Course> {
    let parsed: CourseFile = toml::from_str(content)
        .with_context(|| format!("failed to parse course: {}", source_path.display()))?;
    Ok(parsed.course)
}

/// Recursively load all `.toml` course files from a directory.
pub fn load_course_directory(dir: &Path) -> Result<Vec<Course>> {
    let mut courses = Vec::new();
    for path in toml_files(dir)? {
        match parse_course(&path) {
            Ok(course) => courses.push(course),
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
            }
        }
    }
    Ok(courses)
}

/// Parse a single TOML file into a `Submission`.
pub fn parse_submission(path: &Path) -> Result<Submission> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read submission file: {}", path.display()))?;

    parse_submission_str(&content, path)
}

/// Parse a TOML string into a `Submission`.
///
/// A malformed `score` (anything but `correct/total`) is rejected here, so
/// the evaluator never sees it.
pub fn parse_submission_str(content: &str, source_path: &Path) -> Result<Submission> {
    toml::from_str(content)
        .with_context(|| format!("failed to parse submission: {}", source_path.display()))
}

/// Recursively load all `.toml` submission files from a directory.
pub fn load_submission_directory(dir: &Path) -> Result<Vec<Submission>> {
    let mut submissions = Vec::new();
    for path in toml_files(dir)? {
        match parse_submission(&path) {
            Ok(submission) => submissions.push(submission),
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
            }
        }
    }
    Ok(submissions)
}

/// All `.toml` files under `dir`, sorted so results are stable.
fn toml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(toml_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// A warning from course validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending module id, if the warning concerns one.
    pub module_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a course for common issues.
pub fn validate_course(course: &Course) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if course.modules.is_empty() {
        warnings.push(ValidationWarning {
            module_id: None,
            message: "course requires no modules; every learner counts as certified".into(),
        });
    }

    for id in course.modules.iter() {
        if id.trim().is_empty() {
            warnings.push(ValidationWarning {
                module_id: Some(id.to_string()),
                message: "module id is blank".into(),
            });
        } else if id.trim() != id {
            warnings.push(ValidationWarning {
                module_id: Some(id.to_string()),
                message: "module id has leading or trailing whitespace".into(),
            });
        }
    }

    if let Some(threshold) = course.pass_threshold {
        if threshold > 100 {
            warnings.push(ValidationWarning {
                module_id: None,
                message: format!("pass_threshold {threshold} is above 100"),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScoreInput;

    const VALID_COURSE: &str = r#"
[course]
id = "alterations-pinning"
name = "Alterations Pinning Certification"
description = "Hem and seam pinning fundamentals"
modules = ["M1", "M2", "M3", "M4", "M5"]
pass_threshold = 80
"#;

    const VALID_SUBMISSION: &str = r#"
learner = "ada"
course = "alterations-pinning"
completed = ["M1", "M3"]
score = "3/5"
"#;

    #[test]
    fn parse_valid_course() {
        let course = parse_course_str(VALID_COURSE, Path::new("course.toml")).unwrap();
        assert_eq!(course.id, "alterations-pinning");
        assert_eq!(course.modules.len(), 5);
        assert_eq!(course.pass_threshold, Some(80));
        assert!(validate_course(&course).is_empty());
    }

    #[test]
    fn parse_course_missing_optional_fields() {
        let toml = r#"
[course]
id = "minimal"
name = "Minimal"
modules = ["A"]
"#;
        let course = parse_course_str(toml, Path::new("course.toml")).unwrap();
        assert!(course.description.is_empty());
        assert!(course.pass_threshold.is_none());
    }

    #[test]
    fn parse_course_rejects_duplicate_modules() {
        let toml = r#"
[course]
id = "dupes"
name = "Dupes"
modules = ["M1", "M2", "M1"]
"#;
        let err = parse_course_str(toml, Path::new("dupes.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate module id: M1"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_course_str(bad, Path::new("bad.toml")).is_err());
        assert!(parse_submission_str(bad, Path::new("bad.toml")).is_err());
    }

    #[test]
    fn validate_empty_course() {
        let toml = r#"
[course]
id = "empty"
name = "Empty"
"#;
        let course = parse_course_str(toml, Path::new("empty.toml")).unwrap();
        let warnings = validate_course(&course);
        assert!(warnings.iter().any(|w| w.message.contains("no modules")));
    }

    #[test]
    fn validate_odd_module_ids_and_threshold() {
        let toml = r#"
[course]
id = "odd"
name = "Odd"
modules = ["M1", " M2", ""]
pass_threshold = 120
"#;
        let course = parse_course_str(toml, Path::new("odd.toml")).unwrap();
        let warnings = validate_course(&course);
        assert!(warnings.iter().any(|w| w.message.contains("whitespace")));
        assert!(warnings.iter().any(|w| w.message.contains("blank")));
        assert!(warnings.iter().any(|w| w.message.contains("above 100")));
    }

    #[test]
    fn parse_valid_submission() {
        let sub = parse_submission_str(VALID_SUBMISSION, Path::new("ada.toml")).unwrap();
        assert_eq!(sub.learner, "ada");
        assert_eq!(sub.course, "alterations-pinning");
        assert!(sub.completed.contains("M3"));
        assert_eq!(sub.score, Some(ScoreInput::new(3, 5)));
    }

    #[test]
    fn parse_submission_without_score_or_modules() {
        let toml = r#"
learner = "bo"
course = "alterations-pinning"
"#;
        let sub = parse_submission_str(toml, Path::new("bo.toml")).unwrap();
        assert!(sub.completed.is_empty());
        assert!(sub.score.is_none());
    }

    #[test]
    fn parse_submission_rejects_bad_score() {
        let toml = r#"
learner = "cy"
course = "alterations-pinning"
score = "lots"
"#;
        let err = parse_submission_str(toml, Path::new("cy.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("invalid input"));
    }

    #[test]
    fn load_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("course.toml"), VALID_COURSE).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let courses = load_course_directory(dir.path()).unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, "alterations-pinning");

        let subs_dir = tempfile::tempdir().unwrap();
        let nested = subs_dir.path().join("cohort-a");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("ada.toml"), VALID_SUBMISSION).unwrap();
        std::fs::write(subs_dir.path().join("broken.toml"), "learner = ").unwrap();

        let subs = load_submission_directory(subs_dir.path()).unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].learner, "ada");
    }

    #[test]
    fn load_non_directory_fails() {
        assert!(load_course_directory(Path::new("definitely/not/here")).is_err());
    }
}
