//! The `pincert validate` command.

use std::path::PathBuf;

use anyhow::Result;

use pincert_core::config::load_config_from;
use pincert_core::parser;

pub fn execute(course_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let course_path = course_path.unwrap_or_else(|| config.courses_dir.clone());

    let courses = if course_path.is_dir() {
        parser::load_course_directory(&course_path)?
    } else {
        vec![parser::parse_course(&course_path)?]
    };

    let mut total_warnings = 0;

    for course in &courses {
        // Out-of-range course thresholds are reported as warnings below.
        let threshold = course
            .pass_threshold
            .map(|percent| format!("{percent}%"))
            .unwrap_or_else(|| format!("{} from config", config.pass_threshold));
        println!(
            "Course: {} ({} modules, pass threshold {threshold})",
            course.name,
            course.modules.len()
        );
        if !course.modules.is_empty() {
            println!("  modules: {}", course.modules.iter().collect::<Vec<_>>().join(", "));
        }

        let warnings = parser::validate_course(course);
        for w in &warnings {
            let prefix = w
                .module_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All courses valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
