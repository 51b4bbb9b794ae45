//! The `pincert summary` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use pincert_core::statistics::CohortStats;

use super::{CourseContext, OutputFormat};

pub fn execute(
    course_path: PathBuf,
    submissions_dir: PathBuf,
    threshold: Option<u32>,
    format: OutputFormat,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        submissions_dir.is_dir(),
        "not a directory: {}",
        submissions_dir.display()
    );

    let ctx = CourseContext::load(&course_path, threshold, config_path)?;
    let submissions = pincert_core::parser::load_submission_directory(&submissions_dir)?;
    let assessments = ctx.assess_all(&submissions);
    let stats = CohortStats::from_assessments(&assessments);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Text => print_summary(&ctx.course.name, &stats),
    }

    Ok(())
}

fn print_summary(course_name: &str, stats: &CohortStats) {
    println!("Course: {course_name}");

    let mut table = Table::new();
    table.set_header(vec![
        "Learners",
        "Certified",
        "Passed",
        "Pass Rate",
        "Avg Score",
        "Avg Progress",
    ]);
    table.add_row(vec![
        Cell::new(stats.learners),
        Cell::new(stats.certified),
        Cell::new(stats.passed),
        Cell::new(format!("{}%", stats.pass_rate)),
        Cell::new(
            stats
                .average_score
                .map(|s| format!("{s}%"))
                .unwrap_or_else(|| "-".to_string()),
        ),
        Cell::new(format!("{}%", stats.average_progress)),
    ]);
    println!("{table}");

    if !stats.most_missed.is_empty() {
        println!("\nMost missed modules:");
        for m in &stats.most_missed {
            println!("  {}: {} learner(s)", m.module_id, m.learners);
        }
    }
}
