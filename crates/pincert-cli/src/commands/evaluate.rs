//! The `pincert evaluate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use pincert_core::assessment::{Assessment, ASSESSMENT_HEADERS};

use super::{load_submissions, CourseContext, OutputFormat};

pub fn execute(
    course_path: PathBuf,
    submission_path: PathBuf,
    threshold: Option<u32>,
    format: OutputFormat,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let ctx = CourseContext::load(&course_path, threshold, config_path)?;
    let submissions = load_submissions(&submission_path)?;
    let assessments = ctx.assess_all(&submissions);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assessments)?);
        }
        OutputFormat::Text => {
            println!(
                "Course: {} ({} modules, pass threshold {})",
                ctx.course.name,
                ctx.evaluator.required().len(),
                ctx.threshold
            );

            if assessments.is_empty() {
                println!("No submissions for course '{}'.", ctx.course.id);
                return Ok(());
            }

            print_table(&assessments);

            for a in assessments.iter().filter(|a| !a.missing.is_empty()) {
                println!("  [{}] missing: {}", a.learner, a.missing.join(", "));
            }
        }
    }

    Ok(())
}

fn print_table(assessments: &[Assessment]) {
    let mut table = Table::new();
    table.set_header(ASSESSMENT_HEADERS.to_vec());

    for a in assessments {
        table.add_row(a.row().iter().map(Cell::new).collect::<Vec<_>>());
    }

    println!("{table}");
}
