//! The `pincert init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("pincert.toml").exists() {
        println!("pincert.toml already exists, skipping.");
    } else {
        std::fs::write("pincert.toml", SAMPLE_CONFIG)?;
        println!("Created pincert.toml");
    }

    std::fs::create_dir_all("courses")?;
    let example_path = std::path::Path::new("courses/example.toml");
    if example_path.exists() {
        println!("courses/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_COURSE)?;
        println!("Created courses/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit courses/example.toml with your module list");
    println!("  2. Run: pincert validate --course courses/example.toml");
    println!("  3. Run: pincert evaluate --course courses/example.toml --submission <file>");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# pincert configuration

# Minimum quiz percentage for a PASS verdict (courses may override).
pass_threshold = 80

# half-away-from-zero or half-to-even
rounding = "half-away-from-zero"

courses_dir = "./courses"
"#;

const EXAMPLE_COURSE: &str = r#"[course]
id = "example"
name = "Example Certification"
description = "A five-module course to get started"
modules = ["M1", "M2", "M3", "M4", "M5"]
pass_threshold = 80
"#;
