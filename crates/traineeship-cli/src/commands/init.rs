//! The `traineeship init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("traineeship.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("quizzes")?;
    write_if_missing(Path::new("quizzes/example.toml"), EXAMPLE_QUIZ)?;

    std::fs::create_dir_all("trainees")?;
    write_if_missing(Path::new("trainees/example.toml"), EXAMPLE_TRAINEE)?;

    println!("\nNext steps:");
    println!("  1. Run: traineeship validate --quiz quizzes/example.toml");
    println!("  2. Run: traineeship mark --quiz quizzes --trainee trainees/example.toml");
    println!("  3. Run: traineeship summary --trainee trainees/example.toml");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# traineeship configuration

quiz_dir = "./quizzes"
output_dir = "./traineeship-results"
log_filter = "traineeship=info"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
name = "Maths Quiz"
type = "multiple-choice"

[[questions]]
question = "What is 1 + 1? A:2 B:4 C:5 D:8"
chosen_answer = "A"
correct_answer = "A"

[[questions]]
question = "What is 2 + 2? A:2 B:4 C:5 D:8"
chosen_answer = "B"
correct_answer = "B"

[[questions]]
question = "What is 3 + 3? A:2 B:4 C:6 D:8"
chosen_answer = "C"
correct_answer = "C"

[[questions]]
question = "What is 4 + 4? A:2 B:4 C:5 D:8"
chosen_answer = "D"
correct_answer = "D"

[[questions]]
question = "What is 5 + 5? A:10 B:4 C:5 D:8"
chosen_answer = "B"
correct_answer = "A"
"#;

const EXAMPLE_TRAINEE: &str = r#"[trainee]
name = "Sigma"
email = "trainee@sigmalabs.co.uk"
date_of_birth = "1990-01-01"

[[assessments]]
name = "Python Basics"
type = "multiple-choice"
score = 90.1

[[assessments]]
name = "Python Data Structures"
type = "technical"
score = 67.4

[[assessments]]
name = "Python OOP"
type = "multiple-choice"
score = 34.3
"#;
