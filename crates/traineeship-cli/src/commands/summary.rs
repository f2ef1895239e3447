//! The `traineeship summary` command.

use std::path::PathBuf;

use anyhow::Result;

use traineeship_core::parser;
use traineeship_core::statistics::summarize;

pub fn execute(trainee_path: PathBuf) -> Result<()> {
    let trainee = parser::parse_trainee(&trainee_path)?;

    println!("Trainee: {} <{}>", trainee.name(), trainee.email());
    println!(
        "Born: {} (age {})",
        trainee.date_of_birth().format("%Y-%m-%d"),
        trainee.age()
    );

    if trainee.assessments().is_empty() {
        println!("No assessments yet.");
        return Ok(());
    }

    println!("{}", super::assessments_table(&trainee));
    println!("{}", super::summary_table(&summarize(&trainee)));

    Ok(())
}
