//! Dispatch a single caller-supplied command as a custom crew task.

use anyhow::Result;
use clicrew::{Config, Crew, TaskSpec};

pub fn run(config: &Config, command: &str) -> Result<()> {
    let dispatcher = super::build_dispatcher(config);
    let crew = Crew::with_task(TaskSpec::custom(command, None));

    println!("{}", crew.kickoff(&dispatcher));
    Ok(())
}
