//! Run the default CLI crew: identify the OS and empty the recycle bin.

use anyhow::Result;
use clicrew::{Config, Crew};

pub fn run(config: &Config) -> Result<()> {
    println!("Starting CLI Crew with {}...", config.model);
    println!("{}", "=".repeat(50));

    let dispatcher = super::build_dispatcher(config);
    let crew = Crew::cli_crew();
    let result = crew.kickoff(&dispatcher);

    println!();
    println!("{}", "=".repeat(50));
    println!("CREW EXECUTION COMPLETED");
    println!("{}", "=".repeat(50));
    println!("{}", result);

    Ok(())
}
