//! Agent/task/crew glue around the dispatcher.
//!
//! A crew is one agent with one sequential task whose only tool is the
//! command dispatcher. The layer is deliberately thin: it supplies the
//! command string and relays the dispatcher's report upward unchanged.

use log::info;

use crate::dispatcher::Dispatcher;

/// Role, goal, and backstory of an agent. Prompt material for the
/// interpreter-backed path, documentation otherwise.
#[derive(Debug, Clone)]
pub struct AgentSpec {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

impl AgentSpec {
    /// The default CLI operator agent.
    pub fn cli_agent() -> Self {
        Self {
            role: "Software Engineer".to_string(),
            goal: "Always use Executor Tool. Ability to perform CLI operations, \
                   write programs and execute using Executor Tool"
                .to_string(),
            backstory: "Expert in command line operations, creating and executing \
                        code using Gemini AI."
                .to_string(),
        }
    }
}

/// A single unit of work for the crew.
#[derive(Debug, Clone)]
pub struct TaskSpec {
    pub description: String,
    pub expected_output: String,
}

impl TaskSpec {
    /// The default task: OS identification plus recycle-bin emptying.
    pub fn cli_task() -> Self {
        Self {
            description: "Identify the OS and then empty my recycle bin".to_string(),
            expected_output: "A report on the OS identification and confirmation \
                              that the recycle bin has been emptied"
                .to_string(),
        }
    }

    /// A task with a caller-supplied description.
    pub fn custom(description: &str, expected_output: Option<&str>) -> Self {
        Self {
            description: description.to_string(),
            expected_output: expected_output
                .map(str::to_string)
                .unwrap_or_else(|| format!("Completion report for: {}", description)),
        }
    }
}

/// One agent, one task, sequential process.
pub struct Crew {
    pub agent: AgentSpec,
    pub task: TaskSpec,
}

impl Crew {
    pub fn cli_crew() -> Self {
        Self {
            agent: AgentSpec::cli_agent(),
            task: TaskSpec::cli_task(),
        }
    }

    pub fn with_task(task: TaskSpec) -> Self {
        Self {
            agent: AgentSpec::cli_agent(),
            task,
        }
    }

    /// Run the crew's task through the dispatcher and relay its report.
    pub fn kickoff(&self, dispatcher: &Dispatcher) -> String {
        info!("[{}] {}", self.agent.role, self.task.description);
        dispatcher.execute(&self.task.description)
    }
}
