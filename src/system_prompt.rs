//! Fixed system prompt for the fitness assistant
//!
//! The action catalog is rendered from [`Action::ALL`] so the prompt and the
//! dispatcher can never disagree about which actions exist.

use crate::agent::Action;
use std::fmt::Write;

const PREAMBLE: &str = "You are a fitness assistant. You help users with workout plans, dietary advice, and motivational quotes.
You run in a loop of Thought, Action, Observation. When you need an action, write it on its own line as
Action: <action_name>: <input>
and stop. You will be called again with an Observation carrying the result.
When you can answer, reply with a line starting with Answer: and no Action line.";

const EXAMPLE_SESSION: &str = "Example session:
Question: Can you help me with a beginner workout plan?
Thought: I should generate a workout plan.
Action: generate_workout: Beginner
Observation: Here is a beginner workout plan: 10 push-ups, 20 squats, 30-second plank.
Answer: I suggest starting with 10 push-ups, 20 squats, and a 30-second plank.";

/// Build the system prompt
pub fn build_system_prompt() -> String {
    let mut prompt = String::from(PREAMBLE);
    prompt.push_str("\n\nYour available actions are:\n");
    for action in Action::ALL {
        let _ = writeln!(prompt, "{}:", action.name());
        let _ = writeln!(prompt, "e.g. {}: {}", action.name(), action.example());
        let _ = writeln!(prompt, "{}", action.description());
    }
    prompt.push('\n');
    prompt.push_str(EXAMPLE_SESSION);
    prompt
}
