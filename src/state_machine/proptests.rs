//! Property-based tests for the state machine
//!
//! These drive the pure transition function with a simulated model and
//! action handler, executing effects the way the runtime does.

use super::*;
use crate::agent::{Action, Conversation};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

struct Simulation {
    state: QueryState,
    conversation: Conversation,
    trace: String,
    model_calls: u32,
    dispatches: Vec<(Action, String)>,
    transcript_lengths: Vec<usize>,
}

/// Run a query to completion. Completions are consumed in order and the
/// last one repeats if the model is asked more often than scripted.
fn simulate(max_turns: u32, completions: &[String]) -> Simulation {
    let context = QueryContext::new("prop-query", max_turns);
    let mut sim = Simulation {
        state: QueryState::Idle,
        conversation: Conversation::new(Some("sys")),
        trace: String::new(),
        model_calls: 0,
        dispatches: vec![],
        transcript_lengths: vec![1],
    };

    let mut pending = Some(Event::Start {
        question: "question".to_string(),
    });

    while let Some(event) = pending.take() {
        let result = transition(&sim.state, &context, event).unwrap();
        sim.state = result.new_state;
        for effect in result.effects {
            match effect {
                Effect::AppendMessage { role, content } => {
                    sim.conversation.append(role, content);
                    sim.transcript_lengths.push(sim.conversation.messages().len());
                }
                Effect::AppendTrace { text } => sim.trace.push_str(&text),
                Effect::RequestCompletion => {
                    let idx = (sim.model_calls as usize).min(completions.len() - 1);
                    sim.model_calls += 1;
                    pending = Some(Event::Completion {
                        text: completions[idx].clone(),
                    });
                }
                Effect::Dispatch { action, argument } => {
                    sim.dispatches.push((action, argument));
                    pending = Some(Event::Observation {
                        text: format!("result of {action}"),
                    });
                }
            }
        }
    }

    sim
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::GenerateWorkout),
        Just(Action::SuggestMeal),
        Just(Action::MotivationalQuote),
    ]
}

fn arb_directive_completion() -> impl Strategy<Value = String> {
    ("[a-zA-Z ]{0,20}", arb_action(), "[a-zA-Z -]{0,15}")
        .prop_map(|(thought, action, arg)| format!("Thought: {thought}\nAction: {action}: {arg}"))
}

fn arb_answer_completion() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.]{0,40}".prop_map(|answer| format!("Answer: {answer}"))
}

fn arb_completion() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => arb_directive_completion(),
        1 => arb_answer_completion(),
        1 => "[a-z]{1,8}".prop_map(|name| format!("Action: zz_{name}: x")),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// A model that always requests an action is cut off after exactly
    /// `max_turns` calls, and the query still succeeds.
    #[test]
    fn prop_turns_are_bounded(
        max_turns in 0u32..8,
        completions in prop::collection::vec(arb_directive_completion(), 1..4),
    ) {
        let sim = simulate(max_turns, &completions);
        prop_assert_eq!(sim.model_calls, max_turns);
        prop_assert_eq!(sim.state, QueryState::Done { turns: max_turns });
        prop_assert_eq!(sim.dispatches.len() as u32, max_turns);
    }

    /// Whatever the completions, the model is never called more than
    /// `max_turns` times and the query always reaches a terminal state.
    #[test]
    fn prop_always_terminates(
        max_turns in 0u32..8,
        completions in prop::collection::vec(arb_completion(), 1..10),
    ) {
        let sim = simulate(max_turns, &completions);
        prop_assert!(sim.model_calls <= max_turns);
        let terminal = matches!(sim.state, QueryState::Done { .. } | QueryState::Failed { .. });
        prop_assert!(terminal, "query stalled in {:?}", sim.state);
        prop_assert_eq!(sim.state.turn(), sim.model_calls);
    }

    /// A completion without a directive ends the query on that turn.
    #[test]
    fn prop_answer_terminates_immediately(
        max_turns in 1u32..8,
        leading in prop::collection::vec(arb_directive_completion(), 0..7),
        answer in arb_answer_completion(),
    ) {
        prop_assume!((leading.len() as u32) < max_turns);
        let mut completions = leading.clone();
        completions.push(answer);

        let sim = simulate(max_turns, &completions);
        let expected = leading.len() as u32 + 1;
        prop_assert_eq!(sim.model_calls, expected);
        prop_assert_eq!(sim.state, QueryState::Done { turns: expected });
    }

    /// An unknown action fails the query with no further model calls.
    #[test]
    fn prop_unknown_action_stops_calls(
        max_turns in 1u32..8,
        leading in prop::collection::vec(arb_directive_completion(), 0..7),
        name in "zz_[a-z]{1,8}",
    ) {
        prop_assume!((leading.len() as u32) < max_turns);
        let mut completions = leading.clone();
        completions.push(format!("Action: {name}: heavy"));

        let sim = simulate(max_turns, &completions);
        let failing_turn = leading.len() as u32 + 1;
        prop_assert_eq!(sim.model_calls, failing_turn);
        prop_assert_eq!(
            sim.state,
            QueryState::Failed {
                turn: failing_turn,
                reason: FailureReason::UnknownAction { name, argument: "heavy".to_string() },
            }
        );
    }

    /// Every appended message grows the transcript by exactly one.
    #[test]
    fn prop_transcript_grows_one_at_a_time(
        max_turns in 0u32..8,
        completions in prop::collection::vec(arb_completion(), 1..10),
    ) {
        let sim = simulate(max_turns, &completions);
        for pair in sim.transcript_lengths.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }
        // system + question + one assistant message per call + one observation per dispatch
        prop_assert_eq!(
            sim.conversation.messages().len(),
            2 + sim.model_calls as usize + sim.dispatches.len()
        );
    }

    /// The trace holds each completion and observation followed by a blank line.
    #[test]
    fn prop_trace_is_blank_line_separated(
        max_turns in 1u32..6,
        completions in prop::collection::vec(arb_completion(), 1..6),
    ) {
        let sim = simulate(max_turns, &completions);
        let entries = sim.model_calls as usize + sim.dispatches.len();
        prop_assert!(sim.trace.ends_with("\n\n"));
        prop_assert_eq!(sim.trace.matches("Observation: ").count(), sim.dispatches.len());
        prop_assert!(sim.trace.matches("\n\n").count() >= entries);
    }
}
