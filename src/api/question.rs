//! Turns form input into the question handed to the agent

pub const WORKOUT_LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

pub const DIETARY_PREFERENCES: &[&str] = &["Low-carb", "High-protein", "Vegan", "Keto", "Mediterranean"];

/// Build the agent question from the raw input and the form selections.
///
/// Input mentioning a workout or a meal is rewritten around the selected
/// levels or preferences; anything else passes through verbatim.
pub fn compose_question(input: &str, workout_levels: &[String], dietary_preferences: &[String]) -> String {
    let lowered = input.to_lowercase();
    if lowered.contains("workout") {
        format!(
            "Can you help me with a {} workout plan?",
            workout_levels.join(", ")
        )
    } else if lowered.contains("meal") {
        format!(
            "Suggest a meal plan for {} diet.",
            dietary_preferences.join(", ")
        )
    } else {
        input.to_string()
    }
}

/// First selection that is not one of `allowed`
pub fn find_invalid<'a>(selected: &'a [String], allowed: &[&str]) -> Option<&'a str> {
    selected
        .iter()
        .map(String::as_str)
        .find(|s| !allowed.contains(s))
}
