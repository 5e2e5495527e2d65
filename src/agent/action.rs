//! The closed set of actions the model may request

use std::fmt;

/// An action the assistant can dispatch. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GenerateWorkout,
    SuggestMeal,
    MotivationalQuote,
}

impl Action {
    pub const ALL: [Action; 3] = [
        Action::GenerateWorkout,
        Action::SuggestMeal,
        Action::MotivationalQuote,
    ];

    /// Exact, case-sensitive lookup by directive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::GenerateWorkout => "generate_workout",
            Action::SuggestMeal => "suggest_meal",
            Action::MotivationalQuote => "motivational_quote",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Action::GenerateWorkout => "Generates a workout plan based on the user's fitness level.",
            Action::SuggestMeal => "Suggests a meal plan based on the user's dietary preferences.",
            Action::MotivationalQuote => "Returns a motivational quote to inspire the user.",
        }
    }

    /// Sample argument shown to the model
    pub fn example(self) -> &'static str {
        match self {
            Action::GenerateWorkout => "Beginner",
            Action::SuggestMeal => "Low-carb breakfast",
            Action::MotivationalQuote => "",
        }
    }

    /// Backend prompt for one invocation. `motivational_quote` ignores its argument.
    pub fn prompt(self, argument: &str) -> String {
        match self {
            Action::GenerateWorkout => {
                format!("Generate a workout plan for a {argument} fitness level.")
            }
            Action::SuggestMeal => format!("Suggest a meal plan for a {argument}."),
            Action::MotivationalQuote => "Give me a motivational quote.".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
