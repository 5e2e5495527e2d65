//! `Action: <name>: <argument>` directive grammar
//!
//! A directive occupies exactly one line of a completion and must start at
//! the beginning of that line. This grammar is a wire contract with the
//! model: widening it changes which completions dispatch an action.

use regex::Regex;
use std::sync::LazyLock;

static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Action: (\w+): (.*)$").unwrap());

/// A parsed directive. The name is not validated against the action set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub argument: String,
}

/// Every directive line in `completion`, in line order.
pub fn parse_directives(completion: &str) -> Vec<Directive> {
    completion.split('\n').filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Directive> {
    let caps = DIRECTIVE_REGEX.captures(line)?;
    Some(Directive {
        name: caps[1].to_string(),
        argument: caps[2].to_string(),
    })
}
