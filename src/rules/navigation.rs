use super::{AnswerMap, Condition, MatchTrace};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Where the flow goes when a navigation rule fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationTarget {
    /// Jump to the step with this number.
    Step { step_number: u32 },
    /// End the run; the step's static offering list becomes the seed.
    End,
    /// End the run and hand the caller a URL to redirect to.
    ExternalUrl { url: String },
}

/// A condition + target pair owned by exactly one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationRule {
    pub condition: Condition,
    pub target: NavigationTarget,
    pub priority: i32,
}

/// A fired navigation rule together with the trace that fired it.
#[derive(Debug, Clone)]
pub struct NavigationMatch<'a> {
    pub rule: &'a NavigationRule,
    pub trace: MatchTrace,
}

/// Returns the first rule whose condition holds, scanning in descending
/// priority order (the stable sort lets authored order break ties). `None`
/// signals "fall through to the structurally next step".
pub fn match_navigation<'a>(
    rules: &'a [NavigationRule],
    answers: &AnswerMap,
) -> Option<NavigationMatch<'a>> {
    rules
        .iter()
        .sorted_by_key(|rule| Reverse(rule.priority))
        .find_map(|rule| {
            let trace = rule.condition.evaluate_traced(answers);
            trace.outcome().then(|| NavigationMatch { rule, trace })
        })
}
