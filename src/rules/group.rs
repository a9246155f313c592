use super::{AnswerMap, Condition, MatchTrace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the members of a group (or the groups of a rule) are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupOperator {
    And,
    Or,
}

impl GroupOperator {
    /// Maps an authored operator string; anything that is not `OR` combines
    /// as a conjunction, matching the authoring UI's default.
    pub fn parse(raw: &str) -> GroupOperator {
        if raw.eq_ignore_ascii_case("or") {
            GroupOperator::Or
        } else {
            GroupOperator::And
        }
    }
}

impl fmt::Display for GroupOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupOperator::And => write!(f, "AND"),
            GroupOperator::Or => write!(f, "OR"),
        }
    }
}

/// A named logical group of conditions.
///
/// AND over an empty condition list is `true` (the conjunction identity);
/// OR over an empty list is `false`. Rule-level composition deliberately does
/// NOT share this convention — see [`RecommendationRule`](super::RecommendationRule).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionGroup {
    pub operator: GroupOperator,
    pub conditions: Vec<Condition>,
}

impl ConditionGroup {
    pub fn evaluate(&self, answers: &AnswerMap) -> bool {
        match self.operator {
            GroupOperator::And => self.conditions.iter().all(|c| c.evaluate(answers)),
            GroupOperator::Or => self.conditions.iter().any(|c| c.evaluate(answers)),
        }
    }

    /// Evaluates with short-circuiting; conditions after the deciding one are
    /// recorded as [`MatchTrace::NotEvaluated`].
    pub fn evaluate_traced(&self, answers: &AnswerMap) -> MatchTrace {
        let mut children = Vec::with_capacity(self.conditions.len());
        let mut decided = None;
        for condition in &self.conditions {
            if decided.is_some() {
                children.push(MatchTrace::NotEvaluated);
                continue;
            }
            let trace = condition.evaluate_traced(answers);
            let outcome = trace.outcome();
            children.push(trace);
            match self.operator {
                GroupOperator::And if !outcome => decided = Some(false),
                GroupOperator::Or if outcome => decided = Some(true),
                _ => {}
            }
        }
        let outcome = decided.unwrap_or(matches!(self.operator, GroupOperator::And));
        MatchTrace::Group {
            operator: self.operator,
            children,
            outcome,
        }
    }
}
