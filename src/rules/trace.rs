use super::{GroupOperator, Operator, Value};

/// A record of how a rule was evaluated, including the values seen.
#[derive(Debug, Clone)]
pub enum MatchTrace {
    Condition {
        field: String,
        operator: Operator,
        expected: Value,
        answer: Value,
        outcome: bool,
    },
    Group {
        operator: GroupOperator,
        children: Vec<MatchTrace>,
        outcome: bool,
    },
    Rule {
        operator: GroupOperator,
        groups: Vec<MatchTrace>,
        outcome: bool,
    },
    NotEvaluated,
}

impl MatchTrace {
    pub fn outcome(&self) -> bool {
        match self {
            MatchTrace::Condition { outcome, .. } => *outcome,
            MatchTrace::Group { outcome, .. } => *outcome,
            MatchTrace::Rule { outcome, .. } => *outcome,
            MatchTrace::NotEvaluated => false,
        }
    }
}
