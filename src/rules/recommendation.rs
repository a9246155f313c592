use super::{AnswerMap, ConditionGroup, GroupOperator, MatchTrace};
use serde::{Deserialize, Serialize};

/// A named, prioritized, independently-activatable set of condition groups
/// attached to one offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub groups: Vec<ConditionGroup>,
    pub group_operator: GroupOperator,
    pub priority: i32,
}

impl RecommendationRule {
    /// Combines the per-group results with the rule-level operator.
    ///
    /// An inactive rule never matches. An empty `groups` list is `false`
    /// regardless of the operator — an unconfigured rule must never match
    /// everything, which is why this does NOT share the group-level
    /// empty-AND-is-true identity.
    pub fn matches(&self, answers: &AnswerMap) -> bool {
        if !self.is_active || self.groups.is_empty() {
            return false;
        }
        match self.group_operator {
            GroupOperator::And => self.groups.iter().all(|g| g.evaluate(answers)),
            GroupOperator::Or => self.groups.iter().any(|g| g.evaluate(answers)),
        }
    }

    /// Traced variant of [`matches`](Self::matches); groups after the
    /// deciding one are recorded as [`MatchTrace::NotEvaluated`].
    pub fn matches_traced(&self, answers: &AnswerMap) -> MatchTrace {
        if !self.is_active || self.groups.is_empty() {
            return MatchTrace::Rule {
                operator: self.group_operator,
                groups: Vec::new(),
                outcome: false,
            };
        }
        let mut groups = Vec::with_capacity(self.groups.len());
        let mut decided = None;
        for group in &self.groups {
            if decided.is_some() {
                groups.push(MatchTrace::NotEvaluated);
                continue;
            }
            let trace = group.evaluate_traced(answers);
            let outcome = trace.outcome();
            groups.push(trace);
            match self.group_operator {
                GroupOperator::And if !outcome => decided = Some(false),
                GroupOperator::Or if outcome => decided = Some(true),
                _ => {}
            }
        }
        let outcome = decided.unwrap_or(matches!(self.group_operator, GroupOperator::And));
        MatchTrace::Rule {
            operator: self.group_operator,
            groups,
            outcome,
        }
    }
}
