use crate::form::{ConditionDefinition, GroupDefinition, RecommendationRuleDefinition};
use crate::rules::{Condition, ConditionGroup, GroupOperator, Operator, RecommendationRule, Value};
use ahash::AHashMap;

/// Custom operator spellings registered through the builder, consulted before
/// the built-in vocabulary.
pub(super) type OperatorAliases = AHashMap<String, Operator>;

/// Lowers an authored condition into its typed runtime form.
pub(super) fn lower_condition(def: &ConditionDefinition, aliases: &OperatorAliases) -> Condition {
    let operator = aliases
        .get(def.operator.as_str())
        .copied()
        .unwrap_or_else(|| Operator::parse(&def.operator));
    Condition {
        field: def.field.clone(),
        operator,
        value: Value::from(&def.value),
    }
}

pub(super) fn lower_group(def: &GroupDefinition, aliases: &OperatorAliases) -> ConditionGroup {
    ConditionGroup {
        operator: GroupOperator::parse(&def.operator),
        conditions: def
            .conditions
            .iter()
            .map(|condition| lower_condition(condition, aliases))
            .collect(),
    }
}

pub(super) fn lower_recommendation_rule(
    def: &RecommendationRuleDefinition,
    aliases: &OperatorAliases,
) -> RecommendationRule {
    RecommendationRule {
        id: def.id.clone(),
        name: def.name.clone(),
        is_active: def.is_active,
        groups: def.groups.iter().map(|g| lower_group(g, aliases)).collect(),
        group_operator: GroupOperator::parse(&def.group_operator),
        priority: def.priority,
    }
}
