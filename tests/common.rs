//! Common test utilities for building form definitions, offerings, and answers.
use annai::form::{
    ConditionDefinition, FieldDefinition, FormDefinition, GroupDefinition,
    NavigationRuleDefinition, OfferingDefinition, RecommendationRuleDefinition, StepDefinition,
    TargetDefinition,
};
use annai::prelude::*;

#[allow(dead_code)]
pub fn field(id: &str, field_type: &str, required: bool) -> FieldDefinition {
    FieldDefinition {
        id: id.to_string(),
        field_type: field_type.to_string(),
        label: id.to_string(),
        required,
        options: vec![],
    }
}

#[allow(dead_code)]
pub fn choice_field(id: &str, field_type: &str, options: &[&str]) -> FieldDefinition {
    FieldDefinition {
        id: id.to_string(),
        field_type: field_type.to_string(),
        label: id.to_string(),
        required: false,
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

#[allow(dead_code)]
pub fn condition(field: &str, operator: &str, value: serde_json::Value) -> ConditionDefinition {
    ConditionDefinition {
        field: field.to_string(),
        operator: operator.to_string(),
        value,
    }
}

#[allow(dead_code)]
pub fn step_target(step_number: u32) -> TargetDefinition {
    TargetDefinition {
        target_type: "step".to_string(),
        step_number: Some(step_number),
        url: None,
    }
}

#[allow(dead_code)]
pub fn end_target() -> TargetDefinition {
    TargetDefinition {
        target_type: "end".to_string(),
        step_number: None,
        url: None,
    }
}

#[allow(dead_code)]
pub fn url_target(url: &str) -> TargetDefinition {
    TargetDefinition {
        target_type: "external_url".to_string(),
        step_number: None,
        url: Some(url.to_string()),
    }
}

#[allow(dead_code)]
pub fn navigation_rule(
    condition_def: ConditionDefinition,
    target: TargetDefinition,
    priority: i32,
) -> NavigationRuleDefinition {
    NavigationRuleDefinition {
        condition: condition_def,
        target,
        priority,
    }
}

/// Creates a simple, valid `FormDefinition` for basic tests.
///
/// Logic: step 1 `$age greater_than 60` -> end (static seed "essential");
/// otherwise fall through to step 2, which is the last step.
#[allow(dead_code)]
pub fn create_simple_form() -> FormDefinition {
    FormDefinition {
        steps: vec![
            StepDefinition {
                step_number: 1,
                title: "About you".to_string(),
                fields: vec![field("age", "number", true)],
                navigation_rules: vec![navigation_rule(
                    condition("age", "greater_than", serde_json::json!(60)),
                    end_target(),
                    1,
                )],
                offering_ids: vec!["essential".to_string()],
            },
            StepDefinition {
                step_number: 2,
                title: "Your plan".to_string(),
                fields: vec![
                    choice_field("plan", "radio", &["basic", "premium"]),
                    choice_field("coverage", "checkbox", &["dental", "vision", "hospital"]),
                    field("budget", "number", false),
                ],
                navigation_rules: vec![],
                offering_ids: vec![],
            },
        ],
    }
}

/// Creates a three-step branching form.
///
/// Logic: step 1 routes by `$plan` (basic -> step 2, premium -> step 3);
/// step 2 redirects high budgets to an external desk, otherwise falls through
/// to step 3; step 3 is the last step with a static offering seed.
#[allow(dead_code)]
pub fn create_branching_form() -> FormDefinition {
    FormDefinition {
        steps: vec![
            StepDefinition {
                step_number: 1,
                title: "Your plan".to_string(),
                fields: vec![FieldDefinition {
                    id: "plan".to_string(),
                    field_type: "radio".to_string(),
                    label: "Plan".to_string(),
                    required: true,
                    options: vec!["basic".to_string(), "premium".to_string()],
                }],
                navigation_rules: vec![
                    navigation_rule(
                        condition("plan", "equals", serde_json::json!("basic")),
                        step_target(2),
                        2,
                    ),
                    navigation_rule(
                        condition("plan", "equals", serde_json::json!("premium")),
                        step_target(3),
                        1,
                    ),
                ],
                offering_ids: vec![],
            },
            StepDefinition {
                step_number: 2,
                title: "Your budget".to_string(),
                fields: vec![field("budget", "number", true)],
                navigation_rules: vec![navigation_rule(
                    condition("budget", "greater_than", serde_json::json!(1000)),
                    url_target("https://example.com/priority-desk"),
                    1,
                )],
                offering_ids: vec![],
            },
            StepDefinition {
                step_number: 3,
                title: "Coverage".to_string(),
                fields: vec![choice_field(
                    "coverage",
                    "checkbox",
                    &["dental", "vision", "hospital"],
                )],
                navigation_rules: vec![],
                offering_ids: vec!["essential".to_string(), "premium-plus".to_string()],
            },
        ],
    }
}

/// Creates the offering set used across tests.
///
/// `premium-plus` carries the two-rule shape from the recommendation engine
/// contract: a priority-1 AND group requiring `plan == "basic"` and a
/// priority-2 OR group requiring `budget < 300` or an unanswered budget.
#[allow(dead_code)]
pub fn create_offerings() -> Vec<OfferingDefinition> {
    vec![
        OfferingDefinition {
            id: "essential".to_string(),
            name: "Essential".to_string(),
            monthly_price: 199.0,
            features: vec!["General care".to_string()],
            is_recommended: false,
            recommendation_rules: vec![RecommendationRuleDefinition {
                id: "rr-essential-1".to_string(),
                name: "Basic fit".to_string(),
                is_active: true,
                groups: vec![GroupDefinition {
                    operator: "AND".to_string(),
                    conditions: vec![condition("plan", "equals", serde_json::json!("basic"))],
                }],
                group_operator: "AND".to_string(),
                priority: 1,
            }],
        },
        OfferingDefinition {
            id: "premium-plus".to_string(),
            name: "Premium Plus".to_string(),
            monthly_price: 449.0,
            features: vec!["General care".to_string(), "Specialist care".to_string()],
            is_recommended: true,
            recommendation_rules: vec![
                RecommendationRuleDefinition {
                    id: "rr-premium-1".to_string(),
                    name: "Basic upsell".to_string(),
                    is_active: true,
                    groups: vec![GroupDefinition {
                        operator: "AND".to_string(),
                        conditions: vec![condition("plan", "equals", serde_json::json!("basic"))],
                    }],
                    group_operator: "AND".to_string(),
                    priority: 1,
                },
                RecommendationRuleDefinition {
                    id: "rr-premium-2".to_string(),
                    name: "Budget fit".to_string(),
                    is_active: true,
                    groups: vec![GroupDefinition {
                        operator: "OR".to_string(),
                        conditions: vec![
                            condition("budget", "less_than", serde_json::json!(300)),
                            condition("budget", "is_empty", serde_json::Value::Null),
                        ],
                    }],
                    group_operator: "OR".to_string(),
                    priority: 2,
                },
            ],
        },
        OfferingDefinition {
            id: "family-basic".to_string(),
            name: "Family Basic".to_string(),
            monthly_price: 299.0,
            features: vec!["Family coverage".to_string()],
            is_recommended: false,
            recommendation_rules: vec![],
        },
    ]
}

/// Creates an attendant roster: three active entries in shuffled priority
/// order, plus an inactive one that must never be handed out.
#[allow(dead_code)]
pub fn create_attendants() -> Vec<Attendant> {
    vec![
        Attendant {
            id: "at-2".to_string(),
            name: "Ben".to_string(),
            contact_address: "+4915100000002".to_string(),
            priority: 2,
            is_active: true,
        },
        Attendant {
            id: "at-1".to_string(),
            name: "Aoi".to_string(),
            contact_address: "+4915100000001".to_string(),
            priority: 1,
            is_active: true,
        },
        Attendant {
            id: "at-4".to_string(),
            name: "Dana".to_string(),
            contact_address: "+4915100000004".to_string(),
            priority: 0,
            is_active: false,
        },
        Attendant {
            id: "at-3".to_string(),
            name: "Chen".to_string(),
            contact_address: "+4915100000003".to_string(),
            priority: 3,
            is_active: true,
        },
    ]
}

/// Compiles a definition + offerings, panicking on definition errors.
#[allow(dead_code)]
pub fn compile_form(
    definition: FormDefinition,
    offerings: Vec<OfferingDefinition>,
) -> CompiledForm {
    Compiler::builder(definition, offerings)
        .build()
        .compile()
        .expect("Failed to compile")
}

/// Builds an answer map from literal pairs.
#[allow(dead_code)]
pub fn answers(pairs: &[(&str, Value)]) -> AnswerMap {
    pairs
        .iter()
        .map(|(field, value)| (field.to_string(), value.clone()))
        .collect()
}
