/// The complete, author-exported definition of an intake form, ready for
/// compilation. This is the target structure for any custom format conversion.
#[derive(Debug, Clone, Default)]
pub struct FormDefinition {
    pub steps: Vec<StepDefinition>,
}

/// Defines a single page of the flow as the visual builder exported it.
#[derive(Debug, Clone)]
pub struct StepDefinition {
    pub step_number: u32,
    pub title: String,
    pub fields: Vec<FieldDefinition>,
    pub navigation_rules: Vec<NavigationRuleDefinition>,
    /// Author-curated offering ids surfaced when the flow ends on this step.
    pub offering_ids: Vec<String>,
}

/// Defines a field; `field_type` stays a string until compilation.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub id: String,
    pub field_type: String,
    pub label: String,
    pub required: bool,
    pub options: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NavigationRuleDefinition {
    pub condition: ConditionDefinition,
    pub target: TargetDefinition,
    pub priority: i32,
}

/// Defines a comparison; the operator stays a string and the value stays raw
/// JSON until compilation.
#[derive(Debug, Clone)]
pub struct ConditionDefinition {
    pub field: String,
    pub operator: String,
    pub value: serde_json::Value,
}

/// Defines a navigation target (`step`, `end`, or `external_url`).
#[derive(Debug, Clone, Default)]
pub struct TargetDefinition {
    pub target_type: String,
    pub step_number: Option<u32>,
    pub url: Option<String>,
}

/// Defines an offering with its attached recommendation rules.
#[derive(Debug, Clone)]
pub struct OfferingDefinition {
    pub id: String,
    pub name: String,
    pub monthly_price: f64,
    pub features: Vec<String>,
    pub is_recommended: bool,
    pub recommendation_rules: Vec<RecommendationRuleDefinition>,
}

#[derive(Debug, Clone)]
pub struct RecommendationRuleDefinition {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub groups: Vec<GroupDefinition>,
    pub group_operator: String,
    pub priority: i32,
}

#[derive(Debug, Clone)]
pub struct GroupDefinition {
    pub operator: String,
    pub conditions: Vec<ConditionDefinition>,
}
