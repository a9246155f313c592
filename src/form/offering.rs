use crate::rules::RecommendationRule;
use serde::{Deserialize, Serialize};

/// A sellable plan with its own set of recommendation rules.
///
/// An offering with no rules is never rule-matched; it can still be surfaced
/// through a step's static offering list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offering {
    pub id: String,
    pub name: String,
    pub monthly_price: f64,
    pub features: Vec<String>,
    pub is_recommended: bool,
    pub recommendation_rules: Vec<RecommendationRule>,
}
