use crate::form::Offering;
use crate::rules::AnswerMap;
use crate::trace::TraceFormatter;
use itertools::Itertools;
use std::cmp::Reverse;

/// One qualifying offering, with the rule that decided it.
#[derive(Debug, Clone)]
pub struct OfferingMatch<'a> {
    pub offering: &'a Offering,
    /// The highest-priority rule that matched.
    pub rule_name: String,
    pub rule_priority: i32,
    /// A human-readable explanation of the logic that matched.
    pub reason: String,
}

/// Scans offerings' recommendation rules against a finished run's answers.
///
/// A `Recommender` holds no mutable state and can be shared freely across
/// form runs.
pub struct Recommender<'a> {
    offerings: &'a [Offering],
}

impl<'a> Recommender<'a> {
    pub fn new(offerings: &'a [Offering]) -> Self {
        Self { offerings }
    }

    /// Returns the qualifying offerings, `is_recommended` flag first, then
    /// ascending monthly price.
    ///
    /// Rules within one offering are OR-combined: the offering qualifies as
    /// soon as any active rule matches, scanning in descending priority
    /// order so the reported rule is the highest-priority match. Offerings
    /// with no rules never qualify through this path — they can still be
    /// surfaced via a step's static offering list.
    pub fn recommend(&self, answers: &AnswerMap) -> Vec<OfferingMatch<'a>> {
        let mut matches: Vec<OfferingMatch<'a>> = self
            .offerings
            .iter()
            .filter_map(|offering| {
                offering
                    .recommendation_rules
                    .iter()
                    .sorted_by_key(|rule| Reverse(rule.priority))
                    .find_map(|rule| {
                        let trace = rule.matches_traced(answers);
                        trace.outcome().then(|| OfferingMatch {
                            offering,
                            rule_name: rule.name.clone(),
                            rule_priority: rule.priority,
                            reason: TraceFormatter::format_trace(&trace),
                        })
                    })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.offering
                .is_recommended
                .cmp(&a.offering.is_recommended)
                .then(a.offering.monthly_price.total_cmp(&b.offering.monthly_price))
        });
        matches
    }
}
