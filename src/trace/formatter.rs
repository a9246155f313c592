use crate::rules::MatchTrace;

/// Formats match traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a match trace into a one-line explanation, e.g.
    /// `$age (was 65) greater_than 60`.
    pub fn format_trace(trace: &MatchTrace) -> String {
        Self::format_recursive(trace, false)
    }

    /// Recursively formats the trace, adding parentheses around nested
    /// multi-member compositions and skipping short-circuited branches.
    fn format_recursive(trace: &MatchTrace, nested: bool) -> String {
        match trace {
            MatchTrace::Condition {
                field,
                operator,
                expected,
                answer,
                ..
            } => {
                if operator.is_unary() {
                    format!("${} (was {}) {}", field, answer, operator)
                } else {
                    format!("${} (was {}) {} {}", field, answer, operator, expected)
                }
            }
            MatchTrace::Group {
                operator, children, ..
            } => Self::format_members(children, &operator.to_string(), nested),
            MatchTrace::Rule {
                operator, groups, ..
            } => Self::format_members(groups, &operator.to_string(), nested),
            MatchTrace::NotEvaluated => String::new(),
        }
    }

    /// Joins the evaluated members with the composition operator.
    fn format_members(members: &[MatchTrace], op: &str, nested: bool) -> String {
        let parts: Vec<String> = members
            .iter()
            .filter(|m| !matches!(m, MatchTrace::NotEvaluated))
            .map(|m| Self::format_recursive(m, true))
            .collect();
        let joined = parts.join(&format!(" {} ", op));
        if nested && parts.len() > 1 {
            format!("({})", joined)
        } else {
            joined
        }
    }
}
