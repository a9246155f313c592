use super::{AnswerMap, MatchTrace, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The closed comparison vocabulary for authored conditions.
///
/// Each variant carries its own evaluation semantics in [`Operator::holds`];
/// adding or removing an operator is an exhaustive-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    Selected,
    NotSelected,
    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,
    InList,
    NotInList,
    IsEmpty,
    IsNotEmpty,
    /// Produced when an authored operator string is not in the vocabulary.
    /// Always evaluates to `false`, so one bad rule degrades to fall-through.
    Unknown,
}

// Serialized as its authored string so artifacts and JSON share the same
// fail-closed parse path.
impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Operator::parse(&raw))
    }
}

impl Operator {
    /// Maps an authored operator string to its variant. Anything outside the
    /// vocabulary becomes [`Operator::Unknown`].
    pub fn parse(raw: &str) -> Operator {
        match raw {
            "equals" => Operator::Equals,
            "not_equals" => Operator::NotEquals,
            "contains" => Operator::Contains,
            "not_contains" => Operator::NotContains,
            "selected" => Operator::Selected,
            "not_selected" => Operator::NotSelected,
            "greater_than" => Operator::GreaterThan,
            "less_than" => Operator::LessThan,
            "greater_equal" => Operator::GreaterEqual,
            "less_equal" => Operator::LessEqual,
            "in_list" => Operator::InList,
            "not_in_list" => Operator::NotInList,
            "is_empty" => Operator::IsEmpty,
            "is_not_empty" => Operator::IsNotEmpty,
            _ => Operator::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not_equals",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::Selected => "selected",
            Operator::NotSelected => "not_selected",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::GreaterEqual => "greater_equal",
            Operator::LessEqual => "less_equal",
            Operator::InList => "in_list",
            Operator::NotInList => "not_in_list",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
            Operator::Unknown => "unknown",
        }
    }

    /// Whether this operator compares against no authored value.
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Operator::IsEmpty | Operator::IsNotEmpty | Operator::Unknown
        )
    }

    /// Applies the operator to an answer and an authored comparison value.
    ///
    /// Pure and total: type mismatches and the `Unknown` variant evaluate to
    /// `false` rather than erroring.
    pub fn holds(self, answer: &Value, expected: &Value) -> bool {
        match self {
            Operator::Equals => answer.matches(expected),
            Operator::NotEquals => !answer.matches(expected),
            Operator::Contains => contains(answer, expected),
            Operator::NotContains => !contains(answer, expected),
            Operator::Selected => selected(answer, expected),
            Operator::NotSelected => !selected(answer, expected),
            Operator::GreaterThan => compare(answer, expected, |a, b| a > b),
            Operator::LessThan => compare(answer, expected, |a, b| a < b),
            Operator::GreaterEqual => compare(answer, expected, |a, b| a >= b),
            Operator::LessEqual => compare(answer, expected, |a, b| a <= b),
            Operator::InList => in_list(answer, expected),
            Operator::NotInList => !in_list(answer, expected),
            Operator::IsEmpty => answer.is_empty_answer(),
            Operator::IsNotEmpty => !answer.is_empty_answer(),
            Operator::Unknown => false,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Substring test for text answers, membership test for list answers.
fn contains(answer: &Value, expected: &Value) -> bool {
    match answer {
        Value::Text(text) => match expected {
            Value::Text(needle) => text.contains(needle.as_str()),
            _ => false,
        },
        Value::List(items) => items.iter().any(|item| item.matches(expected)),
        _ => false,
    }
}

/// Set-intersection test against a list-valued answer: a list comparison value
/// needs at least one shared element, a scalar needs to be an element.
fn selected(answer: &Value, expected: &Value) -> bool {
    let Value::List(items) = answer else {
        return false;
    };
    match expected {
        Value::List(wanted) => wanted
            .iter()
            .any(|w| items.iter().any(|item| item.matches(w))),
        scalar => items.iter().any(|item| item.matches(scalar)),
    }
}

/// Numeric coercion of both operands; non-numeric operands compare as `false`.
fn compare(answer: &Value, expected: &Value, cmp: fn(f64, f64) -> bool) -> bool {
    match (answer.as_number(), expected.as_number()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

/// Membership of a scalar answer within the rule's list value.
fn in_list(answer: &Value, expected: &Value) -> bool {
    match (answer, expected) {
        (Value::List(_), _) => false,
        (scalar, Value::List(allowed)) => allowed.iter().any(|item| scalar.matches(item)),
        _ => false,
    }
}

/// A single comparison between one answered field and an authored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: Value,
}

impl Condition {
    /// Evaluates against the answer map. A missing answer reads as `Null`,
    /// which is not an error: `is_empty` sees it as empty, the positive
    /// comparisons miss, and their negations hold.
    pub fn evaluate(&self, answers: &AnswerMap) -> bool {
        match answers.get(&self.field) {
            Some(answer) => self.operator.holds(answer, &self.value),
            None => self.operator.holds(&Value::Null, &self.value),
        }
    }

    /// Evaluates and records the values seen, for reason strings.
    pub fn evaluate_traced(&self, answers: &AnswerMap) -> MatchTrace {
        let answer = answers.get(&self.field).cloned().unwrap_or(Value::Null);
        let outcome = self.operator.holds(&answer, &self.value);
        MatchTrace::Condition {
            field: self.field.clone(),
            operator: self.operator,
            expected: self.value.clone(),
            answer,
            outcome,
        }
    }
}
