//! Unit tests for core annai functionality.
mod common;
use annai::error::{DefinitionError, TransitionError};
use annai::prelude::*;

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", Value::Number(42.0)), "42");
    assert_eq!(format!("{}", Value::Number(2.5)), "2.5");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::Null), "null");
    assert_eq!(format!("{}", Value::Text("basic".to_string())), "basic");
    assert_eq!(
        format!(
            "{}",
            Value::List(vec![
                Value::Text("B".to_string()),
                Value::Text("C".to_string())
            ])
        ),
        "[B, C]"
    );
}

#[test]
fn test_value_as_number() {
    assert_eq!(Value::Number(60.0).as_number(), Some(60.0));
    assert_eq!(Value::Text("60".to_string()).as_number(), Some(60.0));
    assert_eq!(Value::Text(" 2.5 ".to_string()).as_number(), Some(2.5));
    assert_eq!(Value::Text("sixty".to_string()).as_number(), None);
    assert_eq!(Value::Bool(true).as_number(), None);
    assert_eq!(Value::Null.as_number(), None);
}

#[test]
fn test_value_matches_coerces_only_against_numbers() {
    // Number fields store numbers; authored values may be numeric strings.
    assert!(Value::Number(60.0).matches(&Value::Text("60".to_string())));
    assert!(Value::Text("60".to_string()).matches(&Value::Number(60.0)));
    // Two numeric strings stay strings.
    assert!(!Value::Text("60".to_string()).matches(&Value::Text("60.0".to_string())));
    assert!(Value::Text("60".to_string()).matches(&Value::Text("60".to_string())));
}

#[test]
fn test_operator_parse() {
    assert_eq!(Operator::parse("greater_than"), Operator::GreaterThan);
    assert_eq!(Operator::parse("is_not_empty"), Operator::IsNotEmpty);
    assert_eq!(Operator::parse("bogus_op"), Operator::Unknown);
    assert_eq!(Operator::GreaterThan.as_str(), "greater_than");
}

#[test]
fn test_group_operator_parse() {
    assert_eq!(GroupOperator::parse("OR"), GroupOperator::Or);
    assert_eq!(GroupOperator::parse("or"), GroupOperator::Or);
    assert_eq!(GroupOperator::parse("AND"), GroupOperator::And);
    // The authoring UI's default is a conjunction.
    assert_eq!(GroupOperator::parse(""), GroupOperator::And);
}

#[test]
fn test_trace_formatter_condition() {
    let trace = MatchTrace::Condition {
        field: "age".to_string(),
        operator: Operator::GreaterThan,
        expected: Value::Number(60.0),
        answer: Value::Number(65.0),
        outcome: true,
    };
    assert_eq!(
        TraceFormatter::format_trace(&trace),
        "$age (was 65) greater_than 60"
    );
}

#[test]
fn test_trace_formatter_unary_operator() {
    let trace = MatchTrace::Condition {
        field: "budget".to_string(),
        operator: Operator::IsEmpty,
        expected: Value::Null,
        answer: Value::Null,
        outcome: true,
    };
    assert_eq!(TraceFormatter::format_trace(&trace), "$budget (was null) is_empty");
}

#[test]
fn test_trace_formatter_short_circuit() {
    let trace = MatchTrace::Group {
        operator: GroupOperator::Or,
        children: vec![
            MatchTrace::Condition {
                field: "budget".to_string(),
                operator: Operator::LessThan,
                expected: Value::Number(300.0),
                answer: Value::Number(250.0),
                outcome: true,
            },
            MatchTrace::NotEvaluated,
        ],
        outcome: true,
    };

    // Should only show the decisive part.
    assert_eq!(
        TraceFormatter::format_trace(&trace),
        "$budget (was 250) less_than 300"
    );
}

#[test]
fn test_trace_formatter_nested_groups() {
    let group = |field: &str, outcome| MatchTrace::Group {
        operator: GroupOperator::And,
        children: vec![
            MatchTrace::Condition {
                field: field.to_string(),
                operator: Operator::Equals,
                expected: Value::Text("basic".to_string()),
                answer: Value::Text("basic".to_string()),
                outcome,
            },
            MatchTrace::Condition {
                field: "age".to_string(),
                operator: Operator::LessThan,
                expected: Value::Number(60.0),
                answer: Value::Number(40.0),
                outcome: true,
            },
        ],
        outcome,
    };
    let trace = MatchTrace::Rule {
        operator: GroupOperator::Or,
        groups: vec![group("plan", true), MatchTrace::NotEvaluated],
        outcome: true,
    };

    let formatted = TraceFormatter::format_trace(&trace);
    assert_eq!(
        formatted,
        "($plan (was basic) equals basic AND $age (was 40) less_than 60)"
    );
}

#[test]
fn test_error_display() {
    let err = DefinitionError::TargetStepNotFound {
        step_number: 2,
        target: 9,
    };
    assert!(err.to_string().contains('2'));
    assert!(err.to_string().contains('9'));

    let transition_err = TransitionError::MissingRequired {
        fields: vec!["age".to_string(), "plan".to_string()],
    };
    assert!(transition_err.to_string().contains("age"));
    assert!(transition_err.to_string().contains("plan"));

    let artifact_err = ArtifactError::Decode("truncated input".to_string());
    assert!(artifact_err.to_string().contains("truncated input"));
}
