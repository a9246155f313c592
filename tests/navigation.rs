//! Tests for the step navigation engine and the first-match rule matcher.
mod common;
use annai::error::TransitionError;
use annai::form::StepDefinition;
use annai::prelude::*;
use common::*;

#[test]
fn test_higher_priority_rule_wins() {
    // Two rules, both true: the priority-10 rule must be selected over the
    // priority-5 rule regardless of authored order.
    let definition = FormDefinition {
        steps: vec![
            StepDefinition {
                step_number: 1,
                title: "Routing".to_string(),
                fields: vec![field("age", "number", false)],
                navigation_rules: vec![
                    navigation_rule(
                        condition("age", "greater_than", serde_json::json!(10)),
                        step_target(2),
                        5,
                    ),
                    navigation_rule(
                        condition("age", "greater_than", serde_json::json!(20)),
                        step_target(3),
                        10,
                    ),
                ],
                offering_ids: vec![],
            },
            StepDefinition {
                step_number: 2,
                title: "Low".to_string(),
                fields: vec![],
                navigation_rules: vec![],
                offering_ids: vec![],
            },
            StepDefinition {
                step_number: 3,
                title: "High".to_string(),
                fields: vec![],
                navigation_rules: vec![],
                offering_ids: vec![],
            },
        ],
    };
    let form = compile_form(definition, vec![]);

    let mut session = FlowSession::new(&form);
    let transition = session
        .submit(answers(&[("age", Value::Number(30.0))]))
        .unwrap();
    match transition {
        Transition::Advanced { step_number, .. } => assert_eq!(step_number, 3),
        other => panic!("Expected Advanced, got {:?}", other),
    }
}

#[test]
fn test_equal_priorities_keep_authored_order() {
    let rules = vec![
        NavigationRule {
            condition: Condition {
                field: "age".to_string(),
                operator: Operator::GreaterThan,
                value: Value::Number(10.0),
            },
            target: NavigationTarget::Step { step_number: 2 },
            priority: 1,
        },
        NavigationRule {
            condition: Condition {
                field: "age".to_string(),
                operator: Operator::GreaterThan,
                value: Value::Number(20.0),
            },
            target: NavigationTarget::Step { step_number: 3 },
            priority: 1,
        },
    ];
    let map = answers(&[("age", Value::Number(30.0))]);

    let matched = match_navigation(&rules, &map).expect("a rule should match");
    assert_eq!(
        matched.rule.target,
        NavigationTarget::Step { step_number: 2 }
    );
}

#[test]
fn test_no_match_returns_none() {
    assert!(match_navigation(&[], &AnswerMap::new()).is_none());

    let rules = vec![NavigationRule {
        condition: Condition {
            field: "age".to_string(),
            operator: Operator::GreaterThan,
            value: Value::Number(60.0),
        },
        target: NavigationTarget::End,
        priority: 1,
    }];
    let map = answers(&[("age", Value::Number(40.0))]);
    assert!(match_navigation(&rules, &map).is_none());
}

#[test]
fn test_fall_through_to_next_step() {
    let form = compile_form(create_simple_form(), create_offerings());

    let mut session = FlowSession::new(&form);
    let transition = session
        .submit(answers(&[("age", Value::Number(40.0))]))
        .unwrap();

    assert_eq!(
        transition,
        Transition::Advanced {
            step_number: 2,
            reason: None
        }
    );
    assert_eq!(session.completed_steps(), &[1]);
    assert!(!session.is_terminal());
}

#[test]
fn test_rule_match_carries_reason() {
    let form = compile_form(create_simple_form(), create_offerings());

    let mut session = FlowSession::new(&form);
    let transition = session
        .submit(answers(&[("age", Value::Number(65.0))]))
        .unwrap();

    match transition {
        Transition::Finished {
            seed_offering_ids,
            reason,
        } => {
            assert_eq!(seed_offering_ids, vec!["essential".to_string()]);
            assert_eq!(reason.as_deref(), Some("$age (was 65) greater_than 60"));
        }
        other => panic!("Expected Finished, got {:?}", other),
    }
    assert!(session.is_terminal());
}

#[test]
fn test_fall_through_on_last_step_ends_the_flow() {
    let form = compile_form(create_simple_form(), create_offerings());

    let mut session = FlowSession::new(&form);
    session
        .submit(answers(&[("age", Value::Number(40.0))]))
        .unwrap();
    let transition = session
        .submit(answers(&[("plan", Value::Text("basic".to_string()))]))
        .unwrap();

    // Step 2 has no rules and no structural successor: same handling as an
    // explicit `end` target, with step 2's (empty) static seed.
    assert_eq!(
        transition,
        Transition::Finished {
            seed_offering_ids: vec![],
            reason: None
        }
    );
    assert!(session.is_terminal());
}

#[test]
fn test_external_url_redirects_and_terminates() {
    let form = compile_form(create_branching_form(), create_offerings());

    let mut session = FlowSession::new(&form);
    session
        .submit(answers(&[("plan", Value::Text("basic".to_string()))]))
        .unwrap();
    let transition = session
        .submit(answers(&[("budget", Value::Number(5000.0))]))
        .unwrap();

    match transition {
        Transition::Redirected { url, reason } => {
            assert_eq!(url, "https://example.com/priority-desk");
            assert_eq!(reason, "$budget (was 5000) greater_than 1000");
        }
        other => panic!("Expected Redirected, got {:?}", other),
    }
    assert!(session.is_terminal());
}

#[test]
fn test_required_gate_refuses_and_re_presents() {
    let form = compile_form(create_simple_form(), create_offerings());
    let mut session = FlowSession::new(&form);

    // Missing entirely.
    let result = session.submit(AnswerMap::new());
    match result {
        Err(TransitionError::MissingRequired { fields }) => {
            assert_eq!(fields, vec!["age".to_string()]);
        }
        other => panic!("Expected MissingRequired, got {:?}", other.err()),
    }

    // Present but empty.
    let result = session.submit(answers(&[("age", Value::Text("".to_string()))]));
    assert!(matches!(
        result,
        Err(TransitionError::MissingRequired { .. })
    ));

    // The refusal left the session untouched.
    assert_eq!(session.current_step_number(), 1);
    assert!(session.answers().is_empty());
    assert!(!session.is_terminal());

    // The same step accepts a corrected submission.
    let transition = session
        .submit(answers(&[("age", Value::Number(40.0))]))
        .unwrap();
    assert!(matches!(transition, Transition::Advanced { .. }));
}

#[test]
fn test_display_fields_never_gate() {
    let definition = FormDefinition {
        steps: vec![StepDefinition {
            step_number: 1,
            title: "Welcome".to_string(),
            // A required heading is an authoring quirk; it collects no answer
            // and must not block the transition.
            fields: vec![field("intro", "heading", true)],
            navigation_rules: vec![],
            offering_ids: vec![],
        }],
    };
    let form = compile_form(definition, vec![]);

    let mut session = FlowSession::new(&form);
    let transition = session.submit(AnswerMap::new()).unwrap();
    assert!(matches!(transition, Transition::Finished { .. }));
}

#[test]
fn test_terminal_session_refuses_further_submits() {
    let form = compile_form(create_simple_form(), create_offerings());
    let mut session = FlowSession::new(&form);
    session
        .submit(answers(&[("age", Value::Number(65.0))]))
        .unwrap();
    assert!(session.is_terminal());

    let result = session.submit(answers(&[("age", Value::Number(70.0))]));
    assert!(matches!(result, Err(TransitionError::Finished)));
}

#[test]
fn test_answers_accumulate_across_steps() {
    let form = compile_form(create_branching_form(), create_offerings());
    let mut session = FlowSession::new(&form);

    session
        .submit(answers(&[("plan", Value::Text("basic".to_string()))]))
        .unwrap();
    session
        .submit(answers(&[("budget", Value::Number(250.0))]))
        .unwrap();

    assert_eq!(session.completed_steps(), &[1, 2]);
    assert_eq!(
        session.answers().get("plan"),
        Some(&Value::Text("basic".to_string()))
    );
    assert_eq!(session.answers().get("budget"), Some(&Value::Number(250.0)));
}
