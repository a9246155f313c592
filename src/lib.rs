//! # Annai - Rule-Driven Intake Flow Engine
//!
//! **Annai** drives interactive, multi-step intake forms whose path through the
//! steps, and whose final set of recommended offerings, is decided at runtime
//! by author-defined conditional rules rather than hard-coded branching. The
//! engine is a pure in-process library: a thin request layer feeds it answers
//! and performs the side effects it reports back.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! internal model of a "form definition." The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your builder's export format (e.g. from JSON) into your own Rust structs.
//! 2.  **Convert to Annai's Model**: Implement the `IntoForm` trait for your structs to provide a translation layer into Annai's `FormDefinition`.
//! 3.  **Compile**: Use `Compiler::builder` with the definition and the offerings. The compile pass validates the definition once and lowers it into an evaluation-ready `CompiledForm`.
//! 4.  **Run**: Create a `FlowSession` per client and feed it the submitted entries step by step; when the session finishes, run the `Recommender` over the final answers and request an attendant from the `RotationState`.
//!
//! ## Quick Start
//!
//! The following example demonstrates the end-to-end process.
//!
//! ```rust,no_run
//! use annai::prelude::*;
//! use annai::form::{
//!     ConditionDefinition, FieldDefinition, FormDefinition, NavigationRuleDefinition,
//!     OfferingDefinition, StepDefinition, TargetDefinition,
//! };
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     // 1. Author a form definition (normally exported by the visual builder).
//!     let definition = FormDefinition {
//!         steps: vec![StepDefinition {
//!             step_number: 1,
//!             title: "About you".to_string(),
//!             fields: vec![FieldDefinition {
//!                 id: "age".to_string(),
//!                 field_type: "number".to_string(),
//!                 label: "Your age".to_string(),
//!                 required: true,
//!                 options: vec![],
//!             }],
//!             navigation_rules: vec![NavigationRuleDefinition {
//!                 condition: ConditionDefinition {
//!                     field: "age".to_string(),
//!                     operator: "greater_than".to_string(),
//!                     value: serde_json::json!(60),
//!                 },
//!                 target: TargetDefinition {
//!                     target_type: "end".to_string(),
//!                     step_number: None,
//!                     url: None,
//!                 },
//!                 priority: 1,
//!             }],
//!             offering_ids: vec![],
//!         }],
//!     };
//!
//!     // 2. Compile it together with the offerings.
//!     let offerings: Vec<OfferingDefinition> = vec![];
//!     let form = Compiler::builder(definition, offerings).build().compile()?;
//!
//!     // 3. Run a session and submit answers step by step.
//!     let mut session = FlowSession::new(&form);
//!     let mut entries = AnswerMap::new();
//!     entries.insert("age".to_string(), Value::Number(65.0));
//!
//!     match session.submit(entries)? {
//!         Transition::Finished { seed_offering_ids, reason } => {
//!             println!("-> Finished with seed {:?}", seed_offering_ids);
//!             if let Some(reason) = reason {
//!                 println!("-> Reason: {}", reason);
//!             }
//!         }
//!         other => println!("-> {:?}", other),
//!     }
//!
//!     // 4. Match offerings against the final answers.
//!     let recommender = Recommender::new(&form.offerings);
//!     for matched in recommender.recommend(session.answers()) {
//!         println!(
//!             "-> {} (rule '{}'): {}",
//!             matched.offering.name, matched.rule_name, matched.reason
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod data;
pub mod error;
pub mod flow;
pub mod form;
pub mod prelude;
pub mod recommend;
pub mod rotation;
pub mod rules;
pub mod trace;
