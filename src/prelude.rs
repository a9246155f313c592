//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the annai crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use annai::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a previously compiled form artifact
//! let form = CompiledForm::from_file("path/to/form.bin")?;
//!
//! // Walk the flow with answers loaded from a file
//! let sample = SampleAnswers::from_file("path/to/answers.json")?;
//! let mut session = FlowSession::new(&form);
//! let transition = session.submit(sample.to_answer_map())?;
//! println!("Transition: {:?}", transition);
//!
//! // Match offerings against the accumulated answers
//! let recommender = Recommender::new(&form.offerings);
//! for matched in recommender.recommend(session.answers()) {
//!     println!("{} via '{}'", matched.offering.name, matched.rule_name);
//! }
//! # Ok(())
//! # }
//! ```

// Core compilation and flow
pub use crate::compiler::{Compiler, CompilerBuilder};
pub use crate::flow::{FlowSession, Transition};
pub use crate::recommend::{OfferingMatch, Recommender};
pub use crate::rotation::{Attendant, ContactHandoff, RotationState};

// Rule and value types
pub use crate::rules::{
    AnswerMap, Condition, ConditionGroup, GroupOperator, MatchTrace, NavigationMatch,
    NavigationRule, NavigationTarget, Operator, RecommendationRule, Value, match_navigation,
};

// Form model
pub use crate::form::{CompiledForm, Field, FieldType, FormDefinition, IntoForm, Offering, Step};

// Data structures
pub use crate::data::SampleAnswers;

// Error types
pub use crate::error::{ArtifactError, DefinitionError, FormConversionError, TransitionError};

// Trace formatting
pub use crate::trace::TraceFormatter;

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
