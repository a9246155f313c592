use thiserror::Error;

/// Errors surfaced once during form-definition compilation.
///
/// Runtime rule evaluation never produces these: a malformed condition fails
/// closed to `false` instead, so one bad rule degrades to fall-through.
#[derive(Error, Debug, Clone)]
pub enum DefinitionError {
    #[error("Form definition contains no steps")]
    EmptyForm,

    #[error("Step number {0} is defined more than once")]
    DuplicateStepNumber(u32),

    #[error("Field '{field_id}' is defined more than once on step {step_number}")]
    DuplicateFieldId { step_number: u32, field_id: String },

    #[error("Field '{field_id}' on step {step_number} has an unrecognized type: '{type_name}'")]
    InvalidFieldType {
        step_number: u32,
        field_id: String,
        type_name: String,
    },

    #[error("A navigation rule on step {step_number} has an unrecognized target type: '{type_name}'")]
    InvalidTargetType { step_number: u32, type_name: String },

    #[error("A step-targeting navigation rule on step {step_number} names no step number")]
    MissingTargetStep { step_number: u32 },

    #[error("A navigation rule on step {step_number} targets step {target}, which does not exist")]
    TargetStepNotFound { step_number: u32, target: u32 },

    #[error("A navigation rule on step {step_number} redirects to an empty URL")]
    EmptyRedirectUrl { step_number: u32 },

    #[error("Step {step_number} lists offering '{offering_id}', which is not defined")]
    UnknownOffering {
        step_number: u32,
        offering_id: String,
    },

    #[error("Offering id '{0}' is defined more than once")]
    DuplicateOfferingId(String),
}

/// Errors that refuse a transition attempt on a running flow session.
///
/// These are rejections, not crashes: `MissingRequired` re-presents the same
/// step to the caller with the session untouched.
#[derive(Error, Debug, Clone)]
pub enum TransitionError {
    #[error("The flow has already finished; start a new session for another run")]
    Finished,

    #[error("Required fields are missing or empty: {}", .fields.join(", "))]
    MissingRequired { fields: Vec<String> },

    #[error("Current step {0} is not part of the compiled form")]
    UnknownStep(u32),
}

/// Errors that can occur when converting a custom format into an annai
/// `FormDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FormConversionError {
    #[error("Invalid form data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while saving or loading a compiled-form artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),

    #[error("Could not access artifact file '{path}': {message}")]
    Io { path: String, message: String },
}
