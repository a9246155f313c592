use super::definition::FormDefinition;
use crate::error::FormConversionError;

/// A trait for custom data models that can be converted into an annai
/// [`FormDefinition`].
///
/// This is the primary extension point for keeping annai format-agnostic. By
/// implementing this trait on your own structs, you provide a translation
/// layer that lets the annai compiler process your builder's export format.
///
/// # Example
///
/// ```rust,no_run
/// use annai::prelude::*;
/// use annai::error::FormConversionError;
/// use annai::form::{FormDefinition, StepDefinition};
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyPage { number: u32, heading: String }
/// struct MyFunnel { pages: Vec<MyPage> }
///
/// // 2. Implement `IntoForm` for your top-level struct.
/// impl IntoForm for MyFunnel {
///     fn into_form(self) -> std::result::Result<FormDefinition, FormConversionError> {
///         let steps = self
///             .pages
///             .into_iter()
///             .map(|page| StepDefinition {
///                 step_number: page.number,
///                 title: page.heading,
///                 fields: vec![],
///                 navigation_rules: vec![],
///                 offering_ids: vec![],
///             })
///             .collect();
///
///         Ok(FormDefinition { steps })
///     }
/// }
/// ```
pub trait IntoForm {
    /// Consumes the object and converts it into an annai-compatible form.
    fn into_form(self) -> Result<FormDefinition, FormConversionError>;
}
