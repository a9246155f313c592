use crate::rules::NavigationRule;
use serde::{Deserialize, Serialize};

/// The kind of a compiled field. Display-only kinds never collect an answer
/// and never gate submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Number,
    Date,
    Radio,
    Checkbox,
    Select,
    Heading,
    Paragraph,
    Image,
}

impl FieldType {
    /// Maps an authored field-type string; `None` for unrecognized types.
    pub fn parse(raw: &str) -> Option<FieldType> {
        match raw {
            "text" => Some(FieldType::Text),
            "email" => Some(FieldType::Email),
            "tel" => Some(FieldType::Tel),
            "number" => Some(FieldType::Number),
            "date" => Some(FieldType::Date),
            "radio" => Some(FieldType::Radio),
            "checkbox" => Some(FieldType::Checkbox),
            "select" => Some(FieldType::Select),
            "heading" => Some(FieldType::Heading),
            "paragraph" => Some(FieldType::Paragraph),
            "image" => Some(FieldType::Image),
            _ => None,
        }
    }

    pub fn is_input(self) -> bool {
        !matches!(
            self,
            FieldType::Heading | FieldType::Paragraph | FieldType::Image
        )
    }
}

/// A compiled field. Identity is `id`, unique within its step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    pub options: Vec<String>,
}

/// One page of the intake flow, holding fields and navigation rules.
/// Read-only during a form run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub step_number: u32,
    pub title: String,
    pub fields: Vec<Field>,
    pub navigation_rules: Vec<NavigationRule>,
    /// The static, author-curated offering list used as the recommendation
    /// seed when the flow ends on this step.
    pub offering_ids: Vec<String>,
}

impl Step {
    /// The input fields that must be non-empty before this step can be left.
    pub fn required_inputs(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|field| field.required && field.field_type.is_input())
    }
}
