use crate::error::DefinitionError;
use crate::form::{
    CompiledForm, Field, FieldType, FormDefinition, Offering, OfferingDefinition, Step,
    StepDefinition,
};
use crate::rules::{NavigationRule, NavigationTarget, Operator};
use ahash::AHashMap;
use std::collections::HashSet;

mod parsing;

use parsing::*;

/// Lowers an authored [`FormDefinition`] plus its offerings into a validated
/// [`CompiledForm`].
///
/// Structural problems (duplicate step numbers, dangling step targets,
/// unknown field types) are surfaced here, once, as [`DefinitionError`]s.
/// Operator strings are lowered leniently: anything outside the vocabulary
/// compiles to [`Operator::Unknown`] and fails closed at evaluation time.
pub struct Compiler {
    definition: FormDefinition,
    offerings: Vec<OfferingDefinition>,
    aliases: OperatorAliases,
}

pub struct CompilerBuilder {
    definition: FormDefinition,
    offerings: Vec<OfferingDefinition>,
    aliases: OperatorAliases,
}

impl CompilerBuilder {
    pub fn new(definition: FormDefinition, offerings: Vec<OfferingDefinition>) -> Self {
        Self {
            definition,
            offerings,
            aliases: AHashMap::new(),
        }
    }

    /// Registers a custom operator spelling, for authoring formats that name
    /// operators differently (e.g. `"gt"` for `greater_than`).
    pub fn with_operator_alias(mut self, user_name: &str, operator: Operator) -> Self {
        self.aliases.insert(user_name.to_string(), operator);
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            definition: self.definition,
            offerings: self.offerings,
            aliases: self.aliases,
        }
    }
}

impl Compiler {
    pub fn builder(
        definition: FormDefinition,
        offerings: Vec<OfferingDefinition>,
    ) -> CompilerBuilder {
        CompilerBuilder::new(definition, offerings)
    }

    pub fn compile(self) -> Result<CompiledForm, DefinitionError> {
        if self.definition.steps.is_empty() {
            return Err(DefinitionError::EmptyForm);
        }

        let mut offering_ids = HashSet::new();
        let mut offerings = Vec::with_capacity(self.offerings.len());
        for def in &self.offerings {
            if !offering_ids.insert(def.id.clone()) {
                return Err(DefinitionError::DuplicateOfferingId(def.id.clone()));
            }
            offerings.push(Offering {
                id: def.id.clone(),
                name: def.name.clone(),
                monthly_price: def.monthly_price,
                features: def.features.clone(),
                is_recommended: def.is_recommended,
                recommendation_rules: def
                    .recommendation_rules
                    .iter()
                    .map(|rule| lower_recommendation_rule(rule, &self.aliases))
                    .collect(),
            });
        }

        let mut step_numbers = HashSet::new();
        for step in &self.definition.steps {
            if !step_numbers.insert(step.step_number) {
                return Err(DefinitionError::DuplicateStepNumber(step.step_number));
            }
        }

        let mut steps = Vec::with_capacity(self.definition.steps.len());
        for def in &self.definition.steps {
            steps.push(self.lower_step(def, &step_numbers, &offering_ids)?);
        }
        // The ascending step order is the fallback linear order at runtime.
        steps.sort_by_key(|step| step.step_number);

        Ok(CompiledForm { steps, offerings })
    }

    fn lower_step(
        &self,
        def: &StepDefinition,
        step_numbers: &HashSet<u32>,
        offering_ids: &HashSet<String>,
    ) -> Result<Step, DefinitionError> {
        let mut field_ids = HashSet::new();
        let mut fields = Vec::with_capacity(def.fields.len());
        for field in &def.fields {
            if !field_ids.insert(field.id.clone()) {
                return Err(DefinitionError::DuplicateFieldId {
                    step_number: def.step_number,
                    field_id: field.id.clone(),
                });
            }
            let field_type = FieldType::parse(&field.field_type).ok_or_else(|| {
                DefinitionError::InvalidFieldType {
                    step_number: def.step_number,
                    field_id: field.id.clone(),
                    type_name: field.field_type.clone(),
                }
            })?;
            fields.push(Field {
                id: field.id.clone(),
                field_type,
                label: field.label.clone(),
                required: field.required,
                options: field.options.clone(),
            });
        }

        let mut navigation_rules = Vec::with_capacity(def.navigation_rules.len());
        for rule in &def.navigation_rules {
            let target = match rule.target.target_type.as_str() {
                "step" => {
                    let target = rule.target.step_number.ok_or(
                        DefinitionError::MissingTargetStep {
                            step_number: def.step_number,
                        },
                    )?;
                    if !step_numbers.contains(&target) {
                        return Err(DefinitionError::TargetStepNotFound {
                            step_number: def.step_number,
                            target,
                        });
                    }
                    NavigationTarget::Step {
                        step_number: target,
                    }
                }
                "end" => NavigationTarget::End,
                "external_url" => {
                    let url = rule.target.url.clone().unwrap_or_default();
                    if url.is_empty() {
                        return Err(DefinitionError::EmptyRedirectUrl {
                            step_number: def.step_number,
                        });
                    }
                    NavigationTarget::ExternalUrl { url }
                }
                other => {
                    return Err(DefinitionError::InvalidTargetType {
                        step_number: def.step_number,
                        type_name: other.to_string(),
                    });
                }
            };
            navigation_rules.push(NavigationRule {
                condition: lower_condition(&rule.condition, &self.aliases),
                target,
                priority: rule.priority,
            });
        }

        for offering_id in &def.offering_ids {
            if !offering_ids.contains(offering_id) {
                return Err(DefinitionError::UnknownOffering {
                    step_number: def.step_number,
                    offering_id: offering_id.clone(),
                });
            }
        }

        Ok(Step {
            step_number: def.step_number,
            title: def.title.clone(),
            fields,
            navigation_rules,
            offering_ids: def.offering_ids.clone(),
        })
    }
}
