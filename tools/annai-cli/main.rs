use annai::form::{
    ConditionDefinition, FieldDefinition, FormDefinition, GroupDefinition,
    NavigationRuleDefinition, OfferingDefinition, RecommendationRuleDefinition, StepDefinition,
    TargetDefinition,
};
use annai::prelude::*;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the visual builder's export format and are only used
// here for conversion.

#[derive(Deserialize)]
struct RawForm {
    steps: Vec<RawStep>,
}

#[derive(Deserialize)]
struct RawStep {
    #[serde(alias = "stepNumber")]
    step_number: u32,
    #[serde(default)]
    title: String,
    #[serde(default)]
    fields: Vec<RawField>,
    #[serde(default, alias = "navigationRules")]
    navigation_rules: Vec<RawNavigationRule>,
    #[serde(default, alias = "offeringIds")]
    offering_ids: Vec<String>,
}

#[derive(Deserialize)]
struct RawField {
    id: String,
    #[serde(alias = "type")]
    field_type: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    options: Vec<String>,
}

#[derive(Deserialize)]
struct RawNavigationRule {
    condition: RawCondition,
    target: RawTarget,
    #[serde(default)]
    priority: i32,
}

#[derive(Deserialize)]
struct RawCondition {
    field: String,
    operator: String,
    #[serde(default)]
    value: serde_json::Value,
}

#[derive(Deserialize)]
struct RawTarget {
    #[serde(alias = "type")]
    target_type: String,
    #[serde(default, alias = "stepNumber")]
    step_number: Option<u32>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Deserialize)]
struct RawOffering {
    id: String,
    name: String,
    #[serde(alias = "monthlyPrice")]
    monthly_price: f64,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default, alias = "isRecommended")]
    is_recommended: bool,
    #[serde(default, alias = "recommendationRules")]
    recommendation_rules: Vec<RawRecommendationRule>,
}

#[derive(Deserialize)]
struct RawRecommendationRule {
    id: String,
    name: String,
    #[serde(default = "default_true", alias = "isActive")]
    is_active: bool,
    #[serde(default)]
    groups: Vec<RawGroup>,
    #[serde(default, alias = "groupOperator")]
    group_operator: String,
    #[serde(default)]
    priority: i32,
}

#[derive(Deserialize)]
struct RawGroup {
    #[serde(default)]
    operator: String,
    #[serde(default)]
    conditions: Vec<RawCondition>,
}

#[derive(Deserialize)]
struct RawAttendant {
    id: String,
    name: String,
    #[serde(alias = "contactAddress")]
    contact_address: String,
    #[serde(default)]
    priority: i32,
    #[serde(default = "default_true", alias = "isActive")]
    is_active: bool,
}

fn default_true() -> bool {
    true
}

// --- Converter Implementation ---
// This implements the conversion from the raw builder export to annai's
// canonical FormDefinition.

impl IntoForm for RawForm {
    fn into_form(self) -> Result<FormDefinition, FormConversionError> {
        let steps = self
            .steps
            .into_iter()
            .map(|raw_step| StepDefinition {
                step_number: raw_step.step_number,
                title: raw_step.title,
                fields: raw_step
                    .fields
                    .into_iter()
                    .map(|f| FieldDefinition {
                        id: f.id,
                        field_type: f.field_type,
                        label: f.label,
                        required: f.required,
                        options: f.options,
                    })
                    .collect(),
                navigation_rules: raw_step
                    .navigation_rules
                    .into_iter()
                    .map(|rule| NavigationRuleDefinition {
                        condition: convert_condition(rule.condition),
                        target: TargetDefinition {
                            target_type: rule.target.target_type,
                            step_number: rule.target.step_number,
                            url: rule.target.url,
                        },
                        priority: rule.priority,
                    })
                    .collect(),
                offering_ids: raw_step.offering_ids,
            })
            .collect();

        Ok(FormDefinition { steps })
    }
}

fn convert_condition(raw: RawCondition) -> ConditionDefinition {
    ConditionDefinition {
        field: raw.field,
        operator: raw.operator,
        value: raw.value,
    }
}

fn convert_offerings(raw: Vec<RawOffering>) -> Vec<OfferingDefinition> {
    raw.into_iter()
        .map(|offering| OfferingDefinition {
            id: offering.id,
            name: offering.name,
            monthly_price: offering.monthly_price,
            features: offering.features,
            is_recommended: offering.is_recommended,
            recommendation_rules: offering
                .recommendation_rules
                .into_iter()
                .map(|rule| RecommendationRuleDefinition {
                    id: rule.id,
                    name: rule.name,
                    is_active: rule.is_active,
                    groups: rule
                        .groups
                        .into_iter()
                        .map(|group| GroupDefinition {
                            operator: group.operator,
                            conditions: group.conditions.into_iter().map(convert_condition).collect(),
                        })
                        .collect(),
                    group_operator: rule.group_operator,
                    priority: rule.priority,
                })
                .collect(),
        })
        .collect()
}

fn convert_attendants(raw: Vec<RawAttendant>) -> Vec<Attendant> {
    raw.into_iter()
        .map(|attendant| Attendant {
            id: attendant.id,
            name: attendant.name,
            contact_address: attendant.contact_address,
            priority: attendant.priority,
            is_active: attendant.is_active,
        })
        .collect()
}

/// A rule-driven intake flow engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the form definition JSON file
    form_path: Option<String>,
    /// Path to the offerings definition JSON file
    offerings_path: Option<String>,
    /// Optional path to the answers JSON file for a scripted run
    answers_path: Option<String>,

    /// Optional path to an attendant roster JSON file
    #[arg(short, long)]
    attendants: Option<String>,

    /// Optional path to write the compiled form artifact to
    #[arg(long)]
    artifact: Option<String>,

    /// Run in interactive mode to be prompted for each field
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    let form_path = cli.form_path.clone().unwrap_or_else(|| {
        exit_with_error("Form path is required.");
    });
    let offerings_path = cli.offerings_path.clone().unwrap_or_else(|| {
        exit_with_error("Offerings path is required.");
    });

    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let form_json = fs::read_to_string(&form_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read form file '{}': {}", &form_path, e))
    });
    let offerings_json = fs::read_to_string(&offerings_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read offerings file '{}': {}",
            &offerings_path, e
        ))
    });
    let attendants = cli.attendants.as_ref().map(|path| {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read attendants file '{}': {}", path, e))
        });
        let raw: Vec<RawAttendant> = serde_json::from_str(&json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to parse attendants JSON: {}", e))
        });
        convert_attendants(raw)
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let raw_form: RawForm = serde_json::from_str(&form_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse form JSON: {}", e)));
    let raw_offerings: Vec<RawOffering> = serde_json::from_str(&offerings_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse offerings JSON: {}", e)));

    let definition = raw_form
        .into_form()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert form definition: {}", e)));
    let offerings = convert_offerings(raw_offerings);

    // --- 3. Compilation ---
    println!("\nCompiling form definition...");
    let compile_start = Instant::now();
    let form = Compiler::builder(definition, offerings)
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Form compilation failed: {}", e)));
    let compile_duration = compile_start.elapsed();
    println!(
        "Compilation successful! {} steps, {} offerings in {:?}",
        form.steps.len(),
        form.offerings.len(),
        compile_duration
    );

    if let Some(path) = &cli.artifact {
        form.save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        println!("Compiled artifact written to '{}'", path);
    }

    // --- 4. Flow Run ---
    let run_start = Instant::now();
    let session = if cli.human {
        run_interactive(&form)
    } else {
        let sample = if let Some(path) = &cli.answers_path {
            SampleAnswers::from_file(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to load answers from '{}': {}", path, e))
            })
        } else {
            println!("No answers file provided. Using default mock answers.");
            SampleAnswers::default()
        };
        run_scripted(&form, &sample)
    };
    let run_duration = run_start.elapsed();

    // --- 5. Recommendations and Handoff ---
    let recommend_start = Instant::now();
    let recommender = Recommender::new(&form.offerings);
    let matches = recommender.recommend(session.answers());
    let recommend_duration = recommend_start.elapsed();

    println!("\nRecommendations ({} match(es)):", matches.len());
    for matched in &matches {
        println!(
            "  -> {} ({}/mo) via rule '{}' (Priority {})",
            matched.offering.name,
            matched.offering.monthly_price,
            matched.rule_name,
            matched.rule_priority
        );
        println!("     Reason: {}", matched.reason);
    }

    if let Some(roster) = &attendants {
        let rotation = RotationState::new();
        match rotation.next(roster) {
            Some(handoff) => println!(
                "\nAssigned attendant: {} ({})",
                handoff.attendant_id, handoff.contact_address
            ),
            None => println!("\nNo active attendant available; use the fallback contact path."),
        }
    }

    // --- 6. Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Run Summary ---");
    println!("Steps completed: {}", session.completed_steps().len());
    println!("Answers collected: {}", session.answers().len());

    println!("\n--- Performance Summary ---");
    println!("File Loading:    {:?}", load_duration);
    println!("Compilation:     {:?}", compile_duration);
    println!("Flow Run:        {:?}", run_duration);
    println!("Recommendation:  {:?}", recommend_duration);
    println!("---------------------------");
    println!("Total Execution: {:?}", total_duration);
    println!();
}

/// Walks the flow with a pre-loaded answer map, feeding each step the subset
/// of answers its fields name.
fn run_scripted<'a>(form: &'a CompiledForm, sample: &SampleAnswers) -> FlowSession<'a> {
    let answers = sample.to_answer_map();
    let mut session = FlowSession::new(form);

    // Authored rules may cycle; a scripted run cannot re-answer its way out.
    let max_hops = form.steps.len() * 4 + 4;
    let mut hops = 0;

    while !session.is_terminal() {
        let step = session
            .current_step()
            .unwrap_or_else(|| exit_with_error("Session points at a step that does not exist"));
        println!(
            "\nStep {}: {}",
            step.step_number,
            if step.title.is_empty() { "(untitled)" } else { step.title.as_str() }
        );

        let entries: AnswerMap = step
            .fields
            .iter()
            .filter(|field| field.field_type.is_input())
            .filter_map(|field| {
                answers
                    .get(&field.id)
                    .map(|value| (field.id.clone(), value.clone()))
            })
            .collect();

        report_transition(session.submit(entries).unwrap_or_else(|e| {
            exit_with_error(&format!("Transition refused: {}", e));
        }));

        hops += 1;
        if hops > max_hops {
            exit_with_error("Navigation rules cycle without terminating");
        }
    }
    session
}

/// Walks the flow interactively, prompting for each input field.
fn run_interactive<'a>(form: &'a CompiledForm) -> FlowSession<'a> {
    println!("--- Annai Interactive Mode ---");
    let mut session = FlowSession::new(form);

    while !session.is_terminal() {
        let step = session
            .current_step()
            .unwrap_or_else(|| exit_with_error("Session points at a step that does not exist"));
        println!(
            "\nStep {}: {}",
            step.step_number,
            if step.title.is_empty() { "(untitled)" } else { step.title.as_str() }
        );

        let mut entries = AnswerMap::new();
        for field in &step.fields {
            if let Some(value) = prompt_field(field) {
                entries.insert(field.id.clone(), value);
            }
        }

        match session.submit(entries) {
            Ok(transition) => report_transition(transition),
            Err(TransitionError::MissingRequired { fields }) => {
                println!("Required fields are missing: {}", fields.join(", "));
                println!("Please fill them in to continue.");
            }
            Err(e) => exit_with_error(&format!("Transition refused: {}", e)),
        }
    }
    session
}

fn report_transition(transition: Transition) {
    match transition {
        Transition::Advanced { step_number, reason } => {
            match reason {
                Some(reason) => println!("  -> Advanced to step {} ({})", step_number, reason),
                None => println!("  -> Advanced to step {} (fall-through)", step_number),
            }
        }
        Transition::Finished {
            seed_offering_ids,
            reason,
        } => {
            println!("  -> Flow finished");
            if let Some(reason) = reason {
                println!("  -> Reason: {}", reason);
            }
            if !seed_offering_ids.is_empty() {
                println!("  -> Static offering seed: {}", seed_offering_ids.join(", "));
            }
        }
        Transition::Redirected { url, reason } => {
            println!("  -> Redirected to {} ({})", url, reason);
        }
    }
}

/// Prompts for one field; display-only fields just print their label.
/// Returns `None` when the user leaves the field blank.
fn prompt_field(field: &Field) -> Option<Value> {
    if !field.field_type.is_input() {
        if !field.label.is_empty() {
            println!("{}", field.label);
        }
        return None;
    }

    let label = if field.label.is_empty() {
        field.id.clone()
    } else {
        field.label.clone()
    };
    if !field.options.is_empty() {
        println!("  Options: {}", field.options.join(", "));
    }
    let hint = match field.field_type {
        FieldType::Checkbox => " (comma-separated)",
        _ => "",
    };
    let raw = prompt_for_input(&format!("{}{}", label, hint), None);
    if raw.is_empty() {
        return None;
    }

    let value = match field.field_type {
        FieldType::Checkbox => Value::List(
            raw.split(',')
                .map(|part| Value::Text(part.trim().to_string()))
                .collect(),
        ),
        FieldType::Number => raw
            .trim()
            .parse::<f64>()
            .map(Value::Number)
            .unwrap_or(Value::Text(raw)),
        _ => Value::Text(raw),
    };
    Some(value)
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
