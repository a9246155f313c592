use annai::prelude::*;
use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::collections::HashMap;
use std::fs;

/// A CLI tool to generate randomized answer sets for an annai form
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a compiled form artifact (see `annai-cli --artifact`)
    form: String,

    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_answers.json")]
    output: String,

    /// Probability that an optional field is answered
    #[arg(long, default_value_t = 0.8)]
    fill_rate: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.fill_rate) {
        eprintln!(
            "Error: --fill-rate ({}) must be between 0.0 and 1.0",
            cli.fill_rate
        );
        std::process::exit(1);
    }

    let form = CompiledForm::from_file(&cli.form)?;
    println!(
        "Generating answers for {} step(s) (optional fill rate {})...",
        form.steps.len(),
        cli.fill_rate
    );

    let mut answers = HashMap::new();
    for step in &form.steps {
        let mut generated = 0;
        for field in step.fields.iter().filter(|f| f.field_type.is_input()) {
            if !field.required && !rng.random_bool(cli.fill_rate) {
                continue;
            }
            answers.insert(field.id.clone(), generate_value(field, &mut rng));
            generated += 1;
        }
        if generated > 0 {
            println!(
                "-> Generated {} answer(s) for step {}.",
                generated, step.step_number
            );
        }
    }

    let sample = SampleAnswers { answers };
    let json_output = serde_json::to_string_pretty(&sample)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved answers to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates a plausible raw JSON answer for one input field.
fn generate_value(field: &Field, rng: &mut ThreadRng) -> serde_json::Value {
    match field.field_type {
        FieldType::Number => serde_json::json!(rng.random_range(0..100)),
        FieldType::Date => serde_json::json!(format!(
            "20{:02}-{:02}-{:02}",
            rng.random_range(20..27),
            rng.random_range(1..13),
            rng.random_range(1..29)
        )),
        FieldType::Radio | FieldType::Select => pick_option(field, rng),
        FieldType::Checkbox => {
            let picked: Vec<&String> = field
                .options
                .iter()
                .filter(|_| rng.random_bool(0.5))
                .collect();
            serde_json::json!(picked)
        }
        FieldType::Email => {
            let names = ["mika", "jonas", "alex", "sam", "taylor"];
            serde_json::json!(format!(
                "{}{}@example.com",
                names[rng.random_range(0..names.len())],
                rng.random_range(1..100)
            ))
        }
        FieldType::Tel => serde_json::json!(format!("+49151{:08}", rng.random_range(0..100_000_000))),
        _ => {
            let words = ["yes", "no", "maybe", "later", "unsure"];
            serde_json::json!(words[rng.random_range(0..words.len())])
        }
    }
}

fn pick_option(field: &Field, rng: &mut ThreadRng) -> serde_json::Value {
    if field.options.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::json!(field.options[rng.random_range(0..field.options.len())])
}
