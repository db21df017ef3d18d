use serde_json::json;

use crate::cli::OutputFormat;
use crate::models::Person;

/// Output a success message in the appropriate format
pub fn output_success(output_format: OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "message": message }))?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

pub fn output_person(output_format: OutputFormat, person: &Person) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(person)?),
        OutputFormat::Text => print!("{}", render_table(std::slice::from_ref(person))),
    }
    Ok(())
}

pub fn output_people(output_format: OutputFormat, people: &[Person]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(people)?),
        OutputFormat::Text if people.is_empty() => println!("No people found"),
        OutputFormat::Text => print!("{}", render_table(people)),
    }
    Ok(())
}

/// Aligned NAME / DNI / AGE table, one line per person
pub fn render_table(people: &[Person]) -> String {
    let name_width = people.iter().map(|p| p.name.chars().count()).max().unwrap_or(0).max(4);
    let dni_width = people.iter().map(|p| p.dni.chars().count()).max().unwrap_or(0).max(3);

    let mut out = format!("{:<name_width$}  {:<dni_width$}  AGE\n", "NAME", "DNI");
    for p in people {
        out.push_str(&format!("{:<name_width$}  {:<dni_width$}  {}\n", p.name, p.dni, p.age));
    }
    out
}
