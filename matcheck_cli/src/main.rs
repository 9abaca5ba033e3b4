//! # MatCheck CLI Application
//!
//! Terminal front end for the conductivity & hardness lookup engine. Walks
//! the same cascade a form would: spec, material, temper, surface, thickness,
//! then prints the query result.
//!
//! Data directory comes from the first argument (default `./data`).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use matcheck_core::fmt::format_thickness;
use matcheck_core::{DataPaths, MaterialStore, Surface};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Numbered pick from a list; empty or unparseable input takes the first
/// entry, mirroring the form's preselected dropdowns.
fn prompt_choice(label: &str, options: &[String]) -> Option<String> {
    if options.is_empty() {
        println!("No {} available for this selection.", label);
        return None;
    }

    println!();
    println!("{}:", label);
    for (index, option) in options.iter().enumerate() {
        println!("  {}. {}", index + 1, option);
    }
    let input = prompt_line(&format!("Select {} [1]: ", label));
    let index = input.parse::<usize>().ok().unwrap_or(1);
    Some(options[index.clamp(1, options.len()) - 1].clone())
}

fn run_query(store: &MaterialStore) -> Option<()> {
    let spec = prompt_choice("spec", &store.specs())?;
    let material = prompt_choice("material", &store.materials(&spec))?;
    let temper = prompt_choice("temper", &store.tempers(&spec, &material))?;

    let surfaces: Vec<String> = Surface::ALL.iter().map(|s| s.to_string()).collect();
    let surface = prompt_choice("surface", &surfaces)?;

    let thicknesses: Vec<String> = store
        .thicknesses(&spec, &material, &temper, &surface)
        .iter()
        .map(|t| format_thickness(*t))
        .collect();
    let thickness_s = prompt_choice("thickness (in)", &thicknesses)?;
    let thickness: f64 = match thickness_s.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Cannot parse thickness: {}", thickness_s);
            return None;
        }
    };

    let result = store.search_all(&spec, &material, &temper, thickness, &surface);

    let show = |value: &Option<f64>| match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  {} / {} / {} @ {} ({})", spec, material, temper, thickness_s, surface);
    println!("═══════════════════════════════════════");
    println!("  Corrected Min %IACS: {}", show(&result.corrected_min));
    println!("  Corrected Max %IACS: {}", show(&result.corrected_max));
    println!("  Hardness Min:        {}", result.hardness_min.as_deref().unwrap_or("-"));
    println!("  Hardness Max:        {}", result.hardness_max.as_deref().unwrap_or("-"));
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
    Some(())
}

fn main() -> ExitCode {
    env_logger::init();

    println!("MatCheck CLI - Conductivity & Hardness Lookup");
    println!("=============================================");
    println!();

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let paths = DataPaths::new(&data_dir);
    println!("Loading reference tables from '{}'...", data_dir);

    let store = match MaterialStore::load(&paths) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return ExitCode::FAILURE;
        }
    };

    loop {
        run_query(&store);
        println!();
        let again = prompt_line("Run another query? [Y/n]: ");
        if again.eq_ignore_ascii_case("n") || again.eq_ignore_ascii_case("q") {
            break;
        }
    }
    ExitCode::SUCCESS
}
