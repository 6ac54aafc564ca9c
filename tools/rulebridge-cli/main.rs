use clap::{Parser, ValueEnum};
use rulebridge::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// CLI-specific mirror of `OperatorCheck` for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OperatorCheckCli {
    /// Compare normalized labels with the canonical operator tokens
    Value,
    /// Compare normalized labels with the display labels
    Label,
}

/// Import, validate and export query builder rule trees
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON file of `{ "columns": [...], "import": {...} }`
    sample_path: Option<String>,

    /// Path to an edited rule group JSON to replace the imported query with
    #[arg(short, long)]
    query: Option<String>,

    /// How normalized operators are checked against each column
    #[arg(short, long, value_enum, default_value = "value")]
    operator_check: OperatorCheckCli,

    /// Use deterministic `rule-1`, `rule-2`, ... ids instead of random ones
    #[arg(long)]
    sequential_ids: bool,

    /// Edit rule values interactively after importing
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Loading ---
    let sample = match &cli.sample_path {
        Some(path) => SampleData::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load sample data: {}", e))),
        None => {
            println!("No sample data file provided. Using the demo column table.");
            SampleData::default()
        }
    };
    let columns = sample.column_index();
    println!(
        "Loaded {} columns: {:?}",
        columns.len(),
        columns.columns().iter().map(|c| &c.field).collect::<Vec<_>>()
    );

    // --- 2. Import ---
    let check = match cli.operator_check {
        OperatorCheckCli::Value => OperatorCheck::CanonicalValue,
        OperatorCheckCli::Label => OperatorCheck::DisplayLabel,
    };
    let import_start = Instant::now();
    let imported = {
        let builder = Importer::builder(&columns).with_operator_check(check);
        let mut importer = if cli.sequential_ids {
            builder
                .with_id_generator(SequentialIdGenerator::new("rule-"))
                .build()
        } else {
            builder.build()
        };
        importer.import(&sample.import)
    };
    let import_duration = import_start.elapsed();
    println!(
        "Imported {} nodes in {:?}",
        imported.node_ids().len(),
        import_duration
    );

    // --- 3. Session ---
    let mut session = QuerySession::new(columns, Some(imported));
    if let Some(path) = &cli.query {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read query file '{}': {}", path, e))
        });
        let edited = RuleGroup::from_json(&json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load query: {}", e)));
        session.replace(edited);
    }

    print_report(&session);

    if cli.human {
        run_interactive(&mut session);
    }

    println!("\nTotal Execution: {:?}", total_start.elapsed());
}

/// Lets the user change rule values one at a time, re-rendering after each edit.
fn run_interactive(session: &mut QuerySession) {
    println!("\n--- Interactive Mode ---");
    loop {
        let id = prompt_for_input("Enter rule id to edit (blank to finish)", None);
        if id.is_empty() {
            break;
        }
        if session.query().find_rule(&id).is_none() {
            println!("No rule with id '{}'.", id);
            continue;
        }

        let raw = prompt_for_input("Enter new value (JSON, or plain text)", None);
        let value = serde_json::from_str(&raw).unwrap_or(serde_json::Value::String(raw));

        let mut edited = session.query().clone();
        if let Some(rule) = edited.find_rule_mut(&id) {
            rule.value = value;
        }
        session.replace(edited);
        print_report(session);
    }
}

fn print_report(session: &QuerySession) {
    match DebugFormatter::report(session) {
        Ok(report) => println!("\n{}", report),
        Err(e) => exit_with_error(&format!("Failed to render report: {}", e)),
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
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
