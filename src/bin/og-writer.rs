//! Open Graph Writer CLI
//!
//! Command-line interface for validating and rendering Open Graph properties.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use opengraph_writer::{
    load_properties, schema, OpenGraphItem, SchemaVersion, ValidateOptions, ValidationResult,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "og-writer")]
#[command(about = "Validate Open Graph properties and render them as meta tags")]
#[command(version)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON property file
    Validate {
        /// JSON object mapping property names to values
        properties: PathBuf,

        /// Validate against the pre-2.0 type list instead of the current protocol
        #[arg(long)]
        schema1: bool,

        /// Validate Facebook extensions (not supported yet)
        #[arg(long)]
        facebook: bool,

        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Render a JSON property file as meta tags
    Render {
        /// JSON object mapping property names to values
        properties: PathBuf,

        /// Validate against the pre-2.0 type list instead of the current protocol
        #[arg(long)]
        schema1: bool,

        /// Annotate tags with validation findings
        #[arg(long)]
        debug: bool,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the schema entry for a property
    Describe {
        /// Property name, e.g. og:image
        property: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Validate {
            properties,
            schema1,
            facebook,
            json,
        } => run_validate(&properties, options(schema1).facebook(facebook), json),

        Commands::Render {
            properties,
            schema1,
            debug,
            output,
        } => run_render(&properties, &options(schema1), debug, output),

        Commands::Describe { property } => run_describe(&property),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn options(schema1: bool) -> ValidateOptions {
    if schema1 {
        ValidateOptions::for_schema(SchemaVersion::Schema1)
    } else {
        ValidateOptions::default()
    }
}

fn load_and_validate(
    path: &Path,
    options: &ValidateOptions,
    json_output: bool,
) -> Result<(OpenGraphItem, bool), u8> {
    let mut item = load_properties(path).map_err(|e| {
        report_error(json_output, &format!("loading properties: {}", e));
        e.exit_code() as u8
    })?;

    let valid = item.validate(options).map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;

    Ok((item, valid))
}

fn run_validate(path: &Path, options: ValidateOptions, json_output: bool) -> Result<(), u8> {
    let (item, valid) = load_and_validate(path, &options, json_output)?;
    let errors = item.errors().map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;

    if json_output {
        let output = serde_json::json!({
            "valid": valid,
            "errors": errors,
        });
        println!("{}", output);
    } else if valid {
        println!("Valid");
        print_findings(errors, false);
    } else {
        eprintln!("Validation failed:");
        print_findings(errors, true);
    }

    if valid {
        Ok(())
    } else {
        Err(1)
    }
}

fn print_findings(errors: &ValidationResult, to_stderr: bool) {
    let mut lines = Vec::new();
    for (property, message) in &errors.critical {
        lines.push(format!("  critical: {}: {}", property, message));
    }
    for (property, message) in &errors.recommended {
        lines.push(format!("  recommended: {}: {}", property, message));
    }
    for property in &errors.not_validated {
        lines.push(format!("  not validated: {}", property));
    }
    for line in lines {
        if to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

fn run_render(
    path: &Path,
    options: &ValidateOptions,
    debug: bool,
    output: Option<PathBuf>,
) -> Result<(), u8> {
    let (item, valid) = load_and_validate(path, options, false)?;
    if !valid {
        tracing::warn!(path = %path.display(), "rendering properties with critical findings");
    }

    let html = item.as_html(debug).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", html)).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", html);
        }
    }

    Ok(())
}

fn run_describe(property: &str) -> Result<(), u8> {
    let Some(entry) = schema::describe(property) else {
        eprintln!("Error: unknown property: {}", property);
        return Err(2);
    };

    println!("{}", entry.name);
    println!("  type: {}", entry.value_type);
    println!("  required: {}", entry.required);
    println!("  array allowed: {}", entry.array_allowed);
    if !entry.enums.is_empty() {
        let members: Vec<String> = entry.enums.iter().map(|e| format!("{:?}", e)).collect();
        println!("  enums: {}", members.join(", "));
    }
    if !entry.structured.is_empty() {
        let names: Vec<&str> = entry.structured.iter().map(|e| e.name).collect();
        println!("  structured: {}", names.join(", "));
    }
    println!("  {}", entry.description);
    Ok(())
}

/// Output an error message in plain text or JSON format.
fn report_error(json_output: bool, msg: &str) {
    if json_output {
        println!("{}", serde_json::json!({ "valid": false, "error": msg }));
    } else {
        eprintln!("Error: {}", msg);
    }
}
