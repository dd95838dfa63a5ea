//! `mailflow` CLI entry-point.
//!
//! Offline tooling over workflow JSON files (the same shape the workflow
//! service stores):
//! - `validate`        — check a workflow can be saved.
//! - `lint`            — report non-blocking problems.
//! - `variables`       — list the variables a run needs.
//! - `sample-data`     — sample values for those variables.
//! - `preview`         — each action's config with variables filled in.
//! - `templates`       — list built-in templates.
//! - `from-template`   — start a workflow from a template.
//! - `add-action` / `remove-action` / `move-action` — edit the action list.
//! - `save-payload`    — build the create/update request body.
//! - `execute-payload` — build the manual execution request body.

mod logging;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use actions::ActionKind;
use engine::{Clock, FixedClock, RecipientList, SystemClock, Workflow};

use crate::logging::{init_logging, LogFormat};

#[derive(Parser)]
#[command(
    name = "mailflow",
    about = "Build and check email-automation workflows",
    version
)]
struct Cli {
    /// Log output format.
    #[arg(long, global = true, value_enum, env = "MAILFLOW_LOG_FORMAT", default_value = "pretty")]
    log_format: LogFormat,

    /// Log level filter, overridden by `RUST_LOG`.
    #[arg(long, global = true, env = "MAILFLOW_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a workflow definition JSON file.
    Validate {
        path: PathBuf,
    },
    /// Report non-blocking problems in a workflow.
    Lint {
        path: PathBuf,
        /// JSON array of recipient list summaries with their columns.
        #[arg(long)]
        lists: Option<PathBuf>,
    },
    /// List the variables a caller must supply to run the workflow.
    Variables {
        path: PathBuf,
    },
    /// Print sample values for the workflow's variables.
    SampleData {
        path: PathBuf,
        /// Date used for date-valued samples (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show each action's configuration with variables filled in.
    Preview {
        path: PathBuf,
        /// Variables as a JSON object; sample values are used when omitted.
        #[arg(long)]
        data: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List built-in templates.
    Templates,
    /// Print a new workflow created from a template.
    FromTemplate {
        id: String,
    },
    /// Append an action with its default configuration.
    AddAction {
        path: PathBuf,
        kind: String,
    },
    /// Remove the action at an index.
    RemoveAction {
        path: PathBuf,
        index: usize,
    },
    /// Move an action to a new position.
    MoveAction {
        path: PathBuf,
        from: usize,
        to: usize,
    },
    /// Print the create/update request body.
    SavePayload {
        path: PathBuf,
        #[arg(long, env = "MAILFLOW_AGENT_ID")]
        agent_id: String,
    },
    /// Print the manual execution request body.
    ExecutePayload {
        path: PathBuf,
        /// Variables as a JSON object; sample values are used when omitted.
        #[arg(long)]
        data: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Command::Validate { path } => {
            let workflow = read_workflow(&path)?;
            match engine::validate(&workflow) {
                Ok(()) => {
                    println!("✅ Workflow '{}' is valid ({} actions)", workflow.name, workflow.actions.len());
                }
                Err(errors) => {
                    eprintln!("❌ Validation failed:");
                    for error in &errors {
                        eprintln!("  - {error}");
                    }
                    std::process::exit(1);
                }
            }
        }
        Command::Lint { path, lists } => {
            let workflow = read_workflow(&path)?;
            let lists: Vec<RecipientList> = match lists {
                Some(lists_path) => read_json(&lists_path)?,
                None => Vec::new(),
            };
            let warnings = engine::lint(&workflow, &lists);
            if warnings.is_empty() {
                println!("✅ No warnings");
            }
            for warning in &warnings {
                println!("⚠️  {warning}");
            }
        }
        Command::Variables { path } => {
            let workflow = read_workflow(&path)?;
            for name in engine::required_variables(&workflow) {
                println!("{name}");
            }
        }
        Command::SampleData { path, date } => {
            let workflow = read_workflow(&path)?;
            let clock = clock_for(date);
            print_json(&engine::generate_sample_data(&workflow, clock.as_ref()))?;
        }
        Command::Preview { path, data, date } => {
            let workflow = read_workflow(&path)?;
            let values = variables_or_samples(&workflow, data, date)?;
            for line in preview_lines(&workflow, &values) {
                println!("{line}");
            }
        }
        Command::Templates => {
            for template in engine::templates() {
                println!("{:<22} {}", template.id, template.name);
            }
        }
        Command::FromTemplate { id } => {
            let template = engine::find_template(&id)?;
            print_json(&engine::apply_template(template))?;
        }
        Command::AddAction { path, kind } => {
            let kind: ActionKind = kind.parse()?;
            print_json(&read_workflow(&path)?.add_action(kind))?;
        }
        Command::RemoveAction { path, index } => {
            print_json(&read_workflow(&path)?.remove_action(index)?)?;
        }
        Command::MoveAction { path, from, to } => {
            print_json(&read_workflow(&path)?.move_action(from, to)?)?;
        }
        Command::SavePayload { path, agent_id } => {
            let workflow = read_workflow(&path)?;
            if let Err(errors) = engine::validate(&workflow) {
                bail!(
                    "workflow is not valid: {}",
                    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
                );
            }
            print_json(&engine::build_save_payload(&workflow, agent_id))?;
        }
        Command::ExecutePayload { path, data, date } => {
            let workflow = read_workflow(&path)?;
            let variables = variables_or_samples(&workflow, data, date)?;
            print_json(&engine::build_execution_payload(&workflow, variables)?)?;
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read file {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn read_workflow(path: &Path) -> Result<Workflow> {
    let workflow: Workflow = read_json(path)?;
    info!("loaded workflow '{}' with {} actions", workflow.name, workflow.actions.len());
    Ok(workflow)
}

/// Parse `--data` when given, otherwise fall back to sample values.
fn variables_or_samples(
    workflow: &Workflow,
    data: Option<String>,
    date: Option<NaiveDate>,
) -> Result<BTreeMap<String, String>> {
    Ok(match data {
        Some(raw) => engine::parse_variables(&raw)?,
        None => engine::generate_sample_data(workflow, clock_for(date).as_ref()),
    })
}

/// One header line per action (`[index] label`) followed by its config
/// fields. Text fields are rendered with `values`; unknown placeholders
/// such as `{{ai_content}}` stay as written.
fn preview_lines(workflow: &Workflow, values: &BTreeMap<String, String>) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, action) in workflow.actions.iter().enumerate() {
        let label = match actions::schema_for(&action.kind) {
            Some(schema) => schema.label,
            None => action.kind.as_str(),
        };
        lines.push(format!("[{index}] {label}"));
        for (field, value) in &action.config {
            let shown = match value.as_str() {
                Some(text) => engine::render(text, values),
                None => value.to_string(),
            };
            lines.push(format!("  {field}: {shown}"));
        }
    }
    lines
}

fn clock_for(date: Option<NaiveDate>) -> Box<dyn Clock> {
    match date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
