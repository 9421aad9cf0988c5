//! Command-line front end for the task store and integration gateway.
//!
//! Usage:
//!
//! ```text
//! taskgate [--config <path>] [-v...] <command>
//! ```
//!
//! Every invocation rehydrates the task collection from the data directory,
//! performs one operation, and exits. Results go to stdout; diagnostics go to
//! stderr and are filtered by `TASKGATE_LOG` (for example
//! `TASKGATE_LOG=taskgate=debug`).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};
use mockable::{Clock, DefaultClock};
use taskgate::{
    config::{AppConfig, ConfigError},
    gateway::{adapters::ReqwestTransport, domain::IntegrationError, services::IntegrationGateway},
    settings::services::{ConfigResolver, SettingsEditor, SettingsError},
    storage::{
        adapters::DirectoryKeyValueStore,
        ports::{KeyValueError, KeyValueStore},
    },
    task::{
        domain::{TaskEnv, TaskField, TaskId, TaskLabel, TaskRecord, TaskStatus},
        services::TaskStore,
    },
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TASKGATE_LOG";

type Store = TaskStore<DirectoryKeyValueStore, DefaultClock>;
type Gateway = IntegrationGateway<ReqwestTransport, DirectoryKeyValueStore, DefaultClock>;

/// Errors that end a CLI invocation with a non-zero exit code.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open data directory: {0}")]
    Storage(#[from] KeyValueError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to summarize tasks: {0}")]
    Summary(#[from] IntegrationError),
    #[error("no task with id {0}")]
    UnknownTask(TaskId),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

#[derive(Debug, Parser)]
#[command(
    name = "taskgate",
    version,
    about = "Track tasks and hand them to automation and AI services"
)]
struct Cli {
    /// TOML configuration file to use instead of the user config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show all tasks.
    List,
    /// Append a new task.
    Add {
        /// Title for the new task.
        #[arg(long)]
        text: Option<String>,
    },
    /// Change one field of a task.
    Update {
        /// Task identifier.
        id: TaskId,
        /// One of text, description, label, env, status.
        field: TaskField,
        /// New value.
        value: String,
    },
    /// Delete a task.
    Remove {
        /// Task identifier.
        id: TaskId,
    },
    /// Send all tasks to the automation webhook.
    Submit,
    /// Ask the AI service for follow-up tasks.
    Suggest {
        /// Add every suggestion to the task list.
        #[arg(long)]
        adopt: bool,
    },
    /// Ask the AI service for a short summary of the task list.
    Summarize,
    /// Check connectivity to both integrations.
    Probe,
    /// Show or change integration settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Debug, Subcommand)]
enum SettingsAction {
    /// Print the effective settings form.
    Show,
    /// Update individual settings; unspecified ones keep their value.
    Set {
        /// Automation webhook URL.
        #[arg(long)]
        n8n_webhook: Option<String>,
        /// Enable or disable the automation webhook.
        #[arg(long)]
        n8n_enabled: Option<bool>,
        /// AI service base URL.
        #[arg(long)]
        ollama_endpoint: Option<String>,
        /// AI model name.
        #[arg(long)]
        ollama_model: Option<String>,
        /// Enable or disable AI features.
        #[arg(long)]
        ollama_enabled: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ignored = report_failure(&mut io::stderr().lock(), &err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    init_tracing(cli.verbose)?;

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let storage = Arc::new(DirectoryKeyValueStore::open(&config.data_dir)?);
    let clock = Arc::new(DefaultClock);
    let defaults = config.integration_defaults();

    let mut store: Store = TaskStore::load(Arc::clone(&storage), Arc::clone(&clock));
    let gateway: Gateway = IntegrationGateway::new(
        Arc::new(ReqwestTransport::new()),
        ConfigResolver::new(Arc::clone(&storage), defaults.clone()),
        clock,
    );
    let mut out = io::stdout().lock();

    match cli.command {
        Command::List => print_tasks(&mut out, store.tasks())?,
        Command::Add { text } => {
            let record = add_task(&mut store, text);
            writeln!(out, "{}", record.id())?;
        }
        Command::Update { id, field, value } => {
            let notice = unknown_value_notice(field, &value);
            if !store.update_field(&id, field, value) {
                return Err(CliError::UnknownTask(id));
            }
            if let Some(message) = notice {
                writeln!(out, "{message}")?;
            }
        }
        Command::Remove { id } => {
            if !store.remove(&id) {
                return Err(CliError::UnknownTask(id));
            }
        }
        Command::Submit => {
            let outcome = gateway.submit(&store.snapshot()).await;
            writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
        }
        Command::Suggest { adopt } => {
            let suggestions = gateway.suggest(&store.snapshot()).await;
            if suggestions.is_empty() {
                writeln!(out, "No suggestions available.")?;
            }
            for suggestion in suggestions {
                writeln!(out, "{suggestion}")?;
                if adopt {
                    store.add_from_suggestion(suggestion);
                }
            }
        }
        Command::Summarize => {
            let summary = gateway.summarize(&store.snapshot()).await?;
            writeln!(out, "{summary}")?;
        }
        Command::Probe => {
            let automation = gateway.test_automation().await;
            let ai = gateway.test_ai().await;
            writeln!(out, "automation: {}", reachability(automation))?;
            writeln!(out, "ai: {}", reachability(ai))?;
        }
        Command::Settings { action } => {
            let editor = SettingsEditor::new(storage, defaults);
            run_settings(&mut out, &editor, action)?;
        }
    }

    Ok(())
}

fn run_settings(
    out: &mut impl Write,
    editor: &SettingsEditor<DirectoryKeyValueStore>,
    action: SettingsAction,
) -> Result<(), CliError> {
    let mut form = editor.load();
    if let SettingsAction::Set {
        n8n_webhook,
        n8n_enabled,
        ollama_endpoint,
        ollama_model,
        ollama_enabled,
    } = action
    {
        if let Some(webhook) = n8n_webhook {
            form.n8n_webhook = webhook;
        }
        if let Some(enabled) = n8n_enabled {
            form.n8n_enabled = enabled;
        }
        if let Some(endpoint) = ollama_endpoint {
            form.ollama_endpoint = endpoint;
        }
        if let Some(model) = ollama_model {
            form.ollama_model = model;
        }
        if let Some(enabled) = ollama_enabled {
            form.ollama_enabled = enabled;
        }
        editor.save(&form)?;
    }
    writeln!(out, "{}", serde_json::to_string_pretty(&form)?)?;
    Ok(())
}

/// Appends a task, with its title when one was given, in a single write.
fn add_task<K, C>(store: &mut TaskStore<K, C>, text: Option<String>) -> TaskRecord
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    store.add_from_suggestion(text.unwrap_or_default())
}

/// Describes a classification value outside the known set. Such values are
/// still stored; the notice only lists the known alternatives.
fn unknown_value_notice(field: TaskField, value: &str) -> Option<String> {
    let known = match field {
        TaskField::Label if !TaskLabel::from(value).is_known() => TaskLabel::VALUES,
        TaskField::Env if !TaskEnv::from(value).is_known() => TaskEnv::VALUES,
        TaskField::Status if !TaskStatus::from(value).is_known() => TaskStatus::VALUES,
        _ => return None,
    };
    Some(format!(
        "note: '{value}' is not a known {field} (known: {}); stored as given",
        known.join(", ")
    ))
}

fn report_failure(sink: &mut impl Write, err: &CliError) -> io::Result<()> {
    writeln!(sink, "taskgate: {err}")
}

fn print_tasks(out: &mut impl Write, tasks: &[TaskRecord]) -> io::Result<()> {
    for task in tasks {
        let title = if task.text().is_empty() {
            "(untitled)"
        } else {
            task.text()
        };
        writeln!(
            out,
            "{}  [{}] {}/{}  {}",
            task.id(),
            task.status(),
            task.label(),
            task.env(),
            title
        )?;
        for line in task.description().lines() {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}

const fn reachability(ok: bool) -> &'static str {
    if ok { "reachable" } else { "unreachable" }
}

fn init_tracing(verbose: u8) -> Result<(), CliError> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}
