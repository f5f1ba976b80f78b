//! Promptdeck CLI - prompt composition and record management
//!
//! Talks to the Promptdeck server over HTTP. The `compose` command runs
//! an interactive session over the structured prompt form.

mod api;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use uuid::Uuid;

use promptdeck::{RecordBackend, SaveOutcome, Session, SessionState};

use api::ApiClient;
use config::Config;

#[derive(Parser)]
#[command(name = "promptdeck")]
#[command(about = "Promptdeck CLI - prompt composition and record management", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive compose session (edit, submit, save, load, delete)
    Compose,

    /// Check that the server is reachable
    Health,

    /// List saved prompts
    List,

    /// Show a saved prompt
    Show {
        /// Prompt ID
        id: String,
    },

    /// Delete a saved prompt
    Delete {
        /// Prompt ID
        id: String,
    },

    /// Send a one-off prompt through the proxy
    Ask {
        /// The prompt text
        prompt: String,
        /// Model to use (defaults to the server preference)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Solve a problem with chain-of-thought reasoning
    Cot {
        /// The problem statement
        problem: String,
        /// Model to use (defaults to the server preference)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Show or update server preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// Show current CLI configuration
    Config {
        /// Set the server base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Show the effective preferences (keys masked)
    Show,
    /// Overwrite the stored preferences
    Set {
        #[arg(long)]
        openai_key: Option<String>,
        #[arg(long)]
        claude_key: Option<String>,
        #[arg(long)]
        ollama_endpoint: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        max_tokens: Option<i32>,
        #[arg(long)]
        temperature: Option<f32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compose => cmd_compose().await,
        Commands::Health => cmd_health().await,
        Commands::List => cmd_list().await,
        Commands::Show { id } => cmd_show(id).await,
        Commands::Delete { id } => cmd_delete(id).await,
        Commands::Ask { prompt, model } => cmd_ask(prompt, model).await,
        Commands::Cot { problem, model } => cmd_cot(problem, model).await,
        Commands::Prefs { action } => cmd_prefs(action).await,
        Commands::Config { base_url } => cmd_config(base_url),
    }
}

fn client() -> Result<ApiClient> {
    let config = Config::load()?;
    Ok(ApiClient::new(&config.base_url))
}

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("'{raw}' is not a valid prompt ID"))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = ApiClient::new(&config.base_url);

    if client.health().await? {
        println!("{} Server at {} is healthy", "✓".green(), config.base_url);
    } else {
        println!("{} Server at {} is unhealthy", "✗".red(), config.base_url);
    }

    Ok(())
}

async fn cmd_list() -> Result<()> {
    let client = client()?;
    let records = client.list().await?;

    if records.is_empty() {
        println!("No saved prompts.");
        return Ok(());
    }

    println!("{}", "Saved prompts (newest first):".bold());
    for record in &records {
        println!(
            "  {} {} {}",
            record.id.to_string().cyan(),
            record.title,
            record
                .created_at
                .format("(%Y-%m-%d %H:%M)")
                .to_string()
                .dimmed()
        );
    }

    Ok(())
}

async fn cmd_show(id: String) -> Result<()> {
    let client = client()?;
    let record = client.get(parse_id(&id)?).await?;

    println!("{} {}", "Title:".bold(), record.title);
    println!("{} {}", "ID:".bold(), record.id);
    println!("{} {}", "Created:".bold(), record.created_at);
    println!("{} {}", "Updated:".bold(), record.updated_at);
    println!("\n{}\n{}", "Combined prompt:".bold(), record.combined_prompt);
    if !record.response.is_empty() {
        println!("\n{}\n{}", "Last response:".bold(), record.response);
    }

    Ok(())
}

async fn cmd_delete(id: String) -> Result<()> {
    let client = client()?;
    let deleted = client.delete(parse_id(&id)?).await?;

    println!("{} Deleted '{}'", "✓".green(), deleted.title);

    Ok(())
}

async fn cmd_ask(prompt: String, model: Option<String>) -> Result<()> {
    let client = client()?;
    let result = client.simple_prompt(&prompt, model.as_deref()).await?;

    println!("{}", result.response);

    Ok(())
}

async fn cmd_cot(problem: String, model: Option<String>) -> Result<()> {
    let client = client()?;
    let result = client.chain_of_thought(&problem, model.as_deref()).await?;

    println!("{}", "Reasoning steps:".bold());
    for (i, step) in result.steps.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).cyan(), step);
    }
    println!("\n{} {}", "Final answer:".bold().green(), result.final_answer);

    Ok(())
}

async fn cmd_prefs(action: PrefsAction) -> Result<()> {
    let client = client()?;

    match action {
        PrefsAction::Show => {
            let prefs = client.get_preferences().await?;

            println!("{}", "Preferences:".bold());
            println!(
                "  openai_api_key:  {}",
                prefs.openai_api_key.as_deref().unwrap_or("(not set)")
            );
            println!(
                "  claude_api_key:  {}",
                prefs.claude_api_key.as_deref().unwrap_or("(not set)")
            );
            println!("  ollama_endpoint: {}", prefs.ollama_endpoint);
            println!("  default_model:   {}", prefs.default_model);
            println!("  max_tokens:      {}", prefs.max_tokens);
            println!("  temperature:     {}", prefs.temperature);
        }
        PrefsAction::Set {
            openai_key,
            claude_key,
            ollama_endpoint,
            model,
            max_tokens,
            temperature,
        } => {
            // The server overwrites the row wholesale; omitted fields
            // fall back to its defaults.
            let body = serde_json::json!({
                "openai_api_key": openai_key,
                "claude_api_key": claude_key,
                "ollama_endpoint": ollama_endpoint,
                "default_model": model,
                "max_tokens": max_tokens,
                "temperature": temperature,
            });
            client.update_preferences(&body).await?;

            println!("{} Preferences updated", "✓".green());
        }
    }

    Ok(())
}

fn cmd_config(base_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(url) = base_url {
        config.base_url = url;
        config.save()?;
        println!("{} Base URL saved", "✓".green());
    }

    println!("{}", "Configuration:".bold());
    println!("  config file: {:?}", Config::config_path()?);
    println!("  base_url:    {}", config.base_url);

    Ok(())
}

// ============================================
// Interactive Compose Session
// ============================================

const COMPOSE_ACTIONS: &[&str] = &[
    "Edit title",
    "Edit instructions",
    "Edit context",
    "Edit input data",
    "Edit output requirements",
    "Edit avoid",
    "Preview combined prompt",
    "Submit to model",
    "Save",
    "Load",
    "Delete",
    "New (clear form)",
    "Quit",
];

async fn cmd_compose() -> Result<()> {
    let client = client()?;
    let mut session = Session::new();

    println!("{}", "Promptdeck compose session".bold());

    loop {
        let status = match session.state() {
            SessionState::New => "new draft".yellow().to_string(),
            SessionState::Loaded { id } => format!("editing {}", id).cyan().to_string(),
        };
        println!("\n[{}] {}", status, session.title);

        let choice = Select::new()
            .with_prompt("Action")
            .items(COMPOSE_ACTIONS)
            .default(0)
            .interact()?;

        match choice {
            0 => session.title = edit("Title", &session.title)?,
            1 => session.sections.instructions = edit("Instructions", &session.sections.instructions)?,
            2 => session.sections.context = edit("Context", &session.sections.context)?,
            3 => session.sections.input_data = edit("Input data", &session.sections.input_data)?,
            4 => {
                session.sections.output_indicator =
                    edit("Output requirements", &session.sections.output_indicator)?
            }
            5 => {
                session.sections.negative_prompting =
                    edit("Avoid", &session.sections.negative_prompting)?
            }
            6 => preview(&session),
            7 => submit(&client, &mut session).await,
            8 => save(&client, &mut session).await,
            9 => load(&client, &mut session).await?,
            10 => delete(&client, &mut session).await?,
            11 => {
                session.clear();
                println!("{} Form cleared", "✓".green());
            }
            _ => break,
        }
    }

    Ok(())
}

fn edit(label: &str, current: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn preview(session: &Session) {
    let combined = session.combined_prompt();
    if combined.is_empty() {
        println!("{}", "All sections are empty - nothing to send.".yellow());
    } else {
        println!("{}\n{}", "Combined prompt:".bold(), combined);
    }
}

async fn submit(client: &ApiClient, session: &mut Session) {
    let combined = session.combined_prompt();
    if combined.is_empty() {
        println!("{}", "All sections are empty - nothing to send.".yellow());
        return;
    }

    match client.simple_prompt(&combined, None).await {
        Ok(result) => {
            println!("{}\n{}", "Response:".bold(), result.response);
            session.response = result.response;
        }
        Err(e) => println!("{} {}", "✗".red(), e),
    }
}

async fn save(client: &ApiClient, session: &mut Session) {
    match session.save(client).await {
        Ok(SaveOutcome::RejectedEmpty) => {
            println!(
                "{}",
                "Title and at least one section are required before saving.".yellow()
            );
        }
        Ok(SaveOutcome::Created(record)) => {
            println!("{} Saved as {}", "✓".green(), record.id.to_string().cyan());
        }
        Ok(SaveOutcome::Updated(record)) => {
            println!("{} Updated {}", "✓".green(), record.id.to_string().cyan());
        }
        Err(e) => println!("{} {}", "✗".red(), e),
    }
}

async fn load(client: &ApiClient, session: &mut Session) -> Result<()> {
    let records = match client.list().await {
        Ok(records) => records,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            return Ok(());
        }
    };

    if records.is_empty() {
        println!("No saved prompts to load.");
        return Ok(());
    }

    let titles: Vec<String> = records
        .iter()
        .map(|r| format!("{} ({})", r.title, r.created_at.format("%Y-%m-%d %H:%M")))
        .collect();

    let choice = Select::new()
        .with_prompt("Load which prompt?")
        .items(&titles)
        .default(0)
        .interact()?;

    session.load(&records[choice]);
    println!("{} Loaded '{}'", "✓".green(), records[choice].title);

    Ok(())
}

async fn delete(client: &ApiClient, session: &mut Session) -> Result<()> {
    let SessionState::Loaded { id } = session.state() else {
        println!("{}", "Nothing loaded - delete needs a bound record.".yellow());
        return Ok(());
    };

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete {}?", id))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    match session.delete(client).await {
        Ok(Some(record)) => println!("{} Deleted '{}'", "✓".green(), record.title),
        Ok(None) => {}
        Err(e) => println!("{} {}", "✗".red(), e),
    }

    Ok(())
}
