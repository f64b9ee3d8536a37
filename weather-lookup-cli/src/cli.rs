use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use tracing::debug;
use weather_lookup_core::{
    Config, DisplayState, LookupForm, NewRecord, RecordSource, render, source_from_config,
    view::{FIELD_LABEL, PLACEHOLDER},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Look up stored weather records")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Weather service origin; overrides the configured one for this run.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the weather service base URL.
    Configure,

    /// Look up one record by its id and print the result.
    Show {
        /// Weather request id, e.g. 123e4567-e89b-12d3-a456-426614174000.
        id: String,
    },

    /// Prompt for ids repeatedly until Esc or Ctrl-C.
    Interactive,

    /// Store a new record and print its id.
    Create {
        /// Location name passed to the weather service.
        #[arg(long)]
        location: String,

        /// Free-form date; defaults to today.
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value = "")]
        notes: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure(self.base_url.as_deref()),
            Command::Show { id } => {
                let config = effective_config(self.base_url.as_deref())?;
                show(&config, id).await
            }
            Command::Interactive => {
                let config = effective_config(self.base_url.as_deref())?;
                interactive(&config).await
            }
            Command::Create {
                location,
                date,
                notes,
            } => {
                let config = effective_config(self.base_url.as_deref())?;
                let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
                create(&config, NewRecord { date, location, notes }).await
            }
        }
    }
}

/// Config from disk with the `--base-url` flag applied on top (not saved).
fn effective_config(base_url: Option<&str>) -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    if let Some(url) = base_url {
        config.set_base_url(url)?;
    }
    debug!(base_url = config.base_url(), "using weather service");
    Ok(config)
}

fn configure(base_url: Option<&str>) -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let url = match base_url {
        Some(url) => url.to_string(),
        None => Text::new("Weather service base URL:")
            .with_default(config.base_url())
            .prompt()
            .context("Failed to read base URL")?,
    };

    config.set_base_url(&url)?;
    config.save()?;

    println!(
        "Saved base URL {} to {}",
        config.base_url(),
        Config::config_file_path()?.display()
    );
    Ok(ExitCode::SUCCESS)
}

async fn show(config: &Config, id: String) -> anyhow::Result<ExitCode> {
    let source = source_from_config(config);
    let mut form = LookupForm::new();
    form.set_identifier(id);

    let state = form.submit(&source).await;
    print!("{}", render(&form));

    Ok(exit_code(state))
}

async fn interactive(config: &Config) -> anyhow::Result<ExitCode> {
    let source = source_from_config(config);
    let mut form = LookupForm::new();
    let mut last = DisplayState::Idle;

    loop {
        let input = match Text::new(&format!("{FIELD_LABEL}:"))
            .with_placeholder(PLACEHOLDER)
            .with_initial_value(form.identifier())
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read weather request id"),
        };

        form.set_identifier(input);
        last = lookup_once(&mut form, &source).await;
        println!();
    }

    Ok(exit_code(last))
}

/// One submission with the loading view printed while the request is out.
async fn lookup_once(form: &mut LookupForm, source: &dyn RecordSource) -> DisplayState {
    if let Some(pending) = form.begin_lookup() {
        print!("{}", render(form));
        let outcome = source.fetch(pending.identifier()).await;
        form.settle(pending, outcome);
        println!();
    }

    print!("{}", render(form));
    form.display_state()
}

async fn create(config: &Config, record: NewRecord) -> anyhow::Result<ExitCode> {
    let source = source_from_config(config);
    let created = source.create_record(&record).await?;

    println!("Stored weather record for {}: {}", record.location, created.id);
    println!("Look it up with: weather-lookup show {}", created.id);
    Ok(ExitCode::SUCCESS)
}

fn exit_code(state: DisplayState) -> ExitCode {
    match state {
        DisplayState::Error => ExitCode::FAILURE,
        DisplayState::Idle | DisplayState::Result => ExitCode::SUCCESS,
    }
}
