//! CLI for lighthouse plate events.
//!
//! Constructs plate event messages from the command line against lookups
//! loaded from a JSON file, and prints the message that would be published.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lighthouse_core::InMemoryGateway;
use lighthouse_events::{
    construct_event_message, into_parts, EventConfig, PlateEventParams, PlateEventType,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Construct a plate event message and print it as JSON
    Event {
        /// Event type, e.g. source_completed
        event_type: String,

        /// JSON file with robots, source_plates and samples lookups
        #[arg(long)]
        lookups: PathBuf,

        /// Source plate barcode
        #[arg(long)]
        barcode: Option<String>,

        /// Identifier of the user reporting the event
        #[arg(long)]
        user_id: Option<String>,

        /// Robot serial number
        #[arg(long)]
        robot: Option<String>,

        /// Extra request parameter as key=value (repeatable)
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// LIMS identifier stamped on the message
        #[arg(long, env = "RMQ_LIMS_ID")]
        lims_id: String,
    },
    /// List the recognised event types
    EventTypes,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Named options win over `--param` entries with the same key.
fn build_params(
    barcode: Option<String>,
    user_id: Option<String>,
    robot: Option<String>,
    extra: Vec<(String, String)>,
) -> PlateEventParams {
    let mut params: PlateEventParams = extra.into_iter().collect();
    for (key, value) in [("barcode", barcode), ("user_id", user_id), ("robot", robot)] {
        if let Some(value) = value {
            params.insert(key.to_string(), value);
        }
    }
    params
}

fn load_lookups(path: &Path) -> Result<InMemoryGateway> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lookups from {}", path.display()))?;
    InMemoryGateway::from_json(&json)
        .with_context(|| format!("Invalid lookups file {}", path.display()))
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lighthouse_events=info,lighthouse=info".into()),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing();

    match cli.command {
        Commands::Event {
            event_type,
            lookups,
            barcode,
            user_id,
            robot,
            params,
            lims_id,
        } => {
            let gateway = load_lookups(&lookups)?;
            let config = EventConfig::new(lims_id);
            let params = build_params(barcode, user_id, robot, params);

            let (errors, message) =
                into_parts(construct_event_message(&event_type, &params, &gateway, &config));
            match message {
                Some(message) => {
                    tracing::info!(
                        event_type = %event_type,
                        uuid = %message.event.uuid,
                        "Constructed plate event message"
                    );
                    println!("{}", message.to_json_pretty()?);
                }
                None => anyhow::bail!(errors.join("\n")),
            }
        }
        Commands::EventTypes => {
            for event_type in PlateEventType::ALL {
                println!("{event_type}\t{}", event_type.required_fields().join(","));
            }
        }
    }

    Ok(())
}
