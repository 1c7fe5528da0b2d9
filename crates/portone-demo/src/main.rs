// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PortOne bridge demo shell.
//
// Entry point. Initialises logging, then renders runtime documents or replays
// scripted runtime events against a flow and prints its outcome.

mod host;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, mpsc};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};

use portone_bridge::adapter::convert;
use portone_bridge::protocol::{self, Operation, OperationResult};
use portone_bridge::{FlowSession, PortOneBridge, TracingLogger, main_queue};
use portone_core::config::BridgeConfig;
use portone_core::error::{PortOneError, Result};
use portone_core::json::{JsonObject, JsonValue};
use portone_core::summary::{
    Summary, summarize_billing_key, summarize_identity_verification, summarize_payment,
};
use portone_core::types::{IdentityVerificationRequest, IssueBillingKeyRequest, PaymentRequest};

use host::ConsoleHost;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bridge config JSON file. Built-in defaults when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the runtime document for a request file
    Render {
        #[arg(value_enum)]
        flow: Flow,
        /// Request JSON file (browser SDK field names)
        request: PathBuf,
    },
    /// Start a flow, replay runtime events, and print the outcome
    Simulate {
        #[arg(value_enum)]
        flow: Flow,
        /// Request JSON file (browser SDK field names)
        request: PathBuf,
        /// Runtime event, in order: navigate=<url>, no-url, error=<message>,
        /// fail=<error>, message=<handler>:<body>
        #[arg(long = "event", value_parser = parse_event)]
        events: Vec<Event>,
    },
    /// Write the default bridge config to a file
    InitConfig { path: PathBuf },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Flow {
    Payment,
    BillingKey,
    IdentityVerification,
}

#[derive(Debug, Clone)]
enum Event {
    Navigate(Option<String>),
    Error(String),
    Message { handler: String, body: String },
    Fail(String),
}

fn parse_event(raw: &str) -> std::result::Result<Event, String> {
    if raw == "no-url" {
        return Ok(Event::Navigate(None));
    }
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <kind>=<value>, got `{raw}`"))?;
    match kind {
        "navigate" => Ok(Event::Navigate(Some(value.to_owned()))),
        "error" => Ok(Event::Error(value.to_owned())),
        "fail" => Ok(Event::Fail(value.to_owned())),
        "message" => {
            let (handler, body) = value
                .split_once(':')
                .ok_or_else(|| format!("expected message=<handler>:<body>, got `{raw}`"))?;
            Ok(Event::Message {
                handler: handler.to_owned(),
                body: body.to_owned(),
            })
        }
        other => Err(format!("unknown event kind `{other}`")),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "portone-demo failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => BridgeConfig::load(path)?,
        None => BridgeConfig::default(),
    };

    match cli.command {
        Command::Render { flow, request } => {
            let object = read_object(&request)?;
            let html = match flow {
                Flow::Payment => render::<PaymentRequest>(object, &config)?,
                Flow::BillingKey => render::<IssueBillingKeyRequest>(object, &config)?,
                Flow::IdentityVerification => {
                    render::<IdentityVerificationRequest>(object, &config)?
                }
            };
            println!("{html}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Simulate {
            flow,
            request,
            events,
        } => {
            let object = read_object(&request)?;
            match flow {
                Flow::Payment => {
                    simulate::<PaymentRequest>(config, object, &events, summarize_payment)
                }
                Flow::BillingKey => {
                    simulate::<IssueBillingKeyRequest>(config, object, &events, summarize_billing_key)
                }
                Flow::IdentityVerification => simulate::<IdentityVerificationRequest>(
                    config,
                    object,
                    &events,
                    summarize_identity_verification,
                ),
            }
        }
        Command::InitConfig { path } => {
            BridgeConfig::default().save(&path)?;
            info!(path = %path.display(), "default config written");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_object(path: &Path) -> Result<JsonObject> {
    let text = std::fs::read_to_string(path)?;
    match JsonValue::parse(&text)? {
        JsonValue::Object(object) => Ok(object),
        _ => Err(PortOneError::InvalidRequest(format!(
            "{} must contain a JSON object",
            path.display()
        ))),
    }
}

fn render<O: Operation>(object: JsonObject, config: &BridgeConfig) -> Result<String> {
    let request: O = convert(object)?;
    request.validate()?;
    let json = protocol::encode(&request)?;
    protocol::render_document(O::KIND, &json, config)
}

fn simulate<O>(
    config: BridgeConfig,
    object: JsonObject,
    events: &[Event],
    summarize: fn(&OperationResult<O>) -> Summary,
) -> Result<ExitCode>
where
    O: Operation,
    O::Success: Serialize,
    O::Error: Serialize,
{
    let (dispatcher, mut queue) = main_queue();
    let bridge = PortOneBridge::with_config(
        Arc::new(ConsoleHost),
        Arc::new(dispatcher),
        Arc::new(TracingLogger),
        config,
    )?;

    let (sender, outcomes) = mpsc::channel();
    let session = bridge.start_loose::<O>(object, move |result| {
        forward_outcome(&sender, result);
    });
    for event in events {
        replay(&session, bridge.config(), event);
    }
    queue.run_pending();

    match outcomes.try_recv() {
        Ok(result) => {
            let summary = summarize(&result);
            println!("{}: {}", summary.title, summary.message);
            println!("{}", serde_json::to_string(&result)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => {
            println!("no outcome: flow {} is still pending", session.id());
            Ok(ExitCode::from(2))
        }
    }
}

/// Hand a delivered result to `simulate`. Returns whether anyone was listening.
fn forward_outcome<T>(sender: &mpsc::Sender<T>, result: T) -> bool {
    if sender.send(result).is_err() {
        warn!("outcome receiver closed, dropping flow result");
        return false;
    }
    true
}

fn replay<O: Operation>(session: &FlowSession<O>, config: &BridgeConfig, event: &Event) {
    match event {
        Event::Navigate(url) => {
            let policy = session.decide_navigation(url.as_deref());
            println!("navigate {}: {policy:?}", url.as_deref().unwrap_or("<none>"));
        }
        Event::Error(message) => {
            session.receive_script_message(&config.error_handler_name, &JsonValue::from(message.as_str()));
        }
        Event::Message { handler, body } => {
            session.receive_script_message(handler, &JsonValue::from(body.as_str()));
        }
        Event::Fail(error) => session.navigation_failed(error),
    }
}
