//! Command-line client for the producer registry.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use registry_client::render::{write_dashboard, write_detail, write_table};
use registry_client::{ClientError, FormErrors, ProducerForm, RegistryClient, summarize};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "registry-cli", about = "Browse and edit the producer registry")]
struct Cli {
    /// Base URL of the registry service.
    #[arg(long, env = "REGISTRY_URL", default_value = "http://localhost:8000")]
    base_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show totals and the state, crop and land-use charts.
    Dashboard,
    /// List producers.
    List {
        /// Records to skip.
        #[arg(long, default_value_t = 0)]
        skip: u64,
        /// Records per page (the service caps this at 100).
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Fetch every page.
        #[arg(long, conflicts_with_all = ["skip", "limit"])]
        all: bool,
    },
    /// Show one producer.
    Show {
        /// Producer id.
        id: i64,
    },
    /// Register a producer.
    Create(ProducerForm),
    /// Change a producer; omitted fields keep their stored values.
    Update {
        /// Producer id.
        id: i64,
        #[command(flatten)]
        form: ProducerForm,
    },
    /// Delete a producer after confirmation.
    Delete {
        /// Producer id.
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Ask the service to generate synthetic producers.
    Mock {
        /// Number of producers to generate.
        #[arg(long, default_value_t = 10)]
        qty: u32,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("invalid producer: {0}")]
    Form(#[from] FormErrors),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("deletion cancelled")]
    Cancelled,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "registry-cli: {err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = RegistryClient::new(cli.base_url)?;
    debug!(base_url = client.base_url(), "client ready");
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Dashboard => {
            let producers = client.list_all().await?;
            write_dashboard(&mut out, &summarize(&producers))?;
        }
        Command::List { skip, limit, all } => {
            let producers = if all {
                client.list_all().await?
            } else {
                client.list(skip, limit).await?
            };
            write_table(&mut out, &producers)?;
        }
        Command::Show { id } => {
            let producer = client.get(id).await?;
            write_detail(&mut out, &producer)?;
        }
        Command::Create(form) => {
            let payload = form.into_new_payload()?;
            let created = client.create(&payload).await?;
            writeln!(out, "Created producer {}.", created.id)?;
            write_detail(&mut out, &created)?;
        }
        Command::Update { id, form } => {
            let current = client.get(id).await?;
            let payload = form.apply_to(current.fields)?;
            let updated = client.update(id, &payload).await?;
            writeln!(out, "Updated producer {id}.")?;
            write_detail(&mut out, &updated)?;
        }
        Command::Delete { id, yes } => {
            let producer = client.get(id).await?;
            if !yes && !confirm(&mut out, &producer.fields.producer_name, id)? {
                return Err(CliError::Cancelled);
            }
            let detail = client.delete(id).await?;
            writeln!(out, "Producer {id}: {detail}")?;
        }
        Command::Mock { qty } => {
            let detail = client.generate_mock(qty).await?;
            writeln!(out, "{detail}")?;
        }
    }
    Ok(())
}

fn confirm(out: &mut impl Write, producer_name: &str, id: i64) -> io::Result<bool> {
    write!(out, "Delete producer \"{producer_name}\" (id {id})? [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
