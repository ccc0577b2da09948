//! Help desk demo binary.
//!
//! Loads configuration, optionally seeds the sample data, walks one request
//! through its lifecycle and prints a report of the desk.

mod config;
mod report;

use anyhow::Context;
use config::{Config, OutputFormat};
use helpdesk_core::environment::SystemClock;
use helpdesk_core::{HelpDesk, NewRequest, RequestStatus};
use report::Report;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        seed = config.seed,
        output = %config.output,
        "Configuration loaded"
    );

    let desk = HelpDesk::new(Arc::new(SystemClock));

    if config.seed {
        desk.seed().context("seeding sample data")?;
        walk_through(&desk).context("running the request walkthrough")?;
    }

    let report = Report::collect(&desk).context("collecting report")?;
    match config.output {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Opens a printer request for a sample client, assigns a hardware technician
/// and resolves it.
fn walk_through(desk: &HelpDesk) -> helpdesk_core::Result<()> {
    let Some(client) = desk.clients().find_by_email("carlos@empresa.com")? else {
        return Ok(());
    };
    let Some(client_id) = client.id else {
        return Ok(());
    };

    let opened = desk.requests().open(
        NewRequest::new("La impresora no imprime", client_id).with_title("Impresora"),
    )?;
    let Some(request_id) = opened.id else {
        return Ok(());
    };

    let technician = desk
        .technicians()
        .find_by_specialty("hardware")?
        .into_iter()
        .next();
    let mut assigned = opened.with_status(RequestStatus::IN_PROGRESS);
    assigned.technician = technician;
    let assigned = desk.requests().update(request_id, assigned)?;

    let resolved = desk
        .requests()
        .update(request_id, assigned.with_status(RequestStatus::RESOLVED))?;
    info!(
        request_id = %request_id,
        status = %resolved.status,
        technician = resolved.technician.as_ref().map_or("-", |t| t.name.as_str()),
        "Walkthrough finished"
    );
    Ok(())
}
