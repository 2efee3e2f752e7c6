/// PPP - terminal front-end for the users and albums backend
use anyhow::Context;
use clap::{Parser, Subcommand};
use ppp_client::PppClient;
use ppp_forms::{FormController, FormData, FormId};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod shell;
mod surface;

use crate::config::AppConfig;
use crate::surface::TerminalSurface;

#[derive(Parser)]
#[command(name = "ppp")]
#[command(about = "Submit PPP forms against the users and albums backend", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./ppp.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the configuration
    #[arg(long, global = true, env = "PPP_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the forms and the request each one sends
    Forms,
    /// Submit a form
    Submit {
        /// Form id, e.g. addUser or getAlbumsByUserId
        form: String,
        /// Field values as name=value
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },
    /// Submit the parameter-less user listing
    ListUsers,
    /// Submit the parameter-less album listing
    ListAlbums,
    /// Interactive page with a form selector
    Shell,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout carries rendered results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ppp=info,ppp_client=info,ppp_forms=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Commands::Forms = cli.command {
        shell::print_forms();
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;

    tracing::info!("Backend: {}", config.api.base_url);

    // One client and one controller for the whole process
    let client = Arc::new(
        PppClient::new(config.client_config()).context("Failed to create API client")?,
    );
    let surface = Arc::new(TerminalSurface::stdout());
    let mut controller =
        FormController::new(client, Arc::clone(&surface), config.controller_settings());
    controller.setup();
    let controller = Arc::new(controller);

    match cli.command {
        Commands::Submit { form, fields } => {
            let form: FormId = form.parse()?;
            let data = FormData::parse_pairs(&fields)?;
            submit(&controller, form, &data).await?;
        }
        Commands::ListUsers => {
            submit(&controller, FormId::GetAllUsers, &FormData::new()).await?;
        }
        Commands::ListAlbums => {
            submit(&controller, FormId::GetAllAlbums, &FormData::new()).await?;
        }
        Commands::Shell => {
            shell::run(controller, surface).await?;
        }
        Commands::Forms => {}
    }

    Ok(())
}

async fn submit(
    controller: &FormController<TerminalSurface<std::io::Stdout>>,
    form: FormId,
    data: &FormData,
) -> anyhow::Result<()> {
    controller.select(form);
    let result = controller
        .submit(form, data)
        .await
        .with_context(|| format!("Failed to submit {}", form))?;

    if let Some(kind) = result.failure_kind() {
        tracing::warn!(form = %form, kind = %kind, "Submission did not reach the backend");
    }

    Ok(())
}
