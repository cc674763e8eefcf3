//! Jobhive CLI: upload job-board assets to Pinata and re-check pinned content.
//!
//! Set PINATA_JWT (and optionally PINATA_API_URL, PINATA_UPLOAD_URL,
//! GATEWAY_BASE_URL). Runs without a session, so uploads need `--owner` or
//! `--allow-anonymous`.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use jobhive_cli::{init_tracing, read_upload};
use jobhive_core::{Config, ErrorMetadata, UploadCategory, UploadError, UploadRequest};
use jobhive_services::{AssetUploadService, NoSession};
use jobhive_storage::{build_http_client, create_gateway, create_storage};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "jobhive", about = "Jobhive asset upload CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a profile image, resume or company license
    Upload {
        /// Path to the file to upload
        file: std::path::PathBuf,
        /// Category: profile_image, resume, company_license
        #[arg(long)]
        category: UploadCategory,
        /// Owner user id
        #[arg(long)]
        owner: Option<String>,
        /// Upload as "anonymous" when no owner is given
        #[arg(long)]
        allow_anonymous: bool,
        /// Declared media type (guessed from the extension if omitted)
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Check that a content id is pinned and served by the gateway
    Verify {
        /// Content id (CID)
        cid: String,
    },
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    code: &'a str,
    status: u16,
    recoverable: bool,
    suggested_action: Option<&'a str>,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn report_upload_error(err: UploadError) -> anyhow::Error {
    let body = ErrorBody {
        error: err.client_message(),
        code: err.error_code(),
        status: err.http_status_code(),
        recoverable: err.is_recoverable(),
        suggested_action: err.suggested_action(),
    };
    if let Ok(out) = serde_json::to_string_pretty(&body) {
        eprintln!("{}", out);
    }
    anyhow::Error::new(err)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Invalid configuration. Set PINATA_JWT")?;
    tracing::debug!(
        environment = config.environment(),
        gateway = config.gateway_base_url(),
        "Configuration loaded"
    );

    let client = build_http_client(&config)?;
    let storage = create_storage(&config, client.clone())?;
    let gateway = create_gateway(&config, client);
    let service = AssetUploadService::new(storage, gateway, Arc::new(config));

    match cli.command {
        Commands::Upload {
            file,
            category,
            owner,
            allow_anonymous,
            content_type,
        } => {
            let upload = read_upload(&file, content_type).await?;
            let mut request = UploadRequest::new(upload.bytes, upload.content_type, category)
                .allow_anonymous(allow_anonymous);
            if let Some(owner) = owner {
                request = request.with_owner(owner);
            }

            let asset = service
                .upload(request, &NoSession)
                .await
                .map_err(report_upload_error)?;
            print_json(&asset)?;
        }
        Commands::Verify { cid } => {
            let report = service.verify(&cid).await.map_err(report_upload_error)?;
            print_json(&report)?;
        }
    }

    Ok(())
}
