//! Engineer registry entry point
//!
//! Constructs the store and service once at startup and hands them to the
//! HTTP server; there is no hidden global repository.

use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use registry::{EngineerService, InMemoryStore, RegistryServer, ServerResult};
use shared::{logging, CertificationLevel, CloudPlatform, EngineerDraft, EngineerPatch};

/// Command line arguments for the registry process
#[derive(Parser, Debug)]
#[command(name = "registry")]
#[command(about = "Engineer registry HTTP service")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Billable hours per month assumed in revenue projections
    #[arg(long, default_value = "160")]
    hours_per_month: u32,

    /// Seed the store with sample engineers at startup
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));

    let bind_address: SocketAddr = format!("127.0.0.1:{}", args.port)
        .parse()
        .map_err(|e| registry::ServerError::config(format!("Invalid port: {}", e)))?;

    // Explicit dependency construction: one store, one service, one server
    let store = Arc::new(InMemoryStore::new());
    let service = Arc::new(EngineerService::with_hours_per_month(
        store,
        args.hours_per_month,
    ));

    if args.seed {
        seed_sample_engineers(&service).await;
    }

    info!("🚀 Starting engineer registry on port {}", args.port);

    let server = RegistryServer::new(service, bind_address);
    server.run().await?;

    info!("Engineer registry stopped gracefully");
    Ok(())
}

/// Populate the store with a few sample engineers for local development
async fn seed_sample_engineers(service: &EngineerService<InMemoryStore>) {
    let samples = [
        (
            EngineerDraft {
                name: "Willem van Heemstra".to_string(),
                email: "willem@rockstars.com".to_string(),
                specialty: "DevSecOps".to_string(),
                hourly_rate: 116.0,
                certification_level: CertificationLevel::Senior,
            },
            vec!["AZ-104", "AZ-700"],
            true,
        ),
        (
            EngineerDraft {
                name: "Alice Chen".to_string(),
                email: "alice@rockstars.com".to_string(),
                specialty: "Cloud Architecture".to_string(),
                hourly_rate: 135.0,
                certification_level: CertificationLevel::Expert,
            },
            vec!["AZ-305", "AWS-SAA", "GCP-PCA"],
            true,
        ),
        (
            EngineerDraft {
                name: "Bob Johnson".to_string(),
                email: "bob@rockstars.com".to_string(),
                specialty: "Kubernetes".to_string(),
                hourly_rate: 90.0,
                certification_level: CertificationLevel::Mid,
            },
            vec!["CKAD", "CKA"],
            false,
        ),
    ];

    for (draft, certifications, is_available) in samples {
        let email = draft.email.clone();
        match service.create_engineer(draft).await {
            Ok(engineer) => {
                for cert in certifications {
                    if let Err(e) = service.add_certification(engineer.id, cert).await {
                        warn!("Failed to seed certification for {}: {}", email, e);
                    }
                }
                if !is_available {
                    let patch = EngineerPatch {
                        is_available: Some(false),
                        ..Default::default()
                    };
                    if let Err(e) = service.update_engineer(engineer.id, patch).await {
                        warn!("Failed to seed availability for {}: {}", email, e);
                    }
                }
            }
            // Duplicate seed data is fine, e.g. when re-running against a warm store
            Err(e) => warn!("Skipping seed engineer {}: {}", email, e),
        }
    }

    let azure_ready = service
        .find_engineers_for_platform(CloudPlatform::Azure)
        .await;
    info!(
        "✅ Seeded sample engineers ({} Azure-ready)",
        azure_ready.len()
    );
}
