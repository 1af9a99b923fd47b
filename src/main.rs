use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parking_seed::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parking_seed=debug,sea_orm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        api = %config.api_base_url,
        variant = %config.variant,
        tickets = config.ticket_count,
        "Seeding parking database"
    );

    match parking_seed::run(&config).await {
        Ok(report) => {
            for lot in &report.lot_creations {
                tracing::info!(address = %lot.address, status = lot.status, "Lot creation");
            }
            tracing::info!(
                parking_lot_id = %report.parking_lot_id,
                spots = report.parking_spots,
                tickets = report.tickets,
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Seeding failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
