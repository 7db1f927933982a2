use anyhow::Context;
use seating_engine::plan::open_session;
use seating_engine::{ApiResponse, AppError, Config, SeatingSession, init_logger_for};

fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_for(&config);

    tracing::info!(environment = %config.environment, "Seating engine starting");

    // 2. Session from the plan file, or an empty one
    let session = match std::env::args().nth(1) {
        Some(path) => open_session(config, &path)?,
        None => {
            tracing::warn!("No plan file given, starting with an empty venue");
            SeatingSession::new(config).context("Invalid default configuration")?
        }
    };

    // 3. Print the view for the host
    let response = ApiResponse::from(session.view().map_err(AppError::from));
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
