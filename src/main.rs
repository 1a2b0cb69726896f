use clutch_a_bling::{
    config,
    errors::Result,
    shell::{self, Session},
};
use dotenvy::dotenv;
use tokio::io::{BufReader, stdin, stdout};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible); stdout belongs to the catalog view
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!("Successfully processed application configuration.");

    // 4. Generate the session catalog
    let mut session = Session::from_config(app_config, chrono::Utc::now());

    // 5. Run the shell on stdin/stdout
    shell::run_shell(&mut session, BufReader::new(stdin()), stdout())
        .await
        .inspect_err(|e| error!("Shell terminated with an error: {}", e))?;

    Ok(())
}
