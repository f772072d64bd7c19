use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::server::app::run_server;
use trivia_api::settings;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let settings = settings::load()?;

    let pool = establish_connection(&settings.db_path).await?;
    tracing::info!("Running db migrations...");
    run_migrations(&pool).await?;

    run_server(pool, &settings.bind_addr()).await?;
    Ok(())
}
