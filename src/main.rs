use reversi_server::{
    api::app::AppService,
    build_state,
    config::Config,
    repo::connection::Database,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reversi_server=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    let db = Database::connect(&config.database).await?;
    if config.run_migrations {
        db.migrate().await?;
        info!("database migrations applied");
    }

    let app = AppService {
        static_dir: config.static_dir.clone(),
    };
    app.run(build_state(db), config.addr).await?;
    Ok(())
}
