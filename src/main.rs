use feedback_chat_backend::{
    config::{get_config, init_config, log_format_from_env, LogFormat},
    database::pool::{create_pool, run_migrations},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(log_format_from_env());
    init_config()?;
    let config = get_config();

    info!(
        max_connections = config.database_max_connections,
        "Connecting to database"
    );
    let pool = create_pool(config).await?;

    info!("Running database migrations");
    run_migrations(&pool).await?;

    let app_state = AppState::new(pool, config);
    let app = routes::router(app_state, config.admin_rps);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
