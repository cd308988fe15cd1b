use std::sync::Arc;

use poem::{Server, listener::TcpListener};
use sqlx::postgres::PgPoolOptions;
use tokio::main;
use tracing_subscriber::EnvFilter;

use todos::{
    config::Config,
    infrastructure::repositories::{
        in_memory::{InMemoryTodoRepository, InMemoryUserRepository},
        postgres::{PostgresTodoRepository, PostgresUserRepository},
    },
    presentation::http::endpoints::root::ApiState,
};

#[main]
async fn main() -> anyhow::Result<()> {
    let config = Config::try_parse()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(url)
                .await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("connected to postgres");

            ApiState::new(
                PostgresTodoRepository::new(pool.clone()),
                PostgresUserRepository::new(pool),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, data will not outlive the process");
            ApiState::new(
                Arc::new(InMemoryTodoRepository::new()),
                Arc::new(InMemoryUserRepository::new()),
            )
        }
    };

    let server_url = config.server_url();
    tracing::info!("Starting server at {}", server_url);

    let app = todos::build_app(Arc::new(state), server_url);

    Server::new(TcpListener::bind(config.bind_addr()))
        .run(app)
        .await?;
    Ok(())
}
