mod app_state;
mod config;
mod models;
mod routes;
mod valuation;
pub mod external;
pub use app_state::AppState;
pub use config::Config;

use crate::routes::make_app;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (app, config) = make_app().await?;
    let listener = TcpListener::bind(&config.bind_addr).await?;
    println!("🚀 Server started on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
