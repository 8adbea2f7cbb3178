use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use message_board_server::backends::build_state;
use message_board_server::params::Args;
use message_board_server::services;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // a .env file is optional
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = match build_state(&args).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Configuration error: {} ({:?})", e, e);
            std::process::exit(1);
        }
    };
    let shared_state = web::Data::new(state);

    tracing::info!("listening on {}", args.http_addr);
    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .configure(services::configure)
    })
        .bind(args.http_addr.clone())?
        .run()
        .await
}
