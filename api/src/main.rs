use std::sync::Arc;

use alphago_api::{
    application::{
        http::server::http_server::{router, state},
        logging::init_logger,
    },
    args::Args,
};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone())?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
