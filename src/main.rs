use std::io::IsTerminal;

use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;

mod app;
mod error;
mod model;

/// Mock OpenAI-style embeddings endpoint for test fixtures.
#[derive(Parser)]
#[command(name = "mock-embedding-server", version, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(default_value_t = 8080)]
    port: u16,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let server = HttpServer::new(|| {
        App::new()
            .wrap(Logger::new(r#"%a "%r" %s %b %Ts"#))
            .configure(app::configure)
            .default_service(web::to(app::not_found))
    })
    .bind(("0.0.0.0", cli.port))?;

    tracing::info!("Mock embedding server running on port {}", cli.port);

    server.run().await?;
    Ok(())
}
