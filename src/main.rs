use std::{io, process};

use actix_web::HttpServer;
use clap::Parser;
use people_api::{app::build_app, cli::Cli};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Real environment variables win over .env
    let dotenv_result = dotenvy::dotenv();

    // Request logs belong on stdout with everything else
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    if let Err(e) = dotenv_result {
        if !e.not_found() {
            log::warn!("Unable to load .env file: {}", e);
        }
    }

    let args = Cli::parse();

    let database_options = args.database_options();

    log::info!("Storage engine: {}", database_options.storage_engine);

    let store = match database_options.connect().await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Unable to connect to storage: {}", e);
            process::exit(1);
        }
    };

    log::info!("Listening on {}:{}", args.address, args.port);

    let log_http = args.log_http;

    HttpServer::new(move || build_app(store.clone(), log_http))
        .workers(args.http_workers)
        .bind((args.address, args.port))?
        .run()
        .await
}
