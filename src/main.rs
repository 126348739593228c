use crate::config::AppConfig;
use crate::router::{handle, AppState};
use crate::volunteers::ApiClient;
use astra::Server;
use std::sync::Arc;

mod config;
mod errors;
mod responses;
mod router;
mod templates;
mod volunteers;

#[cfg(test)]
mod tests;

fn main() {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let client = match ApiClient::new(&config.api_base) {
        Ok(c) => c,
        Err(e) => {
            log::error!("API client initialization failed: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Fetching volunteers from {}", client.endpoint());

    let addr = config.bind_addr;
    let workers = config.max_workers;
    let app = AppState::new(config, Arc::new(client));

    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
