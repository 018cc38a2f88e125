use crate::config::AppConfig;
use crate::db::{init_db, seed_db, Database};
use crate::responses::html_error_response;
use crate::router::{handle, AppState};
use astra::Server;
use std::time::Instant;
use tracing::{error, info, warn};

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod map;
mod responses;
mod router;
mod telemetry;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let db = Database::new(config.database_path.clone());

    if let Err(e) = init_db(&db, &config.schema_path) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    if config.seed_demo_data {
        if let Err(e) = seed_db(&db, &config.seed_path) {
            error!(error = %e, "loading demo data failed");
            std::process::exit(1);
        }
    }

    let addr = config.bind_addr();
    let server = Server::bind(addr).max_workers(config.workers);
    info!(%addr, workers = config.workers, "starting server");

    let app = AppState { db, config };

    let result = server.serve(move |req: astra::Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status_code() >= 500 {
                    error!(%method, %path, error = %err, "request failed");
                } else {
                    warn!(%method, %path, error = %err, "request rejected");
                }
                html_error_response(&err)
            }
        };

        info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
