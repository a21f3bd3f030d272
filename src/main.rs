#[macro_use]
extern crate tracing;

use std::{io, process};

use dotenvy::dotenv;

mod config;
mod error;
mod http_client;
mod lookup;
mod report;
mod runner;
mod trace;

pub use config::CONFIG;
pub use error::{Error, LookupFailure};

use http_client::HttpClient;
use lookup::{HttpIpLookup, IPWHOIS, JsonObjectParser};
use runner::Runner;

/// Looked up in this order on every run.
const TARGETS: [&str; 2] = ["125.121.61.164", "8.8.8.8"];

fn main() {
    dotenv().ok();
    trace::init(&CONFIG.log);
    launch_info();
    debug!("{:#?}", *CONFIG);

    let client = match HttpClient::new(&CONFIG.provider) {
        Ok(client) => client,
        Err(err) => {
            error!("failed to build http client: {}", err);
            process::exit(1);
        }
    };
    let lookup = if CONFIG.provider.endpoint == IPWHOIS {
        HttpIpLookup::ipwhois(&client)
    } else {
        HttpIpLookup::new(&client, CONFIG.provider.endpoint.as_str(), JsonObjectParser)
    };
    let runner = Runner::new(&lookup).normalize_isp(CONFIG.normalize_isp);

    match runner.run(&TARGETS, io::stdout().lock()) {
        Ok(summary) => info!(
            "finished: {} succeeded, {} failed",
            summary.succeeded, summary.failed
        ),
        Err(err) => error!("failed to write report: {}", err),
    }
}

fn launch_info() {
    info!(
        "=================== Starting iplookup {} ===================",
        env!("CARGO_PKG_VERSION")
    );
}
