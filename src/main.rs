use clap::Parser;
use std::sync::Arc;

mod api;
mod cli;
mod config;
mod content;
mod http;
mod logger;
mod routing;
mod server;

use config::{AppState, Config};
use content::{ContentError, ContentStore};
use server::ShutdownSignal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    let mut cfg = Config::load_from(&cli.config)?;
    cli.apply_overrides(&mut cfg);
    logger::init(&cfg)?;

    // Tokio runtime sized by `server.workers`, defaulting to one per core
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers.filter(|&w| w > 0) {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_content(&cfg)?;
    for warning in store.dangling_references() {
        logger::log_warning(&warning);
    }

    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let counts = store.counts();
    let state = Arc::new(AppState::new(cfg, store));
    logger::log_server_start(&addr, &state.config, counts);

    let shutdown = Arc::new(ShutdownSignal::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));
    server::start_server_loop(listener, state, shutdown).await;
    Ok(())
}

/// Content from `content.directory` when set, otherwise the embedded documents
fn load_content(cfg: &Config) -> Result<ContentStore, ContentError> {
    match cfg.content.directory {
        Some(ref dir) => {
            logger::log_content_source(&dir.display().to_string());
            content::load_from_dir(dir)
        }
        None => {
            logger::log_content_source("embedded documents");
            content::load_embedded()
        }
    }
}
