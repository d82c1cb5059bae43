#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    client::api::StudentsApi,
    config::RuntimeConfiguration,
    error::{BindListenerSnafu, PupilResult, ServeSnafu},
    routes::{frontend_router, students},
    state::FrontendState,
    store::StudentStore,
};
use axum::Router;
use snafu::ResultExt;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod client;
mod config;
mod data;
mod error;
mod maud_conveniences;
mod routes;
mod state;
mod store;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}

///The JSON API and the views, on one router. The store is only ever reachable through here.
pub fn app(store: StudentStore, frontend: FrontendState) -> Router {
    let api: Router = students::router().with_state(store);
    let views: Router = frontend_router().with_state(frontend);

    api.merge(views)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn serve(config: &RuntimeConfiguration, app: Router) -> PupilResult<()> {
    let addr = config.server_ip();
    let listener = TcpListener::bind(addr)
        .await
        .context(BindListenerSnafu { addr })?;

    info!(?addr, api_base = config.api_base(), "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(ServeSnafu)
}

#[tokio::main]
async fn main() {
    let dotenv_result = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");
    if let Err(e) = dotenv_result {
        debug!(?e, "No .env loaded, using the process environment only");
    }

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let store = StudentStore::seeded();
    let api = StudentsApi::new(config.api_base()).expect("unable to create students API client");
    let frontend = FrontendState::new(api);

    serve(&config, app(store, frontend))
        .await
        .expect("unable to serve app");
}
