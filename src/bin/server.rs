use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    process::exit,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use spendwise::{
    AppConfig, AppState, DatabaseConfig, build_router, graceful_shutdown, logging_middleware,
};

/// The web server for spendwise.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path or URL of the SQLite database, e.g. `spendwise.db`,
    /// `sqlite://spendwise.db` or `:memory:`.
    #[arg(long, env = "DATABASE_URL", default_value = "spendwise.db")]
    db_path: String,

    /// The address to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    #[arg(long, env = "TIMEZONE", default_value = "Etc/UTC")]
    timezone: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging();

    let database_config = DatabaseConfig::from_url(&args.db_path);
    let connection = match database_config.open() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("Could not open database {database_config:?}: {error}");
            exit(1);
        }
    };

    let app_config = AppConfig {
        local_timezone: args.timezone,
    };
    let state = match AppState::new(connection, &app_config) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not initialize the app: {error}");
            exit(1);
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(
        build_router(state).layer(middleware::from_fn(logging_middleware)),
    );

    let addr = SocketAddr::from((args.host, args.port));
    tracing::info!("HTTP server listening on {}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped unexpectedly: {error}");
        exit(1);
    }
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let debug_log = match OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
    {
        Ok(log_file) => Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(log_file))
                .with_filter(filter::LevelFilter::DEBUG),
        ),
        Err(error) => {
            eprintln!("Could not open debug.log, logging to stdout only: {error}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are handled, so skip the default 5xx logging.
        .on_failure(());

    router.layer(tracing_layer)
}
