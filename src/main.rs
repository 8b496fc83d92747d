use std::{net::SocketAddr, process, sync::Arc};

use axum::Router;
use tokio::sync::watch;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

use vetrina::{
    application::{
        content::ContentService, error::AppError, offerings::OfferingService, site::SiteService,
    },
    cache::{CacheTrigger, TagStamps},
    config,
    infra::{db::PostgresRepositories, error::InfraError, http, telemetry},
};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (_cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    run_serve(settings).await
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let database_url = settings.database.url.clone().ok_or_else(|| {
        AppError::unexpected(
            "database.url is required; set VETRINA__DATABASE__URL or pass --database-url",
        )
    })?;

    let pool =
        PostgresRepositories::connect(&database_url, settings.database.max_connections.get())
            .await
            .map_err(|err| InfraError::database(format!("failed to connect: {err}")))?;
    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(|err| InfraError::database(format!("failed to run migrations: {err}")))?;
    info!("database migrations applied");

    let repos = Arc::new(PostgresRepositories::new(pool));
    let stamps = Arc::new(TagStamps::new());
    let trigger = CacheTrigger::new(stamps.clone());

    let content = Arc::new(ContentService::new(repos.clone(), trigger.clone()));
    let offerings = Arc::new(OfferingService::new(repos.clone(), trigger));
    let site = Arc::new(SiteService::new(content.clone(), offerings.clone()));

    let state = http::ApiState {
        content,
        offerings,
        site,
        stamps,
        health: repos,
    };

    let public_router = http::build_public_router(state.clone());
    let admin_router = http::build_api_router(state);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
            Err(err) => error!(error = %err, "failed to listen for shutdown signal"),
        }
    });

    let public_addr = settings.server.public_addr;
    let admin_addr = settings.server.admin_addr;
    info!(%public_addr, %admin_addr, "starting HTTP listeners");

    let public_rx = shutdown_rx.clone();
    let admin_rx = shutdown_rx.clone();
    let servers = async move {
        tokio::try_join!(
            serve(public_router, public_addr, public_rx),
            serve(admin_router, admin_addr, admin_rx),
        )
        .map(|_| ())
    };
    tokio::pin!(servers);

    let mut deadline_rx = shutdown_rx;
    tokio::select! {
        result = &mut servers => result?,
        _ = async {
            while !*deadline_rx.borrow() {
                if deadline_rx.changed().await.is_err() {
                    // Signal task died without requesting shutdown; never
                    // start the abort countdown.
                    std::future::pending::<()>().await;
                }
            }
            tokio::time::sleep(settings.server.graceful_shutdown).await;
        } => {
            error!(
                timeout_secs = settings.server.graceful_shutdown.as_secs(),
                "graceful shutdown window elapsed; aborting"
            );
        }
    }

    info!("listeners stopped");
    Ok(())
}

async fn serve(
    router: Router,
    addr: SocketAddr,
    mut shutdown: watch::Receiver<bool>,
) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(InfraError::Io)?;

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = shutdown.changed().await;
        })
        .await
        .map_err(InfraError::Io)?;

    Ok(())
}
