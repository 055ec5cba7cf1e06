use std::future::Future;
use std::process::ExitCode;

use configs::{AppConfig, ServiceKind};
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging(service: &'static str) {
    // .env first so RUST_LOG and LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service, event = "logger_init", "tracing subscriber initialized");
}

/// Build the Tokio runtime for `kind` and drive `run` until it returns or
/// Ctrl+C arrives.
pub fn launch<F, Fut>(kind: ServiceKind, run: F) -> ExitCode
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let service = kind.name();
    init_logging(service);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service, event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    // config.toml first, then TOKIO_WORKER_THREADS
    let worker_threads = match AppConfig::load_and_validate(kind) {
        Ok(cfg) => cfg.service(kind).server.worker_threads,
        Err(_) => std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()),
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "service starting"
    );

    rt.block_on(async move {
        let task = tokio::spawn(async move {
            let res = run().await;
            if let Err(e) = &res {
                error!(service, event = "run_failed", error = %e, "service returned error");
            }
            res
        });

        tokio::select! {
            res = task => match res {
                Ok(Ok(())) => {
                    info!(service, event = "stop", %service_id, pid, "service stopped normally");
                    ExitCode::SUCCESS
                }
                // already logged by the task
                Ok(Err(_)) => ExitCode::FAILURE,
                Err(e) => {
                    error!(service, event = "task_join_error", error = %e, "service task join error");
                    ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service, event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                ExitCode::SUCCESS
            }
        }
    })
}
