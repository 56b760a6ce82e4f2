//! Candidex binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod data;
mod events;
mod logic;
mod state;
mod test_utils;
mod theme;
mod ui;
mod util;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

/// Timestamp source for log lines ("YYYY-MM-DD-THH:MM:SS", UTC).
struct CandidexTimer;

impl tracing_subscriber::fmt::time::FormatTime for CandidexTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Utc::now().format("%Y-%m-%d-T%H:%M:%S");
        write!(w, "{ts}")
    }
}

/// Keeps the non-blocking log writer alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

fn main() {
    let cli_args = args::Args::parse();

    // Initialize tracing logger writing to ~/.config/candidex/logs/candidex.log
    {
        let default_level = args::determine_log_level(&cli_args);
        let mut log_path = util::config::logs_dir();
        log_path.push("candidex.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(CandidexTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(CandidexTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    // CLI-only modes (dataset check) exit before the TUI starts
    let data_path = data::resolve_data_path(
        cli_args.data.clone(),
        util::config::load_settings().data_path,
    );
    if let Some(code) = args::process_args(&cli_args, &data_path) {
        std::process::exit(code);
    }

    tracing::info!("Candidex starting");
    if let Err(err) = app::run(&cli_args) {
        tracing::error!(error = ?err, "Application error");
        eprintln!("candidex: {err}");
        std::process::exit(1);
    }
    tracing::info!("Candidex exited");
}
