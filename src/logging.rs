use {
  super::*,
  tracing_appender::non_blocking::WorkerGuard,
  tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt},
};

pub(crate) fn initialize() -> Result<WorkerGuard> {
  let log_dir = log_directory();

  fs::create_dir_all(&log_dir)
    .with_context(|| format!("could not create {}", log_dir.display()))?;

  let appender = tracing_appender::rolling::never(&log_dir, "folio.log");
  let (writer, guard) = tracing_appender::non_blocking(appender);

  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(env_filter)
    .with(
      tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false),
    )
    .try_init()
    .context("could not install log subscriber")?;

  tracing::info!(dir = %log_dir.display(), "logging initialized");

  Ok(guard)
}

fn log_directory() -> PathBuf {
  if let Ok(dir) = env::var("FOLIO_LOG_DIR") {
    return PathBuf::from(dir);
  }

  dirs::cache_dir()
    .unwrap_or_else(env::temp_dir)
    .join("folio")
    .join("logs")
}
