use log::*;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

pub fn log_level() -> LevelFilter {
  let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
  match log_level.to_lowercase().as_str() {
    "trace" => LevelFilter::Trace,
    "debug" => LevelFilter::Debug,
    "info" => LevelFilter::Info,
    "warn" => LevelFilter::Warn,
    "error" => LevelFilter::Error,
    _ => LevelFilter::Info,
  }
}

/// Terminal logger at the level named by `LOG_LEVEL`, defaults to info.
/// Calling it twice is harmless, the second init is ignored.
pub fn init_logger() {
  let mut cfg = ConfigBuilder::new();
  if cfg.set_time_offset_to_local().is_err() {
    cfg.set_time_offset(time::UtcOffset::UTC);
  }
  let cfg = cfg.build();

  if TermLogger::init(log_level(), cfg, TerminalMode::Mixed, ColorChoice::Auto).is_err() {
    debug!("Logger already initialized");
  }
}
