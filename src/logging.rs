use crate::config::LoggingConfig;
use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a file-backed subscriber. Without a log file nothing is
/// installed, since any output on the terminal would tear the inline UI.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AppError::Logging(format!("invalid level {:?}: {}", config.level, e)))?;

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::init;
    use crate::config::LoggingConfig;
    use crate::error::AppError;

    #[test]
    fn no_file_means_no_subscriber() {
        let installed = init(&LoggingConfig::default()).expect("init");
        assert!(!installed);
    }

    #[test]
    fn bad_level_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = LoggingConfig {
            file: Some(dir.path().join("wizard.log")),
            level: "form_wizard=bogus".to_string(),
        };
        assert!(matches!(init(&config), Err(AppError::Logging(_))));
    }
}
