use crate::error::{AppError, Result};
use crate::options::RenderOptions;
use crate::password_input::PasswordRender;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WizardConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub password_mask: PasswordRender,
    pub mask_summary_password: bool,
    pub show_hints: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            password_mask: PasswordRender::Stars,
            mask_summary_password: false,
            show_hints: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl WizardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_hints: self.display.show_hints,
            mask_summary_password: self.display.mask_summary_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WizardConfig;
    use crate::error::AppError;
    use crate::password_input::PasswordRender;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = WizardConfig::parse("").expect("parse");
        assert_eq!(config, WizardConfig::default());
        assert!(config.render_options().show_hints);
        assert!(!config.render_options().mask_summary_password);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = WizardConfig::parse(
            "display:\n  password_mask: hidden\nlogging:\n  level: debug\n",
        )
        .expect("parse");
        assert_eq!(config.display.password_mask, PasswordRender::Hidden);
        assert!(config.display.show_hints);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(WizardConfig::parse("display:\n  colour: red\n").is_err());
    }

    #[test]
    fn load_reports_path_on_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "display: [not, a, map]").expect("write");
        let err = WizardConfig::load(file.path()).expect_err("should fail");
        assert!(matches!(err, AppError::Config { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "display:\n  mask_summary_password: true").expect("write");
        let config = WizardConfig::load(file.path()).expect("load");
        assert!(config.display.mask_summary_password);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = WizardConfig::load(&dir.path().join("missing.yaml")).expect_err("missing");
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }
}
