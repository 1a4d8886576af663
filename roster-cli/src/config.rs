use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pause between a draw and showing its result
    pub reveal_delay_ms: u64,
    pub error_ttl_ms: u64,
    pub success_ttl_ms: u64,
    pub export_dir: PathBuf,
    pub export_file: String,
    pub verbose: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 1500,
            error_ttl_ms: 5000,
            success_ttl_ms: 4000,
            export_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            export_file: "roster.txt".to_string(),
            verbose: false,
        }
    }
}

impl SessionConfig {
    /// Read settings from a JSON file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path.display()))?;
        Ok(config)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn error_ttl(&self) -> Duration {
        Duration::from_millis(self.error_ttl_ms)
    }

    pub fn success_ttl(&self) -> Duration {
        Duration::from_millis(self.success_ttl_ms)
    }

    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(&self.export_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_timings() {
        let config = SessionConfig::default();
        assert_eq!(config.reveal_delay(), Duration::from_millis(1500));
        assert_eq!(config.error_ttl(), Duration::from_secs(5));
        assert_eq!(config.success_ttl(), Duration::from_secs(4));
        assert!(config.export_path().ends_with("roster.txt"));
    }

    #[test]
    fn load_fills_missing_keys_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, r#"{ "reveal_delay_ms": 0, "export_file": "names.txt" }"#).unwrap();

        let config = SessionConfig::load(&path).unwrap();
        assert_eq!(config.reveal_delay(), Duration::ZERO);
        assert_eq!(config.export_file, "names.txt");
        assert_eq!(config.error_ttl_ms, 5000);
        assert_eq!(config.success_ttl_ms, 4000);
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, "not json").unwrap();

        let err = SessionConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config JSON"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = SessionConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
