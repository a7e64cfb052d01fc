use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads and merges the given config files. Later files override earlier ones,
/// which allows keeping the service account credentials in a separate file.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub sheets: SheetsConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct SheetsConfig {
    pub client_email: String,
    pub private_key: String,
    pub spreadsheet_id: String,
    pub worksheet_range: String,
    pub token_endpoint_override: Option<Url>,
    pub api_base_override: Option<Url>,
}

impl std::fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("client_email", &self.client_email)
            .field("private_key", &"[redacted]")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("worksheet_range", &self.worksheet_range)
            .field("token_endpoint_override", &self.token_endpoint_override)
            .field("api_base_override", &self.api_base_override)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(config.sheets.worksheet_range, "Sheet1!A:E");
    }

    #[test]
    fn private_key_is_redacted_in_debug_output() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert!(!format!("{config:?}").contains("PRIVATE KEY"));
    }
}
