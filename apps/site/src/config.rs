use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// The page's own origin: base for the data document and for links.
    pub site_origin: Url,
    /// Host page skeleton, re-read on every request.
    pub page_template: PathBuf,
    /// Served as-is for assets and the data document.
    pub static_dir: PathBuf,
    /// Location of the data document relative to the page.
    pub resume_data_path: String,
    pub iconify_scan: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let site_origin = lookup("SITE_ORIGIN")
            .unwrap_or_else(|| format!("http://127.0.0.1:{port}/"));
        let site_origin = Url::parse(&site_origin)
            .with_context(|| format!("SITE_ORIGIN '{site_origin}' is not a valid URL"))?;

        let iconify_scan = match lookup("ICONIFY_SCAN") {
            None => true,
            Some(v) => parse_flag(&v)
                .with_context(|| format!("ICONIFY_SCAN must be true or false, got '{v}'"))?,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            site_origin,
            page_template: lookup("PAGE_TEMPLATE")
                .unwrap_or_else(|| "static/index.html".to_string())
                .into(),
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| "static".to_string())
                .into(),
            resume_data_path: lookup("RESUME_DATA_PATH")
                .unwrap_or_else(|| "data/resume.json".to_string()),
            iconify_scan,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.site_origin.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(config.page_template, PathBuf::from("static/index.html"));
        assert_eq!(config.resume_data_path, "data/resume.json");
        assert!(config.iconify_scan);
    }

    #[test]
    fn test_origin_follows_port() {
        let config = config(&[("PORT", "3000")]).unwrap();
        assert_eq!(config.site_origin.as_str(), "http://127.0.0.1:3000/");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("SITE_ORIGIN", "https://ada.example.org/cv/"),
            ("ICONIFY_SCAN", "off"),
            ("RESUME_DATA_PATH", "content/cv.json"),
        ])
        .unwrap();
        assert_eq!(config.site_origin.host_str(), Some("ada.example.org"));
        assert!(!config.iconify_scan);
        assert_eq!(config.resume_data_path, "content/cv.json");
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("SITE_ORIGIN", "not a url")]).is_err());
        assert!(config(&[("ICONIFY_SCAN", "maybe")]).is_err());
    }
}
