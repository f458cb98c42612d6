//! App Configuration
//!
//! Resolved once at startup. Build-time env vars win over the page's
//! `<body data-api-url="...">` attribute, which wins over the defaults.

use log::{Level, LevelFilter};

/// json-server default used by the backend during development
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

const BODY_API_URL_ATTR: &str = "data-api-url";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::resolve(
            option_env!("FOODS_API_URL"),
            body_api_url().as_deref(),
            option_env!("FOODS_LOG"),
        )
    }

    pub fn resolve(
        build_api_url: Option<&str>,
        page_api_url: Option<&str>,
        build_log: Option<&str>,
    ) -> Self {
        let api_base_url = [build_api_url, page_api_url]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        Self {
            api_base_url,
            log_level: build_log.map(parse_log_level).unwrap_or(LevelFilter::Info),
        }
    }

    /// Level handed to the console logger, `None` when logging is off
    pub fn console_level(&self) -> Option<Level> {
        self.log_level.to_level()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

fn body_api_url() -> Option<String> {
    web_sys::window()?
        .document()?
        .body()?
        .get_attribute(BODY_API_URL_ATTR)
}

/// Parse a `RUST_LOG`-style directive, only the first entry counts
pub fn parse_log_level(directive: &str) -> LevelFilter {
    let level = directive
        .split(',')
        .next()
        .unwrap_or(directive)
        .split('=')
        .next_back()
        .unwrap_or(directive)
        .trim()
        .to_lowercase();

    match level.as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}
