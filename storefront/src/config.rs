use std::{net::SocketAddr, time::Duration};

use api_client::client::ClientSettings;
use clap::Parser;

pub const DEFAULT_API_BASE_URL: &str = "https://glore-bd-backend-node-mongo.vercel.app/api";

#[derive(Parser, Debug, Clone)]
#[command(name = "storefront", about = "Server rendered storefront for the product API")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "STOREFRONT_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Base URL of the upstream product API
    #[arg(long, env = "STOREFRONT_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Name shown in the navbar and page titles
    #[arg(long, env = "STOREFRONT_SHOP_NAME", default_value = "Flow Shop")]
    pub shop_name: String,

    /// Origin allowed to call the JSON endpoints cross-site
    #[arg(long, env = "STOREFRONT_ALLOWED_ORIGIN", default_value = "http://localhost:3000")]
    pub allowed_origin: String,

    #[arg(long, env = "STOREFRONT_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Retries for transient upstream failures, none unless asked for
    #[arg(long, env = "STOREFRONT_MAX_RETRIES", default_value_t = 0)]
    pub max_retries: u32,

    #[arg(long, env = "STOREFRONT_MIN_BACKOFF_SECS", default_value_t = 1)]
    pub min_backoff_secs: u64,

    #[arg(long, env = "STOREFRONT_MAX_BACKOFF_SECS", default_value_t = 5)]
    pub max_backoff_secs: u64,

    /// Registrations kept in memory before the oldest are dropped
    #[arg(long, env = "STOREFRONT_MAX_REGISTRATIONS", default_value_t = registrations::DEFAULT_CAPACITY)]
    pub max_registrations: usize,

    /// Permit a plain http:// upstream
    #[arg(long, env = "STOREFRONT_ALLOW_HTTP")]
    pub allow_http: bool,

    /// Export counters over OTLP
    #[arg(long, env = "STOREFRONT_METRICS")]
    pub metrics: bool,
}

impl Config {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            timeout: Duration::from_secs(self.request_timeout_secs),
            min_backoff: Duration::from_secs(self.min_backoff_secs),
            max_backoff: Duration::from_secs(self.max_backoff_secs.max(self.min_backoff_secs)),
            max_retries: self.max_retries,
            https_only: !self.allow_http,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults_point_at_public_api() {
        let config = Config::try_parse_from(["storefront"]).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.shop_name, "Flow Shop");
        assert!(config.client_settings().https_only);
        assert_eq!(config.client_settings().max_retries, 0);
        assert_eq!(config.max_registrations, 1000);
    }

    #[test]
    fn flags_override_client_settings() {
        let config = Config::try_parse_from([
            "storefront",
            "--allow-http",
            "--max-retries",
            "2",
            "--min-backoff-secs",
            "4",
            "--max-backoff-secs",
            "2",
        ])
        .unwrap();

        let settings = config.client_settings();

        assert!(!settings.https_only);
        assert_eq!(settings.max_retries, 2);
        assert_eq!(settings.max_backoff, Duration::from_secs(4));
    }
}
