use color_eyre::eyre::eyre;
use color_eyre::Result;
use dotenv::dotenv;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::api::{Region, BUPYEONG_GU, DEFAULT_ENDPOINT};
use crate::domain::YearSelection;

/// Settings for the statistics endpoint
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
    pub service_key: String,
    pub region: Region,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub start_year: YearSelection,
    pub start_route: String,
}

/// Initializes the application configuration from `.env` and the process
/// environment
pub fn init_app_config() -> Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    AppConfig::from_lookup(|name| env::var(name).ok())
}

impl AppConfig {
    /// Builds the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // The portal rejects every request without a key, so refuse to start
        let service_key = lookup("SERVICE_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| eyre!("SERVICE_KEY is not set; add it to the environment or .env"))?;

        let endpoint = lookup("ACCIDENT_API_ENDPOINT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let start_year = parse_var::<i32>(&lookup, "START_YEAR")?
            .map_or_else(YearSelection::default, YearSelection::new);

        let timeout =
            parse_var::<u64>(&lookup, "ACCIDENT_API_TIMEOUT_SECS")?.map(Duration::from_secs);

        let start_route = lookup("START_ROUTE").unwrap_or_else(|| "/".to_string());

        Ok(Self {
            api: ApiConfig {
                endpoint,
                service_key,
                region: BUPYEONG_GU,
                timeout,
            },
            start_year,
            start_route,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| eyre!("{name} has an invalid value {raw:?}: {e}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() -> Result<()> {
        let config = AppConfig::from_lookup(lookup_from(&[("SERVICE_KEY", "secret")]))?;

        assert_eq!(config.api.service_key, "secret");
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.region, BUPYEONG_GU);
        assert_eq!(config.api.timeout, None);
        assert_eq!(config.start_year, YearSelection::new(2015));
        assert_eq!(config.start_route, "/");
        Ok(())
    }

    #[test]
    fn overrides_are_read() -> Result<()> {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SERVICE_KEY", "secret"),
            ("ACCIDENT_API_ENDPOINT", "http://localhost:9000/mock"),
            ("START_YEAR", " 2019 "),
            ("ACCIDENT_API_TIMEOUT_SECS", "15"),
            ("START_ROUTE", "/news"),
        ]))?;

        assert_eq!(config.api.endpoint, "http://localhost:9000/mock");
        assert_eq!(config.start_year, YearSelection::new(2019));
        assert_eq!(config.api.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.start_route, "/news");
        Ok(())
    }

    #[test]
    fn missing_key_is_a_startup_error() {
        assert!(AppConfig::from_lookup(lookup_from(&[])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("SERVICE_KEY", "  ")])).is_err());
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("SERVICE_KEY", "secret"),
            ("START_YEAR", "twenty-fifteen"),
        ]));
        assert!(result.is_err());
    }
}
