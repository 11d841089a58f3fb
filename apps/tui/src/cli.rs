use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "silverzone",
    version,
    about = "Elderly pedestrian accident hotspots in Bupyeong-gu, Incheon"
)]
pub struct CliArgs {
    /// Print one year's report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Year to start on (default 2015)
    #[arg(long, value_name = "YEAR", allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Override the statistics endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Path to open first, e.g. /news
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(year) = self.year {
            std::env::set_var("START_YEAR", year.to_string());
        }
        if let Some(endpoint) = &self.endpoint {
            std::env::set_var("ACCIDENT_API_ENDPOINT", endpoint);
        }
        if let Some(route) = &self.route {
            std::env::set_var("START_ROUTE", route);
        }
    }

    /// Logger filter for this run: `RUST_LOG` wins, then `--debug`. Without
    /// either, interactive runs log nothing so the screen stays clean.
    pub fn log_filter(&self, interactive: bool) -> Option<String> {
        if let Ok(filter) = std::env::var("RUST_LOG") {
            return Some(filter);
        }
        if self.debug {
            return Some("debug".to_string());
        }
        if interactive {
            None
        } else {
            Some("warn".to_string())
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from([
            "silverzone",
            "--headless",
            "--json",
            "--year",
            "2017",
            "--route",
            "/news",
        ])?;

        assert!(args.headless && args.json);
        assert_eq!(args.year, Some(2017));
        assert_eq!(args.route.as_deref(), Some("/news"));
        assert!(args.endpoint.is_none());
        Ok(())
    }

    #[test]
    fn help_lists_the_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--headless"));
        assert!(help.contains("--endpoint"));
    }
}
