use clap::{CommandFactory, Parser};
use solar_zoning::config::Overrides;

#[derive(Debug, Parser)]
#[command(name = "solar_zoning_tui", version, about = "Solar radiation zoning dashboard")]
pub struct CliArgs {
    /// Print the regional summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Region selected on startup (e.g. brest)
    #[arg(long, value_name = "ID")]
    pub region: Option<String>,

    /// Initial map view: geographic or schematic
    #[arg(long = "map", value_name = "VIEW")]
    pub map_view: Option<String>,

    /// Comparison sort key: radiation or sunshine
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Comparison sort order: asc or desc
    #[arg(long, value_name = "ORDER")]
    pub order: Option<String>,

    /// Override the solar data backend base URL
    #[arg(long = "api-base-url", value_name = "URL")]
    pub api_base_url: Option<String>,
}

impl CliArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_base_url: self.api_base_url.clone(),
            region: self.region.clone(),
            map_view: self.map_view.clone(),
            sort: self.sort.clone(),
            order: self.order.clone(),
            debug: self.debug,
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
    fn parses_overrides() {
        let args = CliArgs::parse_from([
            "solar_zoning_tui",
            "--headless",
            "--json",
            "--region",
            "brest",
            "--map",
            "schematic",
            "--sort",
            "sunshine",
            "--order",
            "asc",
        ]);
        assert!(args.headless && args.json);
        let overrides = args.overrides();
        assert_eq!(overrides.region.as_deref(), Some("brest"));
        assert_eq!(overrides.map_view.as_deref(), Some("schematic"));
        assert_eq!(overrides.sort.as_deref(), Some("sunshine"));
        assert_eq!(overrides.order.as_deref(), Some("asc"));
        assert!(!overrides.debug);
    }

    #[test]
    fn help_mentions_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--headless"));
        assert!(help.contains("--api-base-url"));
    }
}
