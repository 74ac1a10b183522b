use crate::api::DEFAULT_BASE_URL;
use crate::catalog::{region_index, REGIONS};
use crate::domain::{MapView, SortField, SortOrder, SortState};
use dotenv::dotenv;
use std::env;
use thiserror::Error;

pub const LOG_FILE: &str = "solar-zoning.log";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
    #[error("unknown map view '{0}' (expected geographic or schematic)")]
    UnknownMapView(String),
    #[error("unknown sort field '{0}' (expected radiation or sunshine)")]
    UnknownSortField(String),
    #[error("unknown sort order '{0}' (expected asc or desc)")]
    UnknownSortOrder(String),
}

/// Values given on the command line; they take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_base_url: Option<String>,
    pub region: Option<String>,
    pub map_view: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub initial_region: usize,
    pub map_view: MapView,
    pub sort: SortState,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            initial_region: 0,
            map_view: MapView::default(),
            sort: SortState::default(),
            debug: false,
        }
    }
}

impl Settings {
    /// Loads `.env`, then resolves settings from the process environment.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    pub fn resolve(
        overrides: &Overrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let pick = |over: &Option<String>, key: &str| {
            over.clone()
                .or_else(|| lookup(key))
                .filter(|value| !value.trim().is_empty())
        };

        let mut settings = Self::default();

        if let Some(url) = pick(&overrides.api_base_url, "SOLAR_API_BASE_URL") {
            settings.api_base_url = url.trim().to_string();
        }

        if let Some(region) = pick(&overrides.region, "SOLAR_REGION") {
            settings.initial_region =
                region_index(&region).ok_or(ConfigError::UnknownRegion(region))?;
        }

        if let Some(view) = pick(&overrides.map_view, "SOLAR_MAP_VIEW") {
            settings.map_view = MapView::parse(&view).ok_or(ConfigError::UnknownMapView(view))?;
        }

        if let Some(field) = pick(&overrides.sort, "SOLAR_SORT") {
            settings.sort.field =
                SortField::parse(&field).ok_or(ConfigError::UnknownSortField(field))?;
        }

        if let Some(order) = pick(&overrides.order, "SOLAR_ORDER") {
            settings.sort.order =
                SortOrder::parse(&order).ok_or(ConfigError::UnknownSortOrder(order))?;
        }

        settings.debug = overrides.debug
            || lookup("SOLAR_DEBUG").is_some_and(|value| {
                matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
            });

        Ok(settings)
    }

    pub fn initial_region_id(&self) -> &'static str {
        REGIONS.get(self.initial_region).map_or(REGIONS[0].id, |r| r.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let settings = Settings::resolve(&Overrides::default(), env_of(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_base_url, "/api");
        assert_eq!(settings.initial_region_id(), "minsk");
    }

    #[test]
    fn environment_values_are_parsed() {
        let settings = Settings::resolve(
            &Overrides::default(),
            env_of(&[
                ("SOLAR_API_BASE_URL", "http://localhost:8000/api"),
                ("SOLAR_REGION", "Gomel"),
                ("SOLAR_MAP_VIEW", "schematic"),
                ("SOLAR_SORT", "sunshine"),
                ("SOLAR_ORDER", "asc"),
                ("SOLAR_DEBUG", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.api_base_url, "http://localhost:8000/api");
        assert_eq!(settings.initial_region_id(), "gomel");
        assert_eq!(settings.map_view, MapView::Schematic);
        assert_eq!(
            settings.sort,
            SortState::new(SortField::Sunshine, SortOrder::Ascending)
        );
        assert!(settings.debug);
    }

    #[test]
    fn overrides_win_over_environment() {
        let overrides = Overrides {
            region: Some("brest".to_string()),
            order: Some("desc".to_string()),
            ..Overrides::default()
        };
        let settings = Settings::resolve(
            &overrides,
            env_of(&[("SOLAR_REGION", "vitebsk"), ("SOLAR_ORDER", "asc")]),
        )
        .unwrap();
        assert_eq!(settings.initial_region_id(), "brest");
        assert_eq!(settings.sort.order, SortOrder::Descending);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings =
            Settings::resolve(&Overrides::default(), env_of(&[("SOLAR_REGION", "  ")])).unwrap();
        assert_eq!(settings.initial_region, 0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Settings::resolve(&Overrides::default(), env_of(&[("SOLAR_REGION", "kyiv")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownRegion("kyiv".to_string()));

        let err = Settings::resolve(&Overrides::default(), env_of(&[("SOLAR_SORT", "area")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSortField(_)));

        let err = Settings::resolve(&Overrides::default(), env_of(&[("SOLAR_MAP_VIEW", "3d")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownMapView(_)));
    }
}
