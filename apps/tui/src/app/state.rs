use color_eyre::Result;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::style::Color;
use solar_zoning::api::SolarApi;
use solar_zoning::config::Settings;
use solar_zoning::domain::{MapView, MonthlyData, Region, SortField, SortState};
use solar_zoning::metrics::{sorted_regions, summarize, CatalogSummary};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Dashboard,
    Comparison,
}

/// A comparison table row: 1-based rank in the sorted table plus the region.
pub type RankedRegion = (usize, Region);

/// Neighbour of `index` in a ring of `len` items; always 0 for an empty ring.
const fn cycle_index(index: usize, len: usize, forward: bool) -> usize {
    match (len, forward) {
        (0, _) => 0,
        (_, true) => (index + 1) % len,
        (_, false) => (index % len + len - 1) % len,
    }
}

pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub settings: Settings,
    pub regions: Vec<Region>,
    pub monthly: Vec<MonthlyData>,
    pub summary: Option<CatalogSummary>,
    pub selected_region_index: usize,
    pub map_view: MapView,
    pub sort: SortState,
    pub comparison_index: usize,
    pub search_active: bool,
    pub search_query: String,
    pub status_message: String,
    pub animation_counter: f64,
    pub animation_paused: bool,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub region_fx: Mutex<Option<Effect>>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            running: true,
            screen: AppScreen::Dashboard,
            show_help: false,
            regions: Vec::new(),
            monthly: Vec::new(),
            summary: None,
            selected_region_index: settings.initial_region,
            map_view: settings.map_view,
            sort: settings.sort,
            comparison_index: 0,
            search_active: false,
            search_query: String::new(),
            status_message: String::new(),
            animation_counter: 0.0,
            animation_paused: false,
            last_frame: Instant::now(),
            last_tick: Duration::ZERO,
            region_fx: Mutex::new(None),
            settings,
        }
    }

    /// Pulls regions and the monthly series through the backend contract.
    pub async fn load(&mut self, api: &impl SolarApi) -> Result<()> {
        let regions = api.regions().await?;
        let monthly = api.monthly(None).await?;

        if regions.data.is_empty() {
            return Err(color_eyre::eyre::eyre!("Backend returned no regions"));
        }

        self.summary = summarize(&regions.data);
        self.regions = regions.data;
        self.monthly = monthly.data;

        if self.selected_region_index >= self.regions.len() {
            self.selected_region_index = 0;
        }

        tracing::info!(
            regions = self.regions.len(),
            months = self.monthly.len(),
            "dashboard data loaded"
        );
        self.trigger_region_fx();
        Ok(())
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.last_tick = delta;

        if self.animation_paused {
            return;
        }

        // Cycles between 0 and 2*PI
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    pub fn selected_region(&self) -> Option<&Region> {
        self.regions.get(self.selected_region_index)
    }

    pub fn select_next_region(&mut self) {
        self.select_region(cycle_index(self.selected_region_index, self.regions.len(), true));
    }

    pub fn select_prev_region(&mut self) {
        self.select_region(cycle_index(self.selected_region_index, self.regions.len(), false));
    }

    pub fn select_region(&mut self, index: usize) {
        if index >= self.regions.len() || index == self.selected_region_index {
            return;
        }
        self.selected_region_index = index;
        if let Some(region) = self.regions.get(index) {
            tracing::debug!(region = region.id, "region selected");
        }
        self.trigger_region_fx();
    }

    pub fn toggle_map_view(&mut self) {
        self.map_view = self.map_view.toggled();
    }

    pub fn select_sort(&mut self, field: SortField) {
        self.sort = self.sort.select(field);
        self.comparison_index = 0;
        self.status_message = format!(
            "Sorted by {} ({})",
            self.sort.field.as_str(),
            self.sort.order.as_str()
        );
    }

    /// Rows of the comparison table after sorting and the search filter.
    pub fn comparison_rows(&self) -> Vec<RankedRegion> {
        let ranked = sorted_regions(&self.regions, self.sort)
            .into_iter()
            .enumerate()
            .map(|(index, region)| (index + 1, region));

        let query = self.search_query.trim();
        if query.is_empty() {
            return ranked.collect();
        }

        let matcher = SkimMatcherV2::default();
        ranked
            .filter(|(_, region)| {
                matcher.fuzzy_match(region.name, query).is_some()
                    || matcher.fuzzy_match(region.id, query).is_some()
            })
            .collect()
    }

    pub fn start_search(&mut self) {
        self.search_active = true;
        self.comparison_index = 0;
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_query.push(ch);
        self.comparison_index = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.comparison_index = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.comparison_index = 0;
    }

    /// Makes the highlighted comparison row the dashboard's selected region.
    pub fn open_comparison_selection(&mut self) {
        let rows = self.comparison_rows();
        let Some((_, region)) = rows.get(self.comparison_index) else {
            return;
        };
        if let Some(index) = self.regions.iter().position(|r| r.id == region.id) {
            self.select_region(index);
            self.screen = AppScreen::Dashboard;
            self.status_message = format!("Selected {}", region.name);
        }
    }

    pub fn toggle_animation_pause(&mut self) {
        self.animation_paused = !self.animation_paused;
        self.status_message = if self.animation_paused {
            "Animation paused".to_string()
        } else {
            "Animation resumed".to_string()
        };
    }

    fn trigger_region_fx(&self) {
        if let Ok(mut slot) = self.region_fx.lock() {
            *slot = Some(fx::fade_from_fg(Color::Black, (450, Interpolation::QuadOut)));
        }
    }
}
