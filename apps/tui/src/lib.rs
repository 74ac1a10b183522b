// Library side of the dashboard: data, derived metrics and the backend contract
pub mod api;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod metrics;

pub use domain::{MapView, Region, SolarZone, SortField, SortOrder, SortState};
