use serde::Serialize;

/// An administrative region with its long-term solar statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    pub center_lat: f64,
    pub center_lon: f64,
    /// km²
    pub area: f64,
    /// kWh/m²/year
    pub solar_radiation: f64,
    /// hours/year
    pub average_annual_sunshine: f64,
    /// degrees
    pub optimal_panel_angle: f64,
}

impl Region {
    pub const fn sort_value(&self, field: SortField) -> f64 {
        match field {
            SortField::Radiation => self.solar_radiation,
            SortField::Sunshine => self.average_annual_sunshine,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolarZone {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl SolarZone {
    /// Legend order, most intense first.
    pub const ALL: [Self; 4] = [Self::VeryHigh, Self::High, Self::Medium, Self::Low];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Low),
            1 => Some(Self::Medium),
            2 => Some(Self::High),
            3 => Some(Self::VeryHigh),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "very-high" | "very_high" | "veryhigh" => Some(Self::VeryHigh),
            _ => None,
        }
    }

    pub const fn color_token(self) -> &'static str {
        match self {
            Self::Low => "solar-low",
            Self::Medium => "solar-medium",
            Self::High => "solar-high",
            Self::VeryHigh => "solar-very-high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low level",
            Self::Medium => "Medium level",
            Self::High => "High level",
            Self::VeryHigh => "Very high level",
        }
    }

    /// Radiation band in kWh/m²/year, as printed in the legend.
    pub const fn range_label(self) -> &'static str {
        match self {
            Self::Low => "<1000",
            Self::Medium => "1000-1049",
            Self::High => "1050-1099",
            Self::VeryHigh => ">=1100",
        }
    }

    pub const fn stars(self) -> &'static str {
        match self {
            Self::Low => "★",
            Self::Medium => "★★",
            Self::High => "★★★",
            Self::VeryHigh => "★★★★",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyData {
    pub month: &'static str,
    pub radiation: f64,
    pub sunshine: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonData {
    pub region_id: String,
    pub region_name: String,
    pub radiation: f64,
    pub sunshine: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Radiation,
    Sunshine,
}

impl SortField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Radiation => "radiation",
            Self::Sunshine => "sunshine",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "radiation" => Some(Self::Radiation),
            "sunshine" => Some(Self::Sunshine),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Radiation => "Radiation",
            Self::Sunshine => "Sunshine",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Sort key and direction of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortState {
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Selecting the active key flips the direction; a new key starts descending.
    #[must_use]
    pub const fn select(self, field: SortField) -> Self {
        if matches!(
            (self.field, field),
            (SortField::Radiation, SortField::Radiation) | (SortField::Sunshine, SortField::Sunshine)
        ) {
            Self::new(field, self.order.flipped())
        } else {
            Self::new(field, SortOrder::Descending)
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortField::Radiation, SortOrder::Descending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapView {
    #[default]
    Geographic,
    Schematic,
}

impl MapView {
    pub const ALL: [Self; 2] = [Self::Geographic, Self::Schematic];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Geographic => "geographic",
            Self::Schematic => "schematic",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "geographic" | "geo" | "map" => Some(Self::Geographic),
            "schematic" => Some(Self::Schematic),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Geographic => "Geographic",
            Self::Schematic => "Schematic",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Geographic => 0,
            Self::Schematic => 1,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Geographic => Self::Schematic,
            Self::Schematic => Self::Geographic,
        }
    }
}
