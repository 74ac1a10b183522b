use crate::domain::{ComparisonData, Region, SolarZone, SortOrder, SortState};
use serde::Serialize;

pub const VERY_HIGH_THRESHOLD: f64 = 1100.0;
pub const HIGH_THRESHOLD: f64 = 1050.0;
pub const MEDIUM_THRESHOLD: f64 = 1000.0;

/// Conversion efficiency of a typical panel, used for the energy potential.
pub const PANEL_EFFICIENCY: f64 = 0.15;

/// Classifies an annual radiation value (kWh/m²/year) into a zone.
pub fn solar_zone(radiation: f64) -> SolarZone {
    if radiation >= VERY_HIGH_THRESHOLD {
        SolarZone::VeryHigh
    } else if radiation >= HIGH_THRESHOLD {
        SolarZone::High
    } else if radiation >= MEDIUM_THRESHOLD {
        SolarZone::Medium
    } else {
        SolarZone::Low
    }
}

pub fn region_zone(region: &Region) -> SolarZone {
    solar_zone(region.solar_radiation)
}

pub const fn zone_color(zone: SolarZone) -> &'static str {
    zone.color_token()
}

pub const fn zone_label(zone: SolarZone) -> &'static str {
    zone.label()
}

/// Yearly yield per m² of a panel at [`PANEL_EFFICIENCY`].
pub fn energy_potential(region: &Region) -> f64 {
    region.solar_radiation * PANEL_EFFICIENCY
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub region_count: usize,
    pub average_radiation: f64,
    pub average_sunshine: f64,
    pub total_area: f64,
    pub max_radiation: f64,
}

impl CatalogSummary {
    /// Total area in thousands of km², rounded to one decimal.
    pub fn total_area_thousands(&self) -> f64 {
        (self.total_area / 100.0).round() / 10.0
    }
}

/// Single pass over the regions; averages are rounded to the nearest integer.
pub fn summarize(regions: &[Region]) -> Option<CatalogSummary> {
    if regions.is_empty() {
        return None;
    }

    let (radiation, sunshine, area, max) = regions.iter().fold(
        (0.0_f64, 0.0_f64, 0.0_f64, f64::NEG_INFINITY),
        |(radiation, sunshine, area, max), region| {
            (
                radiation + region.solar_radiation,
                sunshine + region.average_annual_sunshine,
                area + region.area,
                max.max(region.solar_radiation),
            )
        },
    );

    #[allow(clippy::cast_precision_loss)]
    let count = regions.len() as f64;

    Some(CatalogSummary {
        region_count: regions.len(),
        average_radiation: (radiation / count).round(),
        average_sunshine: (sunshine / count).round(),
        total_area: area,
        max_radiation: max,
    })
}

/// Returns a sorted copy; equal keys keep their catalog order.
pub fn sorted_regions(regions: &[Region], sort: SortState) -> Vec<Region> {
    let mut sorted = regions.to_vec();
    sorted.sort_by(|a, b| {
        let a = a.sort_value(sort.field);
        let b = b.sort_value(sort.field);
        match sort.order {
            SortOrder::Ascending => a.total_cmp(&b),
            SortOrder::Descending => b.total_cmp(&a),
        }
    });
    sorted
}

pub fn zone_counts(regions: &[Region]) -> [(SolarZone, usize); 4] {
    SolarZone::ALL.map(|zone| {
        let count = regions
            .iter()
            .filter(|region| region_zone(region) == zone)
            .count();
        (zone, count)
    })
}

pub fn comparison_data(regions: &[Region]) -> Vec<ComparisonData> {
    regions
        .iter()
        .map(|region| ComparisonData {
            region_id: region.id.to_string(),
            region_name: region.name.to_string(),
            radiation: region.solar_radiation,
            sunshine: region.average_annual_sunshine,
            efficiency: energy_potential(region).round(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::REGIONS;
    use crate::domain::SortField;

    fn ids(regions: &[Region]) -> Vec<&'static str> {
        regions.iter().map(|region| region.id).collect()
    }

    #[test]
    fn thresholds_partition_without_gaps() {
        assert_eq!(solar_zone(1100.0), SolarZone::VeryHigh);
        assert_eq!(solar_zone(1099.999), SolarZone::High);
        assert_eq!(solar_zone(1050.0), SolarZone::High);
        assert_eq!(solar_zone(1049.999), SolarZone::Medium);
        assert_eq!(solar_zone(1000.0), SolarZone::Medium);
        assert_eq!(solar_zone(999.999), SolarZone::Low);
    }

    #[test]
    fn extreme_inputs_still_classify() {
        assert_eq!(solar_zone(-50.0), SolarZone::Low);
        assert_eq!(solar_zone(0.0), SolarZone::Low);
        assert_eq!(solar_zone(f64::MAX), SolarZone::VeryHigh);
        assert_eq!(solar_zone(f64::NEG_INFINITY), SolarZone::Low);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut previous = solar_zone(-100.0);
        let mut radiation = -100.0;
        while radiation <= 1300.0 {
            let zone = solar_zone(radiation);
            assert!(zone >= previous, "zone dropped at {radiation}");
            previous = zone;
            radiation += 0.5;
        }
    }

    #[test]
    fn catalog_regions_land_in_expected_zones() {
        let zones: Vec<_> = REGIONS.iter().map(|r| (r.id, region_zone(r))).collect();
        assert_eq!(
            zones,
            vec![
                ("minsk", SolarZone::High),
                ("brest", SolarZone::VeryHigh),
                ("gomel", SolarZone::High),
                ("grodno", SolarZone::High),
                ("vitebsk", SolarZone::Low),
                ("mogilev", SolarZone::Medium),
            ]
        );
    }

    #[test]
    fn presentation_mappings_are_stable() {
        for zone in SolarZone::ALL {
            assert_eq!(zone_color(zone), zone_color(zone));
            assert_eq!(zone_label(zone), zone_label(zone));
        }
        assert_eq!(zone_color(SolarZone::VeryHigh), "solar-very-high");
        assert_eq!(zone_label(SolarZone::Low), "Low level");
    }

    #[test]
    fn summary_of_catalog() {
        let summary = summarize(&REGIONS).unwrap();
        assert_eq!(summary.region_count, 6);
        assert!((summary.average_radiation - 1060.0).abs() < f64::EPSILON);
        assert!((summary.average_sunshine - 1778.0).abs() < f64::EPSILON);
        assert!((summary.total_area - 207_400.0).abs() < f64::EPSILON);
        assert!((summary.max_radiation - 1120.0).abs() < f64::EPSILON);
        assert!((summary.total_area_thousands() - 207.4).abs() < 1e-9);
    }

    #[test]
    fn summary_of_empty_slice_is_none() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn sort_descending_by_radiation() {
        let sorted = sorted_regions(&REGIONS, SortState::default());
        assert_eq!(
            ids(&sorted),
            vec!["brest", "grodno", "gomel", "minsk", "mogilev", "vitebsk"]
        );
        // catalog untouched
        assert_eq!(REGIONS[0].id, "minsk");
    }

    #[test]
    fn ascending_then_descending_is_exact_reverse() {
        let asc = sorted_regions(
            &REGIONS,
            SortState::new(SortField::Radiation, SortOrder::Ascending),
        );
        let desc = sorted_regions(
            &asc,
            SortState::new(SortField::Radiation, SortOrder::Descending),
        );
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn sort_by_sunshine() {
        let sorted = sorted_regions(
            &REGIONS,
            SortState::new(SortField::Sunshine, SortOrder::Ascending),
        );
        assert_eq!(
            ids(&sorted),
            vec!["vitebsk", "mogilev", "minsk", "grodno", "gomel", "brest"]
        );
    }

    #[test]
    fn sort_keeps_catalog_order_for_ties() {
        let mut regions = REGIONS.to_vec();
        regions[3].solar_radiation = 1050.0; // grodno ties with minsk
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let sorted = sorted_regions(&regions, SortState::new(SortField::Radiation, order));
            let minsk = sorted.iter().position(|r| r.id == "minsk").unwrap();
            let grodno = sorted.iter().position(|r| r.id == "grodno").unwrap();
            assert_eq!(grodno, minsk + 1, "{order:?}");
        }
    }

    #[test]
    fn zone_counts_cover_every_region() {
        let counts = zone_counts(&REGIONS);
        assert_eq!(counts[0], (SolarZone::VeryHigh, 1));
        assert_eq!(counts[1], (SolarZone::High, 3));
        assert_eq!(counts[2], (SolarZone::Medium, 1));
        assert_eq!(counts[3], (SolarZone::Low, 1));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), REGIONS.len());
    }

    #[test]
    fn comparison_uses_panel_efficiency() {
        let rows = comparison_data(&REGIONS);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[1].region_id, "brest");
        assert!((rows[1].efficiency - 168.0).abs() < f64::EPSILON);
        assert!((energy_potential(&REGIONS[0]) - 157.5).abs() < 1e-9);
    }
}
