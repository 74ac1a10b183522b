use solar_zoning::api::{ApiError, SolarApi, StaticSolarApi};
use solar_zoning::catalog::REGIONS;
use solar_zoning::metrics::{solar_zone, sorted_regions, summarize, zone_color, zone_label};
use solar_zoning::{SolarZone, SortField, SortOrder, SortState};

fn ids(regions: &[solar_zoning::Region]) -> Vec<&'static str> {
    regions.iter().map(|region| region.id).collect()
}

#[test]
fn zone_bands_partition_the_line() {
    let cases = [
        (-5.0, SolarZone::Low),
        (999.999, SolarZone::Low),
        (1000.0, SolarZone::Medium),
        (1049.999, SolarZone::Medium),
        (1050.0, SolarZone::High),
        (1099.999, SolarZone::High),
        (1100.0, SolarZone::VeryHigh),
        (5000.0, SolarZone::VeryHigh),
    ];
    for (radiation, zone) in cases {
        assert_eq!(solar_zone(radiation), zone, "{radiation}");
    }

    let mut previous = solar_zone(900.0);
    for step in 0..=300 {
        let zone = solar_zone(f64::from(step).mul_add(1.0, 900.0));
        assert!(zone >= previous);
        previous = zone;
    }
}

#[test]
fn zone_presentation_is_total() {
    for zone in SolarZone::ALL {
        assert_eq!(zone_color(zone), zone_color(zone));
        assert_eq!(zone_label(zone), zone_label(zone));
        assert_eq!(zone_color(zone), zone.color_token());
    }
}

#[test]
fn catalog_summary_matches_published_figures() {
    let summary = summarize(&REGIONS).unwrap();
    assert!((summary.average_radiation - 1060.0).abs() < f64::EPSILON);
    assert!((summary.total_area - 207_400.0).abs() < f64::EPSILON);
    assert!((summary.max_radiation - 1120.0).abs() < f64::EPSILON);
    assert!(summarize(&[]).is_none());
}

#[test]
fn comparison_orders() {
    let descending = sorted_regions(&REGIONS, SortState::default());
    assert_eq!(
        ids(&descending),
        ["brest", "grodno", "gomel", "minsk", "mogilev", "vitebsk"]
    );

    let ascending = sorted_regions(
        &REGIONS,
        SortState::new(SortField::Radiation, SortOrder::Ascending),
    );
    let mut reversed = ids(&ascending);
    reversed.reverse();
    assert_eq!(reversed, ids(&descending));

    // Source catalog is untouched
    assert_eq!(REGIONS[0].id, "minsk");
}

#[tokio::test]
async fn backend_contract_serves_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let api = StaticSolarApi::default();
    assert_eq!(api.regions().await?.data.len(), REGIONS.len());
    assert_eq!(api.region("gomel").await?.data.solar_radiation, 1080.0);
    assert_eq!(api.monthly(None).await?.data.len(), 12);

    let missing = api.region("atlantis").await;
    assert!(matches!(missing, Err(ApiError::NotFound { .. })));
    assert_eq!(missing.err().map(|e| e.status()), Some(404));
    Ok(())
}
