use color_eyre::Result;
use serde::Serialize;
use solar_zoning::api::SolarApi;
use solar_zoning::config::Settings;
use solar_zoning::domain::{Region, SolarZone, SortState};
use solar_zoning::metrics::{
    energy_potential, region_zone, sorted_regions, summarize, zone_counts, CatalogSummary,
};

/// Run the application in headless mode (no UI)
pub async fn run_headless(api: &impl SolarApi, settings: &Settings, json: bool) -> Result<()> {
    let report = build_report(api, settings.sort).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeadlessReport {
    generated_at: String,
    summary: CatalogSummary,
    zones: Vec<ZoneCount>,
    sort: SortState,
    regions: Vec<HeadlessRegion>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ZoneCount {
    zone: SolarZone,
    label: &'static str,
    range: &'static str,
    regions: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeadlessRegion {
    rank: usize,
    #[serde(flatten)]
    region: Region,
    zone: SolarZone,
    zone_label: &'static str,
    energy_potential: f64,
}

async fn build_report(api: &impl SolarApi, sort: SortState) -> Result<HeadlessReport> {
    let regions = api.regions().await?.data;
    let summary: CatalogSummary =
        summarize(&regions).ok_or_else(|| color_eyre::eyre::eyre!("No regions available"))?;

    let zones = zone_counts(&regions)
        .into_iter()
        .map(|(zone, count)| ZoneCount {
            zone,
            label: zone.label(),
            range: zone.range_label(),
            regions: count,
        })
        .collect();

    let ranked = sorted_regions(&regions, sort)
        .into_iter()
        .enumerate()
        .map(|(index, region)| {
            let zone = region_zone(&region);
            HeadlessRegion {
                rank: index + 1,
                zone,
                zone_label: zone.label(),
                energy_potential: energy_potential(&region).round(),
                region,
            }
        })
        .collect();

    tracing::debug!(sort = sort.field.as_str(), order = sort.order.as_str(), "headless report built");

    Ok(HeadlessReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        summary,
        zones,
        sort,
        regions: ranked,
    })
}

fn render_text(report: &HeadlessReport) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let summary = &report.summary;

    let _ = writeln!(out, "\nSolar Radiation Zoning");
    let _ = writeln!(out, "======================");
    let _ = writeln!(out, "Regions: {}", summary.region_count);
    let _ = writeln!(out, "Average radiation: {} kWh/m²/year", summary.average_radiation);
    let _ = writeln!(out, "Average sunshine: {} h/year", summary.average_sunshine);
    let _ = writeln!(out, "Total area: {:.1} thousand km²", summary.total_area_thousands());
    let _ = writeln!(out, "Maximum radiation: {} kWh/m²/year", summary.max_radiation);

    let _ = writeln!(out, "\nZones:");
    for zone in &report.zones {
        let _ = writeln!(out, "- {} ({}): {}", zone.label, zone.range, zone.regions);
    }

    let _ = writeln!(
        out,
        "\nRegions by {} ({}):",
        report.sort.field.as_str(),
        report.sort.order.as_str()
    );
    for entry in &report.regions {
        let _ = writeln!(
            out,
            "{}. {} | {} kWh/m² | {} h | {} | {}",
            entry.rank,
            entry.region.name,
            entry.region.solar_radiation,
            entry.region.average_annual_sunshine,
            entry.zone.as_str(),
            entry.zone.stars()
        );
    }

    out
}
