use crate::ui::theme::{short_name, zone_color};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Map, MapResolution, Points};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use solar_zoning::domain::Region;
use solar_zoning::metrics::region_zone;

/// Longitude/latitude window around the country.
const GEO_X_BOUNDS: [f64; 2] = [23.0, 33.0];
const GEO_Y_BOUNDS: [f64; 2] = [51.0, 56.5];

const SCHEMATIC_WIDTH: f64 = 520.0;
const SCHEMATIC_HEIGHT: f64 = 480.0;
const SCHEMATIC_FILL_STEP: f64 = 8.0;

const MIN_MAP_WIDTH: u16 = 16;
const MIN_MAP_HEIGHT: u16 = 6;

/// Simplified region outlines in a 520x480 frame, y growing downwards.
const SCHEMATIC_OUTLINES: [(&str, &[(f64, f64)]); 6] = [
    (
        "vitebsk",
        &[(300.0, 50.0), (450.0, 50.0), (480.0, 120.0), (460.0, 180.0), (400.0, 190.0), (320.0, 150.0)],
    ),
    (
        "grodno",
        &[(50.0, 150.0), (180.0, 140.0), (220.0, 180.0), (200.0, 250.0), (120.0, 260.0), (60.0, 220.0)],
    ),
    (
        "minsk",
        &[(220.0, 180.0), (320.0, 150.0), (380.0, 200.0), (360.0, 280.0), (280.0, 290.0), (200.0, 250.0)],
    ),
    (
        "brest",
        &[(60.0, 280.0), (180.0, 270.0), (200.0, 330.0), (160.0, 400.0), (70.0, 390.0), (40.0, 340.0)],
    ),
    (
        "mogilev",
        &[(380.0, 200.0), (480.0, 180.0), (500.0, 240.0), (480.0, 300.0), (400.0, 310.0), (360.0, 280.0)],
    ),
    (
        "gomel",
        &[(280.0, 290.0), (400.0, 310.0), (420.0, 380.0), (380.0, 450.0), (260.0, 440.0), (200.0, 380.0)],
    ),
];

pub fn schematic_outline(region_id: &str) -> Option<&'static [(f64, f64)]> {
    SCHEMATIC_OUTLINES
        .iter()
        .find(|(id, _)| *id == region_id)
        .map(|(_, outline)| *outline)
}

/// Even-odd ray casting test.
pub fn polygon_contains(outline: &[(f64, f64)], x: f64, y: f64) -> bool {
    let mut inside = false;
    let mut j = outline.len().wrapping_sub(1);
    for (i, &(xi, yi)) in outline.iter().enumerate() {
        let (xj, yj) = outline[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

pub fn polygon_centroid(outline: &[(f64, f64)]) -> Option<(f64, f64)> {
    if outline.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = outline.len() as f64;
    let (sx, sy) = outline
        .iter()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    Some((sx / count, sy / count))
}

fn fill_points(outline: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    let mut y = SCHEMATIC_FILL_STEP / 2.0;
    while y < SCHEMATIC_HEIGHT {
        let mut x = SCHEMATIC_FILL_STEP / 2.0;
        while x < SCHEMATIC_WIDTH {
            if polygon_contains(outline, x, y) {
                points.push((x, SCHEMATIC_HEIGHT - y));
            }
            x += SCHEMATIC_FILL_STEP;
        }
        y += SCHEMATIC_FILL_STEP;
    }
    points
}

fn map_fits(f: &mut Frame<'_>, area: Rect) -> bool {
    if area.width >= MIN_MAP_WIDTH && area.height >= MIN_MAP_HEIGHT {
        return true;
    }
    let notice = Paragraph::new("Enlarge the terminal to see the map")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(notice, area);
    false
}

fn label_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// World outline with one marker per region, coloured by zone.
pub fn render_geographic_map(
    regions: &[Region],
    selected: usize,
    animation: f64,
    f: &mut Frame<'_>,
    area: Rect,
) {
    if !map_fits(f, area) {
        return;
    }

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(GEO_X_BOUNDS)
        .y_bounds(GEO_Y_BOUNDS)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();

            for (index, region) in regions.iter().enumerate() {
                let is_selected = index == selected;
                let color = zone_color(region_zone(region));
                let radius = if is_selected {
                    animation.sin().mul_add(0.05, 0.3)
                } else {
                    0.18
                };

                ctx.draw(&Circle {
                    x: region.center_lon,
                    y: region.center_lat,
                    radius,
                    color,
                });
                ctx.draw(&Points {
                    coords: &[(region.center_lon, region.center_lat)],
                    color,
                });
                ctx.print(
                    region.center_lon + 0.35,
                    region.center_lat,
                    Span::styled(short_name(region.name), label_style(is_selected)),
                );
            }
        });

    f.render_widget(canvas, area);
}

/// Simplified outlines filled with the zone colour.
pub fn render_schematic_map(regions: &[Region], selected: usize, f: &mut Frame<'_>, area: Rect) {
    if !map_fits(f, area) {
        return;
    }

    let shapes: Vec<_> = regions
        .iter()
        .enumerate()
        .filter_map(|(index, region)| {
            let outline = schematic_outline(region.id)?;
            Some((index == selected, region, outline, fill_points(outline)))
        })
        .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, SCHEMATIC_WIDTH])
        .y_bounds([0.0, SCHEMATIC_HEIGHT])
        .paint(|ctx| {
            for (is_selected, region, outline, fill) in &shapes {
                let color = zone_color(region_zone(region));
                ctx.draw(&Points {
                    coords: fill,
                    color,
                });

                let border = if *is_selected {
                    Color::White
                } else {
                    Color::DarkGray
                };
                for (i, &(x1, y1)) in outline.iter().enumerate() {
                    let (x2, y2) = outline[(i + 1) % outline.len()];
                    ctx.draw(&CanvasLine {
                        x1,
                        y1: SCHEMATIC_HEIGHT - y1,
                        x2,
                        y2: SCHEMATIC_HEIGHT - y2,
                        color: border,
                    });
                }
            }

            ctx.layer();
            for (is_selected, region, outline, _) in &shapes {
                if let Some((cx, cy)) = polygon_centroid(outline) {
                    ctx.print(
                        cx - 20.0,
                        SCHEMATIC_HEIGHT - cy,
                        Span::styled(short_name(region.name), label_style(*is_selected)),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_zoning::catalog::REGIONS;

    #[test]
    fn every_region_has_an_outline() {
        for region in &REGIONS {
            assert!(schematic_outline(region.id).is_some(), "{}", region.id);
        }
        assert!(schematic_outline("kyiv").is_none());
    }

    #[test]
    fn point_in_polygon() {
        let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        assert!(polygon_contains(&square, 5.0, 5.0));
        assert!(!polygon_contains(&square, 15.0, 5.0));
        assert!(!polygon_contains(&square, 5.0, -1.0));
        assert!(!polygon_contains(&[], 0.0, 0.0));
    }

    #[test]
    fn centroids_fall_inside_outlines() {
        for (id, outline) in SCHEMATIC_OUTLINES {
            let (cx, cy) = polygon_centroid(outline).unwrap();
            assert!(polygon_contains(outline, cx, cy), "{id}");
        }
        assert!(polygon_centroid(&[]).is_none());
    }

    #[test]
    fn fill_stays_within_frame() {
        let outline = schematic_outline("gomel").unwrap();
        let fill = fill_points(outline);
        assert!(!fill.is_empty());
        assert!(fill
            .iter()
            .all(|(x, y)| (0.0..=SCHEMATIC_WIDTH).contains(x) && (0.0..=SCHEMATIC_HEIGHT).contains(y)));
    }
}
