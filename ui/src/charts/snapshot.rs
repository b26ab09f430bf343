//! Fully-revealed SVG markup for each chart kind.
//!
//! The components insert these snapshots into the page, and export/share
//! clone them, so the exported artifact is always the final (progress = 1)
//! state — the CSS reveal animation only affects paint, never the markup.
//! Every builder returns `None` when the series gives it nothing to draw.

use crate::core::model::Sentiment;

use super::activity::ActivityPoint;
use super::geometry::{self, Frame};
use super::trend::TrendRow;
use super::SeriesPoint;

const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg""#;

const LINE_FRAME: Frame = Frame::new(40.0, 40.0, 320.0, 120.0);
const ACTIVITY_FRAME: Frame = Frame::new(50.0, 50.0, 400.0, 160.0);

/// Line chart with a filled area beneath the stroke.
pub fn line_svg(series: &[SeriesPoint], color: &str, slug: &str) -> Option<String> {
    if series.is_empty() {
        return None;
    }

    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let points = geometry::scale_points(&values, &LINE_FRAME);
    let line = geometry::polyline_path(&points);
    let area = geometry::area_path(&points, LINE_FRAME.baseline());

    let mut svg = format!(
        r#"{SVG_OPEN} width="100%" height="200" viewBox="0 0 400 200">"#
    );
    svg.push_str(&format!(
        r#"<defs><linearGradient id="area-{slug}" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="{color}" stop-opacity="0.3"/><stop offset="100%" stop-color="{color}" stop-opacity="0"/></linearGradient></defs>"#
    ));
    push_grid(&mut svg, &LINE_FRAME, 4);
    svg.push_str(&format!(
        r#"<path class="chart-area" d="{area}" fill="url(#area-{slug})"/>"#
    ));
    svg.push_str(&format!(
        r#"<path class="chart-line" d="{line}" fill="none" stroke="{color}" stroke-width="3"/>"#
    ));
    for (x, y) in &points {
        svg.push_str(&format!(
            r#"<circle class="chart-dot" cx="{x:.2}" cy="{y:.2}" r="4" fill="{color}" stroke="white" stroke-width="2"/>"#
        ));
    }
    svg.push_str("</svg>");
    Some(svg)
}

/// Bar chart with per-bar labels under the baseline.
pub fn bar_svg(series: &[SeriesPoint], color: &str, slug: &str) -> Option<String> {
    if series.is_empty() {
        return None;
    }

    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let bars = geometry::bar_layout(&values, &LINE_FRAME);

    let mut svg = format!(
        r#"{SVG_OPEN} width="100%" height="200" viewBox="0 0 400 200">"#
    );
    svg.push_str(&format!(
        r#"<defs><linearGradient id="bar-{slug}" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="{color}"/><stop offset="100%" stop-color="{color}" stop-opacity="0.6"/></linearGradient></defs>"#
    ));
    for (bar, point) in bars.iter().zip(series) {
        svg.push_str(&format!(
            r#"<rect class="chart-bar" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="4" fill="url(#bar-{slug})"/>"#,
            bar.x, bar.y, bar.width, bar.height,
        ));
        svg.push_str(&format!(
            r##"<text class="chart-label" x="{:.2}" y="175" text-anchor="middle" font-size="10" fill="#8b93a1">{}</text>"##,
            bar.x + bar.width / 2.0,
            xml_escape(&point.label),
        ));
    }
    svg.push_str("</svg>");
    Some(svg)
}

/// Donut chart with a centred total; the legend is rendered outside the SVG.
pub fn donut_svg(series: &[SeriesPoint], slug: &str) -> Option<String> {
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let segments = geometry::donut_segments(&values, 100.0, 100.0, 60.0, 35.0);
    if segments.is_empty() {
        return None;
    }

    let total: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();

    let mut svg = format!(
        r#"{SVG_OPEN} width="200" height="200" viewBox="0 0 200 200">"#
    );
    svg.push_str("<defs>");
    for (idx, point) in series.iter().enumerate() {
        let color = segment_color(point);
        svg.push_str(&format!(
            r#"<linearGradient id="donut-{slug}-{idx}" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="{color}"/><stop offset="100%" stop-color="{color}" stop-opacity="0.7"/></linearGradient>"#
        ));
    }
    svg.push_str("</defs>");
    for (idx, segment) in segments.iter().enumerate() {
        svg.push_str(&format!(
            r#"<path class="chart-slice" d="{}" fill="url(#donut-{slug}-{idx})"/>"#,
            segment.path,
        ));
    }
    svg.push_str(&format!(
        r##"<text class="chart-center-label" x="100" y="95" text-anchor="middle" font-size="12" fill="#8b93a1">Total</text><text class="chart-center-value" x="100" y="110" text-anchor="middle" font-size="18" font-weight="700" fill="#e6e9ef">{}</text>"##,
        total.round() as i64,
    ));
    svg.push_str("</svg>");
    Some(svg)
}

/// Dual-axis activity chart: volume area + line on one scale, score line on
/// its own 0–1 scale, both over the same time labels.
pub fn activity_svg(points: &[ActivityPoint]) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let volumes: Vec<f64> = points.iter().map(|p| p.volume).collect();
    let volume_points = geometry::scale_points(&volumes, &ACTIVITY_FRAME);

    // Score is already normalised to 0..1; scale it independently.
    let score_points: Vec<(f64, f64)> = points
        .iter()
        .zip(&volume_points)
        .map(|(p, (x, _))| {
            (
                *x,
                ACTIVITY_FRAME.baseline() - p.score.clamp(0.0, 1.0) * ACTIVITY_FRAME.height,
            )
        })
        .collect();

    let volume_line = geometry::polyline_path(&volume_points);
    let volume_area = geometry::area_path(&volume_points, ACTIVITY_FRAME.baseline());
    let score_line = geometry::polyline_path(&score_points);

    let mut svg = format!(
        r#"{SVG_OPEN} width="100%" height="250" viewBox="0 0 500 250">"#
    );
    svg.push_str(
        r##"<defs><linearGradient id="activity-volume" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#FF6B35" stop-opacity="0.3"/><stop offset="100%" stop-color="#FF6B35" stop-opacity="0"/></linearGradient></defs>"##,
    );
    push_grid(&mut svg, &ACTIVITY_FRAME, 4);
    svg.push_str(&format!(
        r#"<path class="chart-area" d="{volume_area}" fill="url(#activity-volume)"/>"#
    ));
    svg.push_str(&format!(
        r##"<path class="chart-line" d="{volume_line}" fill="none" stroke="#FF6B35" stroke-width="3"/>"##
    ));
    svg.push_str(&format!(
        r##"<path class="chart-line chart-line--dashed" d="{score_line}" fill="none" stroke="#10B981" stroke-width="3" stroke-dasharray="5,5"/>"##
    ));
    for ((x, vy), (_, sy)) in volume_points.iter().zip(&score_points) {
        svg.push_str(&format!(
            r##"<circle class="chart-dot" cx="{x:.2}" cy="{vy:.2}" r="4" fill="#FF6B35" stroke="white" stroke-width="2"/><circle class="chart-dot" cx="{x:.2}" cy="{sy:.2}" r="4" fill="#10B981" stroke="white" stroke-width="2"/>"##
        ));
    }
    for (point, (x, _)) in points.iter().zip(&volume_points) {
        svg.push_str(&format!(
            r##"<text class="chart-label" x="{x:.2}" y="235" text-anchor="middle" font-size="10" fill="#8b93a1">{}</text>"##,
            xml_escape(&point.label),
        ));
    }
    svg.push_str("</svg>");
    Some(svg)
}

/// Hourly sentiment mix, painted back-to-front as stacked percentage areas.
pub fn trend_svg(rows: &[TrendRow]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let positive: Vec<f64> = rows.iter().map(|r| r.positive).collect();
    let through_negative: Vec<f64> = rows.iter().map(|r| r.positive + r.negative).collect();
    let full: Vec<f64> = rows.iter().map(|_| 100.0).collect();

    let mut svg = format!(
        r#"{SVG_OPEN} width="100%" height="200" viewBox="0 0 400 200">"#
    );
    svg.push_str(concat!(
        r##"<defs>"##,
        r##"<linearGradient id="trend-positive" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#10B981" stop-opacity="0.8"/><stop offset="100%" stop-color="#10B981" stop-opacity="0.4"/></linearGradient>"##,
        r##"<linearGradient id="trend-negative" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#EF4444" stop-opacity="0.8"/><stop offset="100%" stop-color="#EF4444" stop-opacity="0.4"/></linearGradient>"##,
        r##"<linearGradient id="trend-neutral" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#6B7280" stop-opacity="0.8"/><stop offset="100%" stop-color="#6B7280" stop-opacity="0.4"/></linearGradient>"##,
        r##"</defs>"##,
    ));

    // Back-to-front: the full stack (neutral remainder) first, the positive
    // band last so it sits on top.
    for (values, gradient) in [
        (&full, "trend-neutral"),
        (&through_negative, "trend-negative"),
        (&positive, "trend-positive"),
    ] {
        let band = percent_band(values);
        let path = geometry::area_path(&band, LINE_FRAME.baseline());
        svg.push_str(&format!(
            r#"<path class="chart-area" d="{path}" fill="url(#{gradient})"/>"#
        ));
    }

    for (row, (x, _)) in rows.iter().zip(percent_band(&positive)) {
        svg.push_str(&format!(
            r##"<text class="chart-label" x="{x:.2}" y="180" text-anchor="middle" font-size="10" fill="#8b93a1">{}</text>"##,
            xml_escape(&row.hour_label),
        ));
    }
    svg.push_str("</svg>");
    Some(svg)
}

/// Scale a 0–100 percentage series onto the line frame (the frame's top is
/// 100%), keeping the single-point guard from `scale_points`.
fn percent_band(values: &[f64]) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = if values.len() == 1 {
                LINE_FRAME.left + LINE_FRAME.width / 2.0
            } else {
                LINE_FRAME.left + idx as f64 * (LINE_FRAME.width / (values.len() - 1) as f64)
            };
            let y = LINE_FRAME.baseline() - (value / 100.0).clamp(0.0, 1.0) * LINE_FRAME.height;
            (x, y)
        })
        .collect()
}

fn push_grid(svg: &mut String, frame: &Frame, divisions: u32) {
    for i in 0..=divisions {
        let y = frame.top + f64::from(i) * frame.height / f64::from(divisions);
        svg.push_str(&format!(
            r##"<line class="chart-grid" x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="#6B7280" stroke-width="1" opacity="0.25"/>"##,
            frame.left,
            frame.left + frame.width,
        ));
    }
}

fn segment_color(point: &SeriesPoint) -> &str {
    point
        .color
        .as_deref()
        .unwrap_or_else(|| Sentiment::Neutral.color())
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<SeriesPoint> {
        vec![
            SeriesPoint::new("Mon", 2.0),
            SeriesPoint::new("Tue", 3.0),
            SeriesPoint::new("Wed", 1.0),
        ]
    }

    #[test]
    fn empty_series_yields_no_markup() {
        assert!(line_svg(&[], "#FF6B35", "empty").is_none());
        assert!(bar_svg(&[], "#FF6B35", "empty").is_none());
        assert!(donut_svg(&[], "empty").is_none());
        assert!(activity_svg(&[]).is_none());
        assert!(trend_svg(&[]).is_none());
    }

    #[test]
    fn zero_total_donut_yields_no_markup() {
        let series = vec![
            SeriesPoint::colored("Positive", 0.0, "#10B981"),
            SeriesPoint::colored("Negative", 0.0, "#EF4444"),
        ];
        assert!(donut_svg(&series, "dist").is_none());
    }

    #[test]
    fn line_markup_carries_area_line_and_dots() {
        let svg = line_svg(&series(), "#FF6B35", "engagement-trend").expect("markup");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r##"url(#area-engagement-trend)"##));
        assert!(svg.contains("chart-line"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(!svg.contains("NaN") && !svg.contains("inf"));
    }

    #[test]
    fn single_point_series_still_renders_valid_markup() {
        let single = vec![SeriesPoint::new("Mon", 5.0)];
        for markup in [
            line_svg(&single, "#FF6B35", "one").expect("line"),
            bar_svg(&single, "#10B981", "one").expect("bar"),
        ] {
            assert!(!markup.contains("NaN") && !markup.contains("inf"));
        }
    }

    #[test]
    fn donut_markup_centres_the_total() {
        let series = vec![
            SeriesPoint::colored("Positive", 2.0, "#10B981"),
            SeriesPoint::colored("Negative", 2.0, "#EF4444"),
            SeriesPoint::colored("Neutral", 1.0, "#6B7280"),
        ];
        let svg = donut_svg(&series, "sentiment-distribution").expect("markup");
        assert_eq!(svg.matches("chart-slice").count(), 3);
        assert!(svg.contains(">5</text>"));
        assert!(svg.contains("donut-sentiment-distribution-0"));
    }

    #[test]
    fn labels_are_xml_escaped() {
        let series = vec![SeriesPoint::new("<Mon & Tue>", 1.0)];
        let svg = bar_svg(&series, "#FF6B35", "esc").expect("markup");
        assert!(svg.contains("&lt;Mon &amp; Tue&gt;"));
        assert!(!svg.contains("<Mon"));
    }
}
