//! Pure geometry for the hand-drawn SVG charts.
//!
//! Everything here is arithmetic over plot frames: no DOM, no Dioxus. The
//! functions guard the degenerate inputs the renderer must survive — empty
//! series, a single point (no `len - 1` division), and zero totals/maxima.

/// Plot area inside a chart's viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn baseline(&self) -> f64 {
        self.top + self.height
    }
}

/// Map a value series onto frame coordinates.
///
/// A single point is centred horizontally; a non-positive maximum pins every
/// point to the baseline (zero-height chart rather than a crash).
pub fn scale_points(values: &[f64], frame: &Frame) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }

    let max = values.iter().copied().fold(0.0_f64, f64::max);

    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = if values.len() == 1 {
                frame.left + frame.width / 2.0
            } else {
                frame.left + idx as f64 * (frame.width / (values.len() - 1) as f64)
            };
            let y = if max <= 0.0 {
                frame.baseline()
            } else {
                frame.baseline() - (value / max).clamp(0.0, 1.0) * frame.height
            };
            (x, y)
        })
        .collect()
}

/// `M x y L x y …` over the given points; empty input yields an empty path.
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (idx, (x, y)) in points.iter().enumerate() {
        let op = if idx == 0 { 'M' } else { 'L' };
        push_segment(&mut path, op, *x, *y);
    }
    path
}

/// Polyline closed down to the baseline, for the filled area under a line.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = polyline_path(points);
    let last_x = points[points.len() - 1].0;
    let first_x = points[0].0;
    push_segment(&mut path, 'L', last_x, baseline);
    push_segment(&mut path, 'L', first_x, baseline);
    path.push_str(" Z");
    path
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bar layout across the frame; bar height scales against the series maximum.
pub fn bar_layout(values: &[f64], frame: &Frame) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }

    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let slot = frame.width / values.len() as f64;
    let bar_width = (slot - 10.0).max(1.0);

    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let height = if max <= 0.0 {
                0.0
            } else {
                (value / max).clamp(0.0, 1.0) * frame.height
            };
            BarRect {
                x: frame.left + idx as f64 * slot,
                y: frame.baseline() - height,
                width: bar_width,
                height,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    /// Closed ring-slice path (`M … A … L … A … Z`).
    pub path: String,
    /// Share of the whole, in percent.
    pub share: f64,
    /// Angular span in degrees; all spans sum to 360 for a non-zero total.
    pub span_degrees: f64,
    /// Set exactly when this segment covers more than half the circle.
    pub large_arc: bool,
}

/// Ring-slice paths for a donut chart. Each segment's span is
/// `360° × value/total`, swept clockwise from 12 o'clock via a running
/// cumulative offset. A non-positive total renders nothing.
pub fn donut_segments(
    values: &[f64],
    cx: f64,
    cy: f64,
    outer_radius: f64,
    inner_radius: f64,
) -> Vec<DonutSegment> {
    let total: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut cumulative = 0.0_f64;
    values
        .iter()
        .map(|value| {
            let value = value.max(0.0);
            let share = value / total * 100.0;
            let start_angle = (cumulative / 100.0) * 360.0 - 90.0;
            let end_angle = ((cumulative + share) / 100.0) * 360.0 - 90.0;
            cumulative += share;

            let large_arc = share > 50.0;
            let flag = if large_arc { 1 } else { 0 };

            let (start_rad, end_rad) = (start_angle.to_radians(), end_angle.to_radians());
            let (x1, y1) = (cx + outer_radius * start_rad.cos(), cy + outer_radius * start_rad.sin());
            let (x2, y2) = (cx + outer_radius * end_rad.cos(), cy + outer_radius * end_rad.sin());
            let (x3, y3) = (cx + inner_radius * end_rad.cos(), cy + inner_radius * end_rad.sin());
            let (x4, y4) = (cx + inner_radius * start_rad.cos(), cy + inner_radius * start_rad.sin());

            let path = format!(
                "M {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
                coord(x1),
                coord(y1),
                coord(outer_radius),
                coord(outer_radius),
                flag,
                coord(x2),
                coord(y2),
                coord(x3),
                coord(y3),
                coord(inner_radius),
                coord(inner_radius),
                flag,
                coord(x4),
                coord(y4),
            );

            DonutSegment {
                path,
                share,
                span_degrees: share / 100.0 * 360.0,
                large_arc,
            }
        })
        .collect()
}

fn push_segment(path: &mut String, op: char, x: f64, y: f64) {
    if !path.is_empty() {
        path.push(' ');
    }
    path.push(op);
    path.push(' ');
    path.push_str(&coord(x));
    path.push(' ');
    path.push_str(&coord(y));
}

fn coord(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Frame = Frame::new(40.0, 40.0, 320.0, 120.0);

    #[test]
    fn empty_series_produces_no_geometry() {
        assert!(scale_points(&[], &FRAME).is_empty());
        assert!(bar_layout(&[], &FRAME).is_empty());
        assert_eq!(polyline_path(&[]), "");
        assert_eq!(area_path(&[], FRAME.baseline()), "");
    }

    #[test]
    fn single_point_series_is_centred_and_finite() {
        let points = scale_points(&[42.0], &FRAME);
        assert_eq!(points.len(), 1);
        let (x, y) = points[0];
        assert!((x - 200.0).abs() < 1e-9);
        assert!(x.is_finite() && y.is_finite());

        let path = polyline_path(&points);
        assert!(path.starts_with("M "));
        assert!(!path.contains("NaN") && !path.contains("inf"));
    }

    #[test]
    fn zero_maximum_pins_points_to_baseline() {
        for (_, y) in scale_points(&[0.0, 0.0, 0.0], &FRAME) {
            assert!((y - FRAME.baseline()).abs() < 1e-9);
        }
        for bar in bar_layout(&[0.0, 0.0], &FRAME) {
            assert_eq!(bar.height, 0.0);
        }
    }

    #[test]
    fn area_path_closes_to_baseline() {
        let points = scale_points(&[1.0, 3.0, 2.0], &FRAME);
        let path = area_path(&points, FRAME.baseline());
        assert!(path.ends_with('Z'));
        assert!(path.contains(&format!("{:.2}", FRAME.baseline())));
    }

    #[test]
    fn bar_heights_scale_against_maximum() {
        let bars = bar_layout(&[5.0, 10.0], &FRAME);
        assert!((bars[0].height - 60.0).abs() < 1e-9);
        assert!((bars[1].height - 120.0).abs() < 1e-9);
        assert!((bars[1].y - FRAME.top).abs() < 1e-9);
    }

    #[test]
    fn donut_spans_sum_to_full_circle() {
        for values in [vec![2.0, 2.0, 1.0], vec![1.0], vec![3.0, 9.0, 0.5, 7.5]] {
            let segments = donut_segments(&values, 100.0, 100.0, 60.0, 35.0);
            let span: f64 = segments.iter().map(|s| s.span_degrees).sum();
            assert!((span - 360.0).abs() < 1e-6, "span was {span}");
        }
    }

    #[test]
    fn large_arc_flag_tracks_majority_share() {
        let segments = donut_segments(&[75.0, 25.0], 100.0, 100.0, 60.0, 35.0);
        assert!(segments[0].large_arc);
        assert!(segments[0].path.contains(" 0 1 1 "));
        assert!(!segments[1].large_arc);
        assert!(segments[1].path.contains(" 0 0 1 "));

        // Exactly half the circle is not a "large" arc.
        let even = donut_segments(&[1.0, 1.0], 100.0, 100.0, 60.0, 35.0);
        assert!(even.iter().all(|s| !s.large_arc));
    }

    #[test]
    fn zero_total_renders_nothing() {
        assert!(donut_segments(&[0.0, 0.0], 100.0, 100.0, 60.0, 35.0).is_empty());
        assert!(donut_segments(&[], 100.0, 100.0, 60.0, 35.0).is_empty());
    }
}
