//! Chart Components
//!
//! Pie, bar, and line charts rendered as inline SVG. The geometry lives in
//! pure functions so the contracts stay testable on the host.

use std::f64::consts::PI;

use leptos::*;

/// Pie chart viewBox is 180x180 with the circle centered at (90, 90).
const PIE_CX: f64 = 90.0;
const PIE_CY: f64 = 90.0;
const PIE_R: f64 = 70.0;

/// Bar/line charts share a 300x180 viewBox with a baseline at y = 160 and a
/// 140-unit plot height.
const PLOT_BASELINE: f64 = 160.0;
const PLOT_HEIGHT: f64 = 140.0;
const PLOT_LEFT: f64 = 20.0;
const LINE_INNER_WIDTH: f64 = 260.0;

/// One angular wedge of a pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Start angle in radians, measured from the positive x axis.
    pub start: f64,
    /// End angle in radians.
    pub end: f64,
    /// SVG path for the filled wedge.
    pub path: String,
}

/// Partition a circle into consecutive slices proportional to each value's
/// share of the total.
///
/// A non-positive total (empty, all-zero) yields no slices rather than a
/// division by zero.
pub fn pie_slices(values: &[f64], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            let start = acc / total * 2.0 * PI;
            acc += v;
            let end = acc / total * 2.0 * PI;
            let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
            let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
            let large = if end - start > PI { 1 } else { 0 };
            PieSlice {
                start,
                end,
                path: format!("M {cx} {cy} L {x1} {y1} A {r} {r} 0 {large} 1 {x2} {y2} Z"),
            }
        })
        .collect()
}

/// Scale values to bar heights in `[0, max_height]`.
///
/// The maximal element maps to exactly `max_height`; if the maximum is not
/// positive every height is 0 (a flat baseline, never a fault).
pub fn bar_heights(values: &[f64], max_height: f64) -> Vec<f64> {
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| (v / max * max_height).clamp(0.0, max_height))
        .collect()
}

/// Place one point per value at equal horizontal spacing, with vertical
/// position scaled the same way as bars.
///
/// A single value renders one point at the left margin instead of dividing
/// by zero.
pub fn line_points(
    values: &[f64],
    left: f64,
    inner_width: f64,
    baseline: f64,
    plot_height: f64,
) -> Vec<(f64, f64)> {
    let step = inner_width / values.len().saturating_sub(1).max(1) as f64;
    bar_heights(values, plot_height)
        .into_iter()
        .enumerate()
        .map(|(i, h)| (left + step * i as f64, baseline - h))
        .collect()
}

/// Pie chart with a donut hole and center label.
#[component]
pub fn PieChart(
    values: Vec<f64>,
    colors: Vec<&'static str>,
    #[prop(default = "Share")] label: &'static str,
) -> impl IntoView {
    let slices = pie_slices(&values, PIE_CX, PIE_CY, PIE_R);

    view! {
        <svg class="w-full h-44" viewBox="0 0 180 180">
            {slices
                .into_iter()
                .enumerate()
                .filter(|(_, slice)| slice.end > slice.start)
                .map(|(i, slice)| {
                    let fill = colors[i % colors.len()];
                    view! { <path d=slice.path fill=fill stroke="#1f2937" stroke-width="1" /> }
                })
                .collect_view()}
            <circle cx="90" cy="90" r="40" fill="#1f2937" />
            <text
                x="90"
                y="90"
                text-anchor="middle"
                dominant-baseline="middle"
                fill="#e5e7eb"
                font-size="14"
            >
                {label}
            </text>
        </svg>
    }
}

/// Bar chart with rounded bars over a baseline.
#[component]
pub fn BarChart(
    values: Vec<f64>,
    #[prop(default = "#0ea5e9")] color: &'static str,
) -> impl IntoView {
    let heights = bar_heights(&values, PLOT_HEIGHT);

    view! {
        <svg class="w-full h-44" viewBox="0 0 300 180">
            {heights
                .into_iter()
                .enumerate()
                .map(|(i, h)| {
                    let x = PLOT_LEFT + i as f64 * 40.0;
                    let y = PLOT_BASELINE - h;
                    view! { <rect x=x y=y width="28" height=h rx="6" fill=color /> }
                })
                .collect_view()}
            <line x1="10" y1="160" x2="290" y2="160" stroke="#374151" />
        </svg>
    }
}

/// Line chart with a disc at every point over the shared baseline.
#[component]
pub fn LineChart(
    values: Vec<f64>,
    #[prop(default = "#7c3aed")] color: &'static str,
) -> impl IntoView {
    let points = line_points(&values, PLOT_LEFT, LINE_INNER_WIDTH, PLOT_BASELINE, PLOT_HEIGHT);
    let polyline = points
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <svg class="w-full h-44" viewBox="0 0 300 180">
            <polyline points=polyline fill="none" stroke=color stroke-width="3" />
            {points
                .into_iter()
                .map(|(x, y)| view! { <circle cx=x cy=y r="3.5" fill=color /> })
                .collect_view()}
            <line x1="10" y1="160" x2="290" y2="160" stroke="#374151" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_pie_spans_sum_to_full_circle() {
        let slices = pie_slices(&[4.0, 7.0, 2.0, 9.0], PIE_CX, PIE_CY, PIE_R);
        let sum: f64 = slices.iter().map(|s| s.end - s.start).sum();
        assert!((sum - 2.0 * PI).abs() < EPS);
    }

    #[test]
    fn test_pie_boundaries_monotonic() {
        let slices = pie_slices(&[1.0, 0.0, 3.0, 2.0], PIE_CX, PIE_CY, PIE_R);
        let mut prev = 0.0;
        for slice in &slices {
            assert!(slice.start >= prev - EPS);
            assert!(slice.end >= slice.start - EPS);
            prev = slice.end;
        }
        assert!((prev - 2.0 * PI).abs() < EPS);
    }

    #[test]
    fn test_pie_large_arc_flag() {
        // First slice spans 1.5π, second 0.5π.
        let slices = pie_slices(&[3.0, 1.0], PIE_CX, PIE_CY, PIE_R);
        assert!(slices[0].path.contains(" 1 1 "));
        assert!(slices[1].path.contains(" 0 1 "));
    }

    #[test]
    fn test_pie_zero_total_renders_nothing() {
        assert!(pie_slices(&[], PIE_CX, PIE_CY, PIE_R).is_empty());
        assert!(pie_slices(&[0.0, 0.0], PIE_CX, PIE_CY, PIE_R).is_empty());
    }

    #[test]
    fn test_bar_heights_bounded_with_exact_max() {
        let heights = bar_heights(&[2.0, 4.0, 1.0, 6.0], PLOT_HEIGHT);
        for h in &heights {
            assert!(*h >= 0.0 && *h <= PLOT_HEIGHT);
        }
        assert_eq!(heights[3], PLOT_HEIGHT);
    }

    #[test]
    fn test_bar_heights_single_zero_is_defined() {
        assert_eq!(bar_heights(&[0.0], PLOT_HEIGHT), vec![0.0]);
    }

    #[test]
    fn test_bar_heights_fractional_max_still_exact() {
        let heights = bar_heights(&[0.25, 0.5], PLOT_HEIGHT);
        assert_eq!(heights[1], PLOT_HEIGHT);
        assert!((heights[0] - PLOT_HEIGHT / 2.0).abs() < EPS);
    }

    #[test]
    fn test_line_points_equal_spacing() {
        let points = line_points(
            &[1.0, 2.0, 1.0, 3.0, 4.0, 2.0, 5.0],
            PLOT_LEFT,
            LINE_INNER_WIDTH,
            PLOT_BASELINE,
            PLOT_HEIGHT,
        );
        assert_eq!(points.len(), 7);
        let step = LINE_INNER_WIDTH / 6.0;
        for (i, (x, y)) in points.iter().enumerate() {
            assert!((x - (PLOT_LEFT + step * i as f64)).abs() < EPS);
            assert!(*y >= PLOT_BASELINE - PLOT_HEIGHT - EPS && *y <= PLOT_BASELINE + EPS);
        }
        // Maximum value sits at the top of the plot.
        assert!((points[6].1 - (PLOT_BASELINE - PLOT_HEIGHT)).abs() < EPS);
    }

    #[test]
    fn test_line_single_point_at_left_margin() {
        let points = line_points(&[5.0], PLOT_LEFT, LINE_INNER_WIDTH, PLOT_BASELINE, PLOT_HEIGHT);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].0, PLOT_LEFT);
        assert_eq!(points[0].1, PLOT_BASELINE - PLOT_HEIGHT);
    }
}
