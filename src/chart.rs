//! Line charts of each metric against array size.
//!
//! Records are grouped by array type and metric; each group becomes one
//! chart with one line per algorithm. Groups where no record has a value
//! for the metric (opaque algorithms only) are skipped entirely.
//!
//! Charts are rendered as standalone SVG documents.

use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::generator::Distribution;
use crate::record::{MeasurementRecord, Metric};

/// One line of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub algorithm: String,
    /// `(size, value)` pairs in record order
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to render one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub distribution: Distribution,
    pub metric: Metric,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// File name without extension, e.g. `comparisons_random`.
    pub fn file_stem(&self) -> String {
        chart_file_stem(self.metric, self.distribution)
    }

    pub fn title(&self) -> String {
        format!(
            "{} vs. Array Size (Array Type: {})",
            self.metric.label(),
            self.distribution
        )
    }
}

/// `{metric, lowercased, spaces to underscores}_{type, lowercased}`
pub fn chart_file_stem(metric: Metric, distribution: Distribution) -> String {
    format!(
        "{}_{}",
        metric.label().to_lowercase().replace(' ', "_"),
        distribution.as_str().to_lowercase()
    )
}

/// Group records into charts.
///
/// Array types and algorithms keep their order of first appearance; within
/// a chart the metrics follow [`Metric::ALL`].
pub fn plan_charts(records: &[MeasurementRecord]) -> Vec<ChartSpec> {
    let mut distributions: Vec<Distribution> = Vec::new();
    for r in records {
        if !distributions.contains(&r.distribution) {
            distributions.push(r.distribution);
        }
    }

    let mut charts = Vec::new();
    for distribution in distributions {
        let subset: Vec<&MeasurementRecord> = records
            .iter()
            .filter(|r| r.distribution == distribution)
            .collect();

        for metric in Metric::ALL {
            if subset.iter().all(|r| r.metric(metric).is_none()) {
                continue;
            }

            let mut series: Vec<Series> = Vec::new();
            for r in &subset {
                let Some(value) = r.metric(metric) else {
                    continue;
                };
                let point = (r.size as f64, value);
                match series.iter_mut().find(|s| s.algorithm == r.algorithm) {
                    Some(s) => s.points.push(point),
                    None => series.push(Series {
                        algorithm: r.algorithm.clone(),
                        points: vec![point],
                    }),
                }
            }

            charts.push(ChartSpec {
                distribution,
                metric,
                series,
            });
        }
    }

    charts
}

// ============================================================================
// SVG rendering
// ============================================================================

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 560.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 230.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TICKS: usize = 5;

const PALETTE: [&str; 8] = [
    "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860", "#da8bc3", "#8c8c8c",
];

/// Map `[lo, hi]` onto `[out_lo, out_hi]`; a flat range maps to the midpoint.
fn scale(v: f64, lo: f64, hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    if hi > lo {
        out_lo + (v - lo) / (hi - lo) * (out_hi - out_lo)
    } else {
        (out_lo + out_hi) / 2.0
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn tick_label(v: f64) -> String {
    if v.abs() >= 1e6 {
        format!("{:.1e}", v)
    } else if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.3}", v)
    }
}

/// Render a chart as an SVG document.
pub fn render_svg(chart: &ChartSpec) -> String {
    let mut svg = String::new();
    // fmt::Write for String never returns an error
    write_svg(chart, &mut svg).expect("writing to a String is infallible");
    svg
}

fn write_svg(chart: &ChartSpec, svg: &mut String) -> fmt::Result {
    let points = chart.series.iter().flat_map(|s| s.points.iter());
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_max = y_max.max(y);
    }
    if !x_min.is_finite() {
        (x_min, x_max, y_max) = (0.0, 1.0, 1.0);
    }
    // Counts and times are non-negative; anchor the y axis at zero.
    let y_min = 0.0;
    if y_max <= y_min {
        y_max = 1.0;
    }

    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;
    let px = |x: f64| scale(x, x_min, x_max, left, right);
    let py = |y: f64| scale(y, y_min, y_max, bottom, top);

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = WIDTH,
        h = HEIGHT
    )?;
    writeln!(svg, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    writeln!(
        svg,
        r##"<rect x="{left}" y="{top}" width="{}" height="{}" fill="#eaeaf2"/>"##,
        right - left,
        bottom - top
    )?;
    writeln!(
        svg,
        r#"<text x="{}" y="30" font-size="18" text-anchor="middle">{}</text>"#,
        (left + right) / 2.0,
        escape(&chart.title())
    )?;

    // Grid and ticks
    for i in 0..=TICKS {
        let fx = x_min + (x_max - x_min) * i as f64 / TICKS as f64;
        let fy = y_min + (y_max - y_min) * i as f64 / TICKS as f64;
        let (gx, gy) = (px(fx), py(fy));
        writeln!(
            svg,
            r##"<line x1="{gx:.1}" y1="{top}" x2="{gx:.1}" y2="{bottom}" stroke="#ffffff"/>"##
        )?;
        writeln!(
            svg,
            r##"<line x1="{left}" y1="{gy:.1}" x2="{right}" y2="{gy:.1}" stroke="#ffffff"/>"##
        )?;
        writeln!(
            svg,
            r#"<text x="{gx:.1}" y="{}" font-size="11" text-anchor="middle">{}</text>"#,
            bottom + 18.0,
            tick_label(fx.round())
        )?;
        writeln!(
            svg,
            r#"<text x="{}" y="{:.1}" font-size="11" text-anchor="end">{}</text>"#,
            left - 8.0,
            gy + 4.0,
            tick_label(fy)
        )?;
    }

    // Axis labels
    writeln!(
        svg,
        r#"<text x="{}" y="{}" font-size="13" text-anchor="middle">Array Size</text>"#,
        (left + right) / 2.0,
        HEIGHT - 15.0
    )?;
    writeln!(
        svg,
        r#"<text x="20" y="{y}" font-size="13" text-anchor="middle" transform="rotate(-90 20 {y})">{}</text>"#,
        escape(chart.metric.label()),
        y = (top + bottom) / 2.0
    )?;

    // Series
    for (idx, series) in chart.series.iter().enumerate() {
        let color = PALETTE[idx % PALETTE.len()];
        let path: Vec<String> = series
            .points
            .iter()
            .map(|&(x, y)| format!("{:.1},{:.1}", px(x), py(y)))
            .collect();
        writeln!(
            svg,
            r#"<polyline fill="none" stroke="{color}" stroke-width="2" points="{}"/>"#,
            path.join(" ")
        )?;
        for &(x, y) in &series.points {
            writeln!(
                svg,
                r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{color}"/>"#,
                px(x),
                py(y)
            )?;
        }

        // Legend entry
        let ly = top + 20.0 + idx as f64 * 22.0;
        let lx = right + 20.0;
        writeln!(
            svg,
            r#"<line x1="{lx}" y1="{ly}" x2="{}" y2="{ly}" stroke="{color}" stroke-width="2"/>"#,
            lx + 24.0
        )?;
        writeln!(
            svg,
            r#"<text x="{}" y="{}" font-size="12">{}</text>"#,
            lx + 30.0,
            ly + 4.0,
            escape(&series.algorithm)
        )?;
    }

    svg.push_str("</svg>\n");
    Ok(())
}

/// Render every chart for `records` into `dir`, creating it if needed.
///
/// Returns the paths written, in chart order.
pub fn write_charts(records: &[MeasurementRecord], dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    info!(dir = %dir.display(), "Generating plots");
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for chart in plan_charts(records) {
        let path = dir.join(format!("{}.svg", chart.file_stem()));
        fs::write(&path, render_svg(&chart))?;
        written.push(path);
    }

    info!(count = written.len(), "All plots generated");
    Ok(written)
}
