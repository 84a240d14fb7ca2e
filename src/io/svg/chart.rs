//! Chart rendering for benchmark results: a log-log scatter of run time
//! against instance size, and a mean/std-dev bar chart per graph family.

use std::io::Write;

use anyhow::Result;

use crate::bench::CategoryStats;
use super::{golden_angle_color, write_svg_footer, write_svg_header, write_svg_styles};

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 80.0;

/// One scatter series: a category name and its (size, seconds) samples.
pub(crate) struct Series {
    pub(crate) name: String,
    pub(crate) points: Vec<(f64, f64)>,
}

/// Map `value` from `domain` onto `range` linearly.
fn project(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    if domain.1 == domain.0 { return (range.0 + range.1) / 2.0 }
    range.0 + (value - domain.0) / (domain.1 - domain.0) * (range.1 - range.0)
}

/// Bounding interval of `values`, widened by 5% on each side.
/// Degenerate inputs fall back to a unit interval.
fn pad_domain(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for value in values {
        lo = lo.min(value);
        hi = hi.max(value);
    }
    if !lo.is_finite() || !hi.is_finite() { return (0.0, 1.0) }
    if lo == hi { return (lo - 0.5, hi + 0.5) }

    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

/// Tick label for 10^k: plain integers from 1 up, scientific below.
fn format_pow10(k: i32) -> String {
    if k >= 0 { format!("{}", 10f64.powi(k) as u64) } else { format!("1e{k}") }
}

/// Tick label for a linear seconds axis.
fn format_seconds(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { format!("{value:.2e}") }
}

/// Write a log-log scatter chart of run time against instance size, one
/// color per series with a legend on the right.
pub(crate) fn write_scatter_chart<W: Write>(writer: &mut W, title: &str, series: &[Series]) -> Result<()> {
    write_svg_header(writer, WIDTH, HEIGHT)?;
    write_svg_styles(writer)?;

    let plot_x = (MARGIN_LEFT, WIDTH - MARGIN_RIGHT);
    // SVG y grows downward, so the range is flipped.
    let plot_y = (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP);

    let logs = series.iter()
        .flat_map(|series| series.points.iter())
        .filter(|(x, y)| *x > 0.0 && *y > 0.0 && x.is_finite() && y.is_finite())
        .map(|&(x, y)| (x.log10(), y.log10()))
        .collect::<Vec<_>>();

    let x_domain = pad_domain(logs.iter().map(|&(x, _)| x));
    let y_domain = pad_domain(logs.iter().map(|&(_, y)| y));

    // Decade grid lines and tick labels.
    for k in (x_domain.0.ceil() as i32)..=(x_domain.1.floor() as i32) {
        let x = project(k as f64, x_domain, plot_x);
        writeln!(writer, r##"<line class="grid" x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}"/>"##, plot_y.1, plot_y.0)?;
        writeln!(writer, r##"<text class="tick" x="{x:.2}" y="{:.2}" text-anchor="middle">{}</text>"##, plot_y.0 + 16.0, format_pow10(k))?;
    }
    for k in (y_domain.0.ceil() as i32)..=(y_domain.1.floor() as i32) {
        let y = project(k as f64, y_domain, plot_y);
        writeln!(writer, r##"<line class="grid" x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}"/>"##, plot_x.0, plot_x.1)?;
        writeln!(writer, r##"<text class="tick" x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"##, plot_x.0 - 8.0, y + 3.0, format_pow10(k))?;
    }

    // Axis lines.
    writeln!(writer, r##"<line class="axis" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"##, plot_x.0, plot_y.0, plot_x.1, plot_y.0)?;
    writeln!(writer, r##"<line class="axis" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"##, plot_x.0, plot_y.0, plot_x.0, plot_y.1)?;

    // Samples, one color per series.
    for (index, series) in series.iter().enumerate() {
        let color = golden_angle_color(index);
        for &(x, y) in &series.points {
            if !(x > 0.0 && y > 0.0 && x.is_finite() && y.is_finite()) { continue }
            let cx = project(x.log10(), x_domain, plot_x);
            let cy = project(y.log10(), y_domain, plot_y);
            writeln!(writer, r##"<circle cx="{cx:.2}" cy="{cy:.2}" r="4" fill="{color}" fill-opacity="0.7"/>"##)?;
        }
    }

    // Legend.
    for (index, series) in series.iter().enumerate() {
        let color = golden_angle_color(index);
        let x = WIDTH - MARGIN_RIGHT + 24.0;
        let y = MARGIN_TOP + 20.0 * index as f64;
        writeln!(writer, r##"<rect x="{x:.2}" y="{:.2}" width="12" height="12" fill="{color}"/>"##, y - 10.0)?;
        writeln!(writer, r##"<text class="tick" x="{:.2}" y="{y:.2}">{}</text>"##, x + 18.0, series.name)?;
    }

    write_titles(writer, title, "Number of Vertices (n)", "Execution Time (seconds)")?;
    write_svg_footer(writer)
}

/// Write a bar chart of mean run time per category with std-dev whiskers.
pub(crate) fn write_bar_chart<W: Write>(writer: &mut W, title: &str, stats: &[CategoryStats]) -> Result<()> {
    write_svg_header(writer, WIDTH, HEIGHT)?;
    write_svg_styles(writer)?;

    let plot_left = MARGIN_LEFT;
    let plot_right = WIDTH - 60.0;
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;
    let plot_top = MARGIN_TOP;

    let max_value = stats.iter()
        .map(|stat| stat.mean + stat.std_dev)
        .fold(0.0f64, f64::max)
        .max(1e-9);
    let y_max = max_value * 1.1;
    let y_of = |value: f64| plot_bottom - value / y_max * (plot_bottom - plot_top);

    // Horizontal grid lines and tick labels.
    for step in 0..=5 {
        let value = y_max * step as f64 / 5.0;
        let y = y_of(value);
        writeln!(writer, r##"<line class="grid" x1="{plot_left:.2}" y1="{y:.2}" x2="{plot_right:.2}" y2="{y:.2}"/>"##)?;
        writeln!(writer, r##"<text class="tick" x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"##, plot_left - 8.0, y + 3.0, format_seconds(value))?;
    }

    if !stats.is_empty() {
        let slot = (plot_right - plot_left) / stats.len() as f64;
        for (index, stat) in stats.iter().enumerate() {
            let color = golden_angle_color(index);
            let center = plot_left + slot * (index as f64 + 0.5);
            let bar_width = slot * 0.6;
            let top = y_of(stat.mean);

            writeln!(writer,
                r##"<rect x="{:.2}" y="{top:.2}" width="{bar_width:.2}" height="{:.2}" fill="{color}" fill-opacity="0.7" stroke="#111827"/>"##,
                center - bar_width / 2.0, plot_bottom - top)?;

            // Std-dev whisker, clamped at zero.
            let lo = y_of((stat.mean - stat.std_dev).max(0.0));
            let hi = y_of(stat.mean + stat.std_dev);
            writeln!(writer, r##"<line class="whisker" x1="{center:.2}" y1="{lo:.2}" x2="{center:.2}" y2="{hi:.2}"/>"##)?;
            writeln!(writer, r##"<line class="whisker" x1="{:.2}" y1="{lo:.2}" x2="{:.2}" y2="{lo:.2}"/>"##, center - 6.0, center + 6.0)?;
            writeln!(writer, r##"<line class="whisker" x1="{:.2}" y1="{hi:.2}" x2="{:.2}" y2="{hi:.2}"/>"##, center - 6.0, center + 6.0)?;

            writeln!(writer, r##"<text class="tick" x="{center:.2}" y="{:.2}" text-anchor="middle">{}</text>"##, plot_bottom + 18.0, stat.category)?;
        }
    }

    // Axis lines.
    writeln!(writer, r##"<line class="axis" x1="{plot_left:.2}" y1="{plot_bottom:.2}" x2="{plot_right:.2}" y2="{plot_bottom:.2}"/>"##)?;
    writeln!(writer, r##"<line class="axis" x1="{plot_left:.2}" y1="{plot_bottom:.2}" x2="{plot_left:.2}" y2="{plot_top:.2}"/>"##)?;

    write_titles(writer, title, "Graph Category", "Average Execution Time (seconds)")?;
    write_svg_footer(writer)
}

/// Write the chart title and both axis labels.
fn write_titles<W: Write>(writer: &mut W, title: &str, x_label: &str, y_label: &str) -> Result<()> {
    let center_x = (MARGIN_LEFT + WIDTH - MARGIN_RIGHT) / 2.0;
    let center_y = (MARGIN_TOP + HEIGHT - MARGIN_BOTTOM) / 2.0;

    writeln!(writer, r##"<text class="title" x="{:.2}" y="28" text-anchor="middle">{title}</text>"##, WIDTH / 2.0)?;
    writeln!(writer, r##"<text class="label" x="{center_x:.2}" y="{:.2}" text-anchor="middle">{x_label}</text>"##, HEIGHT - 24.0)?;
    writeln!(writer, r##"<text class="label" x="26" y="{center_y:.2}" text-anchor="middle" transform="rotate(-90 26 {center_y:.2})">{y_label}</text>"##)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::svg::SvgStringWriter;

    fn render_scatter(series: &[Series]) -> String {
        let mut writer = SvgStringWriter::new();
        write_scatter_chart(&mut writer, "Time vs Graph Size", series).unwrap();
        writer.into_string().unwrap()
    }

    #[test]
    fn scatter_chart_draws_points_and_legend() {
        let series = vec![
            Series { name: "path".into(), points: vec![(16.0, 0.001), (32.0, 0.004)] },
            Series { name: "cycle".into(), points: vec![(16.0, 0.002)] },
        ];
        let svg = render_scatter(&series);

        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(">path</text>"));
        assert!(svg.contains(">cycle</text>"));
        assert!(svg.contains("Execution Time (seconds)"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn scatter_chart_skips_nonpositive_samples() {
        let series = vec![
            Series { name: "path".into(), points: vec![(16.0, 0.0), (32.0, 0.004)] },
        ];
        assert_eq!(render_scatter(&series).matches("<circle").count(), 1);
    }

    #[test]
    fn empty_scatter_chart_is_still_a_valid_document() {
        let svg = render_scatter(&[]);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn bar_chart_draws_one_bar_per_category() {
        let stats = vec![
            CategoryStats { category: "path".into(), mean: 0.002, median: 0.002, std_dev: 0.0005 },
            CategoryStats { category: "dense".into(), mean: 0.010, median: 0.009, std_dev: 0.0020 },
        ];

        let mut writer = SvgStringWriter::new();
        write_bar_chart(&mut writer, "Average Time by Graph Type", &stats).unwrap();
        let svg = writer.into_string().unwrap();

        // One background rect plus one bar per category.
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains(">dense</text>"));
        assert!(svg.contains("Average Time by Graph Type"));
    }

    #[test]
    fn empty_bar_chart_is_still_a_valid_document() {
        let mut writer = SvgStringWriter::new();
        write_bar_chart(&mut writer, "Average Time by Graph Type", &[]).unwrap();
        let svg = writer.into_string().unwrap();
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
