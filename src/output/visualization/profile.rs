//! Release curve rendering with plotters
//!
//! Writes a PNG or an SVG file depending on the output extension (anything
//! other than `.svg` is rendered as a bitmap).

use plotters::prelude::*;
use std::error::Error;
use std::path::PathBuf;

use super::config::{PlotConfig, Rgb};
use super::{PlotFormat, ReleasePlot};
use crate::error::ReleaseError;

#[inline]
fn rgb((r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

/// Axis ranges enclosing the curve
///
/// The value axis always includes zero and keeps a 10% headroom above the
/// largest value.
fn axis_ranges(time_points: &[f64], values: &[f64]) -> ((f64, f64), (f64, f64)) {
    let t_min = time_points.first().copied().unwrap_or(0.0);
    let t_max = time_points.last().copied().unwrap_or(1.0).max(t_min + 1e-10);

    let v_min = values.iter().cloned().fold(f64::INFINITY, f64::min).min(0.0);
    let v_max = values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10)
        * 1.1;

    ((t_min, t_max), (v_min, v_max))
}

/// Render one curve to `output_path`
///
/// Callers validate the series beforehand (same length, at least two points).
pub(super) fn render_curve(
    time_points: &[f64],
    values: &[f64],
    output_path: &str,
    config: &PlotConfig,
) -> Result<ReleasePlot, ReleaseError> {
    let (time_range, value_range) = axis_ranges(time_points, values);

    let format = PlotFormat::from_path(output_path);

    let rendered = match format {
        PlotFormat::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            render_curve_impl(backend, time_points, values, config, time_range, value_range)
        }
        PlotFormat::Png => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            render_curve_impl(backend, time_points, values, config, time_range, value_range)
        }
    };

    rendered.map_err(|e| ReleaseError::Render(e.to_string()))?;

    log::debug!("Rendered {} points to {}", values.len(), output_path);

    Ok(ReleasePlot {
        output_path: PathBuf::from(output_path),
        format,
        time_range,
        value_range,
        points: values.len(),
    })
}

/// Render a single curve with the given drawing backend
fn render_curve_impl<DB: DrawingBackend>(
    backend: DB,
    time_points: &[f64],
    values: &[f64],
    config: &PlotConfig,
    time_range: (f64, f64),
    value_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    let background = rgb(config.background);
    let line_color = rgb(config.line_color);

    root.fill(&background)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(15).x_label_area_size(45).y_label_area_size(60);
    if !config.title.is_empty() {
        builder.caption(&config.title, ("sans-serif", 40).into_font());
    }

    let mut chart = builder.build_cartesian_2d(
        time_range.0..time_range.1,
        value_range.0..value_range.1,
    )?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;
    }

    let series = chart.draw_series(LineSeries::new(
        time_points.iter().zip(values.iter()).map(|(t, v)| (*t, *v)),
        ShapeStyle::from(&line_color).stroke_width(config.line_width),
    ))?;

    if config.show_legend {
        series
            .label(&config.series_label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ShapeStyle::from(&line_color)));

        chart
            .configure_series_labels()
            .background_style(&background.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_ranges_include_zero_and_headroom() {
        let t = [0.0, 10.0, 20.0];
        let v = [0.0, 0.5, 1.0];
        let ((t0, t1), (v0, v1)) = axis_ranges(&t, &v);
        assert_eq!((t0, t1), (0.0, 20.0));
        assert_eq!(v0, 0.0);
        assert!((v1 - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_axis_ranges_flat_zero_curve() {
        let ((_, _), (v0, v1)) = axis_ranges(&[0.0, 1.0], &[0.0, 0.0]);
        assert_eq!(v0, 0.0);
        assert!(v1 > 0.0);
    }

    #[test]
    fn test_axis_ranges_negative_values() {
        let ((_, _), (v0, _)) = axis_ranges(&[0.0, 1.0], &[-2.0, 1.0]);
        assert_eq!(v0, -2.0);
    }

    #[test]
    fn test_render_svg_curve() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.svg");
        let config = PlotConfig::release_profile(None::<&str>).curve_only();

        let plot = render_curve(
            &[0.0, 1.0, 2.0],
            &[0.0, 0.4, 0.6],
            path.to_str().unwrap(),
            &config,
        )
        .unwrap();

        assert!(path.exists());
        assert_eq!(plot.format, PlotFormat::Svg);
        assert_eq!(plot.points, 3);
    }
}
