// File: crates/chart-examples/src/bin/lines.rs
// Summary: Minimal example that builds a simple line chart URL.

use anyhow::Result;
use chart_url::params::{ChartType, Marker, MarkerShape};
use chart_url::{AxisInfo, BoundedSeries, Chart, Color, Plot, PointSelection, UrlOptions};

fn main() -> Result<()> {
    env_logger::init();

    // Already in percent of the y range
    let data = BoundedSeries::new(&[0.0, 54.5, 36.4, 81.8, 63.6, 90.9])?;

    let mut chart = Chart::new(ChartType::Line, 500, 250)?;
    chart.set_title("Example lines");
    chart.add_plot(
        Plot::new(data)
            .with_color(Color::BLUE)
            .with_marker(Marker::shape(MarkerShape::Circle, Color::RED, 0, PointSelection::ALL, 6.0)?),
    );
    chart.add_axis(AxisInfo::x().with_range(0.0, 5.0)?);
    chart.add_axis(AxisInfo::y().with_range(0.0, 2.2)?);

    println!("{}", chart.to_url(&UrlOptions::default())?);
    Ok(())
}
