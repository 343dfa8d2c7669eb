// File: crates/demo/src/main.rs
// Summary: Demo loads numeric CSV columns (or a built-in sample) and prints a line chart URL.

use anyhow::{Context, Result};
use chart_url::params::{ChartType, LegendPosition};
use chart_url::types::{HEIGHT, WIDTH};
use chart_url::{AxisInfo, BoundedSeries, Chart, EncodingScheme, Plot, UrlOptions};
use log::{debug, info, warn};
use std::path::Path;

const SAMPLE: &str = "\
month,visits,signups
1,1200,40
2,1350,52
3,1100,38
4,1600,75
5,1720,81
6,1540,66
";

/// One named numeric column.
struct Column {
    name: String,
    values: Vec<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    // Usage: chart-url-demo [data.csv] [text|simple|extended]
    let mut args = std::env::args().skip(1);
    let path = args.next();
    let encoding = match args.next() {
        Some(name) => name.parse::<EncodingScheme>().with_context(|| format!("bad encoding '{name}'"))?,
        None => EncodingScheme::default(),
    };

    let columns = match &path {
        Some(p) => load_columns_csv(Path::new(p)).with_context(|| format!("failed to load CSV '{p}'"))?,
        None => {
            info!("no input file given, using the built-in sample");
            read_columns(csv::Reader::from_reader(SAMPLE.as_bytes()))?
        }
    };
    if columns.len() < 2 {
        anyhow::bail!("need an x column and at least one value column, found {}", columns.len());
    }

    let (x, ys) = columns.split_first().context("no columns")?;
    let (min_v, max_v) = minmax(ys.iter().flat_map(|c| c.values.iter().copied()));
    info!("{} rows, {} series, values in [{min_v}, {max_v}]", x.values.len(), ys.len());

    let mut chart = Chart::new(ChartType::Line, WIDTH, HEIGHT)?;
    chart.set_title(format!("{} by {}", join_names(ys), x.name));
    for column in ys {
        let series = BoundedSeries::scaled(&column.values, min_v, max_v)
            .with_context(|| format!("cannot scale column '{}'", column.name))?;
        chart.add_plot(Plot::new(series).with_legend(column.name.clone()));
    }
    let labels = x.values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    chart.add_axis(AxisInfo::x().with_labels(labels)?);
    chart.add_axis(AxisInfo::y().with_range(min_v, max_v)?);
    chart.set_legend_position(LegendPosition::Bottom);

    let mut opts = UrlOptions { encoding, ..UrlOptions::default() };
    if let Ok(base) = std::env::var("CHART_URL_BASE") {
        debug!("base url overridden by CHART_URL_BASE");
        opts.base_url = base;
    }

    println!("{}", chart.to_url(&opts)?);
    Ok(())
}

fn load_columns_csv(path: &Path) -> Result<Vec<Column>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_columns(rdr)
}

/// Collect every column; cells that do not parse become NaN, which the
/// scaler turns into missing points.
fn read_columns<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Column>> {
    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    debug!("headers: {headers:?}");

    let mut columns = headers.into_iter().map(|name| Column { name, values: Vec::new() }).collect::<Vec<_>>();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        for (i, column) in columns.iter_mut().enumerate() {
            let cell = rec.get(i).unwrap_or("");
            let v = cell.trim().parse::<f64>().unwrap_or_else(|_| {
                warn!("row {row}, column '{}': '{cell}' is not a number", column.name);
                f64::NAN
            });
            column.values.push(v);
        }
    }
    Ok(columns)
}

fn minmax(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    if min_v > max_v {
        return (0.0, 1.0);
    }
    if min_v == max_v {
        // flat data still needs a span to scale into
        return (min_v - 1.0, max_v + 1.0);
    }
    (min_v, max_v)
}

fn join_names(columns: &[Column]) -> String {
    columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
}
