// File: crates/chart-url/src/chart.rs
// Summary: Chart façade; plots, slices and axes are turned into parameters and rendered to a URL.

use log::debug;

use crate::axis::AxisInfo;
use crate::color::Color;
use crate::error::{ensure_within, ChartError, Result};
use crate::manager::ParameterManager;
use crate::params::{
    AxisLabelPositions, AxisLabelPositionsParameter, AxisLabels, AxisLabelsParameter, AxisRangesParameter,
    AxisStylesParameter, AxisTypesParameter, BarWidthAndSpacingParameter, BarZeroLinesParameter,
    ChartSizeParameter, ChartTitleParameter, ChartTitleStyleParameter, ChartType, ChartTypeParameter,
    ColorsParameter, DataParameter, Fill, FillsParameter, GeoCodesParameter, GeographicalArea,
    GeographicalAreaParameter, GridLinesParameter, LegendParameter, LegendPosition, LegendPositionParameter,
    LineStyle, LineStylesParameter, Marker, MarkersParameter, MarginsParameter, PieLabelsParameter,
    PieOrientationParameter,
};
use crate::series::{BoundedSeries, EncodingScheme};
use crate::types::{BASE_URL, VALUE_MAX};

/// Colors handed to plots that did not pick one, cycled by plot index.
pub const DEFAULT_PALETTE: [Color; 6] = [
    Color::rgb(0x33, 0x66, 0xCC),
    Color::rgb(0xDC, 0x39, 0x12),
    Color::rgb(0xFF, 0x99, 0x00),
    Color::rgb(0x10, 0x96, 0x18),
    Color::rgb(0x99, 0x00, 0x99),
    Color::rgb(0x00, 0x99, 0xC6),
];

fn palette(index: usize) -> Color {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

pub struct UrlOptions {
    pub base_url: String,
    pub encoding: EncodingScheme,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self { base_url: BASE_URL.to_string(), encoding: EncodingScheme::default() }
    }
}

pub trait Colorable {
    fn color(&self) -> Option<Color>;
    fn set_color(&mut self, color: Color);
}

pub trait Legendable {
    fn legend(&self) -> Option<&str>;
    fn set_legend(&mut self, legend: String);
}

/// Something markers can be attached to.
pub trait Markable {
    fn markers(&self) -> &[Marker];
    fn add_marker(&mut self, marker: Marker);
}

/// One data series of a line, bar, radar or scatter chart, with its styling.
///
/// Markers added to a plot may name any series index; it is replaced by the
/// plot's own index when the chart is rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    x: Option<BoundedSeries>,
    y: BoundedSeries,
    color: Option<Color>,
    legend: Option<String>,
    markers: Vec<Marker>,
    line_style: Option<LineStyle>,
    area_fill: Option<Color>,
}

impl Plot {
    pub fn new(data: BoundedSeries) -> Self {
        Self { x: None, y: data, color: None, legend: None, markers: Vec::new(), line_style: None, area_fill: None }
    }

    /// Plot with explicit x values, for XY line and scatter charts.
    pub fn xy(x: BoundedSeries, y: BoundedSeries) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ChartError::LengthMismatch { what: "xy plot x values", expected: y.len(), got: x.len() });
        }
        Ok(Self { x: Some(x), ..Self::new(y) })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.set_legend(legend.into());
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.add_marker(marker);
        self
    }

    pub fn with_line_style(self, style: LineStyle) -> Self {
        Self { line_style: Some(style), ..self }
    }

    /// Fill the area between this plot and the x-axis.
    pub fn with_area_fill(self, color: Color) -> Self {
        Self { area_fill: Some(color), ..self }
    }

    pub fn data(&self) -> &BoundedSeries { &self.y }
    pub fn x_data(&self) -> Option<&BoundedSeries> { self.x.as_ref() }
    pub fn line_style(&self) -> Option<LineStyle> { self.line_style }

    fn series_count(&self) -> usize {
        if self.x.is_some() { 2 } else { 1 }
    }
}

impl Colorable for Plot {
    fn color(&self) -> Option<Color> { self.color }
    fn set_color(&mut self, color: Color) { self.color = Some(color); }
}

impl Legendable for Plot {
    fn legend(&self) -> Option<&str> { self.legend.as_deref() }
    fn set_legend(&mut self, legend: String) { self.legend = Some(legend); }
}

impl Markable for Plot {
    fn markers(&self) -> &[Marker] { &self.markers }
    fn add_marker(&mut self, marker: Marker) { self.markers.push(marker); }
}

/// One pie wedge: a value in `[0, 100]`, an optional label drawn next to it
/// and an optional legend entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    value: f64,
    label: Option<String>,
    color: Option<Color>,
    legend: Option<String>,
}

impl Slice {
    pub fn new(value: f64) -> Result<Self> {
        ensure_within("slice value", value, 0.0, VALUE_MAX)?;
        Ok(Self { value, label: None, color: None, legend: None })
    }

    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..self }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.set_legend(legend.into());
        self
    }

    pub fn value(&self) -> f64 { self.value }
    pub fn label(&self) -> Option<&str> { self.label.as_deref() }
}

impl Colorable for Slice {
    fn color(&self) -> Option<Color> { self.color }
    fn set_color(&mut self, color: Color) { self.color = Some(color); }
}

impl Legendable for Slice {
    fn legend(&self) -> Option<&str> { self.legend.as_deref() }
    fn set_legend(&mut self, legend: String) { self.legend = Some(legend); }
}

/// A whole chart. Configuration is kept as plain values and only turned
/// into parameters by [`Chart::parameters`].
#[derive(Clone, Debug)]
pub struct Chart {
    kind: ChartType,
    size: ChartSizeParameter,
    title: Option<String>,
    title_style: Option<ChartTitleStyleParameter>,
    plots: Vec<Plot>,
    slices: Vec<Slice>,
    axes: Vec<AxisInfo>,
    fills: Vec<Fill>,
    markers: Vec<Marker>,
    legend_position: Option<LegendPosition>,
    margins: Option<MarginsParameter>,
    grid: Option<GridLinesParameter>,
    bar_geometry: Option<BarWidthAndSpacingParameter>,
    zero_lines: Option<BarZeroLinesParameter>,
    pie_orientation: Option<PieOrientationParameter>,
    area: Option<GeographicalArea>,
    regions: Vec<String>,
}

impl Chart {
    pub fn new(kind: ChartType, width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            kind,
            size: ChartSizeParameter::new(width, height)?,
            title: None,
            title_style: None,
            plots: Vec::new(),
            slices: Vec::new(),
            axes: Vec::new(),
            fills: Vec::new(),
            markers: Vec::new(),
            legend_position: None,
            margins: None,
            grid: None,
            bar_geometry: None,
            zero_lines: None,
            pie_orientation: None,
            area: None,
            regions: Vec::new(),
        })
    }

    pub fn kind(&self) -> ChartType { self.kind }

    /// Stored margins must still fit the new size.
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<()> {
        let size = ChartSizeParameter::new(width, height)?;
        if let Some(margins) = &self.margins {
            check_margins(margins, &size)?;
        }
        self.size = size;
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_title_style(&mut self, color: Color, font_size: f64) -> Result<()> {
        self.title_style = Some(ChartTitleStyleParameter::new(color, font_size)?);
        Ok(())
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.plots.push(plot);
    }

    pub fn add_slice(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Axes are indexed in the order they are added.
    pub fn add_axis(&mut self, axis: AxisInfo) {
        self.axes.push(axis);
    }

    pub fn add_fill(&mut self, fill: Fill) {
        self.fills.push(fill);
    }

    pub fn set_legend_position(&mut self, position: LegendPosition) {
        self.legend_position = Some(position);
    }

    /// Margins must leave some room for the plot area.
    pub fn set_margins(&mut self, margins: MarginsParameter) -> Result<()> {
        check_margins(&margins, &self.size)?;
        self.margins = Some(margins);
        Ok(())
    }

    pub fn set_grid(&mut self, grid: GridLinesParameter) {
        self.grid = Some(grid);
    }

    pub fn set_bar_geometry(&mut self, geometry: BarWidthAndSpacingParameter) -> Result<()> {
        if !self.kind.is_bar() {
            return Err(ChartError::Unsupported("bar width and spacing on a non-bar chart"));
        }
        self.bar_geometry = Some(geometry);
        Ok(())
    }

    pub fn set_zero_lines(&mut self, lines: BarZeroLinesParameter) -> Result<()> {
        if !self.kind.is_bar() {
            return Err(ChartError::Unsupported("zero lines on a non-bar chart"));
        }
        self.zero_lines = Some(lines);
        Ok(())
    }

    pub fn set_pie_orientation(&mut self, orientation: PieOrientationParameter) -> Result<()> {
        if !self.kind.is_pie() {
            return Err(ChartError::Unsupported("orientation on a non-pie chart"));
        }
        self.pie_orientation = Some(orientation);
        Ok(())
    }

    /// Map area and the region codes colored by the data, in data order.
    pub fn set_map<I, S>(&mut self, area: GeographicalArea, regions: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.kind != ChartType::Map {
            return Err(ChartError::Unsupported("map regions on a non-map chart"));
        }
        self.area = Some(area);
        self.regions = regions.into_iter().map(Into::into).collect();
        Ok(())
    }

    pub fn plots(&self) -> &[Plot] { &self.plots }
    pub fn slices(&self) -> &[Slice] { &self.slices }
    pub fn axes(&self) -> &[AxisInfo] { &self.axes }

    /// Every parameter of this chart, registered on a fresh manager.
    pub fn parameters(&self, opts: &UrlOptions) -> Result<ParameterManager> {
        if !self.slices.is_empty() && !self.plots.is_empty() {
            return Err(ChartError::Unsupported("a chart cannot mix pie slices and plots"));
        }
        debug!(
            "building {} chart: {} plots, {} slices, {} axes",
            self.kind,
            self.plots.len(),
            self.slices.len(),
            self.axes.len()
        );

        let mut pm = ParameterManager::with_base_url(opts.base_url.as_str());
        pm.set(ChartTypeParameter(self.kind));
        pm.set(self.size);
        if let Some(title) = &self.title {
            pm.set(ChartTitleParameter::new(title));
        }
        if let Some(style) = self.title_style {
            pm.set(style);
        }

        if self.slices.is_empty() {
            self.register_plots(&mut pm, opts.encoding);
        } else {
            self.register_slices(&mut pm, opts.encoding)?;
        }

        for (index, axis) in self.axes.iter().enumerate() {
            pm.append::<AxisTypesParameter>(axis.kind());
            if !axis.labels().is_empty() {
                pm.append::<AxisLabelsParameter>(AxisLabels::new(index, axis.labels().iter().cloned()));
            }
            if !axis.positions().is_empty() {
                pm.append::<AxisLabelPositionsParameter>(AxisLabelPositions::new(index, axis.positions().to_vec()));
            }
            if let Some(range) = axis.range_at(index) {
                pm.append::<AxisRangesParameter>(range);
            }
            if let Some(style) = axis.style_at(index) {
                pm.append::<AxisStylesParameter>(style);
            }
        }

        pm.extend::<MarkersParameter, _>(self.markers.iter().cloned());
        pm.extend::<FillsParameter, _>(self.fills.iter().cloned());

        if let Some(position) = self.legend_position {
            pm.set(LegendPositionParameter(position));
        }
        if let Some(margins) = self.margins {
            pm.set(margins);
        }
        if let Some(grid) = self.grid {
            pm.set(grid);
        }
        if let Some(geometry) = self.bar_geometry {
            pm.set(geometry);
        }
        if let Some(lines) = &self.zero_lines {
            pm.set(lines.clone());
        }
        if let Some(orientation) = self.pie_orientation {
            pm.set(orientation);
        }
        if let Some(area) = self.area {
            pm.set(GeographicalAreaParameter(area));
            pm.extend::<GeoCodesParameter, _>(self.regions.iter().cloned());
        }
        Ok(pm)
    }

    /// Render the chart URL.
    pub fn to_url(&self, opts: &UrlOptions) -> Result<String> {
        let url = self.parameters(opts)?.render();
        debug!("chart url is {} bytes", url.len());
        Ok(url)
    }

    fn register_plots(&self, pm: &mut ParameterManager, encoding: EncodingScheme) {
        let mut data = Vec::with_capacity(self.plots.len());
        let mut series_index = 0;
        for plot in &self.plots {
            if let Some(x) = &plot.x {
                data.push(x.clone());
            }
            data.push(plot.y.clone());
            // markers point at the y series
            let y_index = series_index + plot.series_count() - 1;
            pm.extend::<MarkersParameter, _>(plot.markers.iter().cloned().map(|m| m.for_series(y_index)));
            if let Some(color) = plot.area_fill {
                pm.append::<MarkersParameter>(Marker::fill_to_axis(color, y_index));
            }
            series_index += plot.series_count();
        }
        pm.set(DataParameter::new(encoding, data));

        if self.plots.iter().any(|p| p.color.is_some()) {
            let colors = self.plots.iter().enumerate().map(|(i, p)| p.color.unwrap_or_else(|| palette(i))).collect();
            pm.set(ColorsParameter::per_series(colors));
        }
        if self.plots.iter().any(|p| p.legend.is_some()) {
            let legends = self.plots.iter().map(|p| p.legend.clone().unwrap_or_default()).collect();
            pm.set(LegendParameter(legends));
        }
        if self.plots.iter().any(|p| p.line_style.is_some()) {
            pm.extend::<LineStylesParameter, _>(self.plots.iter().map(|p| p.line_style.unwrap_or_default()));
        }
    }

    fn register_slices(&self, pm: &mut ParameterManager, encoding: EncodingScheme) -> Result<()> {
        let values = self.slices.iter().map(Slice::value).collect::<Vec<_>>();
        pm.set(DataParameter::new(encoding, vec![BoundedSeries::new(&values)?]));

        if self.slices.iter().any(|s| s.color.is_some()) {
            let colors = self.slices.iter().enumerate().map(|(i, s)| s.color.unwrap_or_else(|| palette(i))).collect();
            pm.set(ColorsParameter::per_point(colors));
        }
        if self.slices.iter().any(|s| s.label.is_some()) {
            pm.set(PieLabelsParameter(self.slices.iter().map(|s| s.label.clone().unwrap_or_default()).collect()));
        }
        if self.slices.iter().any(|s| s.legend.is_some()) {
            pm.set(LegendParameter(self.slices.iter().map(|s| s.legend.clone().unwrap_or_default()).collect()));
        }
        Ok(())
    }
}

impl Markable for Chart {
    fn markers(&self) -> &[Marker] { &self.markers }
    fn add_marker(&mut self, marker: Marker) { self.markers.push(marker); }
}

fn check_margins(margins: &MarginsParameter, size: &ChartSizeParameter) -> Result<()> {
    let m = margins.margins();
    let (width, height) = (size.width(), size.height());
    let fits = |sum: Option<u32>, limit: u32| sum.is_some_and(|s| s < limit);
    if !fits(m.hsum(), width) || !fits(m.vsum(), height) {
        return Err(ChartError::InvalidSize { width, height, reason: "margins cover the whole chart" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ChartUrl;

    #[test]
    fn defaults_only_for_missing_entries() {
        let mut chart = Chart::new(ChartType::Line, 300, 200).unwrap();
        chart.add_plot(Plot::new(BoundedSeries::new(&[10.0]).unwrap()));
        chart.add_plot(Plot::new(BoundedSeries::new(&[20.0]).unwrap()).with_color(Color::RED).with_legend("b"));
        let url = ChartUrl::parse(&chart.to_url(&UrlOptions::default()).unwrap()).unwrap();
        assert_eq!(url.get("chco"), Some("3366CC,FF0000"));
        assert_eq!(url.get("chdl"), Some("|b"));
        assert!(!url.contains_key("chls"));
    }

    #[test]
    fn xy_plot_markers_target_the_y_series() {
        let x = BoundedSeries::new(&[0.0, 50.0]).unwrap();
        let y = BoundedSeries::new(&[10.0, 20.0]).unwrap();
        let mut chart = Chart::new(ChartType::LineXY, 300, 200).unwrap();
        chart.add_plot(Plot::xy(x, y).unwrap().with_area_fill(Color::BLUE));
        let url = ChartUrl::parse(&chart.to_url(&UrlOptions::default()).unwrap()).unwrap();
        assert_eq!(url.get("chm"), Some("B,0000FF,1,0,0"));
    }

    #[test]
    fn slices_and_plots_do_not_mix() {
        let mut chart = Chart::new(ChartType::Pie, 300, 200).unwrap();
        chart.add_slice(Slice::new(40.0).unwrap());
        chart.add_plot(Plot::new(BoundedSeries::empty()));
        assert!(matches!(chart.to_url(&UrlOptions::default()), Err(ChartError::Unsupported(_))));
    }

    #[test]
    fn kind_specific_setters_check_the_kind() {
        let mut chart = Chart::new(ChartType::Line, 300, 200).unwrap();
        assert!(chart.set_pie_orientation(PieOrientationParameter::new(1.0).unwrap()).is_err());
        assert!(chart.set_map(GeographicalArea::Europe, ["FR"]).is_err());
    }

    #[test]
    fn margins_must_fit() {
        use crate::types::Margins;
        let mut chart = Chart::new(ChartType::Line, 300, 200).unwrap();
        assert!(chart.set_margins(MarginsParameter::new(Margins::uniform(100))).is_err());
        assert!(chart.set_margins(MarginsParameter::new(Margins::default()).with_legend(80, 20)).is_ok());
        let url = ChartUrl::parse(&chart.to_url(&UrlOptions::default()).unwrap()).unwrap();
        assert_eq!(url.get("chma"), Some("30,30,30,30|80,20"));
    }

    #[test]
    fn huge_margins_are_rejected() {
        use crate::types::Margins;
        let mut chart = Chart::new(ChartType::Line, 300, 200).unwrap();
        let err = chart.set_margins(MarginsParameter::new(Margins::new(u32::MAX, 1, 0, 0))).unwrap_err();
        assert!(matches!(err, ChartError::InvalidSize { width: 300, height: 200, .. }));
        assert!(chart.set_margins(MarginsParameter::new(Margins::new(0, 0, 1, u32::MAX))).is_err());
    }

    #[test]
    fn shrinking_rechecks_margins() {
        use crate::types::Margins;
        let mut chart = Chart::new(ChartType::Line, 300, 200).unwrap();
        chart.set_margins(MarginsParameter::new(Margins::uniform(50))).unwrap();
        assert!(chart.set_size(90, 200).is_err());
        assert_eq!((chart.size.width(), chart.size.height()), (300, 200));
        assert!(chart.set_size(120, 120).is_ok());
    }
}
