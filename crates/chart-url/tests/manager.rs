// File: crates/chart-url/tests/manager.rs
// Purpose: Parameter manager behavior: last write wins, empty values elided, shared keys, removal.

use chart_url::params::{
    AxisRange, AxisRangesParameter, AxisType, AxisTypesParameter, BarZeroLinesParameter, ChartSizeParameter,
    ChartTitleParameter, ChartType, ChartTypeParameter, DataParameter, LegendParameter, PieOrientationParameter,
};
use chart_url::{BoundedSeries, ChartUrl, EncodingScheme, Parameter, ParameterManager};
use pretty_assertions::assert_eq;

#[test]
fn renders_base_and_sorted_pairs() {
    let mut pm = ParameterManager::with_base_url("http://localhost/chart");
    pm.set(ChartTypeParameter(ChartType::Line));
    pm.set(ChartSizeParameter::new(250, 100).unwrap());
    pm.set(DataParameter::new(EncodingScheme::Simple, vec![BoundedSeries::new(&[0.0, 100.0]).unwrap()]));
    assert_eq!(pm.render(), "http://localhost/chart?chd=s:A9&chs=250x100&cht=lc");
}

#[test]
fn last_registration_wins() {
    let mut pm = ParameterManager::new();
    assert!(pm.set(ChartTitleParameter::new("first")).is_none());
    let previous = pm.set(ChartTitleParameter::new("second")).expect("replaced");
    assert_eq!(previous.value(), "first");
    assert_eq!(pm.query(), "chtt=second");
}

#[test]
fn shared_key_keeps_only_the_last_type() {
    let mut pm = ParameterManager::new();
    pm.set(BarZeroLinesParameter::new(vec![50.0]).unwrap());
    pm.set(PieOrientationParameter::new(0.5).unwrap());
    assert_eq!(pm.len(), 1);
    assert!(pm.get_as::<BarZeroLinesParameter>("chp").is_none());
    assert_eq!(pm.query(), "chp=0.5");
}

#[test]
fn empty_values_are_left_out() {
    let mut pm = ParameterManager::new();
    pm.set(LegendParameter(Vec::new()));
    pm.set(DataParameter::new(EncodingScheme::Extended, Vec::new()));
    pm.set(ChartTypeParameter(ChartType::Pie));
    assert_eq!(pm.len(), 3);
    assert_eq!(pm.query(), "cht=p");
}

#[test]
fn removing_drops_the_key() {
    let mut pm = ParameterManager::new();
    pm.set(ChartTypeParameter(ChartType::Radar));
    pm.set(ChartTitleParameter::new("gone"));
    assert!(pm.remove("chtt").is_some());
    assert!(pm.remove("chtt").is_none());
    assert_eq!(pm.keys().collect::<Vec<_>>(), vec!["cht"]);
    assert_eq!(pm.query(), "cht=r");
}

#[test]
fn accumulating_parameters_collect_entries() {
    let mut pm = ParameterManager::new();
    pm.extend::<AxisTypesParameter, _>([AxisType::X, AxisType::Y]);
    pm.append::<AxisRangesParameter>(AxisRange::new(0, 0.0, 100.0).unwrap());
    pm.append::<AxisRangesParameter>(AxisRange::new(1, 0.0, 51.0).unwrap());
    assert_eq!(pm.entries::<AxisTypesParameter>(), &[AxisType::X, AxisType::Y]);
    assert_eq!(pm.entries::<AxisRangesParameter>().len(), 2);

    let url = ChartUrl::parse(&pm.render()).unwrap();
    assert_eq!(url.get("chxt"), Some("x,y"));
    assert_eq!(url.get("chxr"), Some("0,0.0,100.0|1,0.0,51.0"));
}

#[test]
fn default_base_url() {
    let mut pm = ParameterManager::default();
    pm.set(ChartTypeParameter(ChartType::Venn));
    assert_eq!(pm.render(), "https://chart.googleapis.com/chart?cht=v");
}
