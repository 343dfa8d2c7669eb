// File: crates/chart-url/tests/query.rs
// Purpose: Parse/re-render idempotence of rendered chart URLs.

use chart_url::params::ChartType;
use chart_url::{AxisInfo, BoundedSeries, Chart, ChartUrl, EncodingScheme, Plot, UrlOptions};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn scheme() -> impl Strategy<Value = EncodingScheme> {
    prop_oneof![Just(EncodingScheme::Text), Just(EncodingScheme::Simple), Just(EncodingScheme::Extended)]
}

fn build(values: &[f64], title: &str, labels: &[String], encoding: EncodingScheme) -> String {
    let mut chart = Chart::new(ChartType::Line, 300, 200).unwrap();
    chart.set_title(title);
    chart.add_plot(Plot::new(BoundedSeries::new(values).unwrap()).with_legend(title));
    chart.add_axis(AxisInfo::x().with_labels(labels.iter().cloned()).unwrap());
    let opts = UrlOptions { encoding, ..UrlOptions::default() };
    chart.to_url(&opts).unwrap()
}

#[test]
fn render_keeps_parsed_order() {
    let raw = "http://x/chart?cht=lc&chd=e:AA..&chs=10x10";
    assert_eq!(ChartUrl::parse(raw).unwrap().render(), raw);
}

proptest! {
    #[test]
    fn parse_render_is_idempotent(
        values in prop::collection::vec(-10.0f64..=110.0, 0..24),
        title in "[a-zA-Z0-9 &|,:%=?]{0,16}",
        labels in prop::collection::vec("[a-z|&]{1,6}", 0..5),
        encoding in scheme(),
    ) {
        let url = build(&values, &title, &labels, encoding);
        let parsed = ChartUrl::parse(&url).unwrap();
        let rendered = parsed.render();
        prop_assert_eq!(&rendered, &url);
        prop_assert_eq!(ChartUrl::parse(&rendered).unwrap(), parsed);
    }

    #[test]
    fn text_survives_the_round_trip(title in "[ -~]{1,24}") {
        let url = build(&[50.0], &title, &[], EncodingScheme::Simple);
        let parsed = ChartUrl::parse(&url).unwrap();
        let decoded = parsed.decoded("chtt").unwrap();
        prop_assert_eq!(&*decoded, title.as_str());
    }
}
