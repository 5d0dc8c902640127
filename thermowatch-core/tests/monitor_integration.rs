//! Integration tests for the ingest → window → chain → report flow

mod common;

use thermowatch_core::{
    evaluators::EvaluationChain,
    stats::{self, StatKind, StatValue},
    EvaluationError, Monitor, MonitorConfig, RequestTag, StatisticsEvaluator, SubWindow,
    ThresholdEvaluator, VolatilityEvaluator,
};

use common::{feed, samples, SeriesGenerator, REFERENCE, START};

#[test]
fn reference_series_end_to_end() {
    let mut monitor: Monitor = Monitor::new(MonitorConfig::default()).unwrap();
    let reports = feed(&mut monitor, &REFERENCE);
    let last = reports.last().unwrap();

    assert_eq!(last.timestamp, START + 35);
    assert!((last.mean - 20.875).abs() < 1e-9);
    assert!((last.stddev - 128.109375f64.sqrt()).abs() < 1e-9);
    assert!((last.stddev - 11.3185).abs() < 1e-4);
    assert_eq!((last.q1, last.median, last.q3), (10.5, 18.5, 29.5));
    assert_eq!((last.max, last.min), (42.0, 8.0));
    assert!(!last.breaches_threshold);
    assert!(last.high_volatility);

    // 33 on the first tick is above 31
    assert!(reports[0].breaches_threshold);
    assert!(!reports[0].high_volatility);
}

#[test]
fn every_report_matches_the_window_it_saw() {
    let mut generator = SeriesGenerator::new(24.0, 1.5);
    let values = generator.series(30, &[(17, 12.0)]);

    let mut monitor: Monitor = Monitor::default();
    for (i, report) in feed(&mut monitor, &values).iter().enumerate() {
        let start = (i + 1).saturating_sub(12);
        let window = &values[start..=i];

        let extremes = stats::max_min(window).unwrap();
        assert_eq!(report.max, extremes.max);
        assert_eq!(report.min, extremes.min);

        let moments = stats::mean_and_stddev(window).unwrap();
        assert!((report.mean - moments.mean).abs() < 1e-9);
        assert!((report.stddev - moments.stddev).abs() < 1e-9);

        assert_eq!(report.breaches_threshold, values[i] > 31.0);

        let tail = &window[window.len() - window.len().min(6)..];
        let spread = stats::max_min(tail).unwrap().spread();
        assert_eq!(report.high_volatility, spread > 10.0);
    }
}

#[test]
fn excursion_leaves_the_window_after_twelve_samples() {
    let mut values = vec![22.0; 20];
    values[3] = 45.0;

    let mut monitor: Monitor = Monitor::default();
    let reports = feed(&mut monitor, &values);

    // Index 3 is still in the window at index 14, gone at 15
    assert_eq!(reports[14].max, 45.0);
    assert_eq!(reports[15].max, 22.0);

    // Volatility only sees the last six samples: indices 3..=8
    assert!(reports[3].high_volatility);
    assert!(reports[8].high_volatility);
    assert!(!reports[9].high_volatility);
}

#[test]
fn strategies_agree_with_summary() {
    let values = &REFERENCE;
    let summary = stats::Summary::from_values(values).unwrap();

    match stats::compute(StatKind::Quartiles, values).unwrap() {
        StatValue::Quartiles(q) => {
            assert_eq!((q.q1, q.median, q.q3), (summary.q1, summary.median, summary.q3))
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn custom_chain_through_monitor() {
    let chain = EvaluationChain::builder()
        .link(VolatilityEvaluator::new(2.5, SubWindow::SkipHead(7)))
        .link(ThresholdEvaluator::new(41.0))
        .link(StatisticsEvaluator::new())
        .build()
        .unwrap();

    let mut monitor = Monitor::<12>::with_chain(MonitorConfig::legacy(), chain).unwrap();
    let reports = feed(&mut monitor, &REFERENCE);

    // 42 at index 2 breaches 41
    assert!(reports[2].breaches_threshold);
    assert!(!reports[7].breaches_threshold);
    assert!(!reports[7].high_volatility);
}

#[test]
fn missing_handler_surfaces_through_ingest() {
    let chain = EvaluationChain::builder()
        .link(StatisticsEvaluator::new())
        .build()
        .unwrap();
    let mut monitor = Monitor::<12>::with_chain(MonitorConfig::default(), chain).unwrap();

    let result = monitor.ingest(samples(&[20.0])[0]);
    assert_eq!(
        result,
        Err(EvaluationError::UnknownRequestTag {
            tag: RequestTag::ThresholdBreach.as_str()
        })
    );
}

#[test]
fn smaller_windows_are_supported() {
    let mut monitor = Monitor::<4>::new(MonitorConfig::default()).unwrap();
    let reports = feed(&mut monitor, &[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);

    assert_eq!(monitor.window().len(), 4);
    assert_eq!(reports[5].min, 12.0);
    assert_eq!(reports[5].median, 13.5);
}
