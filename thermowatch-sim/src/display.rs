//! Console rendering of evaluation reports

use std::fmt::{Display, Write};

use chrono::{Local, TimeZone};
use thermowatch_core::{StatisticsReport, Timestamp};

/// Date-time layout for report headers
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `report` with its timestamp in the local time zone
pub fn format_report(report: &StatisticsReport) -> String {
    format_report_in(report, &Local)
}

/// Render `report` with its timestamp in `tz`
pub fn format_report_in<Tz>(report: &StatisticsReport, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "[{}]", format_timestamp(report.timestamp, tz));
    let _ = writeln!(
        out,
        "  mean={:.2} stddev={:.2} min={:.2} max={:.2}",
        report.mean, report.stddev, report.min, report.max
    );
    let _ = write!(
        out,
        "  q1={:.2} median={:.2} q3={:.2}",
        report.q1, report.median, report.q3
    );

    if report.breaches_threshold {
        out.push_str("\n  ALERT: temperature above threshold");
    }
    if report.high_volatility {
        out.push_str("\n  ALERT: high volatility");
    }

    out
}

/// Local date-time for `timestamp`, or the raw seconds if out of range
pub fn format_timestamp<Tz>(timestamp: Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_opt(timestamp, 0).earliest() {
        Some(datetime) => datetime.format(TIMESTAMP_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}
