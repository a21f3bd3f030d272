use chrono::{Local, SecondsFormat};
use tracing_subscriber::{
    filter::Targets,
    fmt::{self, time},
    prelude::*,
};
use yansi::Paint;

use crate::config::Log;

/// Logs go to stderr; stdout is reserved for lookup reports.
pub fn init(log: &Log) {
    let is_color = log.style.is_color();
    if !is_color {
        yansi::disable();
    }
    let format = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime)
        .with_ansi(is_color);
    let filter = parse_filter(&log.level);

    tracing_subscriber::registry()
        .with(format)
        .with(filter)
        .init();
}

fn parse_filter(level: &str) -> Targets {
    match level.parse() {
        Ok(f) => f,
        Err(e) => {
            let err = format!("string {} did not parse successfully: {}", level, e);
            panic!("{}", err.red().bold());
        }
    }
}

struct LocalTime;

impl time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
        )
    }
}
