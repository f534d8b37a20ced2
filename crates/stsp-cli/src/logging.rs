use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use log::{Level, SetLoggerError};

use crate::options::Options;

pub fn init_logger(options: &Options) -> Result<(), SetLoggerError> {
    let log_timestamp = options.log_timestamp;

    Builder::new()
        .filter_level(options.log_level.to_filter())
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        })
        .try_init()
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
