use log::{Level, LevelFilter, Log};
use mimic_base::logging::{format_record, StdoutLogger};
use std::time::Duration;

fn record_with<'a>(level: Level, args: std::fmt::Arguments<'a>) -> log::Record<'a> {
    log::RecordBuilder::new()
        .level(level)
        .target("test")
        .file(Some("session.rs"))
        .line(Some(42))
        .args(args)
        .build()
}

#[test]
fn test_format_record_layout() {
    let record = record_with(Level::Warn, format_args!("dropped frame"));
    let line = format_record(Duration::from_millis(12_034), &record);
    assert_eq!(line, "   12.034s WARN  session.rs:42 dropped frame");
}

#[test]
fn test_format_record_without_location() {
    let record = log::RecordBuilder::new()
        .level(Level::Info)
        .args(format_args!("session started"))
        .build();
    let line = format_record(Duration::ZERO, &record);
    assert_eq!(line, "    0.000s INFO  ?:0 session started");
}

#[test]
fn test_level_filter() {
    let logger = StdoutLogger::new(LevelFilter::Info);
    let info = log::MetadataBuilder::new().level(Level::Info).build();
    let debug = log::MetadataBuilder::new().level(Level::Debug).build();
    assert!(logger.enabled(&info));
    assert!(!logger.enabled(&debug));
}

#[test]
fn test_stdout_logger_does_not_panic() {
    let logger = StdoutLogger::new(LevelFilter::Trace);
    logger.log(&record_with(Level::Info, format_args!("hello")));
    logger.flush();
}
