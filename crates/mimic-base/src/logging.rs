use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: OnceLock<StdoutLogger> = OnceLock::new();

/// Time since logging was first used in this process.
pub fn uptime() -> Duration {
    START.get_or_init(Instant::now).elapsed()
}

/// Logger that prints records to stdout, stamped with the process uptime so
/// lines line up against the session countdown.
pub struct StdoutLogger {
    level: LevelFilter,
}

impl StdoutLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

/// One log line without the trailing newline, e.g. `   12.034s WARN  game.rs:106 dropping frame`.
pub fn format_record(elapsed: Duration, record: &Record) -> String {
    format!(
        "{:>9.3}s {:<5} {}:{} {}",
        elapsed.as_secs_f64(),
        record.level(),
        record.file().unwrap_or("?"),
        record.line().unwrap_or(0),
        record.args()
    )
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(uptime(), record);
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// Debug in debug builds, Info in release builds.
pub fn default_max_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install `StdoutLogger` as the global logger and start the uptime clock.
/// Later calls are ignored.
pub fn init_stdout_logger() {
    START.get_or_init(Instant::now);
    let logger = LOGGER.get_or_init(|| StdoutLogger::new(default_max_level()));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level());
    }
}

/// Log at error level, flush stdout, and exit with status 1.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
        {
            use std::io::Write;
            let _ = std::io::stdout().flush();
        }
        std::process::exit(1);
    }};
}
