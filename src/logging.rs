use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Args, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record};

type SyslogLogger = syslog::Logger<syslog::LoggerBackend, syslog::Formatter3164>;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Log level (default: warn)
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,

    /// Append log messages to a file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Send log messages to syslog
    #[arg(long)]
    pub syslog: bool,
}

/// Extra destinations beyond stderr, which always receives every record.
enum Sink {
    File(Mutex<File>),
    Syslog(Mutex<SyslogLogger>),
}

impl Sink {
    fn emit(&self, record: &Record, line: &str) {
        match self {
            Sink::File(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{}", line);
                }
            }
            Sink::Syslog(logger) => {
                if let Ok(mut l) = logger.lock() {
                    let text = record.args().to_string();
                    let _ = match record.level() {
                        Level::Error => l.err(&text),
                        Level::Warn => l.warning(&text),
                        Level::Info => l.info(&text),
                        Level::Debug | Level::Trace => l.debug(&text),
                    };
                }
            }
        }
    }
}

struct SeqgenLogger {
    sinks: Vec<Sink>,
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug | Level::Trace => "debug",
    }
}

fn format_line(record: &Record) -> String {
    format!("[seqgen] {}: {}", level_tag(record.level()), record.args())
}

impl Log for SeqgenLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record);
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
        for sink in &self.sinks {
            sink.emit(record, &line);
        }
    }

    fn flush(&self) {
        for sink in &self.sinks {
            if let Sink::File(file) = sink {
                if let Ok(mut f) = file.lock() {
                    let _ = f.flush();
                }
            }
        }
    }
}

fn open_log_file(path: &Path) -> Option<Sink> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
        .map(|f| Sink::File(Mutex::new(f)))
}

fn connect_syslog() -> Option<Sink> {
    syslog::unix(syslog::Formatter3164 {
        facility: syslog::Facility::LOG_USER,
        hostname: None,
        process: "seqgen".into(),
        pid: std::process::id(),
    })
    .ok()
    .map(|l| Sink::Syslog(Mutex::new(l)))
}

/// Installs the process-wide logger. Sinks that cannot be opened are skipped.
pub fn init(args: &LogArgs) {
    let level = args.log_level.unwrap_or(LogLevel::Warn);

    let mut sinks = Vec::new();
    if let Some(sink) = args.log_file.as_deref().and_then(open_log_file) {
        sinks.push(sink);
    }
    if args.syslog {
        sinks.extend(connect_syslog());
    }

    let _ = log::set_boxed_logger(Box::new(SeqgenLogger { sinks }));
    log::set_max_level(level.to_level_filter());
}
