use chrono::Local;
use log::{LevelFilter, warn};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

/// Level for a `loglevel` string; `None` means logging is switched off.
/// Unknown names fall back to Info (the caller is warned once the logger runs).
pub fn parse_loglevel(loglevel: Option<&str>) -> (Option<LevelFilter>, bool) {
    match loglevel.map(|level| level.to_lowercase()) {
        None => (Some(LevelFilter::Info), true),
        Some(level) => match level.as_str() {
            "off" | "none" => (None, true),
            "debug" => (Some(LevelFilter::Debug), true),
            "info" => (Some(LevelFilter::Info), true),
            "warn" => (Some(LevelFilter::Warn), true),
            "error" => (Some(LevelFilter::Error), true),
            _ => (Some(LevelFilter::Info), false),
        },
    }
}

/// log file name with the current date and time
pub fn timestamped_log_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Terminal logger, plus a file logger when `log_file` is given.
/// Returns false when logging is off or a global logger already exists.
pub fn init_logger(loglevel: Option<&str>, log_file: Option<&str>) -> bool {
    let (level, known) = parse_loglevel(loglevel);
    let Some(level) = level else {
        return false;
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(name) = log_file {
        match File::create(name) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => eprintln!("could not create log file {}: {}", name, e),
        }
    }
    let initialized = CombinedLogger::init(loggers).is_ok();
    if initialized && !known {
        warn!(
            "loglevel {:?} is not one of off, debug, info, warn, error; using info",
            loglevel
        );
    }
    initialized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loglevel() {
        assert_eq!(parse_loglevel(Some("off")), (None, true));
        assert_eq!(parse_loglevel(Some("None")), (None, true));
        assert_eq!(parse_loglevel(Some("debug")), (Some(LevelFilter::Debug), true));
        assert_eq!(parse_loglevel(Some("WARN")), (Some(LevelFilter::Warn), true));
        assert_eq!(parse_loglevel(Some("error")), (Some(LevelFilter::Error), true));
        assert_eq!(parse_loglevel(None), (Some(LevelFilter::Info), true));
        assert_eq!(parse_loglevel(Some("verbose")), (Some(LevelFilter::Info), false));
    }

    #[test]
    fn test_logging_off_installs_nothing() {
        assert!(!init_logger(Some("off"), None));
    }

    #[test]
    fn test_timestamped_log_name() {
        let name = timestamped_log_name();
        assert!(name.starts_with("log_") && name.ends_with(".txt"));
        // log_YYYY-mm-dd_HH-MM-SS.txt
        assert_eq!(name.len(), "log_".len() + 19 + ".txt".len());
    }
}
