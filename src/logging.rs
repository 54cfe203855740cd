use std::fmt;
use std::io::Write;

use log::{self, Level, LevelFilter, Log, Metadata, Record};

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`, any case).
pub fn parse_level(name: &str) -> Result<LevelFilter, String> {
    name.parse()
        .map_err(|_| format!("unknown log level `{name}`, expected off|error|warn|info|debug|trace"))
}

/// Installs the console logger. `level` wins over the `LOG` environment variable; with
/// neither set only warnings and errors are shown.
pub fn init(level: Option<LevelFilter>) {
    static LOGGER: SimpleLogger = SimpleLogger;

    let env_level = std::env::var("LOG").ok().map(|name| parse_level(&name));
    let filter = match (level, env_level) {
        (Some(filter), _) => filter,
        (None, Some(Ok(filter))) => filter,
        (None, Some(Err(msg))) => {
            print_in_color(
                format_args!("[ WARN][pagesim] LOG ignored: {msg}\n"),
                level_to_color_code(Level::Warn),
            );
            LevelFilter::Warn
        }
        (None, None) => LevelFilter::Warn,
    };

    // a second init keeps the first logger
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(filter);
    }
}

/// Add escape sequence to print with color in Linux console
macro_rules! with_color {
    ($args: ident, $color_code: ident) => {{
        format_args!("\u{1B}[{}m{}\u{1B}[0m", $color_code as u8, $args)
    }};
}

fn print_in_color(args: fmt::Arguments, color_code: u8) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    // nowhere left to report a failed log write
    let _ = handle.write_fmt(with_color!(args, color_code));
}

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        print_in_color(
            format_args!(
                "[{:>5}][{}] {}\n",
                record.level(),
                record.target(),
                record.args()
            ),
            level_to_color_code(record.level()),
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_to_color_code(level: Level) -> u8 {
    match level {
        Level::Error => 31, // Red
        Level::Warn => 93,  // BrightYellow
        Level::Info => 34,  // Blue
        Level::Debug => 32, // Green
        Level::Trace => 90, // BrightBlack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("warn"), Ok(LevelFilter::Warn));
        assert_eq!(parse_level("DEBUG"), Ok(LevelFilter::Debug));
        assert_eq!(parse_level("off"), Ok(LevelFilter::Off));
        assert!(parse_level("verbose").is_err());
    }
}
