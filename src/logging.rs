use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, opt_format,
};
use std::path::Path;

/// Start the global logger.
///
/// `RUST_LOG` wins over `level`. With a `directory` the log goes to rotating
/// files there, otherwise to stderr. Keep the returned handle alive for the
/// life of the program.
pub fn setup_logging(level: &str, directory: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;
    let logger = match directory {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // rotate at 10 MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            ),
        None => logger.format(flexi_logger::colored_default_format),
    };
    logger.start()
}
