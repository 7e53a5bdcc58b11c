use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
    util::TryInitError,
};

pub fn setup_logging(verbosity: u8, quiet: bool) -> Result<(), TryInitError> {
    let level_filter = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::sync::Mutex;
    use tracing::debug;

    #[test]
    fn second_initialization_is_an_error() {
        let _ = setup_logging(3, false);
        assert!(setup_logging(0, true).is_err());
    }

    #[test]
    fn scoped_subscriber_writes_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("test.log");

        let file = File::create(&log_path).unwrap();
        let file_layer = fmt::layer().with_writer(Mutex::new(file)).with_ansi(false);
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            debug!("board replaced");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("board replaced"));
        assert!(content.contains("DEBUG"));
    }
}
