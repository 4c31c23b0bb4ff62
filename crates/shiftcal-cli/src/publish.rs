//! Static-site publication.
//!
//! Writes the serialized calendar plus an empty `.nojekyll` marker into the
//! output directory. Both writes fully overwrite whatever was there; the
//! files are not read concurrently, so no atomic-rename dance is needed.

use std::fs;

use tracing::info;

use crate::config::RunConfig;
use crate::error::CliResult;

/// Publishes the serialized calendar and the static-hosting marker.
///
/// Creates the output directory if absent. The marker file tells the
/// static-hosting layer (GitHub Pages) to serve the calendar byte-for-byte
/// instead of running it through its content pipeline.
pub fn publish(config: &RunConfig, ics: &[u8]) -> CliResult<()> {
    fs::create_dir_all(config.output_dir())?;

    let output_path = config.output_path();
    fs::write(&output_path, ics)?;
    info!(path = %output_path.display(), bytes = ics.len(), "Wrote republished calendar");

    let marker_path = config.marker_path();
    fs::write(&marker_path, b"")?;
    info!(path = %marker_path.display(), "Wrote static-hosting marker");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &std::path::Path) -> RunConfig {
        RunConfig::new("https://example.com/roster.ics").with_output_dir(dir)
    }

    #[test]
    fn writes_calendar_and_marker() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        publish(&config, b"BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n").unwrap();

        let ics = fs::read(config.output_path()).unwrap();
        assert!(ics.starts_with(b"BEGIN:VCALENDAR"));

        let marker = fs::read(config.marker_path()).unwrap();
        assert!(marker.is_empty());
    }

    #[test]
    fn overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        publish(&config, b"old contents").unwrap();
        publish(&config, b"new contents").unwrap();

        assert_eq!(fs::read(config.output_path()).unwrap(), b"new contents");
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site").join("docs");
        let config = test_config(&nested);

        publish(&config, b"data").unwrap();

        assert!(nested.is_dir());
        assert!(config.output_path().is_file());
    }
}
