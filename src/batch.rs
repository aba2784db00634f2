//! Input dispatch: single files, directories, and per-file recovery
//!
//! The driver classifies the input path, filters entries by extension,
//! and runs the decode → binarize → trace → emit → write pipeline per
//! file. In directory mode a failing file is logged and skipped; the
//! batch always attempts every eligible entry.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::Error;
use crate::normalize;
use crate::tracer::Trace;

/// File extensions the driver recognizes as convertible images
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Outcome counts for one [`run`] invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files converted and written
    pub converted: usize,
    /// Files that failed to decode, trace, or write
    pub failed: usize,
    /// Entries skipped for an unrecognized extension
    pub skipped: usize,
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Convert one image file and write the SVG to `destination`.
#[tracing::instrument(skip(tracer, config))]
pub fn convert_file<T: Trace>(
    input: &Path,
    destination: &Path,
    tracer: &T,
    config: &Config,
) -> Result<(), Error> {
    let image = normalize::load_image(input)?;
    let document = crate::convert_image(&image, tracer, config)?;
    document.write_to(destination)?;
    info!(
        output = %destination.display(),
        paths = document.path_count(),
        "conversion complete"
    );
    Ok(())
}

/// Convert `input` (an image file or a directory of them) into SVG.
///
/// - A regular file with a recognized extension is converted directly;
///   `output` gets its extension replaced with `.svg`. An unrecognized
///   extension is a logged skip, not an error.
/// - A directory is enumerated non-recursively; every entry with a
///   recognized extension is converted to `output/<stem>.svg`, and the
///   `output` directory is created first if absent. Per-file failures
///   are logged and counted without stopping the batch.
/// - Anything else is [`Error::InvalidInput`].
pub fn run<T: Trace>(
    input: &Path,
    output: &Path,
    tracer: &T,
    config: &Config,
) -> Result<BatchReport, Error> {
    let mut report = BatchReport::default();

    if input.is_file() {
        if !has_image_extension(input) {
            warn!(input = %input.display(), "skipping: not a supported image file");
            report.skipped += 1;
            return Ok(report);
        }
        let destination = output.with_extension("svg");
        convert_file(input, &destination, tracer, config)?;
        report.converted += 1;
        Ok(report)
    } else if input.is_dir() {
        fs::create_dir_all(output).map_err(|source| Error::Write {
            path: output.to_path_buf(),
            source,
        })?;

        let entries = fs::read_dir(input).map_err(|source| Error::ReadDir {
            path: input.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "failed to read directory entry");
                    report.failed += 1;
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !has_image_extension(&path) {
                warn!(input = %path.display(), "skipping: not a supported image file");
                report.skipped += 1;
                continue;
            }

            let stem = path.file_stem().unwrap_or_default();
            let destination = output.join(stem).with_extension("svg");
            match convert_file(&path, &destination, tracer, config) {
                Ok(()) => report.converted += 1,
                Err(err) => {
                    warn!(input = %path.display(), error = %err, "conversion failed");
                    report.failed += 1;
                }
            }
        }
        Ok(report)
    } else {
        Err(Error::InvalidInput {
            path: input.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn recognized_extensions_are_case_insensitive() {
        for name in ["a.png", "b.JPG", "c.Jpeg", "d.WEBP"] {
            assert!(has_image_extension(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn other_extensions_are_rejected() {
        for name in ["notes.txt", "archive.tar.gz", "image.bmp", "noext"] {
            assert!(!has_image_extension(Path::new(name)), "{name}");
        }
    }

    #[test]
    fn report_default_is_empty() {
        assert_eq!(BatchReport::default(), BatchReport { converted: 0, failed: 0, skipped: 0 });
    }

    #[test]
    fn invalid_path_reports_error() {
        let missing = PathBuf::from("/nonexistent/inktrace/input");
        let err = run(&missing, Path::new("/tmp/out"), &NullTracer, &Config::default());
        assert!(matches!(err, Err(Error::InvalidInput { .. })));
    }

    struct NullTracer;

    impl Trace for NullTracer {
        fn trace(
            &self,
            _bitmap: &crate::bitmap::Bitmap,
        ) -> Result<Vec<crate::tracer::Curve>, crate::error::TraceError> {
            Ok(vec![])
        }
    }
}
