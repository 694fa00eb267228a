use crate::error::{Result, TaggingError};
use crate::models::{BatchReport, ColumnLayout, RowOutcome};
use crate::processors::FileStore;
use crate::readers::TrackReader;
use crate::utils::ProgressReporter;
use std::path::Path;

/// What to do when a row cannot be processed (bad row data or a failed
/// metadata write). Missing image files are never fatal under either policy;
/// they always go to the failure list and the pass continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first unprocessable row, leaving earlier rows tagged.
    #[default]
    Abort,
    /// Record the row as failed and keep going.
    Continue,
}

/// Single-pass batch tagger: one row read, one image tagged, in input order.
pub struct BatchTagger<S: FileStore> {
    store: S,
    policy: ErrorPolicy,
}

impl<S: FileStore> BatchTagger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Tag every image named in the flight log at `table_path`, resolving
    /// names against `image_folder`. Returns the per-row outcomes; rows whose
    /// image is missing are collected rather than aborting the pass.
    pub fn run(
        &self,
        image_folder: &Path,
        table_path: &Path,
        layout: ColumnLayout,
        progress: Option<&ProgressReporter>,
    ) -> Result<BatchReport> {
        let reader = TrackReader::new(layout);
        let mut report = BatchReport::default();

        for row in reader.records(table_path)? {
            match row {
                Ok(record) => {
                    let image_path = image_folder.join(&record.file_name);

                    if !self.store.exists(&image_path) {
                        if let Some(p) = progress {
                            p.println(&format!(
                                "Skipped {}: not found in the source image folder",
                                record.file_name
                            ));
                        }
                        report.record(RowOutcome::SkippedMissing(record.file_name));
                        continue;
                    }

                    match self.store.embed_location(
                        &image_path,
                        record.latitude,
                        record.longitude,
                        record.altitude,
                    ) {
                        Ok(()) => {
                            if let Some(p) = progress {
                                p.println(&image_path.display().to_string());
                            }
                            report.record(RowOutcome::Tagged(record.file_name));
                        }
                        Err(e) if self.policy == ErrorPolicy::Continue => {
                            if let Some(p) = progress {
                                p.println(&format!("Failed to tag {}: {e}", record.file_name));
                            }
                            report.record(RowOutcome::Failed {
                                identifier: record.file_name,
                                reason: e.to_string(),
                            });
                        }
                        Err(e) => return Err(e),
                    }
                }
                Err(TaggingError::MalformedRow { line, message })
                    if self.policy == ErrorPolicy::Continue =>
                {
                    if let Some(p) = progress {
                        p.println(&format!("Skipped malformed row at line {line}: {message}"));
                    }
                    report.record(RowOutcome::Failed {
                        identifier: format!("line {line}"),
                        reason: message,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    struct FakeStore {
        existing: HashSet<PathBuf>,
        fail_on: Option<PathBuf>,
        embedded: RefCell<Vec<(PathBuf, f64, f64, f64)>>,
    }

    impl FakeStore {
        fn with_files(folder: &Path, names: &[&str]) -> Self {
            Self {
                existing: names.iter().map(|n| folder.join(n)).collect(),
                fail_on: None,
                embedded: RefCell::new(Vec::new()),
            }
        }
    }

    impl FileStore for FakeStore {
        fn exists(&self, path: &Path) -> bool {
            self.existing.contains(path)
        }

        fn embed_location(
            &self,
            path: &Path,
            latitude: f64,
            longitude: f64,
            altitude: f64,
        ) -> Result<()> {
            if self.fail_on.as_deref() == Some(path) {
                return Err(TaggingError::ExifWrite {
                    path: path.display().to_string(),
                    message: "corrupt container".to_string(),
                });
            }
            self.embedded
                .borrow_mut()
                .push((path.to_path_buf(), latitude, longitude, altitude));
            Ok(())
        }
    }

    fn write_log(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{}", contents).expect("Failed to write temp file");
        file
    }

    const THREE_ROWS: &str = "name,lat,lon,alt\n\
        flight_01.jpg,34.1,-118.1,10.0\n\
        flight_02.jpg,34.2,-118.2,11.0\n\
        flight_03.jpg,34.3,-118.3,12.0\n";

    #[test]
    fn test_missing_file_is_collected_and_pass_continues() {
        let folder = Path::new("/survey/images");
        let log = write_log(THREE_ROWS);
        let store = FakeStore::with_files(folder, &["flight_01.jpg", "flight_03.jpg"]);

        let tagger = BatchTagger::new(store);
        let report = tagger
            .run(folder, log.path(), ColumnLayout::default(), None)
            .unwrap();

        assert_eq!(report.tagged_count(), 2);
        assert_eq!(report.missing_files(), vec!["flight_02.jpg"]);

        let embedded = tagger.store.embedded.borrow();
        assert_eq!(embedded.len(), 2);
        assert_eq!(embedded[0].0, folder.join("flight_01.jpg"));
        assert_eq!(embedded[1].0, folder.join("flight_03.jpg"));
        assert!((embedded[1].1 - 34.3).abs() < 1e-9);
    }

    #[test]
    fn test_all_files_present_leaves_no_failures() {
        let folder = Path::new("/survey/images");
        let log = write_log(THREE_ROWS);
        let store = FakeStore::with_files(
            folder,
            &["flight_01.jpg", "flight_02.jpg", "flight_03.jpg"],
        );

        let report = BatchTagger::new(store)
            .run(folder, log.path(), ColumnLayout::default(), None)
            .unwrap();

        assert_eq!(report.tagged_count(), 3);
        assert!(report.missing_files().is_empty());
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_abort_policy_stops_at_malformed_row() {
        let folder = Path::new("/survey/images");
        let log = write_log(
            "name,lat,lon,alt\n\
             flight_01.jpg,34.1,-118.1,10.0\n\
             flight_02.jpg,bad,-118.2,11.0\n\
             flight_03.jpg,34.3,-118.3,12.0\n",
        );
        let store = FakeStore::with_files(
            folder,
            &["flight_01.jpg", "flight_02.jpg", "flight_03.jpg"],
        );

        let tagger = BatchTagger::new(store);
        let err = tagger
            .run(folder, log.path(), ColumnLayout::default(), None)
            .unwrap_err();

        assert!(matches!(err, TaggingError::MalformedRow { line: 3, .. }));
        // The first row was already tagged when the pass aborted
        assert_eq!(tagger.store.embedded.borrow().len(), 1);
    }

    #[test]
    fn test_continue_policy_records_malformed_row_and_keeps_going() {
        let folder = Path::new("/survey/images");
        let log = write_log(
            "name,lat,lon,alt\n\
             flight_01.jpg,34.1,-118.1,10.0\n\
             flight_02.jpg,bad,-118.2,11.0\n\
             flight_03.jpg,34.3,-118.3,12.0\n",
        );
        let store = FakeStore::with_files(
            folder,
            &["flight_01.jpg", "flight_02.jpg", "flight_03.jpg"],
        );

        let report = BatchTagger::new(store)
            .with_error_policy(ErrorPolicy::Continue)
            .run(folder, log.path(), ColumnLayout::default(), None)
            .unwrap();

        assert_eq!(report.tagged_count(), 2);
        assert_eq!(report.failed_count(), 1);
        match &report.outcomes[1] {
            RowOutcome::Failed { identifier, reason } => {
                assert_eq!(identifier, "line 3");
                assert!(reason.contains("latitude"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_write_failure_respects_policy() {
        let folder = Path::new("/survey/images");
        let log = write_log(THREE_ROWS);

        let mut store = FakeStore::with_files(
            folder,
            &["flight_01.jpg", "flight_02.jpg", "flight_03.jpg"],
        );
        store.fail_on = Some(folder.join("flight_02.jpg"));

        let err = BatchTagger::new(store)
            .run(folder, log.path(), ColumnLayout::default(), None)
            .unwrap_err();
        assert!(matches!(err, TaggingError::ExifWrite { .. }));

        let mut store = FakeStore::with_files(
            folder,
            &["flight_01.jpg", "flight_02.jpg", "flight_03.jpg"],
        );
        store.fail_on = Some(folder.join("flight_02.jpg"));

        let report = BatchTagger::new(store)
            .with_error_policy(ErrorPolicy::Continue)
            .run(folder, log.path(), ColumnLayout::default(), None)
            .unwrap();

        assert_eq!(report.tagged_count(), 2);
        assert_eq!(report.failed_count(), 1);
        // Metadata write failures are not missing files; the report list
        // stays empty for them
        assert!(report.missing_files().is_empty());
    }
}
