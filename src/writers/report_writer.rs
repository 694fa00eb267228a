use crate::error::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Write the failure report: one missed file identifier per line, no header.
///
/// An existing report at `path` is deleted and recreated, never appended to.
/// Callers only invoke this when there is at least one failure; a clean run
/// leaves any stale report from an earlier run untouched.
pub fn write_failure_report(path: &Path, failed_files: &[&str]) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }

    let mut file = File::create(path)?;
    for name in failed_files {
        writeln!(file, "{}", name)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_one_identifier_per_line() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("failures.txt");

        write_failure_report(&path, &["flight_02.jpg", "flight_09.jpg"]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "flight_02.jpg\nflight_09.jpg\n");
    }

    #[test]
    fn test_overwrites_previous_report() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("failures.txt");

        fs::write(&path, "old_entry.jpg\nanother.jpg\n").unwrap();
        write_failure_report(&path, &["flight_02.jpg"]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "flight_02.jpg\n");
    }
}
