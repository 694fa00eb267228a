use std::fs;
use std::path::Path;
use survey_tagger::cli::{run, Cli, Commands};
use survey_tagger::models::ColumnLayout;
use survey_tagger::processors::{BatchTagger, DiskStore, ErrorPolicy};
use tempfile::TempDir;

fn tag_command(
    image_folder: &Path,
    track: &Path,
    error_report: &Path,
    keep_going: bool,
) -> Cli {
    Cli {
        command: Commands::Tag {
            image_folder: image_folder.to_path_buf(),
            track: track.to_path_buf(),
            error_report: Some(error_report.to_path_buf()),
            name_column: 0,
            lat_column: 1,
            lon_column: 2,
            alt_column: 3,
            keep_going,
        },
        verbose: false,
    }
}

#[test]
fn test_missing_images_produce_failure_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let image_folder = temp_dir.path().join("images");
    fs::create_dir(&image_folder).unwrap();

    let track = temp_dir.path().join("flight.csv");
    fs::write(
        &track,
        "name,lat,lon,alt\n\
         flight_01.jpg,34.05223,-118.24368,89.5\n\
         flight_02.jpg,34.05230,-118.24375,90.1\n",
    )
    .unwrap();

    let report_path = temp_dir.path().join("failures.txt");
    run(tag_command(&image_folder, &track, &report_path, false)).unwrap();

    let contents = fs::read_to_string(&report_path).unwrap();
    assert_eq!(contents, "flight_01.jpg\nflight_02.jpg\n");
}

#[test]
fn test_clean_run_leaves_stale_report_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let image_folder = temp_dir.path().join("images");
    fs::create_dir(&image_folder).unwrap();

    // Header-only log: nothing to tag, nothing fails
    let track = temp_dir.path().join("flight.csv");
    fs::write(&track, "name,lat,lon,alt\n").unwrap();

    let report_path = temp_dir.path().join("failures.txt");
    fs::write(&report_path, "stale_entry.jpg\n").unwrap();

    run(tag_command(&image_folder, &track, &report_path, false)).unwrap();

    let contents = fs::read_to_string(&report_path).unwrap();
    assert_eq!(contents, "stale_entry.jpg\n");
}

#[test]
fn test_unwritable_image_is_recorded_under_keep_going() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let image_folder = temp_dir.path().join("images");
    fs::create_dir(&image_folder).unwrap();

    // Present on disk, but not a taggable image container
    fs::write(image_folder.join("flight_01.txt"), "not an image").unwrap();

    let track = temp_dir.path().join("flight.csv");
    fs::write(
        &track,
        "name,lat,lon,alt\n\
         flight_01.txt,34.05223,-118.24368,89.5\n",
    )
    .unwrap();

    let tagger = BatchTagger::new(DiskStore::new()).with_error_policy(ErrorPolicy::Continue);
    let report = tagger
        .run(&image_folder, &track, ColumnLayout::default(), None)
        .unwrap();

    assert_eq!(report.tagged_count(), 0);
    assert_eq!(report.failed_count(), 1);
    assert!(report.missing_files().is_empty());
}
