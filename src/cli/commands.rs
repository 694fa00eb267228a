use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::ColumnLayout;
use crate::processors::{BatchTagger, DiskStore, ErrorPolicy};
use crate::readers::read_location;
use crate::utils::filename::generate_default_report_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::write_failure_report;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Tag {
            image_folder,
            track,
            error_report,
            name_column,
            lat_column,
            lon_column,
            alt_column,
            keep_going,
        } => {
            println!("Tagging survey images...");
            println!("Image folder: {}", image_folder.display());
            println!("Flight log: {}", track.display());

            let layout = ColumnLayout::new(name_column, lat_column, lon_column, alt_column);
            let policy = if keep_going {
                ErrorPolicy::Continue
            } else {
                ErrorPolicy::Abort
            };

            let progress = ProgressReporter::new_spinner("Tagging images...", false);

            let tagger = BatchTagger::new(DiskStore::new()).with_error_policy(policy);
            let report = tagger.run(&image_folder, &track, layout, Some(&progress))?;

            progress.finish_with_message(&format!("Tagged {} images", report.tagged_count()));

            println!("\n{}", report.summary());

            let missing = report.missing_files();
            if !missing.is_empty() {
                let report_path = error_report.unwrap_or_else(generate_default_report_filename);
                println!(
                    "Could not locate {} files in the source image folder",
                    missing.len()
                );
                write_failure_report(&report_path, &missing)?;
                println!(
                    "See {} for the list of failed files; locate them and reprocess",
                    report_path.display()
                );
            }
        }

        Commands::Inspect { file } => {
            println!("Reading GPS tags from: {}", file.display());

            let location = read_location(&file)?;
            println!("\n{}", location.summary());
        }
    }

    Ok(())
}
