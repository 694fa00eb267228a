pub mod exif_writer;
pub mod report_writer;

pub use exif_writer::{ExifWriter, GpsTagBlock};
pub use report_writer::write_failure_report;
