pub mod exif_reader;
pub mod track_reader;

pub use exif_reader::{read_location, StoredLocation};
pub use track_reader::{TrackIterator, TrackReader};
