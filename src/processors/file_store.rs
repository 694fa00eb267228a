use crate::error::Result;
use crate::writers::ExifWriter;
use std::path::Path;

/// Filesystem capability used by the batch pass.
///
/// The batch loop only ever asks whether an image exists and, if so, to embed
/// a position into it. Keeping that behind a trait lets tests drive the loop
/// against an in-memory store.
pub trait FileStore {
    fn exists(&self, path: &Path) -> bool;

    fn embed_location(
        &self,
        path: &Path,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Result<()>;
}

/// Real store: existence checks against disk, writes through [`ExifWriter`].
pub struct DiskStore {
    writer: ExifWriter,
}

impl DiskStore {
    pub fn new() -> Self {
        Self {
            writer: ExifWriter::new(),
        }
    }
}

impl Default for DiskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn embed_location(
        &self,
        path: &Path,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Result<()> {
        self.writer.embed_location(path, latitude, longitude, altitude)
    }
}
