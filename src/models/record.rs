use crate::utils::constants::{
    DEFAULT_ALT_COLUMN, DEFAULT_LAT_COLUMN, DEFAULT_LON_COLUMN, DEFAULT_NAME_COLUMN,
};
use serde::{Deserialize, Serialize};

/// One flight-log row: an image name and its logged position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsRecord {
    pub file_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl GpsRecord {
    pub fn new(file_name: String, latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            file_name,
            latitude,
            longitude,
            altitude,
        }
    }
}

/// Caller-supplied 0-based column positions in the flight log.
///
/// Columns are positional; header names are never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub name: usize,
    pub latitude: usize,
    pub longitude: usize,
    pub altitude: usize,
}

impl ColumnLayout {
    pub fn new(name: usize, latitude: usize, longitude: usize, altitude: usize) -> Self {
        Self {
            name,
            latitude,
            longitude,
            altitude,
        }
    }

    /// Minimum number of columns a data row must have.
    pub fn min_columns(&self) -> usize {
        self.name
            .max(self.latitude)
            .max(self.longitude)
            .max(self.altitude)
            + 1
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(
            DEFAULT_NAME_COLUMN,
            DEFAULT_LAT_COLUMN,
            DEFAULT_LON_COLUMN,
            DEFAULT_ALT_COLUMN,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = ColumnLayout::default();
        assert_eq!(layout.name, 0);
        assert_eq!(layout.altitude, 3);
        assert_eq!(layout.min_columns(), 4);
    }

    #[test]
    fn test_min_columns_tracks_highest_index() {
        let layout = ColumnLayout::new(7, 1, 2, 3);
        assert_eq!(layout.min_columns(), 8);
    }
}
