use crate::error::{Result, TaggingError};
use crate::models::{ColumnLayout, GpsRecord};
use csv::StringRecord;
use std::fs::File;
use std::path::Path;

/// Reads flight-log CSV files row by row.
///
/// The first row is always treated as a header and skipped. Fields are
/// addressed by the caller-supplied [`ColumnLayout`]; rows may carry extra
/// columns beyond the ones named there.
pub struct TrackReader {
    layout: ColumnLayout,
}

impl TrackReader {
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    /// Open the log and iterate its data rows one at a time.
    pub fn records(&self, path: &Path) -> Result<TrackIterator> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        Ok(TrackIterator {
            records: reader.into_records(),
            layout: self.layout,
        })
    }

    /// Read the full log into memory, failing on the first bad row.
    pub fn read_records(&self, path: &Path) -> Result<Vec<GpsRecord>> {
        self.records(path)?.collect()
    }
}

pub struct TrackIterator {
    records: csv::StringRecordsIntoIter<File>,
    layout: ColumnLayout,
}

impl Iterator for TrackIterator {
    type Item = Result<GpsRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        Some(parse_record(&record, &self.layout, line))
    }
}

fn parse_record(record: &StringRecord, layout: &ColumnLayout, line: u64) -> Result<GpsRecord> {
    if record.len() < layout.min_columns() {
        return Err(TaggingError::MalformedRow {
            line,
            message: format!(
                "expected at least {} columns, found {}",
                layout.min_columns(),
                record.len()
            ),
        });
    }

    let file_name = record.get(layout.name).unwrap_or_default().trim().to_string();
    let latitude = parse_float(record, layout.latitude, "latitude", line)?;
    let longitude = parse_float(record, layout.longitude, "longitude", line)?;
    let altitude = parse_float(record, layout.altitude, "altitude", line)?;

    Ok(GpsRecord::new(file_name, latitude, longitude, altitude))
}

fn parse_float(record: &StringRecord, index: usize, field: &str, line: u64) -> Result<f64> {
    let raw = record.get(index).unwrap_or_default().trim();
    raw.parse::<f64>().map_err(|_| TaggingError::MalformedRow {
        line,
        message: format!("invalid {field} value '{raw}'"),
    })
}
