use crate::error::{Result, TaggingError};
use crate::utils::coordinates::Rational;
use exif::{Exif, In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw GPS tag group as stored in an image.
///
/// Values are the encoded rational tuples, not decimal degrees; decoding is
/// left to the caller. Used for inspection only, never on the write path.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredLocation {
    pub latitude_ref: Option<String>,
    pub latitude: Vec<Rational>,
    pub longitude_ref: Option<String>,
    pub longitude: Vec<Rational>,
    pub altitude_ref: Option<u8>,
    pub altitude: Option<Rational>,
}

impl StoredLocation {
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!(
            "Latitude:  {} {}",
            format_triple(&self.latitude),
            self.latitude_ref.as_deref().unwrap_or("(no ref)")
        ));
        lines.push(format!(
            "Longitude: {} {}",
            format_triple(&self.longitude),
            self.longitude_ref.as_deref().unwrap_or("(no ref)")
        ));
        match self.altitude {
            Some(altitude) => lines.push(format!(
                "Altitude:  {} (ref byte {})",
                altitude,
                self.altitude_ref
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| "?".to_string())
            )),
            None => lines.push("Altitude:  (not stored)".to_string()),
        }
        lines.join("\n")
    }
}

/// Load the stored GPS tag group from an image for inspection.
pub fn read_location(path: &Path) -> Result<StoredLocation> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader)?;

    let latitude = rational_values(&exif, Tag::GPSLatitude);
    let longitude = rational_values(&exif, Tag::GPSLongitude);

    if latitude.is_empty() && longitude.is_empty() {
        return Err(TaggingError::MissingGps(path.display().to_string()));
    }

    Ok(StoredLocation {
        latitude_ref: ascii_value(&exif, Tag::GPSLatitudeRef),
        latitude,
        longitude_ref: ascii_value(&exif, Tag::GPSLongitudeRef),
        longitude,
        altitude_ref: byte_value(&exif, Tag::GPSAltitudeRef),
        altitude: rational_values(&exif, Tag::GPSAltitude).first().copied(),
    })
}

fn rational_values(exif: &Exif, tag: Tag) -> Vec<Rational> {
    match exif.get_field(tag, In::PRIMARY).map(|field| &field.value) {
        Some(Value::Rational(values)) => values
            .iter()
            .map(|r| Rational::new(r.num as i64, r.denom as i64))
            .collect(),
        _ => Vec::new(),
    }
}

fn ascii_value(exif: &Exif, tag: Tag) -> Option<String> {
    match exif.get_field(tag, In::PRIMARY).map(|field| &field.value) {
        Some(Value::Ascii(values)) => values
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

fn byte_value(exif: &Exif, tag: Tag) -> Option<u8> {
    match exif.get_field(tag, In::PRIMARY).map(|field| &field.value) {
        Some(Value::Byte(values)) => values.first().copied(),
        _ => None,
    }
}

fn format_triple(values: &[Rational]) -> String {
    values
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
