use crate::error::{Result, TaggingError};
use crate::utils::constants::{
    ALTITUDE_REF_BELOW_SEA_LEVEL, GPS_VERSION, LAT_NEGATIVE_REF, LAT_POSITIVE_REF,
    LON_NEGATIVE_REF, LON_POSITIVE_REF,
};
use crate::utils::coordinates::{to_dms, to_exact_fraction, DmsAngle, Rational};
use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata;
use little_exif::rational::uR64;
use std::path::Path;
use tracing::debug;

/// Assembled GPS tag group, ready to be converted into EXIF tags.
///
/// The altitude reference byte is always written as 1 (below sea level);
/// the sign of the logged altitude is not inspected. The stored altitude
/// rational is the magnitude of the value rounded to whole meters.
#[derive(Debug, Clone, PartialEq)]
pub struct GpsTagBlock {
    pub version: [u8; 4],
    pub altitude_ref: u8,
    pub altitude: Rational,
    pub latitude_ref: String,
    pub latitude: [Rational; 3],
    pub longitude_ref: String,
    pub longitude: [Rational; 3],
}

impl GpsTagBlock {
    pub fn from_coordinates(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        let lat = to_dms(latitude, LAT_NEGATIVE_REF, LAT_POSITIVE_REF);
        let lon = to_dms(longitude, LON_NEGATIVE_REF, LON_POSITIVE_REF);

        Ok(Self {
            version: GPS_VERSION,
            altitude_ref: ALTITUDE_REF_BELOW_SEA_LEVEL,
            altitude: to_exact_fraction(altitude.round())?,
            latitude_ref: lat.reference.clone(),
            latitude: dms_rationals(&lat)?,
            longitude_ref: lon.reference.clone(),
            longitude: dms_rationals(&lon)?,
        })
    }

    /// Lower the block into `little_exif` tags. Setting a tag replaces any
    /// existing value, so re-tagging a file overwrites rather than appends.
    pub fn to_tags(&self) -> Vec<ExifTag> {
        vec![
            ExifTag::GPSVersionID(self.version.to_vec()),
            ExifTag::GPSAltitudeRef(vec![self.altitude_ref]),
            ExifTag::GPSAltitude(vec![to_ur64(self.altitude)]),
            ExifTag::GPSLatitudeRef(self.latitude_ref.clone()),
            ExifTag::GPSLatitude(self.latitude.iter().copied().map(to_ur64).collect()),
            ExifTag::GPSLongitudeRef(self.longitude_ref.clone()),
            ExifTag::GPSLongitude(self.longitude.iter().copied().map(to_ur64).collect()),
        ]
    }
}

/// Writes GPS tag groups into image files in place.
pub struct ExifWriter;

impl ExifWriter {
    pub fn new() -> Self {
        Self
    }

    /// Embed a logged position into the image at `path`.
    ///
    /// The image file is rewritten in place; no backup is kept.
    pub fn embed_location(
        &self,
        path: &Path,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Result<()> {
        let block = GpsTagBlock::from_coordinates(latitude, longitude, altitude)?;

        let mut metadata = Metadata::new_from_path(path).map_err(|e| TaggingError::ExifWrite {
            path: path.display().to_string(),
            message: format!("{e:?}"),
        })?;

        for tag in block.to_tags() {
            metadata.set_tag(tag);
        }

        metadata
            .write_to_file(path)
            .map_err(|e| TaggingError::ExifWrite {
                path: path.display().to_string(),
                message: format!("{e:?}"),
            })?;

        debug!(
            "embedded GPS block into {}: lat {} {:?}, lon {} {:?}, alt {}",
            path.display(),
            block.latitude_ref,
            block.latitude,
            block.longitude_ref,
            block.longitude,
            block.altitude
        );

        Ok(())
    }
}

impl Default for ExifWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn dms_rationals(dms: &DmsAngle) -> Result<[Rational; 3]> {
    Ok([
        to_exact_fraction(dms.degrees as f64)?,
        to_exact_fraction(dms.minutes as f64)?,
        to_exact_fraction(dms.seconds)?,
    ])
}

fn to_ur64(rational: Rational) -> uR64 {
    uR64 {
        nominator: rational.numerator.unsigned_abs() as u32,
        denominator: rational.denominator.unsigned_abs() as u32,
    }
}
