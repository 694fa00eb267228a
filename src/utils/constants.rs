/// EXIF GPS tag group version marker (2.0.0.0)
pub const GPS_VERSION: [u8; 4] = [2, 0, 0, 0];

/// Altitude reference bytes
pub const ALTITUDE_REF_ABOVE_SEA_LEVEL: u8 = 0;
pub const ALTITUDE_REF_BELOW_SEA_LEVEL: u8 = 1;

/// Hemisphere reference letters
pub const LAT_NEGATIVE_REF: char = 'S';
pub const LAT_POSITIVE_REF: char = 'N';
pub const LON_NEGATIVE_REF: char = 'W';
pub const LON_POSITIVE_REF: char = 'E';

/// Seconds precision in the DMS encoding
pub const SECONDS_DECIMAL_PLACES: i32 = 5;

/// Default flight-log column indices (0-based)
pub const DEFAULT_NAME_COLUMN: usize = 0;
pub const DEFAULT_LAT_COLUMN: usize = 1;
pub const DEFAULT_LON_COLUMN: usize = 2;
pub const DEFAULT_ALT_COLUMN: usize = 3;
