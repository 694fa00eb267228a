use crate::error::{Result, TaggingError};
use crate::utils::constants::SECONDS_DECIMAL_PLACES;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Degrees/minutes/seconds form of a decimal-degree coordinate.
///
/// The reference letter carries the hemisphere (N/S for latitude, E/W for
/// longitude). A value of exactly zero produces an empty reference string:
/// a point on the equator or prime meridian is written without a hemisphere
/// letter. Downstream tag readers treat a missing reference as unsigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmsAngle {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub reference: String,
}

/// Numerator/denominator pair holding a decimal value exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Convert a decimal-degree value into degrees, minutes and seconds.
///
/// `negative_ref` and `positive_ref` are the hemisphere letters for the axis,
/// e.g. `('S', 'N')` for latitude or `('W', 'E')` for longitude. Seconds are
/// rounded to 5 decimal places. No range check is applied; values beyond
/// +/-90 or +/-180 convert like any other.
///
/// # Examples
/// ```
/// use survey_tagger::utils::coordinates::to_dms;
///
/// let dms = to_dms(25.229817, 'S', 'N');
/// assert_eq!(dms.degrees, 25);
/// assert_eq!(dms.minutes, 13);
/// assert_eq!(dms.reference, "N");
/// ```
pub fn to_dms(value: f64, negative_ref: char, positive_ref: char) -> DmsAngle {
    let reference = if value < 0.0 {
        negative_ref.to_string()
    } else if value > 0.0 {
        positive_ref.to_string()
    } else {
        String::new()
    };

    let abs_value = value.abs();
    let degrees = abs_value as u32;
    let total_minutes = (abs_value - degrees as f64) * 60.0;
    let minutes = total_minutes as u32;
    let seconds = round_to_places(
        (total_minutes - minutes as f64) * 60.0,
        SECONDS_DECIMAL_PLACES,
    );

    DmsAngle {
        degrees,
        minutes,
        seconds,
        reference,
    }
}

/// Build the exact reduced fraction of a value's decimal rendering.
///
/// The fraction is derived from the shortest decimal string for the value,
/// not from its binary mantissa, so `48.343` becomes `48343/1000` rather
/// than a denominator-heavy approximation. Dividing numerator by denominator
/// reproduces the original decimal digits exactly.
pub fn to_exact_fraction(value: f64) -> Result<Rational> {
    if !value.is_finite() {
        return Err(TaggingError::InvalidFormat(format!(
            "cannot express '{value}' as a fraction"
        )));
    }

    let rendered = value.to_string();
    let negative = rendered.starts_with('-');
    let unsigned = rendered.trim_start_matches('-');
    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (unsigned, ""),
    };

    let digits = format!("{integer_part}{fraction_part}");
    let numerator = digits.parse::<i64>().map_err(|_| {
        TaggingError::InvalidFormat(format!("value '{rendered}' overflows exact fraction range"))
    })?;
    let denominator = 10i64
        .checked_pow(fraction_part.len() as u32)
        .ok_or_else(|| {
            TaggingError::InvalidFormat(format!(
                "value '{rendered}' overflows exact fraction range"
            ))
        })?;

    let divisor = gcd(numerator.unsigned_abs(), denominator as u64) as i64;
    let mut numerator = numerator / divisor;
    if negative {
        numerator = -numerator;
    }

    Ok(Rational::new(numerator, denominator / divisor))
}

fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
