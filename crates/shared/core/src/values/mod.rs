use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bond price
pub type Price = f64;

/// Interest rate, in percent
pub type Rate = f64;

/// Number of significant digits used when rendering values for display
pub const DISPLAY_PRECISION: usize = 6;

/// Errors raised when building a [`ValueRange`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueRangeError {
    #[error("Range bounds must be finite: [{low}, {high})")]
    NonFinite { low: f64, high: f64 },

    #[error("Range is empty: [{low}, {high})")]
    Empty { low: f64, high: f64 },
}

/// Half-open interval `[low, high)` that generated values are drawn from
///
/// Deserialization goes through [`ValueRange::new`], so an invalid range is
/// rejected instead of reaching a sampler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValueRange")]
pub struct ValueRange {
    low: f64,
    high: f64,
}

impl ValueRange {
    pub fn new(low: f64, high: f64) -> Result<Self, ValueRangeError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ValueRangeError::NonFinite { low, high });
        }
        if low >= high {
            return Err(ValueRangeError::Empty { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Check that `value` lies in `[low, high)`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }
}

/// Unchecked wire shape of [`ValueRange`]
#[derive(Deserialize)]
struct RawValueRange {
    low: f64,
    high: f64,
}

impl TryFrom<RawValueRange> for ValueRange {
    type Error = ValueRangeError;

    fn try_from(raw: RawValueRange) -> Result<Self, Self::Error> {
        ValueRange::new(raw.low, raw.high)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            low: 1.0,
            high: 100.0,
        }
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.low, self.high)
    }
}

/// Render a value with `digits` significant digits, the way `%g` does.
///
/// Trailing zeros (and a dangling decimal point) are dropped, and very large
/// or very small magnitudes switch to scientific notation:
///
/// ```
/// use mdproc_core::values::format_significant;
///
/// assert_eq!(format_significant(42.5, 6), "42.5");
/// assert_eq!(format_significant(3.14159265, 6), "3.14159");
/// assert_eq!(format_significant(1234567.0, 6), "1.23457e+06");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);
    // Round to the requested precision first so that 99.99999 is seen as 100
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let range = ValueRange::default();
        assert_eq!(range.low(), 1.0);
        assert_eq!(range.high(), 100.0);
        assert!(range.contains(1.0));
        assert!(range.contains(99.999));
        assert!(!range.contains(100.0));
        assert!(!range.contains(0.5));
    }

    #[test]
    fn test_range_validation() {
        assert!(ValueRange::new(1.0, 2.0).is_ok());
        assert_eq!(
            ValueRange::new(5.0, 5.0),
            Err(ValueRangeError::Empty {
                low: 5.0,
                high: 5.0
            })
        );
        assert!(matches!(
            ValueRange::new(f64::NEG_INFINITY, 1.0),
            Err(ValueRangeError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_range_deserialize_validates() {
        let range: ValueRange = serde_json::from_str(r#"{"low":1.0,"high":100.0}"#).unwrap();
        assert_eq!(range, ValueRange::default());

        let reversed = serde_json::from_str::<ValueRange>(r#"{"low":50.0,"high":1.0}"#);
        assert!(reversed.is_err(), "Reversed range should be rejected");

        let empty = serde_json::from_str::<ValueRange>(r#"{"low":5.0,"high":5.0}"#);
        assert!(empty.is_err(), "Empty range should be rejected");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_significant(42.0, 6), "42");
        assert_eq!(format_significant(1.5, 6), "1.5");
        assert_eq!(format_significant(57.123456789, 6), "57.1235");
        assert_eq!(format_significant(3.14159265, 6), "3.14159");
        assert_eq!(format_significant(-2.25, 6), "-2.25");
        assert_eq!(format_significant(0.001, 6), "0.001");
    }

    #[test]
    fn test_format_rounds_up_across_magnitude() {
        assert_eq!(format_significant(99.9999999, 6), "100");
        assert_eq!(format_significant(999999.7, 6), "1e+06");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_significant(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_significant(0.00001234, 6), "1.234e-05");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_significant(0.0, 6), "0");
        assert_eq!(format_significant(-0.0, 6), "-0");
        assert_eq!(format_significant(f64::NAN, 6), "nan");
        assert_eq!(format_significant(f64::INFINITY, 6), "inf");
        assert_eq!(format_significant(f64::NEG_INFINITY, 6), "-inf");
    }
}
