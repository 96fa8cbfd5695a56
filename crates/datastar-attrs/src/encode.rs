//! Numeric encoders for value modifiers.
//!
//! Both encoders validate their input and return a [`Modifier`] ready to be
//! appended after the behavior modifier it parameterizes:
//!
//! ```
//! use chrono::TimeDelta;
//! use datastar_attrs::{encode, Modifier};
//!
//! let debounce = encode::duration(TimeDelta::milliseconds(500)).unwrap();
//! assert_eq!(debounce, Modifier::Millis(500));
//! assert_eq!(encode::threshold(0.25).unwrap().to_string(), ".25");
//! ```

use chrono::TimeDelta;

use crate::error::{DatastarError, Result};
use crate::modifier::{Hundredths, Modifier};

const HALF_MILLISECOND_NANOS: i64 = 500_000;

/// Encode a duration as whole milliseconds, rounding half-up.
///
/// Fails if the duration is negative.
pub fn duration(d: TimeDelta) -> Result<Modifier> {
    if d < TimeDelta::zero() {
        return Err(DatastarError::NegativeDuration(d));
    }
    let whole = d.num_milliseconds();
    // The remainder is below one millisecond, so it always fits in nanoseconds.
    let remainder = d - TimeDelta::milliseconds(whole);
    let round_up = remainder
        .num_nanoseconds()
        .is_some_and(|nanos| nanos >= HALF_MILLISECOND_NANOS);
    Ok(Modifier::Millis(whole.unsigned_abs() + u64::from(round_up)))
}

/// Encode a visibility ratio for the `__threshold` modifier.
///
/// The ratio must be in `(0.0, 1.0]`. `1.0` becomes `.100`; anything else is
/// rounded to two decimals the way it would print, so `0.335` becomes `.34`.
pub fn threshold(ratio: f64) -> Result<Modifier> {
    if ratio.is_nan() || ratio <= 0.0 || ratio > 1.0 {
        return Err(DatastarError::ThresholdOutOfRange(ratio));
    }
    let printed = format!("{ratio:.2}");
    let hundredths = match printed.split_once('.') {
        Some(("0", digits)) => digits.parse().ok(),
        // Only "1.00" is left here, either exact or rounded up from 0.995+.
        _ => Some(100),
    };
    hundredths
        .and_then(Hundredths::new)
        .map(Modifier::Percent)
        .ok_or(DatastarError::ThresholdOutOfRange(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded_duration(d: TimeDelta) -> String {
        duration(d).unwrap().to_string()
    }

    fn encoded_threshold(ratio: f64) -> String {
        threshold(ratio).unwrap().to_string()
    }

    #[test]
    fn negative_duration_fails() {
        let err = duration(TimeDelta::nanoseconds(-1)).unwrap_err();
        assert!(matches!(err, DatastarError::NegativeDuration(_)));
    }

    #[test]
    fn zero_duration_is_zero_ms() {
        assert_eq!(encoded_duration(TimeDelta::zero()), ".0ms");
    }

    #[test]
    fn small_duration_rounds_down() {
        assert_eq!(encoded_duration(TimeDelta::microseconds(100)), ".0ms");
        assert_eq!(encoded_duration(TimeDelta::microseconds(499)), ".0ms");
    }

    #[test]
    fn half_millisecond_rounds_up() {
        assert_eq!(encoded_duration(TimeDelta::microseconds(500)), ".1ms");
        assert_eq!(encoded_duration(TimeDelta::microseconds(1500)), ".2ms");
    }

    #[test]
    fn whole_milliseconds_are_kept() {
        assert_eq!(encoded_duration(TimeDelta::milliseconds(1)), ".1ms");
        assert_eq!(encoded_duration(TimeDelta::milliseconds(500)), ".500ms");
    }

    #[test]
    fn seconds_stay_in_milliseconds() {
        assert_eq!(encoded_duration(TimeDelta::seconds(1)), ".1000ms");
        assert_eq!(encoded_duration(TimeDelta::seconds(90)), ".90000ms");
    }

    #[test]
    fn threshold_out_of_range_fails() {
        for ratio in [-0.1, 0.0, 1.1, f64::NAN] {
            let err = threshold(ratio).unwrap_err();
            assert!(matches!(err, DatastarError::ThresholdOutOfRange(_)));
        }
    }

    #[test]
    fn threshold_is_the_only_way_to_a_percent() {
        for ratio in [0.01, 0.5, 0.999, 1.0] {
            let Modifier::Percent(hundredths) = threshold(ratio).unwrap() else {
                panic!("threshold({ratio}) is not a percent");
            };
            assert!(hundredths.get() <= 100);
        }
        for ratio in [1.5, 150.0, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(threshold(ratio).is_err(), "{ratio}");
        }
    }

    #[test]
    fn threshold_one_is_one_hundred() {
        assert_eq!(encoded_threshold(1.0), ".100");
    }

    #[test]
    fn threshold_keeps_two_digits() {
        assert_eq!(encoded_threshold(0.25), ".25");
        assert_eq!(encoded_threshold(0.5), ".50");
        assert_eq!(encoded_threshold(0.05), ".05");
    }

    #[test]
    fn threshold_rounds_at_second_decimal() {
        assert_eq!(encoded_threshold(0.333), ".33");
        assert_eq!(encoded_threshold(0.335), ".34");
    }

    #[test]
    fn threshold_rounding_up_to_one_is_one_hundred() {
        assert_eq!(encoded_threshold(0.999), ".100");
    }
}
