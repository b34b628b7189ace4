//! Operand bounds validation and sampling

use rand::Rng;

use crate::config::limits::MAX_OPERAND;

/// Inclusive operand range. Only constructible through validation, so
/// `0 <= min <= max` and `max >= 1` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandBounds {
    min: i64,
    max: i64,
}

impl OperandBounds {
    /// Clamp `min` to at least 0 and `max` to at least 1, then swap them if
    /// they are out of order. Values above `MAX_OPERAND` saturate.
    pub fn validate(min: i64, max: i64) -> Self {
        let mut min = min.clamp(0, MAX_OPERAND);
        let mut max = max.clamp(1, MAX_OPERAND);
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Validate a pair of form fields. A field without leading digits is
    /// coerced to its floor: 0 for the minimum, 1 for the maximum.
    pub fn from_fields(min_text: &str, max_text: &str) -> Self {
        let min = parse_leading_int(min_text).unwrap_or(0);
        let max = parse_leading_int(max_text).unwrap_or(1);
        Self::validate(min, max)
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Uniform sample over the closed interval
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Parse the leading base-10 integer of `text`: optional whitespace, an
/// optional sign, then digits. Anything after the digits is ignored.
/// Returns `None` when no digit is present.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(10) else {
            break;
        };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    seen_digit.then_some(if negative { -value } else { value })
}
