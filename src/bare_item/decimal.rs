//
// Copyright 2020 bplist Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
//

//! A fixed-point decimal value, narrowly scoped to the `sf-decimal` grammar
//! production rather than backed by a general-purpose decimal crate.
//!
//! ```abnf,ignore,no_run
//! sf-decimal = ["-"] 1*12DIGIT "." 1*3DIGIT
//! ```

use std::convert::TryFrom;
use std::fmt;

use crate::error::Error;

use super::MAX_INTEGER_MAGNITUDE;

/// A fixed-point value stored as `mantissa * 10^exponent`.
///
/// `exponent` is always one of `0, -1, -2, -3`; `mantissa`'s magnitude is
/// bounded so that the rendered decimal never exceeds 12 integer digits and
/// 3 fractional digits.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct PseudoDecimal {
    mantissa: i64,
    exponent: i8,
}

impl PseudoDecimal {
    /// Constructs a `PseudoDecimal` from a raw `(mantissa, exponent)` pair,
    /// validating both the exponent range and the mantissa magnitude.
    pub fn new(mantissa: i64, exponent: i8) -> Result<Self, Error> {
        if !(-3..=0).contains(&exponent) {
            return Err(Error::InvalidIntegerOrDecimal);
        }
        let limit = 10i64.pow(12 + (-exponent) as u32) - 1;
        if mantissa.unsigned_abs() > (limit.min(MAX_INTEGER_MAGNITUDE)) as u64 {
            return Err(Error::InvalidIntegerOrDecimal);
        }
        Ok(PseudoDecimal { mantissa, exponent })
    }

    /// Constructs a `PseudoDecimal` from an `f64` by multiplying by 1000,
    /// rounding to nearest-even, and snapping to `exponent = -3`.
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::InvalidIntegerOrDecimal);
        }
        let scaled = (value * 1000.0).round_ties_even();
        if scaled.abs() > MAX_INTEGER_MAGNITUDE as f64 {
            return Err(Error::InvalidIntegerOrDecimal);
        }
        Self::new(scaled as i64, -3)
    }

    /// The raw mantissa (the value before multiplying by `10^exponent`).
    pub fn mantissa(&self) -> i64 {
        self.mantissa
    }

    /// The power-of-ten exponent; always in `-3..=0`.
    pub fn exponent(&self) -> i8 {
        self.exponent
    }

    /// Returns the canonical form: an exponent in `{-1, -2, -3}` with no
    /// trailing zero digits after the decimal point when `exponent < -1`.
    ///
    /// Exponent `0` (a whole number with no fractional digits at all) is
    /// re-expressed at exponent `-1` by multiplying the mantissa by 10, since
    /// RFC 9651 requires a decimal point to always be present on output.
    pub fn canonicalize(&self) -> PseudoDecimal {
        let mut mantissa = self.mantissa;
        let mut exponent = self.exponent;

        if exponent == 0 {
            mantissa *= 10;
            exponent = -1;
        }

        while exponent < -1 && mantissa % 10 == 0 {
            mantissa /= 10;
            exponent += 1;
        }

        PseudoDecimal { mantissa, exponent }
    }
}

impl TryFrom<(i64, i8)> for PseudoDecimal {
    type Error = Error;

    fn try_from((mantissa, exponent): (i64, i8)) -> Result<Self, Error> {
        PseudoDecimal::new(mantissa, exponent)
    }
}

impl TryFrom<f64> for PseudoDecimal {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Error> {
        PseudoDecimal::from_f64(value)
    }
}

impl fmt::Display for PseudoDecimal {
    /// Renders the canonical decimal form: `[-]D+.d{1,3}`, with a leading
    /// zero when the integer part would otherwise be empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canon = self.canonicalize();
        let digits = -(canon.exponent as i32);
        let magnitude = canon.mantissa.unsigned_abs();
        let divisor = 10u64.pow(digits as u32);
        let int_part = magnitude / divisor;
        let frac_part = magnitude % divisor;

        if canon.mantissa < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}.{:0width$}", int_part, frac_part, width = digits as usize)
    }
}
