//! The fixed-point length scalar.
//!
//! A [`Length`] stores an exact signed count of English Metric Units.
//! 1 EMU = 1/360 hundredth-mm = 1/914400 inch = 1/12700 point, so every
//! factory working from an integral quantity is lossless: the input is
//! multiplied by an exact integer factor and nothing else.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::errors::ParseLengthError;

/// EMU per hundredth of a millimeter.
pub const EMU_PER_HMM: i64 = 360;
/// EMU per millimeter.
pub const EMU_PER_MM: i64 = EMU_PER_HMM * 100;
/// EMU per centimeter.
pub const EMU_PER_CM: i64 = EMU_PER_HMM * 1_000;
/// EMU per meter.
pub const EMU_PER_M: i64 = EMU_PER_HMM * 100_000;
/// EMU per twip (1/1440 inch).
pub const EMU_PER_TWIP: i64 = 635;
/// EMU per inch.
pub const EMU_PER_INCH: i64 = EMU_PER_TWIP * 1_440;
/// EMU per typographic point (1/72 inch).
pub const EMU_PER_PT: i64 = EMU_PER_TWIP * 20;
/// EMU per pixel, at the conventional 96 dpi.
pub const EMU_PER_PX: i64 = EMU_PER_TWIP * 15;

mod sealed {
    pub trait Sealed {}
}

/// Numeric input accepted by the [`Length`] unit factories.
///
/// Integer inputs are exact: the value is widened to `i64` and multiplied
/// by the unit factor (wrapping past the `i64` range). Floating inputs
/// multiply in `f64` and round to the nearest EMU, saturating at the `i64`
/// bounds.
pub trait UnitValue: sealed::Sealed + Copy {
    /// Scale `self` by `factor` EMU per unit into a raw EMU count.
    fn to_emu(self, factor: i64) -> i64;
}

macro_rules! unit_value_int {
    ($($ty:ty)*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl UnitValue for $ty {
                #[inline]
                fn to_emu(self, factor: i64) -> i64 {
                    factor.wrapping_mul(self as i64)
                }
            }
        )*
    };
}
unit_value_int!(i16 i32 i64 u16 u32);

macro_rules! unit_value_float {
    ($($ty:ty)*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl UnitValue for $ty {
                #[inline]
                fn to_emu(self, factor: i64) -> i64 {
                    (factor as f64 * self as f64).round() as i64
                }
            }
        )*
    };
}
unit_value_float!(f32 f64);

/// A physical length held as an exact EMU count.
///
/// Value semantics throughout: every operation yields a new `Length`, and
/// comparisons are exact integer comparisons on the raw EMU value. All
/// arithmetic wraps at the `i64` bounds (two's complement); there is no
/// overflow detection. Scalar division truncates and panics on a zero
/// divisor like any Rust integer division; [`Length::checked_div`] is the
/// guarded alternative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length(i64);

impl Length {
    /// The zero length.
    pub const ZERO: Length = Length(0);

    /// The most negative representable length (`i64::MIN` EMU).
    pub const MIN: Length = Length(i64::MIN);

    /// The largest representable length (`i64::MAX` EMU).
    pub const MAX: Length = Length(i64::MAX);

    /// Create a length from centimeters.
    pub fn cm<V: UnitValue>(value: V) -> Length {
        Length(value.to_emu(EMU_PER_CM))
    }

    /// Create a length from millimeters.
    pub fn mm<V: UnitValue>(value: V) -> Length {
        Length(value.to_emu(EMU_PER_MM))
    }

    /// Create a length from hundredths of a millimeter.
    pub fn hmm<V: UnitValue>(value: V) -> Length {
        Length(value.to_emu(EMU_PER_HMM))
    }

    /// Create a length from inches.
    pub fn inch<V: UnitValue>(value: V) -> Length {
        Length(value.to_emu(EMU_PER_INCH))
    }

    /// Create a length from twips (1/1440 inch).
    pub fn twip<V: UnitValue>(value: V) -> Length {
        Length(value.to_emu(EMU_PER_TWIP))
    }

    /// Create a length from typographic points.
    pub fn pt<V: UnitValue>(value: V) -> Length {
        Length(value.to_emu(EMU_PER_PT))
    }

    /// Create a length from 96-dpi pixels.
    pub fn px<V: UnitValue>(value: V) -> Length {
        Length(value.to_emu(EMU_PER_PX))
    }

    /// Create a length from a raw EMU count.
    pub fn emu<V: UnitValue>(value: V) -> Length {
        Length(value.to_emu(1))
    }

    /// The exact EMU count. The only lossless observer.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// This length in hundredths of a millimeter (lossy, for display and
    /// interop; not meant for further fixed-point computation).
    pub fn as_hmm(self) -> f64 {
        self.0 as f64 / EMU_PER_HMM as f64
    }

    /// This length in millimeters (lossy).
    pub fn as_mm(self) -> f64 {
        self.0 as f64 / EMU_PER_MM as f64
    }

    /// This length in centimeters (lossy).
    pub fn as_cm(self) -> f64 {
        self.0 as f64 / EMU_PER_CM as f64
    }

    /// This length in meters (lossy).
    pub fn as_m(self) -> f64 {
        self.0 as f64 / EMU_PER_M as f64
    }

    /// This length in twips (lossy).
    pub fn as_twip(self) -> f64 {
        self.0 as f64 / EMU_PER_TWIP as f64
    }

    /// This length in inches (lossy).
    pub fn as_inch(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH as f64
    }

    /// This length in typographic points (lossy).
    pub fn as_pt(self) -> f64 {
        self.0 as f64 / EMU_PER_PT as f64
    }

    /// This length in 96-dpi pixels (lossy).
    pub fn as_px(self) -> f64 {
        self.0 as f64 / EMU_PER_PX as f64
    }

    /// This length as a floating EMU count.
    pub fn as_emu(self) -> f64 {
        self.0 as f64
    }

    /// Whether this is the zero length.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The absolute value (wrapping: `MIN.abs()` stays `MIN`).
    #[inline]
    pub fn abs(self) -> Length {
        Length(self.0.wrapping_abs())
    }

    /// The minimum of this and the other length.
    #[inline]
    pub fn min(self, other: Length) -> Length {
        if self <= other { self } else { other }
    }

    /// The maximum of this and the other length.
    #[inline]
    pub fn max(self, other: Length) -> Length {
        if self >= other { self } else { other }
    }

    /// This length clamped into `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Length, hi: Length) -> Length {
        self.max(lo).min(hi)
    }

    /// Truncating scalar division, `None` on a zero divisor.
    #[inline]
    pub fn checked_div(self, rhs: i64) -> Option<Length> {
        if rhs == 0 {
            None
        } else {
            Some(Length(self.0.wrapping_div(rhs)))
        }
    }

    /// The dimensionless ratio of two lengths, `None` on a zero divisor.
    ///
    /// The `/` operator between lengths computes the same ratio but under
    /// IEEE semantics, so a zero divisor yields an infinity or NaN there.
    #[inline]
    pub fn ratio(self, rhs: Length) -> Option<f64> {
        if rhs.0 == 0 {
            None
        } else {
            Some(self.0 as f64 / rhs.0 as f64)
        }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        *self = *self + rhs;
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Length) {
        *self = *self - rhs;
    }
}

/// Scaling by an integer: `1cm * 2 = 2cm`.
impl Mul<i64> for Length {
    type Output = Length;

    fn mul(self, rhs: i64) -> Length {
        Length(self.0.wrapping_mul(rhs))
    }
}

impl Mul<Length> for i64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

impl MulAssign<i64> for Length {
    fn mul_assign(&mut self, rhs: i64) {
        *self = *self * rhs;
    }
}

/// Truncating integer division: `1cm / 2 = 0.5cm`. Panics on zero.
impl Div<i64> for Length {
    type Output = Length;

    fn div(self, rhs: i64) -> Length {
        Length(self.0.wrapping_div(rhs))
    }
}

impl DivAssign<i64> for Length {
    fn div_assign(&mut self, rhs: i64) {
        *self = *self / rhs;
    }
}

/// Dividing two lengths yields a dimensionless ratio: `1cm / 2cm = 0.5`.
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 as f64 / rhs.0 as f64
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length(self.0.wrapping_neg())
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Length {
        iter.fold(Length::ZERO, Add::add)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}emu", self.0)
    }
}

// Longest suffixes first so "mm" does not shadow "hmm", nor "m" the two
// of them; every factor is EMU per unit.
const UNIT_SUFFIXES: [(&str, i64); 9] = [
    ("twip", EMU_PER_TWIP),
    ("emu", 1),
    ("hmm", EMU_PER_HMM),
    ("mm", EMU_PER_MM),
    ("cm", EMU_PER_CM),
    ("pt", EMU_PER_PT),
    ("px", EMU_PER_PX),
    ("in", EMU_PER_INCH),
    ("m", EMU_PER_M),
];

impl FromStr for Length {
    type Err = ParseLengthError;

    /// Parse `"<number><unit>"`, e.g. `"2.5cm"` or `"360emu"`.
    ///
    /// An integral number goes through the exact integer path; anything
    /// else parses as `f64` and rounds to the nearest EMU.
    fn from_str(src: &str) -> Result<Length, ParseLengthError> {
        let src = src.trim();
        let (number, factor) = UNIT_SUFFIXES
            .iter()
            .find_map(|&(suffix, factor)| {
                src.strip_suffix(suffix)
                    .map(|head| (head.trim_end(), factor))
            })
            .ok_or_else(|| ParseLengthError::UnknownUnit {
                input: src.to_string(),
            })?;

        if let Ok(n) = number.parse::<i64>() {
            return Ok(Length(n.to_emu(factor)));
        }

        let n: f64 = number
            .parse()
            .map_err(|_| ParseLengthError::InvalidNumber {
                input: src.to_string(),
            })?;
        if !n.is_finite() {
            return Err(ParseLengthError::NonFinite {
                input: src.to_string(),
            });
        }
        Ok(Length(n.to_emu(factor)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centimeter_chain_is_exact() {
        let len = Length::cm(1) + Length::cm(5) - Length::cm(2);
        assert_eq!(len.raw(), 1_440_000);
        assert_relative_eq!(len.as_cm(), 4.0, epsilon = 1e-4);
        assert_relative_eq!(len.as_m(), 0.04, epsilon = 1e-4);
        assert_relative_eq!(len.as_mm(), 40.0, epsilon = 1e-4);
    }

    #[test]
    fn scalar_multiplication() {
        let len = Length::cm(5) * 2;
        assert_eq!(len.raw(), 3_600_000);
        assert_relative_eq!(len.as_cm(), 10.0, epsilon = 1e-4);

        assert_eq!(2 * Length::cm(5), len);
    }

    #[test]
    fn large_values_stay_exact() {
        // 1 km - 50 m = 950 m = 95000 cm
        let len = Length::cm(100_000) - Length::cm(5_000);
        assert_eq!(len.raw(), 34_200_000_000);
        assert_relative_eq!(len.as_cm(), 95_000.0, epsilon = 1e-4);
    }

    #[test]
    fn mixed_unit_addition() {
        // (635 * 20) + 3 * (635 * 15) = 41275 EMU
        let len = Length::pt(1) + Length::px(3);
        assert_eq!(len.raw(), 41_275);
        assert_relative_eq!(len.as_pt(), 3.25, epsilon = 1e-4);
        assert_relative_eq!(len.as_twip(), 65.0, epsilon = 1e-4);
        assert_relative_eq!(len.as_inch(), 0.0451, epsilon = 1e-4);
    }

    #[test]
    fn one_inch_in_every_unit() {
        let inch = Length::inch(1);
        assert_relative_eq!(inch.as_twip(), 1_440.0, epsilon = 1e-4);
        assert_relative_eq!(inch.as_px(), 96.0, epsilon = 1e-4);
        assert_relative_eq!(inch.as_inch(), 1.0, epsilon = 1e-4);
        assert_relative_eq!(inch.as_emu(), 914_400.0, epsilon = 1e-4);
        assert_eq!(inch.raw(), 914_400);
    }

    #[test]
    fn every_factory_round_trips_through_its_accessor() {
        let n = 7;
        assert_relative_eq!(Length::cm(n).as_cm(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(Length::mm(n).as_mm(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(Length::hmm(n).as_hmm(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(Length::inch(n).as_inch(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(Length::pt(n).as_pt(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(Length::px(n).as_px(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(Length::twip(n).as_twip(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(Length::emu(n).as_emu(), 7.0, epsilon = 1e-9);
    }

    #[test]
    fn raw_round_trips_through_emu() {
        let mut as_number = Length::pt(17).raw();
        as_number += Length::pt(1).raw();
        let len = Length::emu(as_number);
        assert_eq!(len.raw(), 18 * 635 * 20);
    }

    #[test]
    fn emu_addition_matches_integer_addition() {
        let len = Length::emu(27) + Length::emu(33) + Length::hmm(1);
        assert_eq!(len.raw(), 420);
        assert_eq!(Length::emu(27 + 33), Length::emu(27) + Length::emu(33));
    }

    #[test]
    fn integer_factories() {
        let number = 10;
        assert_eq!(Length::cm(number).raw(), 3_600_000);
        assert_relative_eq!(Length::cm(number).as_cm(), 10.0, epsilon = 1e-4);
        assert_eq!(Length::mm(number).raw(), 360_000);
        assert_relative_eq!(Length::mm(number).as_mm(), 10.0, epsilon = 1e-4);
        assert_eq!(Length::inch(number).raw(), 9_144_000);
        assert_relative_eq!(Length::inch(number).as_inch(), 10.0, epsilon = 1e-4);
    }

    #[test]
    fn integer_input_truncates_float_input_rounds() {
        // An integral input multiplies exactly.
        assert_eq!(Length::hmm(10), Length::emu(3_600));
        // A floating input scales first, then rounds to the nearest EMU.
        assert_eq!(Length::hmm(10.1), Length::emu(3_636));
        assert_eq!(Length::pt(0.5), Length::emu(6_350));
    }

    #[test]
    fn representable_bounds_round_trip() {
        let maximum = Length::emu(i64::MAX);
        assert_eq!(maximum.raw(), i64::MAX);
        // about 256204778 km
        assert_relative_eq!(maximum.as_m(), 256_204_778_801.5, epsilon = 1e-1);

        let minimum = Length::emu(i64::MIN);
        assert_eq!(minimum.raw(), i64::MIN);
        assert_relative_eq!(minimum.as_m(), -256_204_778_801.5, epsilon = 1e-1);
        assert_relative_eq!(minimum.as_emu(), i64::MIN as f64, epsilon = 1e-1);

        assert_eq!(maximum, Length::MAX);
        assert_eq!(minimum, Length::MIN);
    }

    #[test]
    fn arithmetic_wraps_at_the_bounds() {
        assert_eq!(Length::MAX + Length::emu(1), Length::MIN);
        assert_eq!(Length::MIN - Length::emu(1), Length::MAX);
        assert_eq!(-Length::MIN, Length::MIN);
    }

    #[test]
    fn scalar_division_truncates() {
        let mut len = Length::cm(1);
        len /= 2;
        assert_eq!(len.raw(), 180_000);
        assert_relative_eq!(len.as_cm(), 0.5, epsilon = 1e-4);

        assert_eq!(Length::emu(7) / 2, Length::emu(3));
        assert_eq!(Length::emu(-7) / 2, Length::emu(-3));
    }

    #[test]
    fn checked_div_guards_zero() {
        assert_eq!(Length::cm(1).checked_div(2), Some(Length::emu(180_000)));
        assert_eq!(Length::cm(1).checked_div(0), None);
    }

    #[test]
    fn length_division_yields_ratio() {
        let ratio = Length::hmm(10) / Length::hmm(20);
        assert_relative_eq!(ratio, 0.5, epsilon = 1e-9);

        assert_eq!(Length::hmm(10).ratio(Length::hmm(20)), Some(0.5));
        assert_eq!(Length::hmm(10).ratio(Length::ZERO), None);
    }

    #[test]
    fn ordering_and_comparisons() {
        assert!(Length::cm(1) < Length::cm(2));
        assert!(Length::mm(10) <= Length::cm(1));
        assert!(Length::mm(10) >= Length::cm(1));
        assert_eq!(Length::mm(10), Length::cm(1));
        assert_ne!(Length::mm(10), Length::cm(2));
    }

    #[test]
    fn helpers() {
        assert_eq!(Length::cm(1).min(Length::cm(2)), Length::cm(1));
        assert_eq!(Length::cm(1).max(Length::cm(2)), Length::cm(2));
        assert_eq!(Length::cm(-1).abs(), Length::cm(1));
        assert_eq!(
            Length::cm(5).clamp(Length::cm(1), Length::cm(3)),
            Length::cm(3)
        );
        assert!(Length::ZERO.is_zero());
        assert!(!Length::emu(1).is_zero());
    }

    #[test]
    fn sum_of_lengths() {
        let total: Length = [Length::cm(1), Length::mm(5), Length::hmm(50)]
            .into_iter()
            .sum();
        assert_eq!(total.raw(), 360_000 + 180_000 + 18_000);
    }

    #[test]
    fn display_shows_raw_emu() {
        assert_eq!(Length::cm(1).to_string(), "360000emu");
        assert_eq!(Length::emu(-5).to_string(), "-5emu");
    }

    #[test]
    fn parse_integral_quantities() {
        assert_eq!("4cm".parse::<Length>().unwrap(), Length::cm(4));
        assert_eq!("10hmm".parse::<Length>().unwrap(), Length::hmm(10));
        assert_eq!("360emu".parse::<Length>().unwrap(), Length::emu(360));
        assert_eq!("1in".parse::<Length>().unwrap(), Length::inch(1));
        assert_eq!("3m".parse::<Length>().unwrap(), Length::emu(108_000_000));
        assert_eq!("-2pt".parse::<Length>().unwrap(), Length::pt(-2));
        assert_eq!("20twip".parse::<Length>().unwrap(), Length::twip(20));
    }

    #[test]
    fn parse_floating_quantities() {
        assert_eq!("2.5pt".parse::<Length>().unwrap(), Length::emu(31_750));
        assert_eq!("10.1hmm".parse::<Length>().unwrap(), Length::emu(3_636));
        assert_eq!("0.5 pt".parse::<Length>().unwrap(), Length::pt(0.5));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            "4".parse::<Length>(),
            Err(ParseLengthError::UnknownUnit { .. })
        ));
        assert!(matches!(
            "4ft".parse::<Length>(),
            Err(ParseLengthError::UnknownUnit { .. })
        ));
        assert!(matches!(
            "cm".parse::<Length>(),
            Err(ParseLengthError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "1.2.3cm".parse::<Length>(),
            Err(ParseLengthError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "infpt".parse::<Length>(),
            Err(ParseLengthError::NonFinite { .. })
        ));
    }
}
