//! Fixed-point EMU length arithmetic and 2D geometry primitives for
//! document processing.
//!
//! The core scalar is [`Length`], an exact signed 64-bit count of English
//! Metric Units (1 EMU = 1/914400 inch = 1/360 hundredth-mm). Factories
//! exist per physical unit (`cm`, `mm`, `hmm`, `inch`, `pt`, `px`, `twip`,
//! `emu`) and multiply by exact integer factors, so integral construction
//! never loses precision; the `as_*` accessors divide back out in `f64`
//! and are the deliberately lossy display/interop surface.
//!
//! [`Tuple2D`], [`Size2D`] and [`Range2D`] compose the scalar into points,
//! extents and axis-aligned rectangles, generic over any ordered additive
//! scalar via [`RangeValue`]. The [`hmm`] module converts to and from the
//! integer hundredth-of-a-millimeter rectangle type the surrounding
//! document model speaks.
//!
//! Overflow policy: arithmetic on the raw EMU count wraps at the `i64`
//! bounds (two's complement), matching the fixed-width integer it is
//! built on. There is no overflow detection; callers needing guarded
//! scalar division use [`Length::checked_div`].

mod errors;
pub mod hmm;
mod length;
mod log;
mod range;
mod size;
mod tuple;

pub use errors::ParseLengthError;
pub use length::{
    EMU_PER_CM, EMU_PER_HMM, EMU_PER_INCH, EMU_PER_M, EMU_PER_MM, EMU_PER_PT,
    EMU_PER_PX, EMU_PER_TWIP, Length, UnitValue,
};
pub use range::{Range2D, RangeValue};
pub use size::Size2D;
pub use tuple::Tuple2D;

/// An axis-aligned rectangle with [`Length`] corners.
pub type LengthRange = Range2D<Length>;

/// An (x, y) pair of [`Length`].
pub type LengthTuple = Tuple2D<Length>;

/// A (width, height) pair of [`Length`].
pub type LengthSize = Size2D<Length>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_surface_composes() {
        let parsed: Length = "1cm".parse().unwrap();
        let len = parsed + Length::cm(5) - Length::cm(2);
        assert_eq!(len.raw(), 1_440_000);

        let mut range = LengthRange::new(Length::ZERO, Length::ZERO, len, len);
        range.shift(Length::mm(5), Length::mm(5));
        assert_eq!(range.width(), len);

        let rect = hmm::range_to_rect(range);
        assert_eq!(rect.left(), 500);
        assert_eq!(rect.right(), 4_500);
    }
}
