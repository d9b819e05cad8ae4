//! Boundary conversions between EMU-based geometry and the integer
//! hundredth-of-a-millimeter types the surrounding document model speaks.
//!
//! hmm granularity is coarser than EMU, so the trip back through
//! [`range_to_rect`] rounds each edge to the nearest hmm; sub-hmm
//! precision is lost at this boundary by design.

use glam::DVec2;

use crate::log::debug;
use crate::{Length, LengthRange, LengthSize, Size2D};

/// An external rectangle in integer hmm with inclusive right/bottom edges.
///
/// A zero width or height marks that dimension as empty; the all-zero
/// rectangle is the canonical empty value. Any other degenerate shape is
/// an ordinary rectangle as far as the conversions are concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RectHmm {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl RectHmm {
    /// The canonical empty rectangle.
    pub const EMPTY: RectHmm = RectHmm {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Corner form; edges are inclusive, so the width spans
    /// right - left + 1 hmm cells.
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> RectHmm {
        RectHmm {
            x: left,
            y: top,
            width: right - left + 1,
            height: bottom - top + 1,
        }
    }

    pub fn from_pos_size(x: i64, y: i64, width: i64, height: i64) -> RectHmm {
        RectHmm {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i64 {
        self.x
    }

    pub fn top(&self) -> i64 {
        self.y
    }

    /// Inclusive right edge; collapses onto the left edge while the width
    /// is empty.
    pub fn right(&self) -> i64 {
        if self.width <= 0 {
            self.x
        } else {
            self.x + self.width - 1
        }
    }

    /// Inclusive bottom edge; collapses onto the top edge while the
    /// height is empty.
    pub fn bottom(&self) -> i64 {
        if self.height <= 0 {
            self.y
        } else {
            self.y + self.height - 1
        }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn is_width_empty(&self) -> bool {
        self.width == 0
    }

    pub fn is_height_empty(&self) -> bool {
        self.height == 0
    }

    pub fn is_empty(&self) -> bool {
        self.is_width_empty() && self.is_height_empty()
    }

    pub fn move_by(&mut self, dx: i64, dy: i64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn set_size(&mut self, width: i64, height: i64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_pos(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
    }
}

/// An external extent in integer hmm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SizeHmm {
    width: i64,
    height: i64,
}

impl SizeHmm {
    pub fn new(width: i64, height: i64) -> SizeHmm {
        SizeHmm { width, height }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

fn round_hmm(length: Length) -> i64 {
    length.as_hmm().round() as i64
}

/// Map an external rectangle into a length range.
///
/// A both-dimensions-empty rectangle maps to the canonical empty range;
/// every other shape, degenerate or not, maps edge for edge.
pub fn range_from_rect(rect: RectHmm) -> LengthRange {
    if rect.is_empty() {
        debug!("empty hmm rectangle maps to the empty range");
        return LengthRange::default();
    }

    LengthRange::new(
        Length::hmm(rect.left()),
        Length::hmm(rect.top()),
        Length::hmm(rect.right()),
        Length::hmm(rect.bottom()),
    )
}

/// Map a length range back onto the external rectangle, rounding each
/// edge to the nearest integer hmm. The empty range maps to
/// [`RectHmm::EMPTY`].
pub fn range_to_rect(range: LengthRange) -> RectHmm {
    if range.is_empty() {
        debug!("empty range maps to the empty hmm rectangle");
        return RectHmm::EMPTY;
    }

    RectHmm::new(
        round_hmm(range.min_x()),
        round_hmm(range.min_y()),
        round_hmm(range.max_x()),
        round_hmm(range.max_y()),
    )
}

/// Map an external extent into a length size; an empty extent maps to the
/// zero size.
pub fn size_from_hmm(size: SizeHmm) -> LengthSize {
    if size.is_empty() {
        return Size2D::new(Length::ZERO, Length::ZERO);
    }
    Size2D::new(Length::hmm(size.width()), Length::hmm(size.height()))
}

/// Map a length size back onto the external extent, rounding each
/// dimension to the nearest integer hmm.
pub fn size_to_hmm(size: LengthSize) -> SizeHmm {
    SizeHmm::new(round_hmm(size.width()), round_hmm(size.height()))
}

/// The f64 hmm corners of a range, for the float drawing boundary.
/// The empty range has no corners.
pub fn range_to_dvec2(range: LengthRange) -> Option<(DVec2, DVec2)> {
    if range.is_empty() {
        return None;
    }
    Some((
        DVec2::new(range.min_x().as_hmm(), range.min_y().as_hmm()),
        DVec2::new(range.max_x().as_hmm(), range.max_y().as_hmm()),
    ))
}

/// Keeps a [`LengthRange`] while exposing the external rectangle surface,
/// easing incremental migration of rectangle-based call sites.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectWrapper {
    range: LengthRange,
}

impl RectWrapper {
    pub fn new(x1: Length, y1: Length, x2: Length, y2: Length) -> RectWrapper {
        RectWrapper {
            range: LengthRange::new(x1, y1, x2, y2),
        }
    }

    pub fn range(&self) -> LengthRange {
        self.range
    }

    pub fn set_range(&mut self, range: LengthRange) {
        self.range = range;
    }

    /// The external view of the held range, computed on demand.
    pub fn rect(&self) -> RectHmm {
        range_to_rect(self.range)
    }

    pub fn set_rect(&mut self, rect: RectHmm) {
        self.range = range_from_rect(rect);
    }

    /// External sizes count inclusive hmm cells, hence the -1 per axis.
    pub fn set_size(&mut self, width: i64, height: i64) {
        self.range
            .set_size(Length::hmm(width - 1), Length::hmm(height - 1));
    }

    pub fn move_by(&mut self, dx: i64, dy: i64) {
        self.range.shift(Length::hmm(dx), Length::hmm(dy));
    }

    pub fn set_position(&mut self, x: i64, y: i64) {
        self.range.set_position(Length::hmm(x), Length::hmm(y));
    }
}
