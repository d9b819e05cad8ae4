//! Generic (x, y) pair.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A plain 2-D pair with componentwise arithmetic and equality.
///
/// The components are fully independent; there are no invariants to keep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tuple2D<T> {
    x: T,
    y: T,
}

impl<T: Copy> Tuple2D<T> {
    pub fn new(x: T, y: T) -> Tuple2D<T> {
        Tuple2D { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn set_x(&mut self, x: T) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: T) {
        self.y = y;
    }
}

impl<T: Add<Output = T>> Add for Tuple2D<T> {
    type Output = Tuple2D<T>;

    fn add(self, rhs: Tuple2D<T>) -> Tuple2D<T> {
        Tuple2D {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Tuple2D<T> {
    fn add_assign(&mut self, rhs: Tuple2D<T>) {
        *self = *self + rhs;
    }
}

impl<T: Sub<Output = T>> Sub for Tuple2D<T> {
    type Output = Tuple2D<T>;

    fn sub(self, rhs: Tuple2D<T>) -> Tuple2D<T> {
        Tuple2D {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Tuple2D<T> {
    fn sub_assign(&mut self, rhs: Tuple2D<T>) {
        *self = *self - rhs;
    }
}
