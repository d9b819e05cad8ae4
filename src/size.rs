//! Generic (width, height) pair.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A plain 2-D extent with componentwise arithmetic and equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size2D<T> {
    width: T,
    height: T,
}

impl<T: Copy> Size2D<T> {
    pub fn new(width: T, height: T) -> Size2D<T> {
        Size2D { width, height }
    }

    pub fn width(&self) -> T {
        self.width
    }

    pub fn height(&self) -> T {
        self.height
    }

    pub fn set_width(&mut self, width: T) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: T) {
        self.height = height;
    }
}

impl<T: Add<Output = T>> Add for Size2D<T> {
    type Output = Size2D<T>;

    fn add(self, rhs: Size2D<T>) -> Size2D<T> {
        Size2D {
            width: self.width + rhs.width,
            height: self.height + rhs.height,
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Size2D<T> {
    fn add_assign(&mut self, rhs: Size2D<T>) {
        *self = *self + rhs;
    }
}

impl<T: Sub<Output = T>> Sub for Size2D<T> {
    type Output = Size2D<T>;

    fn sub(self, rhs: Size2D<T>) -> Size2D<T> {
        Size2D {
            width: self.width - rhs.width,
            height: self.height - rhs.height,
        }
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Size2D<T> {
    fn sub_assign(&mut self, rhs: Size2D<T>) {
        *self = *self - rhs;
    }
}
