//! Strongly-typed pixel primitives for tooltip-layout (zero-cost newtypes).
//!
//! Everything the layout touches lives in layer-pixel space. Geographic
//! coordinates only appear at the host boundary as [`LatLng`].

use std::fmt;
use std::ops::{Add, AddAssign, Div, Sub};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
pub(crate) fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities, zero and negative values.
pub(crate) fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Distance in layer pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Create a Px with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Px, NumericError> {
        check_finite(val).map(Px)
    }

    /// Create a non-negative Px with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Px, NumericError> {
        let val = check_finite(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Px(val))
        }
    }

    /// Round up to the next whole pixel (rendering grid alignment)
    #[inline]
    pub fn ceil(self) -> Px {
        Px(self.0.ceil())
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Px) -> Px { Px(self.0 + rhs.0) }
}
impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px { Px(self.0 - rhs.0) }
}
impl Div<f64> for Px {
    type Output = Px;
    fn div(self, rhs: f64) -> Px { Px(self.0 / rhs) }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Px) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geographic coordinate in degrees. Opaque to the layout; only the host
/// projection interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Connector stroke color.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self { Point { x, y } }
}

impl Point<Px> {
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self { Size { w, h } }
}

impl Size<Px> {
    pub const ZERO: Size<Px> = Size { w: Px::ZERO, h: Px::ZERO };

    /// Validate a measured or configured size (finite, strictly positive)
    pub fn try_positive(w: f64, h: f64) -> Result<Self, NumericError> {
        Ok(Size { w: Px(check_positive(w)?), h: Px(check_positive(h)?) })
    }
}

/// A displacement vector (not an absolute position).
/// Point + Offset = Point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset<T> {
    pub dx: T,
    pub dy: T,
}

impl<T> Offset<T> {
    pub fn new(dx: T, dy: T) -> Self {
        Offset { dx, dy }
    }
}

/// Add an offset to a point to get a new point
impl Add<Offset<Px>> for Point<Px> {
    type Output = Point<Px>;
    fn add(self, rhs: Offset<Px>) -> Point<Px> {
        Point { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}

/// Visible viewport in layer pixels, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub north_west: PtPx,
    pub south_east: PtPx,
}

impl Viewport {
    pub fn new(north_west: PtPx, south_east: PtPx) -> Self {
        Viewport { north_west, south_east }
    }

    /// Whether a box with top-left `origin` overlaps the viewport on the x axis.
    pub fn overlaps_x(&self, origin: PtPx, size: Size<Px>) -> bool {
        origin.x + size.w >= self.north_west.x && origin.x <= self.south_east.x
    }

    /// Whether a box with top-left `origin` overlaps the viewport on the y axis.
    pub fn overlaps_y(&self, origin: PtPx, size: Size<Px>) -> bool {
        origin.y + size.h >= self.north_west.y && origin.y <= self.south_east.y
    }
}

/// Convenient aliases
pub type PtPx = Point<Px>;
pub type SizePx = Size<Px>;

/// Shorthand for building a pixel point from raw values
pub fn px(x: f64, y: f64) -> PtPx {
    Point::new(Px(x), Px(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Px tests ====================

    #[test]
    fn px_try_new_rejects_nan() {
        assert_eq!(Px::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn px_try_new_rejects_infinity() {
        assert_eq!(Px::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Px::try_new(f64::NEG_INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn px_try_non_negative_rejects_negative() {
        assert_eq!(Px::try_non_negative(-1.0), Err(NumericError::Negative));
        assert_eq!(Px::try_non_negative(0.0), Ok(Px(0.0)));
    }

    #[test]
    fn px_arithmetic() {
        let a = Px(3.0);
        let b = Px(2.0);

        assert_eq!(a + b, Px(5.0));
        assert_eq!(a - b, Px(1.0));
        assert_eq!(a / 2.0, Px(1.5));
        assert_eq!(Px(2.1).ceil(), Px(3.0));
        assert_eq!(Px(-2.9).ceil(), Px(-2.0));
    }

    // ==================== Size tests ====================

    #[test]
    fn size_try_positive() {
        assert!(SizePx::try_positive(10.0, 4.0).is_ok());
        assert_eq!(SizePx::try_positive(0.0, 4.0), Err(NumericError::Zero));
        assert_eq!(SizePx::try_positive(10.0, -4.0), Err(NumericError::Negative));
        assert_eq!(SizePx::try_positive(f64::NAN, 4.0), Err(NumericError::NaN));
    }

    // ==================== Point/Offset tests ====================

    #[test]
    fn point_plus_offset_gives_point() {
        let p = px(1.0, 2.0);
        let o = Offset::new(Px(3.0), Px(4.0));
        assert_eq!(p + o, px(4.0, 6.0));
    }


    // ==================== Viewport tests ====================

    #[test]
    fn viewport_box_overlap() {
        let vp = Viewport::new(px(0.0, 0.0), px(100.0, 100.0));
        let size = Size::new(Px(20.0), Px(10.0));
        assert!(vp.overlaps_x(px(-20.0, 0.0), size));
        assert!(!vp.overlaps_x(px(-21.0, 0.0), size));
        assert!(vp.overlaps_y(px(0.0, 100.0), size));
        assert!(!vp.overlaps_y(px(0.0, 101.0), size));
    }

    // ==================== Color tests ====================

    #[test]
    fn color_display() {
        assert_eq!(Color::Rgb(0x00, 0x0F, 0xFF).to_string(), "#000FFF");
        assert_eq!(Color::Named("red".into()).to_string(), "red");
    }
}
