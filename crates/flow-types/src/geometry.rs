//! Geometry primitives: edge insets, sizes, placed rectangles.
//!
//! All values are whole pixels. Sizes and insets are expected to be
//! non-negative; [`Edges::clamped`] and [`Size::clamped`] fold malformed
//! negative input to zero.

/// Insets for all four sides. Used for container padding and child margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Edges {
    /// Top inset in pixels.
    pub top: i32,
    /// Right inset in pixels.
    pub right: i32,
    /// Bottom inset in pixels.
    pub bottom: i32,
    /// Left inset in pixels.
    pub left: i32,
}

impl Edges {
    /// Zero on all sides.
    pub const ZERO: Self = Self::uniform(0);

    /// Create uniform insets on all sides.
    pub const fn uniform(v: i32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Create symmetric insets (horizontal and vertical).
    pub const fn symmetric(h: i32, v: i32) -> Self {
        Self {
            top: v,
            right: h,
            bottom: v,
            left: h,
        }
    }

    /// Create insets with individual side values.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Copy with every negative side replaced by zero.
    pub fn clamped(&self) -> Self {
        Self {
            top: self.top.max(0),
            right: self.right.max(0),
            bottom: self.bottom.max(0),
            left: self.left.max(0),
        }
    }

    /// Whether any side is negative.
    pub fn has_negative(&self) -> bool {
        self.top < 0 || self.right < 0 || self.bottom < 0 || self.left < 0
    }

    /// Total horizontal inset (left + right).
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical inset (top + bottom).
    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Copy with negative components replaced by zero.
    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.max(0),
            height: self.height.max(0),
        }
    }
}

/// A rectangle given by its four edges, in the container's coordinate space.
///
/// This is what a host receives when it positions a child: `right` and
/// `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlacedRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlacedRect {
    /// Build a rect from its origin and size.
    ///
    /// Edges past `i32::MAX` stick at `i32::MAX`.
    pub fn from_origin(left: i32, top: i32, size: Size) -> Self {
        Self {
            left,
            top,
            right: left.saturating_add(size.width),
            bottom: top.saturating_add(size.height),
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Whether the two rectangles share any interior area.
    pub fn intersects(&self, other: &PlacedRect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}
