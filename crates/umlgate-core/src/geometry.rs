//! Geometric primitives for edge placement checks.
//!
//! Only a handful of rules look at geometry: the sequence diagram rules test
//! whether the point where the pointer was released falls inside the title
//! box of a lifeline. This module provides the types those tests need.
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin is the top-left corner of the canvas and Y grows downward, the
//! same convention as the editing surface that reports pointer positions.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use umlgate_core::geometry::Point;
/// let release = Point::new(40.0, 65.0);
/// let moved = release.add_point(Point::new(10.0, -5.0));
/// assert_eq!(moved.x(), 50.0);
/// assert_eq!(moved.y(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Width and height of a node
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new size with the height replaced
    pub fn with_height(self, height: f32) -> Self {
        Self { height, ..self }
    }
}

/// An axis-aligned rectangle defined by its minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns true if `point` lies inside the bounds or on their border.
    ///
    /// # Examples
    ///
    /// ```
    /// # use umlgate_core::geometry::{Bounds, Point, Size};
    /// let header = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(80.0, 60.0));
    /// assert!(header.contains(Point::new(5.0, 5.0)));
    /// assert!(header.contains(Point::new(80.0, 60.0)));
    /// assert!(!header.contains(Point::new(40.0, 65.0)));
    /// ```
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
