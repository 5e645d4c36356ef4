use crate::math::{std_fl, Fl, IntoFl, Vec2};

/// Circles never get fewer segments than this
const MIN_CIRCLE_SEGMENTS: usize = 16;
/// Nor more than this
const MAX_CIRCLE_SEGMENTS: usize = 256;
/// Approximate length of one circle segment, in pixels
const CIRCLE_SEGMENT_LENGTH: Fl = 4.0;

/// An axis aligned rectangle, given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size
    pub fn new(pos: impl Into<Vec2>, size: impl Into<Vec2>) -> Self {
        Self {
            pos: pos.into(),
            size: size.into(),
        }
    }

    /// The center point
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Corners in clockwise order (on a y-down screen), starting top-left
    pub fn corners(&self) -> [Vec2; 4] {
        let (x, y) = (self.pos.x(), self.pos.y());
        let (w, h) = (self.size.x(), self.size.y());
        [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ]
    }

    /// Whether `point` lies inside (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.pos + self.size;
        point.x() >= self.pos.x() && point.y() >= self.pos.y() && point.x() <= max.x() && point.y() <= max.y()
    }

    /// Two triangles covering this rectangle
    pub fn tessellate(&self) -> Vec<[Vec2; 3]> {
        let [a, b, c, d] = self.corners();
        vec![[a, b, c], [a, c, d]]
    }
}

impl<A: Into<Vec2>, B: Into<Vec2>> From<(A, B)> for Rectangle {
    fn from((pos, size): (A, B)) -> Self {
        Rectangle::new(pos, size)
    }
}

/// A circle, given by its center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point
    pub center: Vec2,
    /// Radius
    pub radius: Fl,
}

impl Circle {
    /// Create a circle from its center and radius
    pub fn new(center: impl Into<Vec2>, radius: impl IntoFl) -> Self {
        Self {
            center: center.into(),
            radius: radius.into_fl(),
        }
    }

    /// The center point
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// How many segments the outline is split into; grows with the circumference
    pub fn segments(&self) -> usize {
        let circumference = 2.0 * std_fl::consts::PI * self.radius.max(0.0);
        ((circumference / CIRCLE_SEGMENT_LENGTH).ceil() as usize)
            .clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
    }

    /// A triangle fan approximating this circle, empty for a non-positive radius
    pub fn tessellate(&self) -> Vec<[Vec2; 3]> {
        if self.radius <= 0.0 {
            return Vec::new();
        }
        let n = self.segments();
        let step = 2.0 * std_fl::consts::PI / n as Fl;
        let point = |i: usize| {
            let (s, c) = (step * i as Fl).sin_cos();
            self.center + Vec2::new(c, s) * self.radius
        };
        (0..n)
            .map(|i| [self.center, point(i), point(i + 1)])
            .collect()
    }
}

/// A straight line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point
    pub a: Vec2,
    /// End point
    pub b: Vec2,
}

impl Line {
    /// Create a line between two points
    pub fn new(a: impl Into<Vec2>, b: impl Into<Vec2>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// The midpoint
    pub fn center(&self) -> Vec2 {
        (self.a + self.b) / 2.0
    }

    /// A quad `thickness` wide around the segment, empty when there is nothing to draw
    pub fn tessellate(&self, thickness: Fl) -> Vec<[Vec2; 3]> {
        let dir = (self.b - self.a).normalize();
        if thickness <= 0.0 || dir == Vec2::zero() {
            return Vec::new();
        }
        let offset = dir.tangent() * (thickness / 2.0);
        let (a0, a1) = (self.a + offset, self.a - offset);
        let (b0, b1) = (self.b + offset, self.b - offset);
        vec![[a0, b0, b1], [a0, b1, a1]]
    }
}

impl<A: Into<Vec2>, B: Into<Vec2>> From<(A, B)> for Line {
    fn from((a, b): (A, B)) -> Self {
        Line::new(a, b)
    }
}

impl<P: Into<Vec2>> From<[P; 2]> for Line {
    fn from([a, b]: [P; 2]) -> Self {
        Line::new(a, b)
    }
}

/// A triangle given by its three corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner
    pub a: Vec2,
    /// Second corner
    pub b: Vec2,
    /// Third corner
    pub c: Vec2,
}

impl Triangle {
    /// Create a triangle from three corners
    pub fn new(a: impl Into<Vec2>, b: impl Into<Vec2>, c: impl Into<Vec2>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
        }
    }

    /// The centroid
    pub fn center(&self) -> Vec2 {
        (self.a + self.b + self.c) / 3.0
    }

    /// The corners as an array
    pub fn points(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }
}

impl<A: Into<Vec2>, B: Into<Vec2>, C: Into<Vec2>> From<(A, B, C)> for Triangle {
    fn from((a, b, c): (A, B, C)) -> Self {
        Triangle::new(a, b, c)
    }
}

impl<P: Into<Vec2>> From<[P; 3]> for Triangle {
    fn from([a, b, c]: [P; 3]) -> Self {
        Triangle::new(a, b, c)
    }
}
