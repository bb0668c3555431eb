use super::Vec2;

/// Quadratic bezier segment, the shape used for stems, grass blades and leaves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl QuadraticBezier {
    pub fn new(start: Vec2, control: Vec2, end: Vec2) -> Self {
        Self { start, control, end }
    }

    /// Point at parametric position `t` (not arc length)
    pub fn point_at(&self, t: f64) -> Vec2 {
        quadratic_point(self.start, self.control, self.end, t)
    }
}

/// Evaluate a quadratic bezier through p0, p1, p2 at parameter t
pub fn quadratic_point(p0: Vec2, p1: Vec2, p2: Vec2, t: f64) -> Vec2 {
    let u = 1.0 - t;
    p0.scale(u * u) + p1.scale(2.0 * u * t) + p2.scale(t * t)
}

/// Evaluate a cubic bezier through p0..p3 at parameter t
pub fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f64) -> Vec2 {
    let u = 1.0 - t;
    let u2 = u * u;
    let t2 = t * t;

    p0.scale(u2 * u) + p1.scale(3.0 * u2 * t) + p2.scale(3.0 * u * t2) + p3.scale(t2 * t)
}
