//! Reference boundary shapes.
//!
//! Region discovery and the walkers only ever call
//! [`Boundary::admits`]; these shapes are the stock predicates a driver
//! can select by name instead of supplying its own closure.

use forage_core::{Boundary, Point};

/// Open axis-aligned square `|x| < h && |y| < h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
    /// Half-width `h`. The interior spans `2h - 1` points per axis.
    pub half_width: i32,
}

impl Default for Square {
    fn default() -> Self {
        Self { half_width: 2 }
    }
}

impl Boundary for Square {
    fn admits(&self, p: Point) -> bool {
        p.x.abs() < self.half_width && p.y.abs() < self.half_width
    }
}

/// Open half-plane `a·x + b·y + c < 0`. Unbounded for any non-zero normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfPlane {
    /// Coefficient of `x`.
    pub a: f64,
    /// Coefficient of `y`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Default for HalfPlane {
    /// `x + y - 1 < 0`.
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 1.0,
            c: -1.0,
        }
    }
}

impl Boundary for HalfPlane {
    fn admits(&self, p: Point) -> bool {
        self.a * f64::from(p.x) + self.b * f64::from(p.y) + self.c < 0.0
    }
}

/// Open axis-aligned ellipse `(x-cx)²/a² + (y-cy)²/b² - 1 < 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    /// Center `(cx, cy)`; need not be a lattice point.
    pub center: (f64, f64),
    /// Semi-axis `a` along `x`.
    pub semi_x: f64,
    /// Semi-axis `b` along `y`.
    pub semi_y: f64,
}

impl Default for Ellipse {
    fn default() -> Self {
        Self {
            center: (0.25, 0.25),
            semi_x: 3.0,
            semi_y: 4.0,
        }
    }
}

impl Boundary for Ellipse {
    fn admits(&self, p: Point) -> bool {
        let dx = f64::from(p.x) - self.center.0;
        let dy = f64::from(p.y) - self.center.1;
        dx * dx / (self.semi_x * self.semi_x) + dy * dy / (self.semi_y * self.semi_y) - 1.0 < 0.0
    }
}

/// Selection among the reference shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// See [`Square`].
    Square(Square),
    /// See [`HalfPlane`].
    HalfPlane(HalfPlane),
    /// See [`Ellipse`].
    Ellipse(Ellipse),
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Square(Square::default())
    }
}

impl Shape {
    /// Short lowercase name of the shape kind.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Square(_) => "square",
            Shape::HalfPlane(_) => "half_plane",
            Shape::Ellipse(_) => "ellipse",
        }
    }

    /// Check that the shape parameters describe a usable predicate.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid parameter.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Shape::Square(s) => {
                if s.half_width <= 0 {
                    return Err(format!("square half_width must be > 0, got {}", s.half_width));
                }
            }
            Shape::HalfPlane(h) => {
                if !(h.a.is_finite() && h.b.is_finite() && h.c.is_finite()) {
                    return Err(format!(
                        "half-plane coefficients must be finite, got ({}, {}, {})",
                        h.a, h.b, h.c
                    ));
                }
                if h.a == 0.0 && h.b == 0.0 {
                    return Err("half-plane normal must be non-zero".to_string());
                }
            }
            Shape::Ellipse(e) => {
                if !(e.center.0.is_finite() && e.center.1.is_finite()) {
                    return Err(format!("ellipse center must be finite, got {:?}", e.center));
                }
                for (name, v) in [("semi_x", e.semi_x), ("semi_y", e.semi_y)] {
                    if !v.is_finite() || v <= 0.0 {
                        return Err(format!("ellipse {name} must be finite and > 0, got {v}"));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Boundary for Shape {
    fn admits(&self, p: Point) -> bool {
        match self {
            Shape::Square(s) => s.admits(p),
            Shape::HalfPlane(h) => h.admits(p),
            Shape::Ellipse(e) => e.admits(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;
    use forage_core::RegionError;

    #[test]
    fn default_square_matches_strict_inequality() {
        let s = Square::default();
        assert!(s.admits(Point::new(1, -1)));
        assert!(!s.admits(Point::new(2, 0)));
        assert!(!s.admits(Point::new(0, -2)));
    }

    #[test]
    fn default_half_plane() {
        let h = HalfPlane::default();
        assert!(h.admits(Point::ORIGIN));
        assert!(!h.admits(Point::new(1, 0)));
        assert!(h.admits(Point::new(-1000, 1000)));
    }

    #[test]
    fn default_ellipse_is_bounded() {
        let e = Shape::Ellipse(Ellipse::default());
        assert!(e.admits(Point::ORIGIN));
        assert!(e.admits(Point::new(0, 4)));
        assert!(!e.admits(Point::new(4, 0)));
        let region = Region::explore(&e, [Point::ORIGIN], 1000).unwrap();
        assert!(region.interior().iter().all(|p| e.admits(*p)));
        assert!(region.boundary().iter().all(|p| !e.admits(*p)));
    }

    #[test]
    fn half_plane_exploration_fails() {
        let shape = Shape::HalfPlane(HalfPlane::default());
        assert!(matches!(
            Region::explore(&shape, [Point::ORIGIN], 1000),
            Err(RegionError::RegionTooLarge { .. })
        ));
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        assert!(Shape::default().validate().is_ok());
        assert!(Shape::Square(Square { half_width: 0 }).validate().is_err());
        assert!(Shape::HalfPlane(HalfPlane {
            a: 0.0,
            b: 0.0,
            c: 1.0
        })
        .validate()
        .is_err());
        assert!(Shape::Ellipse(Ellipse {
            semi_x: f64::NAN,
            ..Ellipse::default()
        })
        .validate()
        .is_err());
    }

    #[test]
    fn names() {
        assert_eq!(Shape::default().name(), "square");
        assert_eq!(Shape::HalfPlane(HalfPlane::default()).name(), "half_plane");
        assert_eq!(Shape::Ellipse(Ellipse::default()).name(), "ellipse");
    }
}
