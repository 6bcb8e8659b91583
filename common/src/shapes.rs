use crate::error::{ShapeError, ShapeResult};
use rand::Rng;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Squared distance from `(x, y)` to the closest point of the closed rectangle.
#[inline(always)]
fn distance_sq_to_extent(x: f64, y: f64, left: f64, right: f64, top: f64, bottom: f64) -> f64 {
    let dx = x - x.clamp(left, right);
    let dy = y - y.clamp(top, bottom);
    dx * dx + dy * dy
}

/// True if a circle touches or overlaps the closed rectangle `[left, right] x [top, bottom]`.
///
/// Covers the centre lying inside the rectangle, a rectangle corner lying inside the
/// circle, and a rectangle edge crossing the circle.
#[inline(always)]
pub fn circle_touches_extent(
    x: f64,
    y: f64,
    radius: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
) -> bool {
    if x >= left && x <= right && y >= top && y <= bottom {
        return true;
    }
    distance_sq_to_extent(x, y, left, right, top, bottom) < radius * radius
}

#[derive(Debug, Copy, Clone)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn validate(&self) -> ShapeResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ShapeError::NonFiniteCenter {
                x: self.x,
                y: self.y,
            });
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ShapeError::InvalidCircleRadius {
                radius: self.radius,
            });
        }
        Ok(())
    }

    pub fn distance(&self, other: &Circle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Strict overlap: touching circles (distance equal to the sum of radii) do not overlap.
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.distance(other) < self.radius + other.radius
    }

    pub fn touches_view(&self, view: &View) -> bool {
        circle_touches_extent(
            self.x,
            self.y,
            self.radius,
            view.left_x,
            view.right_x,
            view.top_y,
            view.bottom_y,
        )
    }

    // -0.0 and 0.0 compare equal, so they must hash equal too.
    fn key_bits(&self) -> [u64; 3] {
        let bits = |v: f64| if v == 0.0 { 0u64 } else { v.to_bits() };
        [bits(self.x), bits(self.y), bits(self.radius)]
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for Circle {}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.radius)
    }
}

/// Axis-aligned rectangle with `y` growing downwards, so `top_y < bottom_y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    left_x: f64,
    right_x: f64,
    top_y: f64,
    bottom_y: f64,
}

impl View {
    pub fn new(left_x: f64, right_x: f64, top_y: f64, bottom_y: f64) -> ShapeResult<Self> {
        let coherent = left_x.is_finite()
            && right_x.is_finite()
            && top_y.is_finite()
            && bottom_y.is_finite()
            && left_x < right_x
            && top_y < bottom_y;
        if !coherent {
            return Err(ShapeError::DegenerateView {
                left_x,
                right_x,
                top_y,
                bottom_y,
            });
        }
        Ok(Self {
            left_x,
            right_x,
            top_y,
            bottom_y,
        })
    }

    /// Moves every edge inwards by `amount`.
    pub fn shrink_by(&self, amount: f64) -> ShapeResult<Self> {
        Self::new(
            self.left_x + amount,
            self.right_x - amount,
            self.top_y + amount,
            self.bottom_y - amount,
        )
    }

    /// Moves every edge outwards by `amount`.
    pub fn grow_by(&self, amount: f64) -> ShapeResult<Self> {
        self.shrink_by(-amount)
    }

    pub fn left_x(&self) -> f64 {
        self.left_x
    }

    pub fn right_x(&self) -> f64 {
        self.right_x
    }

    pub fn top_y(&self) -> f64 {
        self.top_y
    }

    pub fn bottom_y(&self) -> f64 {
        self.bottom_y
    }

    pub fn width(&self) -> f64 {
        self.right_x - self.left_x
    }

    pub fn height(&self) -> f64 {
        self.bottom_y - self.top_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.left_x + self.width() / 2.0,
            self.top_y + self.height() / 2.0,
        )
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left_x && x <= self.right_x && y >= self.top_y && y <= self.bottom_y
    }

    /// True if the two rectangles share any area or boundary.
    pub fn intersects(&self, other: &View) -> bool {
        self.left_x <= other.right_x
            && other.left_x <= self.right_x
            && self.top_y <= other.bottom_y
            && other.top_y <= self.bottom_y
    }

    /// True if `other` lies entirely within this view.
    pub fn contains_view(&self, other: &View) -> bool {
        other.left_x >= self.left_x
            && other.right_x <= self.right_x
            && other.top_y >= self.top_y
            && other.bottom_y <= self.bottom_y
    }

    /// The four quadrants split at the midpoint: top-left, bottom-left, top-right, bottom-right.
    pub fn quadrants(&self) -> [View; 4] {
        let (mid_x, mid_y) = self.center();
        let quad = |left_x, right_x, top_y, bottom_y| View {
            left_x,
            right_x,
            top_y,
            bottom_y,
        };
        [
            quad(self.left_x, mid_x, self.top_y, mid_y),
            quad(self.left_x, mid_x, mid_y, self.bottom_y),
            quad(mid_x, self.right_x, self.top_y, mid_y),
            quad(mid_x, self.right_x, mid_y, self.bottom_y),
        ]
    }

    /// A random centre that keeps a circle of `radius` inside the view.
    /// Clamps to the top-left candidate when the view is too small to fit it.
    pub fn random_circle_center<R: Rng>(&self, radius: f64, rng: &mut R) -> (f64, f64) {
        (
            safe_rand(rng, self.left_x + radius, self.right_x - radius),
            safe_rand(rng, self.top_y + radius, self.bottom_y - radius),
        )
    }
}

fn safe_rand<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "View [left_x={}, right_x={}, top_y={}, bottom_y={}]",
            self.left_x, self.right_x, self.top_y, self.bottom_y
        )
    }
}
