use geo::{Coord, Point, Rect};
use rstar::{AABB, RTreeObject};
use std::ops::Deref;

/// Struct to hold an axis-aligned latitude/longitude rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle(Rect<f64>);

impl Rectangle {
    /// Construct a new Rectangle from a geo::Rect.
    pub fn new(rect: Rect<f64>) -> Self {
        Self(rect)
    }

    /// Convenience constructor from southwest and northeast corner coordinates.
    pub fn from_corners(min: (f64, f64), max: (f64, f64)) -> Self {
        Self(Rect::new(min, max))
    }

    /// Convert to geo::Rect<f64>
    pub fn to_geo_rect(&self) -> Rect<f64> {
        self.0
    }

    /// Grow the rectangle so it also contains `point`. The extent only ever
    /// increases; a point already inside leaves it unchanged.
    pub fn extend(&mut self, point: Point<f64>) {
        let min = self.0.min();
        let max = self.0.max();
        self.0 = Rect::new(
            Coord {
                x: min.x.min(point.x()),
                y: min.y.min(point.y()),
            },
            Coord {
                x: max.x.max(point.x()),
                y: max.y.max(point.y()),
            },
        );
    }

    pub fn south_west(&self) -> Point<f64> {
        self.0.min().into()
    }

    pub fn north_east(&self) -> Point<f64> {
        self.0.max().into()
    }

    pub fn north_west(&self) -> Point<f64> {
        Point::new(self.0.min().x, self.0.max().y)
    }

    pub fn south_east(&self) -> Point<f64> {
        Point::new(self.0.max().x, self.0.min().y)
    }

    /// Closed containment check, points on the boundary count as inside.
    pub fn contains(&self, point: Point<f64>) -> bool {
        let min = self.0.min();
        let max = self.0.max();
        point.x() >= min.x && point.x() <= max.x && point.y() >= min.y && point.y() <= max.y
    }
}

/// Conversion from geo::Rect<f64> to Rectangle.
impl From<Rect<f64>> for Rectangle {
    fn from(rect: Rect<f64>) -> Self {
        Rectangle(rect)
    }
}

/// Conversion from Rectangle to geo::Rect<f64>.
impl From<Rectangle> for Rect<f64> {
    fn from(rect: Rectangle) -> Self {
        rect.0
    }
}

/// Allowing access to the inner Rect methods directly.
impl Deref for Rectangle {
    type Target = Rect<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Allow the Rectangle to be used as an RTreeObject
impl RTreeObject for Rectangle {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let min = self.0.min();
        let max = self.0.max();
        AABB::from_corners([min.x, min.y], [max.x, max.y])
    }
}
