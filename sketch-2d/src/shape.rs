use std::ops::BitAnd;

use crate::{BoxOffset, BoxSize, Point2d};

/// Axis-aligned rectangle stored as left, top, right, bottom edges.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Rect {
    pub l: f32,
    pub t: f32,
    pub r: f32,
    pub b: f32,
}

impl Rect {
    pub fn new_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            l: left,
            t: top,
            r: right,
            b: bottom,
        }
    }

    pub fn new_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            l: left,
            t: top,
            r: left + width,
            b: top + height,
        }
    }

    pub fn new_point_size(point: Point2d, size: BoxSize) -> Self {
        Self {
            l: point.x,
            t: point.y,
            r: point.x + size.width,
            b: point.y + size.height,
        }
    }

    pub fn width(&self) -> f32 {
        self.r - self.l
    }

    pub fn height(&self) -> f32 {
        self.b - self.t
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    pub fn center(&self) -> Point2d {
        Point2d {
            x: (self.l + self.r) / 2.0,
            y: (self.t + self.b) / 2.0,
        }
    }

    /// Half-open containment: the left and top edges are inside, the right and bottom are not.
    pub fn contains(&self, point: &Point2d) -> bool {
        point.x >= self.l && point.x < self.r && point.y >= self.t && point.y < self.b
    }
}

impl BitAnd<BoxSize> for BoxOffset {
    type Output = Rect;

    fn bitand(self, rhs: BoxSize) -> Self::Output {
        Rect::new_point_size(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ltwh_matches_offset_and_size() {
        let rect = Rect::new_ltwh(20.0, 50.0, 100.0, 100.0);
        assert_eq!(
            rect,
            BoxOffset::new(20.0, 50.0) & BoxSize::new(100.0, 100.0)
        );
        assert_eq!(rect, Rect::new_ltrb(20.0, 50.0, 120.0, 150.0));
        assert!(rect.is_square());
        assert_eq!(rect.center(), Point2d::new(70.0, 100.0));
    }

    #[test]
    fn containment_is_half_open() {
        let rect = Rect::new_ltwh(20.0, 50.0, 100.0, 100.0);
        assert!(rect.contains(&Point2d::new(20.0, 50.0)));
        assert!(rect.contains(&Point2d::new(119.5, 149.5)));
        assert!(!rect.contains(&Point2d::new(120.0, 100.0)));
        assert!(!rect.contains(&Point2d::new(70.0, 150.0)));
        assert!(!rect.contains(&Point2d::new(19.9, 100.0)));
    }
}
