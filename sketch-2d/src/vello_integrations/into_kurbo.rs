use crate::{BoxSize, Point2d, Rect};

pub trait IntoKurbo {
    type Output;
    fn into_kurbo(self) -> Self::Output;
}

impl IntoKurbo for Point2d {
    type Output = peniko::kurbo::Point;

    fn into_kurbo(self) -> Self::Output {
        peniko::kurbo::Point {
            x: self.x as _,
            y: self.y as _,
        }
    }
}

impl IntoKurbo for Rect {
    type Output = peniko::kurbo::Rect;

    fn into_kurbo(self) -> Self::Output {
        peniko::kurbo::Rect {
            x0: self.l as _,
            y0: self.t as _,
            x1: self.r as _,
            y1: self.b as _,
        }
    }
}

impl IntoKurbo for BoxSize {
    type Output = peniko::kurbo::Size;

    fn into_kurbo(self) -> Self::Output {
        peniko::kurbo::Size {
            width: self.width as _,
            height: self.height as _,
        }
    }
}
