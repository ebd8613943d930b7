#[derive(PartialEq, Clone, Copy, Debug)]
pub struct BoxSize {
    pub width: f32,
    pub height: f32,
}

impl BoxSize {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Device pixel extent of this logical size, rounded up.
    pub fn to_physical(&self, scale: f64) -> (u32, u32) {
        (
            (self.width as f64 * scale).ceil().max(0.0) as u32,
            (self.height as f64 * scale).ceil().max(0.0) as u32,
        )
    }
}

#[derive(Default, PartialEq, Clone, Copy, Debug)]
pub struct BoxOffset {
    pub x: f32,
    pub y: f32,
}

impl BoxOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for BoxOffset {
    fn from(value: [f32; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

pub type Point2d = BoxOffset;
