use crate::color::Color;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// One stroke command: a circular arc between two angles in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcStroke {
    pub center: Point,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
    pub color: Color,
    pub width: f64,
}

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Drawing surface is unavailable")]
    Unavailable,
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("PNG export failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Something arcs can be stroked onto. The pixel size is read once, when a
/// widget is built on top of it.
pub trait DrawingSurface {
    fn size(&self) -> Size;

    fn stroke_arc(&mut self, stroke: &ArcStroke) -> Result<(), SurfaceError>;
}
