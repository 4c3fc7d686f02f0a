use crate::color::Color;
use crate::error::RingError;

/// Angular step per frame for a unit-weight arc at speed 1, in units of π.
pub const ROTATION_FACTOR: f64 = 0.0008;

/// One rotating stroke segment. Angles are in units of π radians.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    begin: f64,
    end: f64,
    weight: f64,
    color: Color,
    stroke_width: Option<f64>,
}

impl Arc {
    /// Fails when `begin == end`: rotation divides by the arc's span every frame.
    pub fn new(
        begin: f64,
        end: f64,
        color: Color,
        stroke_width: Option<f64>,
    ) -> Result<Self, RingError> {
        if !begin.is_finite() || !end.is_finite() {
            return Err(RingError::NonFiniteAngle { begin, end });
        }
        if begin == end {
            return Err(RingError::ZeroWeight(begin));
        }
        if let Some(width) = stroke_width
            && !(width > 0.0 && width.is_finite())
        {
            return Err(RingError::InvalidStrokeWidth(width));
        }

        Ok(Self {
            begin,
            end,
            weight: end - begin,
            color,
            stroke_width,
        })
    }

    pub fn begin(&self) -> f64 {
        self.begin
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn stroke_width(&self) -> Option<f64> {
        self.stroke_width
    }

    /// Narrow arcs turn faster than wide ones at the same speed.
    pub fn rotate(&mut self, speed: f64) {
        let step = speed * ROTATION_FACTOR / self.weight;
        self.begin += step;
        self.end += step;
    }
}
