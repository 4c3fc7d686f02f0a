use crate::surface::SurfaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RingError {
    #[error("Radius must be positive")]
    InvalidRadius,
    #[error("Frame rate must be positive")]
    InvalidFrameRate,
    #[error("Stroke width must be positive, got {0}")]
    InvalidStrokeWidth(f64),
    #[error("Drawing surface has no area ({width}x{height})")]
    EmptySurface { width: f64, height: f64 },
    #[error("Arc spans no angle (begin and end are both {0})")]
    ZeroWeight(f64),
    #[error("Arc angles must be finite (begin {begin}, end {end})")]
    NonFiniteAngle { begin: f64, end: f64 },
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
