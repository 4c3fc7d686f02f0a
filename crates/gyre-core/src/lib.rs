pub mod animation;
pub mod arc;
pub mod canvas;
pub mod clock;
pub mod color;
pub mod config;
pub mod control;
pub mod error;
pub mod input;
pub mod motion;
pub mod schedule;
pub mod surface;
pub mod timing;
pub mod widget;

pub use arc::Arc;
pub use color::Color;
pub use error::RingError;
pub use widget::{RingWidget, RunToken, Tick};
