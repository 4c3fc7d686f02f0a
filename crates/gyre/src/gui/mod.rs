pub mod app;
pub mod frame;
pub mod pointer;
pub mod theme;
pub mod window;
