use crate::color::Color;
use crate::surface::{ArcStroke, DrawingSurface, Size, SurfaceError};
use cairo::{Context, Format, ImageSurface};
use std::io::Write;

/// Persistent raster the ring is painted onto. Pixels survive between frames,
/// which is what the overpainting clear pass relies on.
pub struct Canvas {
    image: ImageSurface,
    cr: Context,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        let image = ImageSurface::create(Format::ARgb32, width, height)?;
        let cr = Context::new(&image)?;
        Ok(Self { image, cr })
    }

    /// Shared handle to the backing pixels, for hosts that blit the canvas.
    pub fn image(&self) -> &ImageSurface {
        &self.image
    }

    pub fn fill(&mut self, color: &Color) -> Result<(), SurfaceError> {
        let (r, g, b, a) = color.into_components();
        self.cr.set_source_rgba(r, g, b, a);
        self.cr.paint()?;
        Ok(())
    }

    pub fn write_png(&self, out: &mut impl Write) -> Result<(), SurfaceError> {
        self.image.flush();
        self.image.write_to_png(out)?;
        Ok(())
    }
}

impl DrawingSurface for Canvas {
    fn size(&self) -> Size {
        Size::new(self.image.width() as f64, self.image.height() as f64)
    }

    fn stroke_arc(&mut self, stroke: &ArcStroke) -> Result<(), SurfaceError> {
        let (r, g, b, a) = stroke.color.into_components();
        self.cr.new_path();
        self.cr.set_source_rgba(r, g, b, a);
        self.cr.set_line_width(stroke.width);
        self.cr.arc(
            stroke.center.x,
            stroke.center.y,
            stroke.radius,
            stroke.start,
            stroke.end,
        );
        self.cr.stroke()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Point;
    use std::f64::consts::PI;

    #[test]
    fn test_canvas_size() {
        let canvas = Canvas::new(320, 200).unwrap();
        assert_eq!(canvas.size(), Size::new(320.0, 200.0));
        assert_eq!(canvas.size().center(), Point::new(160.0, 100.0));
    }

    #[test]
    fn test_canvas_strokes_and_exports_png() {
        let mut canvas = Canvas::new(64, 64).unwrap();
        canvas.fill(&Color::rgb(0.0, 0.0, 0.0)).unwrap();
        canvas
            .stroke_arc(&ArcStroke {
                center: Point::new(32.0, 32.0),
                radius: 20.0,
                start: 0.0,
                end: PI,
                color: Color::rgb(1.0, 0.0, 0.0),
                width: 4.0,
            })
            .unwrap();

        let mut png = Vec::new();
        canvas.write_png(&mut png).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
