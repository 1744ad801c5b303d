//! Canvas compositing primitives.
//!
//! Every generator follows the same shape: allocate a solid canvas, place a
//! scaled copy of the source on it with [`composite_scaled`], optionally draw
//! text with [`text::Typeface`], then encode the canvas.
//!
//! Canvases are plain [`RgbaImage`] buffers owned by the caller and released
//! when they go out of scope.

pub mod source;
pub mod text;

pub use source::SourceImage;
pub use text::{TextMetrics, Typeface};

use image::{RgbaImage, imageops};

use crate::asset::{RectPx, SizePx};
use crate::color::HexColor;

/// Allocates a canvas filled with an opaque background color.
pub fn solid_canvas(size: SizePx, background: HexColor) -> RgbaImage {
    RgbaImage::from_pixel(size.width, size.height, background.to_rgba())
}

/// Scales `source` to `target` and composites it centered on `canvas`.
///
/// Returns the rectangle the scaled image occupies in canvas coordinates.
/// Only the part inside the canvas is resampled, and an empty target leaves
/// the canvas untouched.
pub fn composite_scaled(canvas: &mut RgbaImage, source: &SourceImage, target: SizePx) -> RectPx {
    let bounds = SizePx::new(canvas.width(), canvas.height());
    let placement = target.centered_in(bounds);
    if target.is_empty() || source.dimensions().is_empty() {
        return placement;
    }
    let Some(visible) = visible_part(placement, bounds) else {
        return placement;
    };

    let scaled = source.scaled_region(target, visible);
    imageops::overlay(
        canvas,
        &scaled,
        placement.x as i64 + visible.x as i64,
        placement.y as i64 + visible.y as i64,
    );
    placement
}

/// The part of `placement` that falls inside a canvas of `bounds`, relative
/// to the placement origin.
fn visible_part(placement: RectPx, bounds: SizePx) -> Option<RectPx> {
    let (x, y) = (placement.x as i64, placement.y as i64);
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + placement.width as i64).min(bounds.width as i64);
    let y1 = (y + placement.height as i64).min(bounds.height as i64);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some(RectPx::new(
        (x0 - x) as i32,
        (y0 - y) as i32,
        (x1 - x0) as u32,
        (y1 - y0) as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn solid_canvas_fills_every_pixel() {
        let canvas = solid_canvas(SizePx::new(4, 3), HexColor::from_rgb(1, 2, 3));
        assert_eq!(canvas.dimensions(), (4, 3));
        assert!(canvas.pixels().all(|p| p.0 == [1, 2, 3, 255]));
    }

    #[test]
    fn composite_scaled_blends_translucent_sources() {
        let source = SourceImage::from_rgba(RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 128])));
        let mut canvas = RgbaImage::from_pixel(4, 4, RED);

        composite_scaled(&mut canvas, &source, SizePx::square(2));

        let pixel = canvas.get_pixel(1, 1);
        assert!(pixel[0] > 0 && pixel[2] > 0, "{pixel:?}");
        assert_eq!(pixel[3], 255);
        assert_eq!(canvas.get_pixel(0, 0).0, RED.0);
    }

    #[test]
    fn composite_scaled_clips_overflow() {
        let source = SourceImage::from_rgba(RgbaImage::from_pixel(4, 4, Rgba([0, 255, 0, 255])));
        let mut canvas = RgbaImage::from_pixel(6, 6, RED);

        let placed = composite_scaled(&mut canvas, &source, SizePx::new(10, 2));

        assert_eq!(placed, RectPx::new(-2, 2, 10, 2));
        for x in 0..6 {
            assert_eq!(canvas.get_pixel(x, 2).0, [0, 255, 0, 255]);
            assert_eq!(canvas.get_pixel(x, 1).0, RED.0);
        }
    }

    #[test]
    fn visible_part_is_relative_to_placement() {
        let bounds = SizePx::square(10);
        assert_eq!(
            visible_part(RectPx::new(-3, 4, 20, 20), bounds),
            Some(RectPx::new(3, 0, 10, 6))
        );
        assert_eq!(visible_part(RectPx::new(12, 0, 4, 4), bounds), None);
    }

    #[test]
    fn composite_scaled_handles_enormous_targets() {
        let source = SourceImage::from_rgba(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])));
        let mut canvas = solid_canvas(SizePx::square(64), HexColor::WHITE);

        composite_scaled(&mut canvas, &source, SizePx::square(u32::MAX));

        assert!(canvas.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn composite_scaled_centers_target() {
        let source = SourceImage::from_rgba(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255])));
        let mut canvas = solid_canvas(SizePx::square(20), HexColor::WHITE);

        let placed = composite_scaled(&mut canvas, &source, SizePx::square(10));

        assert_eq!(placed, RectPx::new(5, 5, 10, 10));
        assert_eq!(canvas.get_pixel(4, 4).0, [255, 255, 255, 255]);
        assert_eq!(canvas.get_pixel(5, 5).0, [0, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(14, 14).0, [0, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(15, 15).0, [255, 255, 255, 255]);
    }

    #[test]
    fn composite_scaled_ignores_empty_target() {
        let source = SourceImage::from_rgba(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255])));
        let mut canvas = solid_canvas(SizePx::square(1), HexColor::WHITE);

        composite_scaled(&mut canvas, &source, SizePx::square(0));

        assert_eq!(canvas.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }
}
