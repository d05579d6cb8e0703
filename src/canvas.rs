//! The raster output surface.
//!
//! Wraps a `tiny_skia::Pixmap` addressed in square blocks. Nothing is composited:
//! each block write replaces whatever was there.

use crate::error::CanvasError;
use crate::types::*;
use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

/// Block-addressed drawing surface.
pub struct Canvas {
    pixmap: Pixmap,
    block_size: u32,
}

impl Canvas {
    /// Creates a cleared (fully transparent) canvas.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidSize`] when either dimension is zero.
    pub fn new(width: u32, height: u32, block_size: u32) -> Result<Self, CanvasError> {
        let pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            block_size: block_size.max(1),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The cell grid this canvas is addressed by.
    pub fn grid(&self) -> Grid {
        Grid::for_surface(self.width(), self.height(), self.block_size)
    }

    /// Erases every pixel back to transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    /// Fills the block at cell `(ix, iy)` with a solid color.
    ///
    /// Cells are not checked against the grid; a block entirely off the surface
    /// paints nothing and a partly covered one is clipped to the surface.
    pub fn fill_block(&mut self, ix: i32, iy: i32, color: Rgb) {
        let size = i64::from(self.block_size);
        let (left, top) = (i64::from(ix) * size, i64::from(iy) * size);
        // tiny-skia still fills pixel row/column 0 for a rect ending exactly at 0.
        if left + size <= 0
            || top + size <= 0
            || left >= i64::from(self.width())
            || top >= i64::from(self.height())
        {
            return;
        }
        let size = size as f32;
        let Some(rect) = Rect::from_xywh(left as f32, top as f32, size, size) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, 255);
        paint.anti_alias = false;
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Applies every pass of `paints` in order.
    pub fn apply(&mut self, paints: &PaintSequence) {
        for block in paints.blocks() {
            self.fill_block(block.x, block.y, block.color);
        }
    }

    /// Reads back one pixel as `(r, g, b, a)`, premultiplied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.pixmap
            .pixel(x, y)
            .map(|p| (p.red(), p.green(), p.blue(), p.alpha()))
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn rgba(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Encodes the current contents as a PNG image.
    pub fn encode_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.pixmap
            .encode_png()
            .map_err(|e| CanvasError::Encode(e.to_string()))
    }
}
