//! Core data types shared by the renderers, the placement sampler and the canvas.
//!
//! This module defines colors, the coarse cell grid, planet placements and the
//! ordered paint sequence a scene is composed from.

use crate::constants;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure white, the target of the rim highlight.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly blends `self` towards `other`.
    ///
    /// Each channel is `round(a * (1 - t) + b * t)`. `t` is not clamped; callers
    /// are expected to pass a value in `[0, 1]`.
    ///
    /// # Arguments
    ///
    /// * `other` - The color reached at `t = 1`
    /// * `t` - Interpolation factor
    ///
    /// # Returns
    ///
    /// The blended color.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Scales every channel by `alpha` and floors the result.
    pub fn scaled(self, alpha: f64) -> Rgb {
        let scale = |c: u8| (c as f64 * alpha).floor() as u8;
        Rgb::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Sum of the three channels; a cheap brightness measure for comparisons.
    pub fn brightness(self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }
}

/// The coarse cell grid the scene is laid out on.
///
/// The grid only carries dimensions. Colors are never stored per cell while
/// rendering; paint operations go straight to the output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
}

impl Grid {
    /// Creates a grid with the given number of columns and rows.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Derives the grid for a pixel surface, truncating partial blocks.
    ///
    /// An 800x550 surface with 8 pixel blocks yields 100x68 cells.
    pub fn for_surface(width_px: u32, height_px: u32, block_size: u32) -> Self {
        let block = block_size.max(1);
        Self::new((width_px / block) as i32, (height_px / block) as i32)
    }

    /// Returns true when `(x, y)` addresses a cell inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::for_surface(
            constants::CANVAS_WIDTH,
            constants::CANVAS_HEIGHT,
            constants::BLOCK_SIZE,
        )
    }
}

/// An accepted planet position and size, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Center column
    pub cx: i32,
    /// Center row
    pub cy: i32,
    /// Disk radius
    pub radius: i32,
}

impl Placement {
    /// Creates a placement.
    pub const fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self { cx, cy, radius }
    }

    /// Euclidean distance between the two centers.
    pub fn center_distance(&self, other: &Placement) -> f64 {
        ((self.cx - other.cx) as f64).hypot((self.cy - other.cy) as f64)
    }

    /// Returns true when the two disks are further apart than their radii plus `spacing`.
    pub fn keeps_clear_of(&self, other: &Placement, spacing: f64) -> bool {
        self.center_distance(other) > (self.radius + other.radius) as f64 + spacing
    }
}

/// Composition layer a paint pass belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Full-grid sky gradient
    Background,
    /// Optional star sprinkle over the sky
    Stars,
    /// Banded planet disk
    PlanetBody,
    /// Lightened cells along a planet's edge
    RimLight,
    /// Orbital ring outlines
    Rings,
    /// Small disks circling a planet, drawn over its rings
    Moons,
}

/// One grid cell painted with a solid color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPaint {
    /// Cell column
    pub x: i32,
    /// Cell row
    pub y: i32,
    /// Fill color
    pub color: Rgb,
}

/// A group of block paints produced by one renderer for one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintPass {
    /// The layer the blocks belong to
    pub layer: Layer,
    /// Blocks in the order they must be written
    pub blocks: Vec<BlockPaint>,
}

impl PaintPass {
    /// Creates an empty pass for `layer`.
    pub fn new(layer: Layer) -> Self {
        Self {
            layer,
            blocks: Vec::new(),
        }
    }

    /// Appends a block if it lies inside `grid`; out-of-bounds cells are silently dropped.
    pub fn paint(&mut self, grid: &Grid, x: i32, y: i32, color: Rgb) {
        if grid.contains(x, y) {
            self.blocks.push(BlockPaint { x, y, color });
        }
    }

    /// Number of blocks in the pass.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true when the pass paints nothing.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Ordered list of paint passes making up one scene.
///
/// Passes are applied front to back, so a later pass wins wherever it overlaps an
/// earlier one. This is the only layering mechanism: planets cover the sky, rims
/// cover planet bodies and rings cover whatever lies under them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintSequence {
    passes: Vec<PaintPass>,
}

impl PaintSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pass after every pass already queued.
    pub fn push(&mut self, pass: PaintPass) {
        self.passes.push(pass);
    }

    /// The passes in application order.
    pub fn passes(&self) -> &[PaintPass] {
        &self.passes
    }

    /// Layer tags in application order.
    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.passes.iter().map(|pass| pass.layer)
    }

    /// Every block paint in application order.
    pub fn blocks(&self) -> impl Iterator<Item = &BlockPaint> + '_ {
        self.passes.iter().flat_map(|pass| pass.blocks.iter())
    }

    /// Total number of block paints across all passes.
    pub fn block_count(&self) -> usize {
        self.passes.iter().map(PaintPass::len).sum()
    }

    /// Collapses the sequence into the final color of every cell.
    ///
    /// The result is indexed row-major (`y * width + x`); cells no pass touches are `None`.
    pub fn resolve(&self, grid: &Grid) -> Vec<Option<Rgb>> {
        let mut cells = vec![None; grid.cell_count()];
        for block in self.blocks() {
            if grid.contains(block.x, block.y) {
                cells[(block.y * grid.width + block.x) as usize] = Some(block.color);
            }
        }
        cells
    }
}
