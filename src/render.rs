//! Cell renderers for the sky, stars, planets, rings and moons.
//!
//! Every renderer is a pure function of the grid, a palette and some geometry. It
//! returns paint passes instead of touching a surface, and drops any cell that falls
//! outside the grid.

use crate::constants;
use crate::types::*;
use rand::Rng;

/// Colors a star can take.
const STAR_COLORS: [Rgb; 3] = [
    Rgb::new(255, 255, 255),
    Rgb::new(238, 230, 255),
    Rgb::new(220, 240, 180),
];

/// Paints a top-to-bottom multi-stop gradient across the whole grid.
///
/// Row `y` sits at `t = y / (rows - 1)` along the palette; the color is blended
/// between the two neighbouring stops. The first row is exactly the first stop and
/// the last row exactly the last stop, whatever the grid height.
///
/// # Arguments
///
/// * `grid` - Target grid
/// * `palette` - Gradient stops, top first
///
/// # Returns
///
/// A [`Layer::Background`] pass covering every cell (empty for an empty palette).
pub fn gradient_background(grid: &Grid, palette: &[Rgb]) -> PaintPass {
    let mut pass = PaintPass::new(Layer::Background);
    let Some(&last) = palette.last() else {
        return pass;
    };
    let last_index = palette.len() - 1;

    for y in 0..grid.height {
        let t = if grid.height > 1 {
            y as f64 / (grid.height - 1) as f64
        } else {
            0.0
        };
        let position = t * last_index as f64;
        let idx = (position.floor() as usize).min(last_index);
        let frac = position - idx as f64;
        let next = palette.get(idx + 1).copied().unwrap_or(last);
        let color = palette[idx].lerp(next, frac);
        for x in 0..grid.width {
            pass.paint(grid, x, y, color);
        }
    }
    pass
}

/// Paints one banded planet disk plus its rim light.
///
/// Cells are visited row-major over the bounding box. A cell belongs to the disk
/// when `x² + y² <= r²`; its band is picked from its normalized distance to the
/// center. Cells within [`constants::RIM_WIDTH`] of the edge are repainted with the
/// band color pulled towards white in a second pass.
///
/// # Returns
///
/// `[body, rim]`, to be applied in that order.
pub fn planet(grid: &Grid, placement: &Placement, palette: &[Rgb]) -> [PaintPass; 2] {
    let mut body = PaintPass::new(Layer::PlanetBody);
    let mut rim = PaintPass::new(Layer::RimLight);
    if palette.is_empty() {
        return [body, rim];
    }

    let r = placement.radius;
    let last_band = (palette.len() - 1) as i64;
    for y in -r..=r {
        for x in -r..=r {
            if x * x + y * y > r * r {
                continue;
            }
            let (cx, cy) = (placement.cx + x, placement.cy + y);
            if !grid.contains(cx, cy) {
                continue;
            }
            let norm = if r > 0 {
                ((x * x + y * y) as f64).sqrt() / r as f64
            } else {
                0.0
            };
            let band = ((norm * last_band as f64).floor() as i64).clamp(0, last_band);
            let color = palette[band as usize];
            body.paint(grid, cx, cy, color);
            if (norm - 1.0).abs() < constants::RIM_WIDTH {
                rim.paint(grid, cx, cy, color.lerp(Rgb::WHITE, constants::RIM_HIGHLIGHT_MIX));
            }
        }
    }
    [body, rim]
}

/// Ring parameters for [`rings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingStyle {
    /// Number of concentric rings
    pub count: u32,
    /// Carried through from the scene settings; brightness only depends on `count`.
    pub fade: u32,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            count: constants::MAX_RINGS,
            fade: constants::RING_FADE,
        }
    }
}

impl RingStyle {
    /// Color of ring `ring` (1-based): the palette's rim color dimmed by
    /// `1 - ring / (count + 1)`, so outer rings are fainter.
    pub fn ring_color(&self, palette: &[Rgb], ring: u32) -> Option<Rgb> {
        let base = *palette.last()?;
        let alpha = 1.0 - ring as f64 / (self.count + 1) as f64;
        Some(base.scaled(alpha))
    }
}

/// Traces `style.count` dotted circles around a planet.
///
/// Ring `n` has radius `r + n * 10` and is sampled every 4 degrees (90 points),
/// each point floored to a cell. Overlapping points are painted again; there is no
/// deduplication and no line thickness.
pub fn rings(grid: &Grid, placement: &Placement, palette: &[Rgb], style: RingStyle) -> PaintPass {
    let mut pass = PaintPass::new(Layer::Rings);
    for ring in 1..=style.count {
        let Some(color) = style.ring_color(palette, ring) else {
            break;
        };
        let radius = (placement.radius + ring as i32 * constants::RING_SPACING) as f64;
        for theta in (0..360).step_by(constants::RING_STEP_DEGREES as usize) {
            let rad = (theta as f64).to_radians();
            let x = (placement.cx as f64 + radius * rad.cos()).floor() as i32;
            let y = (placement.cy as f64 + radius * rad.sin()).floor() as i32;
            pass.paint(grid, x, y, color);
        }
    }
    pass
}

/// Paints one moon as a single [`Layer::Moons`] pass.
///
/// A moon is shaded like a small planet: its banded body comes first and its rim
/// cells follow, so the rim still wins inside the pass.
pub fn moon(grid: &Grid, placement: &Placement, palette: &[Rgb]) -> PaintPass {
    let [body, rim] = planet(grid, placement, palette);
    let mut pass = PaintPass::new(Layer::Moons);
    pass.blocks = body.blocks;
    pass.blocks.extend(rim.blocks);
    pass
}

/// Scatters stars over the grid.
///
/// Roughly `density` stars per cell. About one star in ten grows a plus-shaped
/// halo and one in fifty becomes a small white block.
pub fn star_field<R: Rng + ?Sized>(grid: &Grid, density: f64, rng: &mut R) -> PaintPass {
    let mut pass = PaintPass::new(Layer::Stars);
    if grid.width <= 0 || grid.height <= 0 {
        return pass;
    }
    let count = (density * grid.cell_count() as f64) as usize;

    for _ in 0..count {
        let x = rng.random_range(0..grid.width);
        let y = rng.random_range(0..grid.height);
        let color = star_color(rng);
        pass.paint(grid, x, y, color);
        if rng.random::<f64>() < 0.1 {
            for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
                let color = star_color(rng);
                pass.paint(grid, x + dx, y + dy, color);
            }
        }
        if rng.random::<f64>() < 0.02 {
            let r = rng.random_range(1..=2);
            for xx in -r..=r {
                for yy in -r..=r {
                    pass.paint(grid, x + xx, y + yy, Rgb::WHITE);
                }
            }
        }
    }
    pass
}

fn star_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    STAR_COLORS[rng.random_range(0..STAR_COLORS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteName;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid() -> Grid {
        Grid::new(100, 68)
    }

    #[test]
    fn gradient_starts_and_ends_on_palette_stops() {
        let grid = grid();
        for name in PaletteName::ALL {
            let palette = name.colors();
            let pass = gradient_background(&grid, palette);
            let cells = {
                let mut seq = PaintSequence::new();
                seq.push(pass);
                seq.resolve(&grid)
            };
            let first_row = &cells[..grid.width as usize];
            let last_row = &cells[((grid.height - 1) * grid.width) as usize..];
            assert!(first_row.iter().all(|c| *c == Some(palette[0])), "{name}");
            assert!(
                last_row.iter().all(|c| *c == Some(palette[palette.len() - 1])),
                "{name}"
            );
        }
    }

    #[test]
    fn gradient_covers_every_cell_once_with_uniform_rows() {
        let grid = Grid::new(10, 5);
        let pass = gradient_background(&grid, PaletteName::Purple.colors());
        assert_eq!(pass.len(), 50);
        for row in pass.blocks.chunks(10) {
            assert!(row.iter().all(|b| b.color == row[0].color && b.y == row[0].y));
        }
    }

    #[test]
    fn gradient_interior_row_blends_neighbouring_stops() {
        let grid = grid();
        let palette = PaletteName::Blue.colors();
        let pass = gradient_background(&grid, palette);
        let row = pass.blocks.iter().find(|b| b.y == 34).unwrap();

        // t = 34 / 67, position = 6t = 3 + 3/67
        let expected = palette[3].lerp(palette[4], 3.0 / 67.0);
        assert_eq!(row.color, expected);
        assert_eq!(row.color, Rgb::new(34, 48, 81));
    }

    #[test]
    fn gradient_with_two_stops_and_one_row() {
        let stops = [Rgb::new(0, 0, 0), Rgb::new(200, 100, 50)];
        let pass = gradient_background(&Grid::new(3, 1), &stops);
        assert!(pass.blocks.iter().all(|b| b.color == stops[0]));
        assert!(gradient_background(&Grid::new(3, 3), &[]).is_empty());
    }

    #[test]
    fn planet_stays_inside_its_disk() {
        let grid = grid();
        let placement = Placement::new(50, 34, 12);
        let [body, rim] = planet(&grid, &placement, PaletteName::Blue.colors());
        assert!(!body.is_empty());
        for block in body.blocks.iter().chain(rim.blocks.iter()) {
            let dx = (block.x - placement.cx) as f64;
            let dy = (block.y - placement.cy) as f64;
            assert!(dx.hypot(dy) <= placement.radius as f64 + 1e-9);
        }
    }

    #[test]
    fn planet_edge_cells_get_highlight_color() {
        let grid = grid();
        let palette = PaletteName::Red.colors();
        let placement = Placement::new(50, 34, 15);
        let mut seq = PaintSequence::new();
        for pass in planet(&grid, &placement, palette) {
            seq.push(pass);
        }
        let cells = seq.resolve(&grid);

        let mut rim_cells = 0;
        for y in -15..=15 {
            for x in -15..=15 {
                if x * x + y * y > 15 * 15 {
                    continue;
                }
                let norm = ((x * x + y * y) as f64).sqrt() / 15.0;
                let band = ((norm * 6.0).floor() as usize).min(6);
                let cell = cells[((34 + y) * grid.width + 50 + x) as usize];
                if norm > 0.92 && norm < 1.08 {
                    rim_cells += 1;
                    assert_eq!(cell, Some(palette[band].lerp(Rgb::WHITE, 0.8)));
                } else {
                    assert_eq!(cell, Some(palette[band]));
                }
            }
        }
        assert!(rim_cells > 0);
    }

    #[test]
    fn planet_center_uses_core_color() {
        let grid = grid();
        let palette = PaletteName::DarkBrown.colors();
        let [body, _] = planet(&grid, &Placement::new(10, 10, 5), palette);
        let center = body.blocks.iter().find(|b| b.x == 10 && b.y == 10).unwrap();
        assert_eq!(center.color, palette[0]);
    }

    #[test]
    fn planet_clipped_at_grid_edge() {
        let grid = grid();
        let [body, rim] = planet(&grid, &Placement::new(0, 0, 10), PaletteName::Blue.colors());
        assert!(!body.is_empty());
        assert!(body
            .blocks
            .iter()
            .chain(rim.blocks.iter())
            .all(|b| grid.contains(b.x, b.y)));
    }

    #[test]
    fn three_rings_fade_outwards() {
        let palette = PaletteName::Blue.colors();
        let style = RingStyle::default();
        let colors: Vec<Rgb> = (1..=3)
            .map(|ring| style.ring_color(palette, ring).unwrap())
            .collect();
        assert_eq!(colors[0], Rgb::new(60, 90, 133));
        assert_eq!(colors[1], Rgb::new(40, 60, 89));
        assert_eq!(colors[2], Rgb::new(20, 30, 44));
        assert!(colors[0].brightness() > colors[1].brightness());
        assert!(colors[1].brightness() > colors[2].brightness());
    }

    #[test]
    fn rings_sample_ninety_points_each() {
        let grid = grid();
        let placement = Placement::new(50, 34, 10);
        let style = RingStyle { count: 2, fade: 15 };
        let pass = rings(&grid, &placement, PaletteName::Purple.colors(), style);
        assert!(pass.blocks.iter().all(|b| grid.contains(b.x, b.y)));

        let roomy = Grid::new(200, 200);
        let centered = Placement::new(100, 100, 10);
        let pass = rings(&roomy, &centered, PaletteName::Purple.colors(), style);
        assert_eq!(pass.len(), 180);
        let first = pass.blocks[0];
        assert_eq!((first.x, first.y), (120, 100));
    }

    #[test]
    fn ring_fade_does_not_change_output() {
        let grid = grid();
        let placement = Placement::new(40, 30, 12);
        let palette = PaletteName::Red.colors();
        let a = rings(&grid, &placement, palette, RingStyle { count: 3, fade: 15 });
        let b = rings(&grid, &placement, palette, RingStyle { count: 3, fade: 0 });
        assert_eq!(a, b);
    }

    #[test]
    fn moon_is_one_pass_with_rim_after_body() {
        let grid = grid();
        let palette = PaletteName::Purple.colors();
        let placement = Placement::new(30, 30, 4);
        let pass = moon(&grid, &placement, palette);
        let [body, rim] = planet(&grid, &placement, palette);
        assert_eq!(pass.layer, Layer::Moons);
        assert_eq!(pass.len(), body.len() + rim.len());
        assert_eq!(&pass.blocks[..body.len()], &body.blocks[..]);
        assert_eq!(&pass.blocks[body.len()..], &rim.blocks[..]);
    }

    #[test]
    fn star_field_is_bounded_and_seeded() {
        let grid = grid();
        let a = star_field(&grid, 0.004, &mut StdRng::seed_from_u64(9));
        let b = star_field(&grid, 0.004, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(a.len() >= 27);
        assert!(a.blocks.iter().all(|s| grid.contains(s.x, s.y)));
        assert!(star_field(&grid, 0.0, &mut StdRng::seed_from_u64(9)).is_empty());
    }
}
