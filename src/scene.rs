//! Scene composition: settings, planet layout and the ordered paint sequence.
//!
//! A scene is the gradient sky, an optional star field, and a handful of ringed
//! planets with optional moons, all painted from a single palette.

use crate::constants;
use crate::palette::{PaletteChoice, PaletteName};
use crate::placement::{sample_placements, PlacementPolicy};
use crate::render::{self, RingStyle};
use crate::types::*;
use rand::Rng;
use std::f64::consts::TAU;

/// Settings that drive scene generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Palette used for the sky and every planet of a scene
    pub palette: PaletteChoice,
    /// Number of planets requested per scene
    pub planet_count: usize,
    /// Smallest planet radius in cells
    pub min_radius: i32,
    /// Largest planet radius in cells
    pub max_radius: i32,
    /// Each planet gets between 1 and this many rings
    pub max_rings: u32,
    /// Forwarded to the ring renderer as [`RingStyle::fade`]
    pub ring_fade: u32,
    /// Whether to scatter stars over the sky
    pub stars: bool,
    /// Stars per cell when `stars` is set
    pub star_density: f64,
    /// Whether planets get moons
    pub moons: bool,
    /// Each planet gets between 1 and this many moons when `moons` is set
    pub max_moons: u32,
    /// Smallest moon radius in cells
    pub min_moon_radius: i32,
    /// Largest moon radius in cells
    pub max_moon_radius: i32,
    /// Placement margin, spacing and attempt budget
    pub placement: PlacementPolicy,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            palette: PaletteChoice::default(),
            planet_count: constants::DEFAULT_PLANET_COUNT,
            min_radius: constants::MIN_PLANET_RADIUS,
            max_radius: constants::MAX_PLANET_RADIUS,
            max_rings: constants::MAX_RINGS,
            ring_fade: constants::RING_FADE,
            stars: false,
            star_density: constants::STAR_DENSITY,
            moons: false,
            max_moons: constants::MAX_MOONS,
            min_moon_radius: constants::MIN_MOON_RADIUS,
            max_moon_radius: constants::MAX_MOON_RADIUS,
            placement: PlacementPolicy::default(),
        }
    }
}

/// One planet of a generated scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    /// Where the planet sits
    pub placement: Placement,
    /// How many rings were drawn around it
    pub rings: u32,
    /// Moons that landed at least partly on the grid, in paint order
    pub moons: Vec<Placement>,
}

/// A fully composed scene, ready to be applied to a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Palette the scene was painted with
    pub palette: PaletteName,
    /// Planets in paint order
    pub planets: Vec<Planet>,
    /// Everything to paint, in order
    pub paints: PaintSequence,
}

/// Generates a new scene.
///
/// Paint order is fixed: background, then stars (if enabled), then for each planet
/// its body, its rim light, its rings and its moons (if enabled). A later planet
/// therefore covers the rings and moons of an earlier one where they cross.
///
/// # Arguments
///
/// * `config` - Scene settings
/// * `grid` - Grid the scene is laid out on
/// * `rng` - Random source for the palette, stars, placements, rings and moons
///
/// # Returns
///
/// The generated [`Scene`].
pub fn generate_scene<R: Rng + ?Sized>(config: &SceneConfig, grid: &Grid, rng: &mut R) -> Scene {
    let palette_name = config.palette.resolve(rng);
    let palette = palette_name.colors();
    let mut paints = PaintSequence::new();

    paints.push(render::gradient_background(grid, palette));
    if config.stars {
        paints.push(render::star_field(grid, config.star_density, rng));
    }

    let placements = sample_placements(
        grid,
        config.planet_count,
        config.min_radius,
        config.max_radius,
        &config.placement,
        rng,
    );

    let mut planets = Vec::with_capacity(placements.len());
    for placement in placements {
        for pass in render::planet(grid, &placement, palette) {
            paints.push(pass);
        }
        let rings = rng.random_range(1..=config.max_rings.max(1));
        let style = RingStyle {
            count: rings,
            fade: config.ring_fade,
        };
        paints.push(render::rings(grid, &placement, palette, style));

        let mut moons = Vec::new();
        if config.moons {
            for _ in 0..rng.random_range(1..=config.max_moons.max(1)) {
                let moon = place_moon(config, &placement, rng);
                let pass = render::moon(grid, &moon, palette);
                if pass.is_empty() {
                    continue;
                }
                paints.push(pass);
                moons.push(moon);
            }
        }
        planets.push(Planet {
            placement,
            rings,
            moons,
        });
    }

    log::debug!(
        "generated {} planet(s) on the {} palette ({} block paints)",
        planets.len(),
        palette_name,
        paints.block_count()
    );

    Scene {
        palette: palette_name,
        planets,
        paints,
    }
}

/// Puts a moon at a random angle around `planet`, clear of its surface by 8 to 18 cells.
///
/// Moons are not checked against other planets or the grid; whatever falls off the
/// grid is dropped when painting.
fn place_moon<R: Rng + ?Sized>(config: &SceneConfig, planet: &Placement, rng: &mut R) -> Placement {
    let lo = config.min_moon_radius.min(config.max_moon_radius).max(0);
    let hi = config.min_moon_radius.max(config.max_moon_radius).max(0);
    let radius = rng.random_range(lo..=hi);
    let angle = rng.random_range(0.0..TAU);
    let distance = (planet.radius + radius + rng.random_range(constants::MOON_GAP)) as f64;
    Placement::new(
        (planet.cx as f64 + angle.cos() * distance) as i32,
        (planet.cy as f64 + angle.sin() * distance) as i32,
        radius,
    )
}
