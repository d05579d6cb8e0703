//! # Space Art
//!
//! Procedural low-resolution space scenes: a gradient sky, banded planets with a
//! rim light, and dotted orbital rings, painted onto a coarse grid of 8x8 pixel
//! blocks.
//!
//! ## Features
//! - Four built-in palettes (`red`, `purple`, `blue`, `dark_brown`)
//! - Non-overlapping planet placement with a bounded retry budget
//! - Optional star field and moons
//! - Space bar regenerates the scene, `S` saves it as `space_art.png`
//!
//! Rendering is split into pure renderers that emit a [`PaintSequence`] and a
//! [`Canvas`] that applies it, so scenes can be generated and inspected without a
//! window.

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod canvas;
pub mod constants;
mod error;
mod palette;
mod placement;
pub mod render;
mod scene;
mod types;
mod ui;

// Re-export public types and functions
pub use canvas::Canvas;
pub use error::CanvasError;
pub use palette::{PaletteChoice, PaletteName};
pub use placement::{sample_placements, PlacementPolicy};
pub use scene::{generate_scene, Planet, Scene, SceneConfig};
pub use types::*;
pub use ui::{ExportOutcome, RenderState, SpaceArtApp};

/// Runs the space art window with default settings.
///
/// # Returns
///
/// Returns `Ok(())` when the window is closed, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use space_art::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app() -> Result<(), eframe::Error> {
    run_app_with(SceneConfig::default())
}

/// Runs the space art window with the given scene settings.
///
/// A tokio runtime is entered for the lifetime of the window so the save dialog can
/// run off the UI thread. Without one, exports block the UI until the dialog closes.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app_with(config: SceneConfig) -> Result<(), eframe::Error> {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => Some(runtime),
        Err(e) => {
            log::warn!("no async runtime for save dialogs: {e}");
            None
        }
    };
    let _guard = runtime.as_ref().map(|rt| rt.enter());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Space Art")
            .with_inner_size([
                constants::CANVAS_WIDTH as f32,
                constants::CANVAS_HEIGHT as f32 + constants::STATUS_BAR_HEIGHT,
            ]),
        ..Default::default()
    };
    eframe::run_native(
        "Space Art",
        options,
        Box::new(move |_cc| {
            let app = SpaceArtApp::new(config)?;
            Ok(Box::new(app))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scene_config_default() {
        let config = SceneConfig::default();
        assert_eq!(config.palette, PaletteChoice::Fixed(PaletteName::Blue));
        assert_eq!(config.planet_count, 3);
        assert_eq!((config.min_radius, config.max_radius), (10, 20));
        assert_eq!(config.max_rings, 3);
        assert!(!config.stars);
    }

    #[test]
    fn test_generated_scene_paints_onto_canvas() {
        let mut canvas = Canvas::new(
            constants::CANVAS_WIDTH,
            constants::CANVAS_HEIGHT,
            constants::BLOCK_SIZE,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        let scene = generate_scene(&SceneConfig::default(), &canvas.grid(), &mut rng);
        canvas.apply(&scene.paints);

        let grid = canvas.grid();
        let cells = scene.paints.resolve(&grid);
        let bottom_left = cells[((grid.height - 1) * grid.width) as usize].unwrap();
        assert_eq!(
            canvas.pixel(4, 543),
            Some((bottom_left.r, bottom_left.g, bottom_left.b, 255))
        );
        assert_eq!(canvas.pixel(4, 545), Some((0, 0, 0, 0)));
    }
}
