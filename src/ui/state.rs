//! Application state management structures.
//!
//! This module contains the state the window keeps between frames: the canvas and
//! the scene painted on it, the random source, the on-screen texture and the
//! export bookkeeping.

use crate::canvas::Canvas;
use crate::constants;
use crate::error::CanvasError;
use crate::scene::{generate_scene, Scene, SceneConfig};
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Where the canvas is in its render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// A complete scene is on the canvas
    Rendered,
    /// The canvas has been wiped and the next scene is being painted
    Clearing,
}

/// Result of one export request, sent back from the save task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The image was written to the given location
    Saved(String),
    /// The user dismissed the save dialog
    Cancelled,
    /// Encoding or writing failed
    Failed(String),
}

/// State related to PNG export.
///
/// Export requests are queued by the input handler and started on the next frame.
/// Native saves finish asynchronously and report back over a channel.
pub struct ExportState {
    /// An export has been requested but not started yet
    pub pending: bool,
    /// Channel for receiving export results from async contexts
    pub sender: Sender<ExportOutcome>,
    /// Receiving end polled once per frame
    pub receiver: Receiver<ExportOutcome>,
    /// Most recent finished export, shown in the status bar
    pub last_outcome: Option<ExportOutcome>,
}

impl Default for ExportState {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            pending: false,
            sender,
            receiver,
            last_outcome: None,
        }
    }
}

/// The main application structure: one canvas showing one generated scene.
///
/// This struct implements the `eframe::App` trait; see the parent module for the
/// per-frame logic.
pub struct SpaceArtApp {
    /// Scene generation settings
    pub config: SceneConfig,
    /// The output surface
    pub canvas: Canvas,
    /// The scene currently on the canvas
    pub scene: Scene,
    /// Render cycle state
    pub render_state: RenderState,
    /// Export bookkeeping
    pub export: ExportState,
    /// Number of scenes generated so far
    pub generation: u64,
    /// Random source for every scene
    pub(super) rng: StdRng,
    /// GPU copy of the canvas
    pub(super) texture: Option<egui::TextureHandle>,
    /// Canvas changed since the texture was last uploaded
    pub(super) texture_dirty: bool,
}

impl SpaceArtApp {
    /// Creates the app with an OS-seeded random source and paints the first scene.
    pub fn new(config: SceneConfig) -> Result<Self, CanvasError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates the app with the given random source and paints the first scene.
    ///
    /// # Errors
    ///
    /// Fails only if the canvas cannot be allocated.
    pub fn with_rng(config: SceneConfig, mut rng: StdRng) -> Result<Self, CanvasError> {
        let mut canvas = Canvas::new(
            constants::CANVAS_WIDTH,
            constants::CANVAS_HEIGHT,
            constants::BLOCK_SIZE,
        )?;
        let scene = generate_scene(&config, &canvas.grid(), &mut rng);
        canvas.apply(&scene.paints);
        log::info!(
            "painted initial scene: {} planet(s), {} palette",
            scene.planets.len(),
            scene.palette
        );
        Ok(Self {
            config,
            canvas,
            scene,
            render_state: RenderState::Rendered,
            export: ExportState::default(),
            generation: 1,
            rng,
            texture: None,
            texture_dirty: true,
        })
    }

    /// Wipes the canvas and paints a freshly generated scene.
    ///
    /// The clear happens before any new block is written, so nothing from the
    /// previous scene survives outside the new scene's coverage.
    pub fn regenerate(&mut self) {
        self.render_state = RenderState::Clearing;
        self.canvas.clear();

        let grid = self.canvas.grid();
        self.scene = generate_scene(&self.config, &grid, &mut self.rng);
        self.canvas.apply(&self.scene.paints);

        self.generation += 1;
        self.texture_dirty = true;
        self.render_state = RenderState::Rendered;
        log::info!(
            "regenerated scene #{}: {} planet(s), {} palette",
            self.generation,
            self.scene.planets.len(),
            self.scene.palette
        );
    }

    /// Queues a PNG export of the current canvas for the next frame.
    pub fn request_export(&mut self) {
        self.export.pending = true;
    }

    /// One-line summary for the status bar.
    pub fn status_text(&self) -> String {
        let export = match &self.export.last_outcome {
            Some(ExportOutcome::Saved(path)) => format!("saved {path}"),
            Some(ExportOutcome::Cancelled) => "export cancelled".to_string(),
            Some(ExportOutcome::Failed(err)) => format!("export failed: {err}"),
            None => "Space: new scene, S: save PNG".to_string(),
        };
        format!(
            "{} palette, {} planet(s) | {}",
            self.scene.palette,
            self.scene.planets.len(),
            export
        )
    }
}
