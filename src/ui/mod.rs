//! User interface for the space art window.
//!
//! This module contains the main application struct, keyboard handling, drawing the
//! canvas texture and the status bar.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main SpaceArtApp
//! - `export` - PNG export for native and WASM

mod export;
mod state;

pub use state::{ExportOutcome, ExportState, RenderState, SpaceArtApp};

use crate::constants;
use eframe::egui;

impl eframe::App for SpaceArtApp {
    /// Main update function called by egui for each frame.
    ///
    /// Input is handled first so a regenerate or export requested this frame is
    /// visible in the same frame's drawing.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);
        self.handle_pending_export(ctx);

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(constants::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(self.status_text());
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}

impl SpaceArtApp {
    /// Space regenerates the scene; S (either case) queues a PNG export. Auto-repeat is ignored.
    ///
    /// Regeneration runs to completion before this returns.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context for checking input
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let (regenerate, export) = ctx.input(|i| {
            let pressed = |wanted: egui::Key| {
                i.events.iter().any(|event| {
                    matches!(event, egui::Event::Key { key, pressed: true, repeat: false, .. } if *key == wanted)
                })
            };
            (pressed(egui::Key::Space), pressed(egui::Key::S))
        });
        if regenerate {
            self.regenerate();
        }
        if export {
            self.request_export();
        }
    }

    /// Draws the canvas texture scaled to fit the available space.
    ///
    /// The texture is re-uploaded only when the canvas changed since the last frame.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        self.sync_texture(ui.ctx());

        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let Some(texture) = &self.texture else {
            return;
        };
        let target = fit_rect(
            response.rect,
            self.canvas.width() as f32,
            self.canvas.height() as f32,
        );
        painter.image(
            texture.id(),
            target,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    fn sync_texture(&mut self, ctx: &egui::Context) {
        if !self.texture_dirty && self.texture.is_some() {
            return;
        }
        let image = egui::ColorImage::from_rgba_premultiplied(
            [self.canvas.width() as usize, self.canvas.height() as usize],
            self.canvas.rgba(),
        );
        // Nearest filtering keeps the blocks crisp when the window is scaled.
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("space_art_canvas", image, egui::TextureOptions::NEAREST));
            }
        }
        self.texture_dirty = false;
    }
}

/// Largest rect with the canvas aspect ratio that fits in `area`, centered.
fn fit_rect(area: egui::Rect, width: f32, height: f32) -> egui::Rect {
    if width <= 0.0 || height <= 0.0 {
        return area;
    }
    let scale = (area.width() / width).min(area.height() / height).max(0.0);
    egui::Rect::from_center_size(area.center(), egui::vec2(width * scale, height * scale))
}
