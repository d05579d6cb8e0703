//! Export utilities: save the current canvas as a PNG.
//!
//! Notes:
//! - Native builds open a save dialog preset to `space_art.png`.
//! - Web builds trigger a browser download with the same name.

use super::state::{ExportOutcome, SpaceArtApp};
use crate::constants::EXPORT_FILE_NAME;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::CanvasError;
use eframe::egui;

impl SpaceArtApp {
    /// Collects finished exports and starts a queued one.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context for requesting repaints
    pub fn handle_pending_export(&mut self, ctx: &egui::Context) {
        while let Ok(outcome) = self.export.receiver.try_recv() {
            match &outcome {
                ExportOutcome::Saved(path) => log::info!("exported canvas to {path}"),
                ExportOutcome::Cancelled => log::debug!("export cancelled"),
                ExportOutcome::Failed(err) => log::error!("export failed: {err}"),
            }
            self.export.last_outcome = Some(outcome);
        }

        if std::mem::take(&mut self.export.pending) {
            self.export_png(ctx);
        }
    }

    /// Encodes the canvas and hands the bytes to the platform's save path.
    pub fn export_png(&mut self, ctx: &egui::Context) {
        let bytes = match self.canvas.encode_png() {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("{e}");
                self.export.last_outcome = Some(ExportOutcome::Failed(e.to_string()));
                return;
            }
        };
        log::debug!("encoded {} byte PNG", bytes.len());

        #[cfg(target_arch = "wasm32")]
        {
            let outcome = match Self::trigger_download(EXPORT_FILE_NAME, &bytes) {
                Ok(()) => ExportOutcome::Saved(EXPORT_FILE_NAME.to_string()),
                Err(e) => ExportOutcome::Failed(e),
            };
            let _ = self.export.sender.send(outcome);
            ctx.request_repaint();
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let sender = self.export.sender.clone();
            let ctx = ctx.clone();
            let task = async move {
                let outcome = match rfd::AsyncFileDialog::new()
                    .add_filter("PNG", &["png"])
                    .set_file_name(EXPORT_FILE_NAME)
                    .save_file()
                    .await
                {
                    Some(handle) => {
                        let path = handle.path().to_path_buf();
                        match std::fs::write(&path, &bytes) {
                            Ok(()) => ExportOutcome::Saved(path.display().to_string()),
                            Err(e) => ExportOutcome::Failed(CanvasError::from(e).to_string()),
                        }
                    }
                    None => ExportOutcome::Cancelled,
                };
                let _ = sender.send(outcome);
                ctx.request_repaint();
            };

            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    handle.spawn(task);
                }
                Err(_) => futures::executor::block_on(task),
            }
        }
    }

    /// Triggers a file download in the browser (WASM only).
    ///
    /// Creates a temporary anchor element pointing at a blob URL and clicks it.
    ///
    /// # Arguments
    ///
    /// * `filename` - The name to give the downloaded file
    /// * `bytes` - PNG file contents
    ///
    /// # Returns
    ///
    /// `Ok(())` if successful, or an error message if the operation fails.
    #[cfg(target_arch = "wasm32")]
    fn trigger_download(filename: &str, bytes: &[u8]) -> Result<(), String> {
        use eframe::wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("No window found")?;
        let document = window.document().ok_or("No document found")?;

        let blob_parts = js_sys::Array::new();
        blob_parts.push(&js_sys::Uint8Array::from(bytes));

        let blob_options = web_sys::BlobPropertyBag::new();
        blob_options.set_type("image/png");

        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &blob_options)
            .map_err(|_| "Failed to create blob")?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Failed to create object URL")?;

        let anchor = document
            .create_element("a")
            .map_err(|_| "Failed to create anchor element")?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "Failed to cast to anchor element")?;

        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        let body = document.body().ok_or("No body found")?;
        body.append_child(&anchor)
            .map_err(|_| "Failed to append anchor")?;
        anchor.click();
        body.remove_child(&anchor)
            .map_err(|_| "Failed to remove anchor")?;

        web_sys::Url::revoke_object_url(&url).map_err(|_| "Failed to revoke object URL")?;

        Ok(())
    }
}
