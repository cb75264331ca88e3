// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Preloaded image strip shown in the page header.

use std::collections::HashMap;

use crate::models::images::{ImageList, LoadState};

/// MVU state for the preloader: retained handles plus their GPU textures.
#[derive(Default)]
pub struct ImageStripModel {
    images: ImageList,
    textures: HashMap<usize, egui::TextureHandle>,
}

/// Messages emitted by the image strip view or produced by decode workers.
// Debug omitted because TextureHandle is not Debug.
pub enum ImageStripMsg {
    RequestPickImages,
    Preload(Vec<String>),
    ImageReady {
        index: usize,
        texture: egui::TextureHandle,
    },
    ImageFailed {
        index: usize,
    },
}

/// Side-effectful commands that can be run off the UI path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageStripCommand {
    PickImages,
    DecodeImage { index: usize, source: String },
}

/// User-facing events for the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageStripEvent {
    /// Message text to display.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

impl ImageStripModel {
    /// Retained handles in preload order.
    pub fn images(&self) -> &ImageList {
        &self.images
    }
}

/// Apply a message to the image strip model. Returns a user-facing event when relevant.
pub fn update(
    model: &mut ImageStripModel,
    msg: ImageStripMsg,
    cmds: &mut Vec<ImageStripCommand>,
) -> Option<ImageStripEvent> {
    match msg {
        ImageStripMsg::RequestPickImages => {
            cmds.push(ImageStripCommand::PickImages);
            None
        }
        ImageStripMsg::Preload(paths) => {
            let added = model.images.preload(&paths);
            if added.is_empty() {
                return None;
            }
            let count = added.len();
            for (index, source) in added.zip(paths) {
                cmds.push(ImageStripCommand::DecodeImage { index, source });
            }
            tracing::info!(count, "preloading images");
            Some(ImageStripEvent {
                message: format!("Preloading {count} image(s)..."),
                is_error: false,
            })
        }
        ImageStripMsg::ImageReady { index, texture } => {
            model.images.set_state(index, LoadState::Ready);
            model.textures.insert(index, texture);
            None
        }
        ImageStripMsg::ImageFailed { index } => {
            // Broken sources are dropped from the strip without telling the user.
            model.images.set_state(index, LoadState::Failed);
            None
        }
    }
}

/// Render the strip and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &ImageStripModel) -> Vec<ImageStripMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::new(format!(
                "{} Preload images",
                egui_phosphor::regular::IMAGES
            )))
            .on_hover_text("Pick image files to cache ahead of use")
            .clicked()
        {
            msgs.push(ImageStripMsg::RequestPickImages);
        }
        if model.images.pending() > 0 {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });

    ui.add_space(6.0);

    egui::ScrollArea::horizontal()
        .id_salt("image_strip")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if model.images.is_empty() {
                    ui.label(
                        egui::RichText::new("No images preloaded")
                            .color(egui::Color32::from_gray(150)),
                    );
                    return;
                }
                for (index, handle) in model.images.handles().iter().enumerate() {
                    match handle.state {
                        LoadState::Ready => {
                            if let Some(texture) = model.textures.get(&index) {
                                render_thumbnail(ui, texture, &handle.source);
                            }
                        }
                        LoadState::Pending => {
                            ui.allocate_ui(egui::vec2(96.0, 72.0), |ui| {
                                ui.add(egui::Spinner::new())
                                    .on_hover_text(handle.source.as_str());
                            });
                        }
                        LoadState::Failed => {}
                    }
                }
            });
        });

    msgs
}

/// Draw a texture scaled to fit a 96px box.
fn render_thumbnail(ui: &mut egui::Ui, texture: &egui::TextureHandle, source: &str) {
    let size = texture.size_vec2();
    let max = 96.0;
    let scale = (max / size.x).min(max / size.y).min(1.0);
    ui.add(egui::Image::new((texture.id(), size * scale)))
        .on_hover_text(source);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preload_enqueues_one_decode_per_path_in_order() {
        let mut model = ImageStripModel::default();
        let mut cmds = Vec::new();

        let event = update(
            &mut model,
            ImageStripMsg::Preload(vec!["a.png".into(), "b.png".into()]),
            &mut cmds,
        )
        .expect("event expected");

        assert!(!event.is_error);
        assert_eq!(
            cmds,
            vec![
                ImageStripCommand::DecodeImage {
                    index: 0,
                    source: "a.png".into()
                },
                ImageStripCommand::DecodeImage {
                    index: 1,
                    source: "b.png".into()
                },
            ]
        );
        assert_eq!(model.images().len(), 2);
    }

    #[test]
    fn second_preload_continues_indices() {
        let mut model = ImageStripModel::default();
        let mut cmds = Vec::new();
        update(&mut model, ImageStripMsg::Preload(vec!["a.png".into()]), &mut cmds);
        cmds.clear();

        update(&mut model, ImageStripMsg::Preload(vec!["b.png".into()]), &mut cmds);

        assert_eq!(
            cmds,
            vec![ImageStripCommand::DecodeImage {
                index: 1,
                source: "b.png".into()
            }]
        );
    }

    #[test]
    fn empty_preload_is_silent() {
        let mut model = ImageStripModel::default();
        let mut cmds = Vec::new();

        let event = update(&mut model, ImageStripMsg::Preload(Vec::new()), &mut cmds);

        assert!(event.is_none());
        assert!(cmds.is_empty());
    }

    #[test]
    fn failed_decode_is_silent_and_retained() {
        let mut model = ImageStripModel::default();
        let mut cmds = Vec::new();
        update(&mut model, ImageStripMsg::Preload(vec!["missing.png".into()]), &mut cmds);

        let event = update(&mut model, ImageStripMsg::ImageFailed { index: 0 }, &mut cmds);

        assert!(event.is_none());
        assert_eq!(model.images().len(), 1);
        assert_eq!(model.images().handles()[0].state, LoadState::Failed);
        assert_eq!(model.images().pending(), 0);
    }

    #[test]
    fn pick_request_enqueues_dialog_command() {
        let mut model = ImageStripModel::default();
        let mut cmds = Vec::new();

        update(&mut model, ImageStripMsg::RequestPickImages, &mut cmds);

        assert_eq!(cmds, vec![ImageStripCommand::PickImages]);
    }
}
