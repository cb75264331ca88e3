// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::Path;

use crate::config::AppConfig;
use crate::logic::preload::decode_image;
use crate::models::contact::FieldId;
use crate::ui::components::contact_form::{self, ContactFormModel, ContactFormMsg};
use crate::ui::components::image_strip::{
    self, ImageStripCommand, ImageStripModel, ImageStripMsg,
};
use crate::utils::is_image;

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Contact form state.
    pub form: ContactFormModel,
    /// Preloaded image handles and textures.
    pub images: ImageStripModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in the alert modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            form: ContactFormModel::new(config.validation.clone()),
            ..Default::default()
        }
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    Form(ContactFormMsg),
    Images(ImageStripMsg),
    ImageDecoded {
        index: usize,
        image: egui::ColorImage,
    },
    DismissError,
}

/// Commands represent side-effects executed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    PickImages,
    DecodeImage { index: usize, source: String },
}

/// Messages queued when the window opens: preload configured images and focus the forename.
pub fn startup_messages(config: &AppConfig) -> Vec<Msg> {
    vec![
        Msg::Images(ImageStripMsg::Preload(config.preload.clone())),
        Msg::Form(ContactFormMsg::RequestFocus(FieldId::Forename)),
    ]
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::DismissError => model.error = None,
        Msg::Form(m) => {
            if let Some(event) = contact_form::update(&mut model.form, m) {
                surface_event(model, event.message, event.is_error);
            }
        }
        Msg::Images(m) => {
            let mut strip_cmds = Vec::new();
            if let Some(event) = image_strip::update(&mut model.images, m, &mut strip_cmds) {
                surface_event(model, event.message, event.is_error);
            }
            cmds.extend(strip_cmds.into_iter().map(|c| match c {
                ImageStripCommand::PickImages => Command::PickImages,
                ImageStripCommand::DecodeImage { index, source } => {
                    Command::DecodeImage { index, source }
                }
            }));
        }
        Msg::ImageDecoded { index, .. } => {
            // ui.rs turns decoded pixels into textures; anything reaching here has no context.
            tracing::debug!(index, "decoded image arrived without a texture context");
            let mut strip_cmds = Vec::new();
            image_strip::update(
                &mut model.images,
                ImageStripMsg::ImageFailed { index },
                &mut strip_cmds,
            );
        }
    }
}

/// Execute a command synchronously and return a resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickImages => {
            let files = rfd::FileDialog::new()
                .set_title("Select images to preload")
                .add_filter(
                    "Images",
                    &["png", "jpg", "jpeg", "bmp", "tiff", "tif", "gif", "webp", "svg"],
                )
                .pick_files()
                .unwrap_or_default();
            let paths = files
                .into_iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
            Msg::Images(ImageStripMsg::Preload(paths))
        }
        Command::DecodeImage { index, source } => {
            let path = Path::new(&source);
            if !is_image(path) {
                tracing::debug!(%source, "preload source is not an image");
                return Msg::Images(ImageStripMsg::ImageFailed { index });
            }
            match decode_image(path) {
                Ok(image) => Msg::ImageDecoded { index, image },
                Err(err) => {
                    tracing::debug!(%source, "preload failed: {err:#}");
                    Msg::Images(ImageStripMsg::ImageFailed { index })
                }
            }
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
