// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact form (forename, surname, email) in MVU shape.

use crate::logic::validate::{self, FormHost};
use crate::models::contact::{FieldId, FormSnapshot, ValidationRules};

/// UI model for the contact form, kept free of side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormModel {
    forename: String,
    surname: String,
    email: String,
    rules: ValidationRules,
    focus_request: Option<FieldId>,
    pending_alert: Option<String>,
    last_submitted: Option<FormSnapshot>,
}

/// Messages emitted by the contact form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactFormMsg {
    FieldChanged { field: FieldId, value: String },
    RequestFocus(FieldId),
    FocusApplied,
    Submit,
}

/// User-facing feedback surfaced to the status bar or alert modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormEvent {
    /// Text shown in the status bar/modal.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

impl ContactFormModel {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }

    /// Field awaiting keyboard focus on the next frame.
    pub fn focus_request(&self) -> Option<FieldId> {
        self.focus_request
    }

    /// Values of the most recent accepted submission.
    pub fn last_submitted(&self) -> Option<&FormSnapshot> {
        self.last_submitted.as_ref()
    }

    fn field_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Forename => &mut self.forename,
            FieldId::Surname => &mut self.surname,
            FieldId::Email => &mut self.email,
        }
    }
}

impl FormHost for ContactFormModel {
    fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Forename => &self.forename,
            FieldId::Surname => &self.surname,
            FieldId::Email => &self.email,
        }
    }

    fn focus(&mut self, field: FieldId) {
        self.focus_request = Some(field);
    }

    fn alert(&mut self, message: &str) {
        self.pending_alert = Some(message.to_string());
    }
}

/// Apply a message to the model. Returns a feedback event when relevant.
pub fn update(model: &mut ContactFormModel, msg: ContactFormMsg) -> Option<ContactFormEvent> {
    match msg {
        ContactFormMsg::FieldChanged { field, value } => {
            *model.field_mut(field) = value;
            None
        }
        ContactFormMsg::RequestFocus(field) => {
            model.focus_request = Some(field);
            None
        }
        ContactFormMsg::FocusApplied => {
            model.focus_request = None;
            None
        }
        ContactFormMsg::Submit => submit(model),
    }
}

fn submit(model: &mut ContactFormModel) -> Option<ContactFormEvent> {
    let rules = model.rules.clone();
    if !validate::validate(model, &rules) {
        // Validation always alerts on failure.
        let message = model.pending_alert.take().unwrap_or_default();
        return Some(ContactFormEvent {
            message,
            is_error: true,
        });
    }

    let snapshot = FormSnapshot::new(
        model.forename.as_str(),
        model.surname.as_str(),
        model.email.as_str(),
    );
    tracing::info!("form submission accepted");
    let message = format!(
        "Form submitted: {} {} {}",
        snapshot.forename.trim(),
        snapshot.surname.trim(),
        snapshot.email_address
    );
    model.last_submitted = Some(snapshot);
    Some(ContactFormEvent {
        message,
        is_error: false,
    })
}

/// Render the form and return any messages triggered by user interaction.
///
/// Pending focus requests are only honored while `enabled`, so focus lands on
/// the offending field once the alert has been dismissed.
pub fn view(ui: &mut egui::Ui, model: &ContactFormModel, enabled: bool) -> Vec<ContactFormMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("contact_form_grid")
            .num_columns(2)
            .spacing(egui::vec2(8.0, 10.0))
            .min_col_width(140.0)
            .show(ui, |ui| {
                for field in FieldId::ALL {
                    ui.label(field.label());
                    render_field(ui, model, field, enabled, &mut msgs);
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        let submit = egui::Button::new(format!(
            "{} Submit",
            egui_phosphor::regular::PAPER_PLANE_RIGHT
        ));
        if ui.add_enabled(enabled, submit).clicked() {
            msgs.push(ContactFormMsg::Submit);
        }

        if let Some(sent) = model.last_submitted() {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!(
                    "Last accepted: {} {} ({})",
                    sent.forename.trim(),
                    sent.surname.trim(),
                    sent.email_address
                ))
                .small()
                .color(egui::Color32::from_gray(110)),
            );
        }
    });

    msgs
}

/// Render a single-line input bound to `field`.
fn render_field(
    ui: &mut egui::Ui,
    model: &ContactFormModel,
    field: FieldId,
    enabled: bool,
    msgs: &mut Vec<ContactFormMsg>,
) {
    let mut buffer = model.value(field).to_string();
    let hint = match field {
        FieldId::Email => "yourname@yourdomain.com",
        _ => "",
    };
    let response = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut buffer)
            .id(egui::Id::new(("contact_form", field.name())))
            .hint_text(hint)
            .desired_width(280.0),
    );

    if response.changed() {
        msgs.push(ContactFormMsg::FieldChanged {
            field,
            value: buffer,
        });
    }

    if enabled && model.focus_request == Some(field) {
        response.request_focus();
        msgs.push(ContactFormMsg::FocusApplied);
    }

    if response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
        msgs.push(ContactFormMsg::Submit);
    }
}
