// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact form domain model: field identities, input snapshots, and validation rules (UI-agnostic).

use serde::Deserialize;

/// The three inputs of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    Forename,
    Surname,
    Email,
}

impl FieldId {
    /// All fields in validation order.
    pub const ALL: [FieldId; 3] = [FieldId::Forename, FieldId::Surname, FieldId::Email];

    /// Control name used by the page contract (`form1.<name>`).
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Forename => "yourname",
            FieldId::Surname => "yoursirname",
            FieldId::Email => "addy",
        }
    }

    /// Resolve a control name, accepting the `yoursurname` spelling as an alias.
    ///
    /// ```rust,ignore
    /// assert_eq!(FieldId::from_name("yoursurname"), Some(FieldId::Surname));
    /// assert_eq!(FieldId::from_name("email"), None);
    /// ```
    #[cfg(test)]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "yourname" => Some(FieldId::Forename),
            "yoursirname" | "yoursurname" => Some(FieldId::Surname),
            "addy" => Some(FieldId::Email),
            _ => None,
        }
    }

    /// Label rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Forename => "Forename",
            FieldId::Surname => "Surname",
            FieldId::Email => "Email address",
        }
    }
}

/// Field values captured at the moment a submission is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub forename: String,
    pub surname: String,
    pub email_address: String,
}

impl FormSnapshot {
    pub fn new(
        forename: impl Into<String>,
        surname: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            forename: forename.into(),
            surname: surname.into(),
            email_address: email_address.into(),
        }
    }

    /// Value of a single field.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Forename => &self.forename,
            FieldId::Surname => &self.surname,
            FieldId::Email => &self.email_address,
        }
    }
}

/// Tunable thresholds for the validator; defaults reproduce the classic page behavior.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Minimum trimmed character count for forename and surname.
    pub min_name_len: usize,
    /// Minimum raw character count for the email address.
    pub min_email_len: usize,
    /// Additionally require the address to parse as a real mailbox.
    pub strict_email: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_name_len: 3,
            min_email_len: 5,
            strict_email: false,
        }
    }
}
