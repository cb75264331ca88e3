// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Positional email splitting used by the form's structural email check.
//! This is a heuristic, not an RFC 5322 parser.

use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;

static ADDRESS_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_\-.]+@[a-zA-Z0-9_\-]+\.[a-zA-Z0-9_\-.]+$")
        .expect("address pattern is valid")
});

/// Substrings of an address split around the first `@` and the first `.` after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailParts<'a> {
    /// Everything before the `@`.
    pub local_part: &'a str,
    /// Between the `@` and the first following `.` (all of the remainder when no dot follows).
    pub domain_head: &'a str,
    /// After that dot to the end; empty when no dot follows the `@`.
    pub domain_tail: &'a str,
}

impl<'a> EmailParts<'a> {
    /// Split `address`; returns `None` when it contains no `@`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let parts = EmailParts::split("alice@mail.example.com").unwrap();
    /// assert_eq!(parts.local_part, "alice");
    /// assert_eq!(parts.domain_head, "mail");
    /// assert_eq!(parts.domain_tail, "example.com");
    /// ```
    pub fn split(address: &'a str) -> Option<Self> {
        let (local_part, after_at) = address.split_once('@')?;
        let (domain_head, domain_tail) = after_at.split_once('.').unwrap_or((after_at, ""));
        Some(Self {
            local_part,
            domain_head,
            domain_tail,
        })
    }
}

/// True when the whole address matches `name@domain.tld` character classes.
pub fn matches_address_shape(address: &str) -> bool {
    ADDRESS_SHAPE.is_match(address)
}

/// Structural acceptance test applied after the minimum-length check.
pub fn is_well_formed(address: &str, strict: bool) -> bool {
    let Some(parts) = EmailParts::split(address) else {
        return false;
    };

    let shaped = address.chars().count() > 5
        && !parts.domain_head.is_empty()
        && parts.local_part.chars().count() > 1
        && parts.domain_tail.chars().count() > 1
        && matches_address_shape(address);

    shaped && (!strict || EmailAddress::parse_with_options(address, Default::default()).is_ok())
}
