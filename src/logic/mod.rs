// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic kept free of egui widgets: form validation and image decoding.

pub mod preload;
pub mod validate;
