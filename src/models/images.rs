// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Retained image handles created by the preloader.

use std::ops::Range;

/// Load progress of a single preloaded image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// A requested image, kept alive so its decoded pixels stay cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageHandle {
    pub source: String,
    pub state: LoadState,
}

/// Ordered, append-only collection of image handles owned by the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageList {
    handles: Vec<ImageHandle>,
}

impl ImageList {
    /// Append one pending handle per path, in order, and return the indices of the new handles.
    ///
    /// Paths are not checked here; unreadable sources only ever end up as [`LoadState::Failed`].
    ///
    /// ```rust,ignore
    /// let mut images = ImageList::default();
    /// let added = images.preload(&["a.png".into(), "b.png".into()]);
    /// assert_eq!(added, 0..2);
    /// assert_eq!(images.handles()[1].source, "b.png");
    /// ```
    pub fn preload(&mut self, paths: &[String]) -> Range<usize> {
        let start = self.handles.len();
        self.handles.extend(paths.iter().map(|source| ImageHandle {
            source: source.clone(),
            state: LoadState::Pending,
        }));
        start..self.handles.len()
    }

    pub fn handles(&self) -> &[ImageHandle] {
        &self.handles
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&ImageHandle> {
        self.handles.get(index)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Record a load outcome; ignores indices that were never handed out.
    pub fn set_state(&mut self, index: usize, state: LoadState) {
        if let Some(handle) = self.handles.get_mut(index) {
            handle.state = state;
        }
    }

    /// Number of handles still waiting on a decode.
    pub fn pending(&self) -> usize {
        self.handles
            .iter()
            .filter(|h| h.state == LoadState::Pending)
            .count()
    }
}
