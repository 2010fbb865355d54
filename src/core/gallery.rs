//! Lightbox gallery state machine.
//!
//! A [`Gallery`] is created when the project page identifies its project and
//! holds a cyclic index into the image list. It knows nothing about the DOM;
//! `page::lightbox` mirrors it into the document after every transition.

use thiserror::Error;

/// Errors from lightbox transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// `open` was called with an index outside the image list.
    #[error("image index {index} out of range (gallery has {len} images)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of images.
        len: usize,
    },
}

/// Lightbox visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxMode {
    /// Hidden (initial state).
    #[default]
    Closed,
    /// Showing `current_index`.
    Open,
}

/// Gallery images plus the lightbox cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    current: usize,
    mode: LightboxMode,
}

impl Gallery {
    /// New closed gallery over `images`.
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            current: 0,
            mode: LightboxMode::Closed,
        }
    }

    /// Image URLs in display order.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the gallery has no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Current lightbox index.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Current visibility.
    pub fn mode(&self) -> LightboxMode {
        self.mode
    }

    /// Whether the lightbox is showing.
    pub fn is_open(&self) -> bool {
        self.mode == LightboxMode::Open
    }

    /// URL of the current image.
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// 1-based position counter, e.g. `"2 / 5"`.
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }

    /// Alt text for the lightbox image.
    pub fn alt_text(&self) -> String {
        format!("Image {}", self.current + 1)
    }

    /// Open at `index`. Leaves state untouched on an out-of-range index.
    pub fn open(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.images.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        self.current = index;
        self.mode = LightboxMode::Open;
        Ok(())
    }

    /// Close. Returns whether the lightbox was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.mode = LightboxMode::Closed;
        was_open
    }

    /// Advance one image, wrapping last to first. Only moves while open.
    pub fn next(&mut self) -> bool {
        if !self.is_open() || self.images.is_empty() {
            return false;
        }
        self.current = (self.current + 1) % self.images.len();
        true
    }

    /// Step back one image, wrapping first to last. Only moves while open.
    pub fn previous(&mut self) -> bool {
        if !self.is_open() || self.images.is_empty() {
            return false;
        }
        let len = self.images.len();
        self.current = (self.current + len - 1) % len;
        true
    }
}
