//! Common re-exports for convenient importing.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio::prelude::*;
//! ```

pub use crate::core::{
    ContentError, ContentSchema, Gallery, Locale, Location, MemoryPreferenceStore,
    PreferenceStore, Project, SiteConfig,
};
pub use crate::dom::{Document, MemoryDocument};
pub use crate::page::{ClickTarget, Key, Page, PageEvent};
pub use crate::theme::ThemeMode;
